use std::fmt;

use crate::Grid;

fn horizontal(f: &mut fmt::Formatter<'_>, walls: impl Iterator<Item = bool>) -> fmt::Result {
    for wall in walls {
        f.write_str(if wall { "+---" } else { "+   " })?;
    }
    writeln!(f, "+")
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.height {
            let row = self.row(r);
            horizontal(f, row.iter().map(|c| c.wall_up))?;
            for cell in row {
                f.write_str(if cell.wall_left { "|   " } else { "    " })?;
            }
            writeln!(f, "|")?;
        }
        horizontal(f, self.row(self.height - 1).iter().map(|c| c.wall_down))
    }
}
