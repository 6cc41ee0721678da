use anyhow::{Context, Result};
use image::GrayImage;
use tracing::debug;

/// A binarized image, row-major, one byte per pixel: 0 is black, anything
/// else is white.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl BinaryFrame {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        anyhow::ensure!(
            pixels.len() == (width as usize) * (height as usize),
            "frame {}x{} needs {} pixels, got {}", width, height, width as usize * height as usize, pixels.len()
        );
        Ok(Self { width, height, pixels })
    }

    /// Keeps black as 0 and maps every other gray level to 1. The image is
    /// expected to be thresholded already.
    pub fn from_luma(img: &GrayImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| if p.0[0] == 0 { 0 } else { 1 }).collect();
        Self { width, height, pixels }
    }

    pub fn load_png(path: &str) -> Result<Self> {
        let img = image::open(path).with_context(|| format!("open maze image {}", path))?;
        let gray = img.to_luma8();
        debug!("frame: loaded {} ({}x{})", path, gray.width(), gray.height());
        Ok(Self::from_luma(&gray))
    }

    #[inline]
    pub fn at(&self, x: u32, y: u32) -> u8 {
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }
}
