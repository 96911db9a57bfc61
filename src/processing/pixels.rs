//! # Pixel Buffers
//!
//! The codec never parses image formats. It works against anything that can
//! report its dimensions and read/write RGBA pixels by coordinate, and walks
//! those pixels in row-major order.

use image::{Rgba, RgbaImage};

/// Index of the blue channel inside an RGBA pixel.
pub const BLUE: usize = 2;

/// A decoded raster image with per-pixel RGBA access.
pub trait PixelBuffer {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Read the pixel at `(x, y)` as `[r, g, b, a]`.
    fn rgba(&self, x: u32, y: u32) -> [u8; 4];

    /// Overwrite the pixel at `(x, y)`.
    fn set_rgba(&mut self, x: u32, y: u32, rgba: [u8; 4]);

    /// Number of pixels, i.e. the number of payload bits the image can carry.
    fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}

impl PixelBuffer for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        self.get_pixel(x, y).0
    }

    fn set_rgba(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        self.put_pixel(x, y, Rgba(rgba));
    }
}

/// Pixel coordinates in scan order: every pixel of row 0 left to right,
/// then row 1, and so on. The position in this sequence is the bit cursor.
pub fn scan_order(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
}
