//! Image buffer for storing render output.

use crate::integrator::color_to_rgb8;
use crate::Color;

/// Row-major buffer of linear-light pixel colors.
///
/// Rows are addressable at random, so scanlines finished out of order
/// can be slotted into place before any sequential encoder runs.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Replace an entire scanline.
    ///
    /// Panics if `row` is not exactly `width` pixels long.
    pub fn set_row(&mut self, y: u32, row: &[Color]) {
        assert_eq!(row.len(), self.width as usize);
        let start = (y * self.width) as usize;
        self.pixels[start..start + row.len()].copy_from_slice(row);
    }

    /// Convert to gamma-corrected RGB bytes (for display or saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut image = ImageBuffer::new(4, 3);
        image.set(2, 1, Color::new(0.25, 0.5, 0.75));

        assert_eq!(image.get(2, 1), Color::new(0.25, 0.5, 0.75));
        assert_eq!(image.get(0, 0), Color::ZERO);
    }

    #[test]
    fn test_set_row() {
        let mut image = ImageBuffer::new(3, 2);
        let row = vec![Color::X, Color::Y, Color::Z];
        image.set_row(1, &row);

        assert_eq!(image.get(0, 1), Color::X);
        assert_eq!(image.get(1, 1), Color::Y);
        assert_eq!(image.get(2, 1), Color::Z);
        // Other row untouched
        assert_eq!(image.get(0, 0), Color::ZERO);
    }

    #[test]
    #[should_panic]
    fn test_set_row_wrong_width() {
        let mut image = ImageBuffer::new(3, 2);
        image.set_row(0, &[Color::ZERO]);
    }

    #[test]
    fn test_to_rgb8_layout() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::ZERO);
        image.set(1, 0, Color::ONE);

        let bytes = image.to_rgb8();
        assert_eq!(bytes.len(), 6);
        assert_eq!(&bytes[0..3], &[0, 0, 0]);
        assert_eq!(&bytes[3..6], &[255, 255, 255]);
    }
}
