//! Image file writers.
//!
//! PNG and JPEG go through the `image` crate; PPM (P3 text) is written
//! directly. All writers consume the fully assembled buffer, so row
//! completion order during rendering never reaches an encoder.

use crate::integrator::color_to_rgb8;
use crate::ImageBuffer;
use image::{ImageFormat, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors from writing a rendered image to disk.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer does not match image dimensions")]
    BufferMismatch,
}

fn to_rgb_image(buffer: &ImageBuffer) -> Result<RgbImage, WriteError> {
    RgbImage::from_raw(buffer.width, buffer.height, buffer.to_rgb8())
        .ok_or(WriteError::BufferMismatch)
}

/// Save the buffer as a PNG file.
pub fn save_png(buffer: &ImageBuffer, path: &Path) -> Result<(), WriteError> {
    let img = to_rgb_image(buffer)?;
    img.save_with_format(path, ImageFormat::Png)?;
    log::debug!("wrote PNG to {}", path.display());
    Ok(())
}

/// Save the buffer as a JPEG file.
pub fn save_jpg(buffer: &ImageBuffer, path: &Path) -> Result<(), WriteError> {
    let img = to_rgb_image(buffer)?;
    img.save_with_format(path, ImageFormat::Jpeg)?;
    log::debug!("wrote JPEG to {}", path.display());
    Ok(())
}

/// Write the buffer as a plain-text PPM (P3) file, top row first.
pub fn write_ppm(buffer: &ImageBuffer, path: &Path) -> Result<(), WriteError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", buffer.width, buffer.height)?;
    writeln!(writer, "255")?;

    for y in 0..buffer.height {
        for x in 0..buffer.width {
            let [r, g, b] = color_to_rgb8(buffer.get(x, y));
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    writer.flush()?;
    log::debug!("wrote PPM to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use std::fs;

    #[test]
    fn test_write_ppm() {
        let mut image = ImageBuffer::new(2, 2);
        image.set(0, 0, Color::ONE);

        let path = std::env::temp_dir().join("glint_writer_test.ppm");
        write_ppm(&image, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("P3"));
        assert_eq!(lines.next(), Some("2 2"));
        assert_eq!(lines.next(), Some("255"));
        // Top-left pixel first
        assert_eq!(lines.next(), Some("255 255 255"));
        assert_eq!(lines.next(), Some("0 0 0"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_png_roundtrip() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(1, 1, Color::ONE);

        let path = std::env::temp_dir().join("glint_writer_test.png");
        save_png(&image, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(1, 1).0, [255, 255, 255]);
        assert_eq!(loaded.get_pixel(0, 0).0, [0, 0, 0]);

        fs::remove_file(&path).ok();
    }
}
