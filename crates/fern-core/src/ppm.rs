//! Binary PPM (P6) image export.
//!
//! Format: header `P6\n{width} {height}\n255\n` followed by one RGB triple
//! per pixel, row-major, one byte per channel. Alpha is dropped. The pixel
//! decode matches the packed layout everywhere else in the crate: low byte
//! red, then green, then blue.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::Canvas;

#[derive(Debug, thiserror::Error)]
pub enum PpmError {
    #[error("writing PPM image failed: {0}")]
    Io(#[from] io::Error),
}

/// Serialize the canvas as a P6 PPM into `out`.
pub fn write_ppm(canvas: &Canvas, out: &mut impl Write) -> Result<(), PpmError> {
    write!(out, "P6\n{} {}\n255\n", canvas.width(), canvas.height())?;
    for &pixel in canvas.buffer() {
        let rgb = [
            (pixel & 0xFF) as u8,
            ((pixel >> 8) & 0xFF) as u8,
            ((pixel >> 16) & 0xFF) as u8,
        ];
        out.write_all(&rgb)?;
    }
    Ok(())
}

/// Save the canvas to a PPM file.
pub fn save_ppm(canvas: &Canvas, path: impl AsRef<Path>) -> Result<(), PpmError> {
    let path = path.as_ref();
    log::debug!(
        "saving {}x{} canvas to {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );
    let mut file = BufWriter::new(File::create(path)?);
    write_ppm(canvas, &mut file)?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn header_and_pixel_bytes_are_exact() {
        let mut canvas = Canvas::new(2, 1);
        canvas.set_pixel(0, 0, Color::rgb(0x11, 0x22, 0x33));
        canvas.set_pixel(1, 0, Color::rgb(0xAA, 0xBB, 0xCC));

        let mut out = Vec::new();
        write_ppm(&canvas, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[0x11, 0x22, 0x33, 0xAA, 0xBB, 0xCC]);
        assert_eq!(out, expected);
    }

    #[test]
    fn output_is_row_major() {
        let mut canvas = Canvas::new(1, 2);
        canvas.set_pixel(0, 0, Color::rgb(1, 0, 0));
        canvas.set_pixel(0, 1, Color::rgb(2, 0, 0));

        let mut out = Vec::new();
        write_ppm(&canvas, &mut out).unwrap();
        let body = &out[b"P6\n1 2\n255\n".len()..];
        assert_eq!(body, &[1, 0, 0, 2, 0, 0]);
    }
}
