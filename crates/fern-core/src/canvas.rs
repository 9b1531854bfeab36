//! The addressable pixel surface everything draws into.

use crate::Color;

/// A fixed-size surface of packed 32-bit pixels, row-major.
///
/// All pixel writes are bounds-checked and silently dropped when out of
/// range; reads outside the surface return [`Color::TRANSPARENT`]. There is
/// no resize operation — width and height are fixed at construction.
#[derive(Debug)]
pub struct Canvas {
    buffer: Vec<u32>,
    width: i32,
    height: i32,
}

impl Canvas {
    /// Create a canvas cleared to transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: vec![0; (width * height) as usize],
            width: width as i32,
            height: height as i32,
        }
    }

    #[inline] pub fn width(&self) -> i32 { self.width }
    #[inline] pub fn height(&self) -> i32 { self.height }

    /// The raw pixel buffer, row-major, `width * height` long. This is what
    /// a presentation backend blits to the screen.
    #[inline] pub fn buffer(&self) -> &[u32] { &self.buffer }

    #[inline] pub fn buffer_mut(&mut self) -> &mut [u32] { &mut self.buffer }

    /// Overwrite every pixel.
    pub fn clear(&mut self, color: Color) {
        self.buffer.fill(color.0);
    }

    /// Write one pixel. Out-of-range coordinates are a no-op.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            self.buffer[(y * self.width + x) as usize] = color.0;
        }
    }

    /// Read one pixel. Out-of-range coordinates read as transparent black.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Color {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            Color(self.buffer[(y * self.width + x) as usize])
        } else {
            Color::TRANSPARENT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_length_matches_dimensions() {
        let c = Canvas::new(7, 3);
        assert_eq!(c.buffer().len(), 21);
        assert_eq!(c.width(), 7);
        assert_eq!(c.height(), 3);
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut c = Canvas::new(4, 4);
        let before = c.buffer().to_vec();
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (100, 100), (i32::MIN, i32::MAX)] {
            c.set_pixel(x, y, Color::WHITE);
        }
        assert_eq!(c.buffer(), &before[..]);
    }

    #[test]
    fn out_of_range_reads_return_zero() {
        let mut c = Canvas::new(2, 2);
        c.clear(Color::WHITE);
        assert_eq!(c.get_pixel(-1, 0), Color::TRANSPARENT);
        assert_eq!(c.get_pixel(2, 0), Color::TRANSPARENT);
        assert_eq!(c.get_pixel(0, 2), Color::TRANSPARENT);
        assert_eq!(c.get_pixel(1, 1), Color::WHITE);
    }

    #[test]
    fn clear_overwrites_every_pixel() {
        let mut c = Canvas::new(3, 3);
        c.set_pixel(1, 1, Color::RED);
        c.clear(Color::NAVY);
        assert!(c.buffer().iter().all(|&p| p == Color::NAVY.0));
    }
}
