use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use super::{Color, BACKGROUND, MAX_COLOR};
use crate::error::{Error, Result};

// ============================================================================
// PixelBuffer
// ============================================================================

/// Fixed-size RGB canvas addressed as `(x, y)`.
///
/// `x` ranges over `height` and `y` ranges over `width`; both are plain counts.
/// Storage is row-major by `x`, and `y` grows upward: serialization flips it so
/// the highest `y` is written first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<Color>,
    height: u32,
    width: u32,
}

impl PixelBuffer {
    /// Allocate a buffer filled with the background color
    pub fn new(height: u32, width: u32) -> Self {
        Self {
            pixels: vec![BACKGROUND; height as usize * width as usize],
            height,
            width,
        }
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.height && y >= 0 && (y as u32) < self.width
    }

    /// Index into `pixels`; caller guarantees bounds
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        x as usize * self.width as usize + y as usize
    }

    /// Overwrite one cell.
    ///
    /// Fails with [`Error::OutOfBounds`] unless `0 <= x < height` and `0 <= y < width`.
    pub fn plot(&mut self, color: Color, x: i32, y: i32) -> Result<()> {
        if !self.in_bounds(x, y) {
            return Err(Error::OutOfBounds { x, y });
        }
        let idx = self.pixel_index(x as u32, y as u32);
        self.pixels[idx] = color;
        Ok(())
    }

    /// Read one cell, `None` when out of bounds
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.pixels[self.pixel_index(x as u32, y as u32)])
    }

    /// Fill every cell with `color`
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Reset every cell to the background color
    pub fn clear(&mut self) {
        self.fill(BACKGROUND);
    }

    /// Number of cells that differ from the background
    pub fn painted_count(&self) -> usize {
        self.pixels.iter().filter(|&&c| c != BACKGROUND).count()
    }

    // ========================================================================
    // PPM output
    // ========================================================================

    /// Render the whole image as plain PPM (P3) text.
    ///
    /// Header is `P3 <height> <width> 255`. Then one line per `y`, from `width - 1`
    /// down to 0, each holding `height` triples in increasing `x`. Every value is
    /// followed by a single space.
    pub fn serialize(&self) -> String {
        // "255 255 255 " is the widest triple
        let mut out = String::with_capacity(self.pixels.len() * 12 + self.width as usize + 32);
        // Writing to a String cannot fail
        let _ = writeln!(out, "P3 {} {} {}", self.height, self.width, MAX_COLOR);
        for row in (0..self.width).rev() {
            for x in 0..self.height {
                let c = self.pixels[self.pixel_index(x, row)];
                let _ = write!(out, "{} {} {} ", c.r, c.g, c.b);
            }
            out.push('\n');
        }
        out
    }

    /// Serialize into any writer; the image is fully buffered before the first write
    pub fn write_ppm<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.serialize().as_bytes())?;
        out.flush()
    }

    /// Create (or truncate) `path` and write the image to it
    pub fn save_ppm(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        self.write_ppm(io::BufWriter::new(file))?;
        Ok(())
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new(super::DEFAULT_HEIGHT, super::DEFAULT_WIDTH)
    }
}
