mod line;
mod pixel_buffer;
mod viewer;

pub use pixel_buffer::PixelBuffer;
pub use viewer::{display, DEFAULT_VIEWER};

use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: u32 = 500;
pub const DEFAULT_HEIGHT: u32 = 500;

/// Largest channel value written to the PPM header
pub const MAX_COLOR: u8 = 255;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color every fresh or cleared buffer is filled with
pub const BACKGROUND: Color = Color::WHITE;

impl Default for Color {
    fn default() -> Self {
        BACKGROUND
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}
