//! Shared style state for new ink strokes and scene-object rendering.

use serde::{Deserialize, Serialize};

/// RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Return the color as an `[r, g, b, a]` byte array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// The shared style record, written by the shell's color/width controls.
///
/// Stroke color and width are baked into the raster surface at draw time.
/// Stickers and text boxes do not store a color of their own: the shell
/// reads this record at render time, so changing the active color restyles
/// existing stickers/text but never already-drawn ink. That asymmetry is
/// intentional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Style {
    /// Active color for new strokes and for sticker/text rendering.
    pub color: Color,
    /// Pen stroke width in canvas-space pixels.
    pub pen_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color::black(),
            pen_width: 4.0,
        }
    }
}
