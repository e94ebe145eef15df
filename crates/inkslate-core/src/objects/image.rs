//! Pasted raster image object.

use super::{ObjectId, SceneObject};
use image::RgbaImage;
use kurbo::Rect;
use uuid::Uuid;

/// A pasted raster image.
///
/// The object exclusively owns the decoded bitmap for its lifetime;
/// dropping the object (eraser removal, clear) releases the pixels exactly
/// once. Resizes are aspect-locked at the gesture level so the picture
/// never distorts.
#[derive(Debug, Clone)]
pub struct ImageObject {
    pub(crate) id: ObjectId,
    /// Top-left corner, canvas space.
    pub x: f64,
    pub y: f64,
    /// Display size, canvas space.
    pub width: f64,
    pub height: f64,
    /// Natural size of the decoded bitmap in pixels.
    pub source_width: u32,
    pub source_height: u32,
    /// The decoded bitmap, owned by this object.
    bitmap: RgbaImage,
}

impl ImageObject {
    /// Default display width for newly pasted images.
    pub const DEFAULT_WIDTH: f64 = 300.0;

    /// Create an image object from a decoded bitmap, top-left at `(x, y)`,
    /// displayed [`Self::DEFAULT_WIDTH`] wide with the natural aspect ratio
    /// preserved.
    pub fn from_bitmap(bitmap: RgbaImage, x: f64, y: f64) -> Self {
        let source_width = bitmap.width();
        let source_height = bitmap.height();
        let aspect = source_width as f64 / source_height as f64;
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_WIDTH / aspect,
            source_width,
            source_height,
            bitmap,
        }
    }

    /// Natural aspect ratio of the source bitmap.
    pub fn aspect_ratio(&self) -> f64 {
        self.source_width as f64 / self.source_height as f64
    }

    /// The owned decoded bitmap, for the shell to draw.
    pub fn bitmap(&self) -> &RgbaImage {
        &self.bitmap
    }
}

impl SceneObject for ImageObject {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    fn set_geometry(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }
}
