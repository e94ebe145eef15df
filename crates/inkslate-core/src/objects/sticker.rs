//! Icon sticker object.

use super::{ObjectId, SceneObject};
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Icon kinds the sticker picker can pre-select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconKind {
    Star,
    Heart,
    Smiley,
    ThumbsUp,
    Flag,
    Check,
}

impl IconKind {
    /// Get all available icon kinds.
    pub fn all() -> &'static [IconKind] {
        &[
            IconKind::Star,
            IconKind::Heart,
            IconKind::Smiley,
            IconKind::ThumbsUp,
            IconKind::Flag,
            IconKind::Check,
        ]
    }
}

/// A placed icon sticker.
///
/// Stickers carry no color of their own; the shell renders them with the
/// current shared style, so a palette change restyles placed stickers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sticker {
    pub(crate) id: ObjectId,
    /// Icon to render.
    pub icon: IconKind,
    /// Top-left corner, canvas space.
    pub x: f64,
    pub y: f64,
    /// Display size, canvas space.
    pub width: f64,
    pub height: f64,
}

impl Sticker {
    /// Default sticker side length.
    pub const DEFAULT_SIZE: f64 = 50.0;

    /// Create a sticker at `(x, y)` with the default size.
    pub fn new(icon: IconKind, x: f64, y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            icon,
            x,
            y,
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
        }
    }
}

impl SceneObject for Sticker {
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
