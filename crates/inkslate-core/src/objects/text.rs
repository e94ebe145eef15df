//! Editable text box object.

use super::{ObjectId, SceneObject};
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An editable text box.
///
/// Created empty on a text-tool click and focused immediately for typing.
/// Like stickers, text boxes render with the current shared style color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBox {
    pub(crate) id: ObjectId,
    /// Top-left corner, canvas space.
    pub x: f64,
    pub y: f64,
    /// Display size, canvas space.
    pub width: f64,
    pub height: f64,
    /// The text content. The engine imposes no length limit.
    pub content: String,
}

impl TextBox {
    /// Default box width at creation.
    pub const DEFAULT_WIDTH: f64 = 150.0;
    /// Default box height at creation.
    pub const DEFAULT_HEIGHT: f64 = 50.0;

    /// Create an empty text box at `(x, y)` with the default size.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            content: String::new(),
        }
    }
}

impl SceneObject for TextBox {
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
