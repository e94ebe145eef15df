//! Scene objects: stickers, text boxes and pasted images.
//!
//! Each object kind lives in its own [`Registry`]; insertion order is paint
//! order within a layer. Cross-layer paint order is fixed by the engine:
//! ink (bottom), then images, then stickers and text boxes on top.

mod image;
mod sticker;
mod text;

pub use self::image::ImageObject;
pub use self::sticker::{IconKind, Sticker};
pub use self::text::TextBox;

use kurbo::{Point, Rect};
use uuid::Uuid;

/// Unique identifier for scene objects. Never reused.
pub type ObjectId = Uuid;

/// Smallest allowed object dimension; resizes clamp to this.
pub const MIN_OBJECT_SIZE: f64 = 1.0;

/// Common contract for movable/resizable placed objects.
///
/// All geometry is canvas space. Implementations keep `width`/`height`
/// strictly positive; the registry clamps incoming resizes.
pub trait SceneObject {
    /// Get the unique identifier.
    fn id(&self) -> ObjectId;

    /// Get the bounding box in canvas space.
    fn bounds(&self) -> Rect;

    /// Get the object's centroid, used by the eraser's hit test.
    fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Replace the position, keeping the size.
    fn set_position(&mut self, x: f64, y: f64);

    /// Replace the full geometry tuple in one update.
    fn set_geometry(&mut self, x: f64, y: f64, width: f64, height: f64);
}

/// An insertion-ordered collection of one scene-object kind.
///
/// Mutations referencing an absent id are silent no-ops: a drag gesture may
/// still be in flight when the eraser removes its target.
#[derive(Debug, Clone)]
pub struct Registry<T: SceneObject> {
    items: Vec<T>,
}

impl<T: SceneObject> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SceneObject> Registry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an object, returning its id.
    pub fn insert(&mut self, object: T) -> ObjectId {
        let id = object.id();
        self.items.push(object);
        id
    }

    /// Replace an object's position. No-op if the id is absent.
    pub fn move_to(&mut self, id: ObjectId, x: f64, y: f64) -> bool {
        match self.get_mut(id) {
            Some(obj) => {
                obj.set_position(x, y);
                true
            }
            None => false,
        }
    }

    /// Replace an object's geometry atomically, clamping the dimensions to
    /// [`MIN_OBJECT_SIZE`]. No-op if the id is absent.
    pub fn resize_to(&mut self, id: ObjectId, x: f64, y: f64, width: f64, height: f64) -> bool {
        match self.get_mut(id) {
            Some(obj) => {
                obj.set_geometry(x, y, width.max(MIN_OBJECT_SIZE), height.max(MIN_OBJECT_SIZE));
                true
            }
            None => false,
        }
    }

    /// Remove every object whose predicate over (id, center) holds.
    /// Returns the removed ids for cleanup.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> Vec<ObjectId>
    where
        F: FnMut(ObjectId, Point) -> bool,
    {
        let mut removed = Vec::new();
        self.items.retain(|obj| {
            if predicate(obj.id(), obj.center()) {
                removed.push(obj.id());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Get an object by id.
    pub fn get(&self, id: ObjectId) -> Option<&T> {
        self.items.iter().find(|obj| obj.id() == id)
    }

    /// Get a mutable reference to an object by id.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut T> {
        self.items.iter_mut().find(|obj| obj.id() == id)
    }

    /// Iterate objects in paint order (insertion order).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Number of objects.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove all objects, returning their ids.
    pub fn clear(&mut self) -> Vec<ObjectId> {
        self.remove_where(|_, _| true)
    }
}

impl Registry<TextBox> {
    /// Replace a text box's content. No length limit is imposed.
    /// No-op if the id is absent.
    pub fn set_content(&mut self, id: ObjectId, text: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(tb) => {
                tb.content = text.into();
                true
            }
            None => false,
        }
    }
}
