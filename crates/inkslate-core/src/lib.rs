//! Inkslate Core Library
//!
//! Annotation engine for a zoomable drawing surface. Composites freehand
//! ink (baked into a raster surface), icon stickers, editable text boxes
//! and pasted raster images into one canvas-space coordinate system.
//!
//! The engine is UI-agnostic: the embedding shell delivers pointer, click
//! and paste events (see [`engine::Engine`]) and redraws whenever the
//! engine reports a [`engine::Change`].

pub mod camera;
pub mod clipboard;
pub mod engine;
pub mod eraser;
pub mod error;
pub mod objects;
pub mod style;
pub mod surface;

pub use camera::Camera;
pub use clipboard::PastePayload;
pub use engine::{Change, Engine, Layer, Tool};
pub use eraser::EraseOutcome;
pub use error::EngineError;
pub use objects::{IconKind, ImageObject, ObjectId, Registry, SceneObject, Sticker, TextBox};
pub use style::{Color, Style};
pub use surface::InkSurface;
