//! Engine facade: tool state, pointer routing and change notifications.
//!
//! The embedding shell owns the event loop and rendering; the engine owns
//! all annotation state. Every mutation happens synchronously inside the
//! shell's event callbacks on one thread, in delivery order, so no locking
//! is needed anywhere.

use crate::camera::Camera;
use crate::clipboard::{self, PastePayload};
use crate::eraser;
use crate::error::EngineError;
use crate::objects::{IconKind, ImageObject, ObjectId, Registry, Sticker, TextBox};
use crate::style::{Color, Style};
use crate::surface::InkSurface;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Available tools. Exactly one is active at a time; it gates which
/// gesture handlers are live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tool {
    #[default]
    None,
    Pen,
    Sticker,
    Eraser,
    Text,
}

/// What changed since the shell last drained notifications. The shell
/// re-draws the matching layer; the engine never runs a render loop itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The raster ink surface changed.
    Surface,
    /// The sticker collection changed.
    Stickers,
    /// The text-box collection changed.
    Texts,
    /// The image collection changed.
    Images,
}

/// Which scene-object layer a mutation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Stickers,
    Texts,
    Images,
}

/// The annotation engine.
///
/// Paint order is fixed across layers: ink surface at the bottom, then
/// images, then stickers and text boxes sharing the topmost layer. Within
/// each registry, insertion order is paint order.
#[derive(Debug)]
pub struct Engine {
    camera: Camera,
    style: Style,
    surface: Option<InkSurface>,
    stickers: Registry<Sticker>,
    texts: Registry<TextBox>,
    images: Registry<ImageObject>,
    tool: Tool,
    /// Sticker kind pre-selected in the picker; consumed by placement.
    pending_icon: Option<IconKind>,
    /// Text box currently focused for typing.
    focused_text: Option<ObjectId>,
    /// Whether a pen/eraser drag gesture is in flight.
    pointer_held: bool,
    viewport: Size,
    changes: Vec<Change>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine with no raster surface yet; drawing operations
    /// no-op until [`Engine::init_surface`] succeeds.
    pub fn new() -> Self {
        Self {
            camera: Camera::new(),
            style: Style::default(),
            surface: None,
            stickers: Registry::new(),
            texts: Registry::new(),
            images: Registry::new(),
            tool: Tool::default(),
            pending_icon: None,
            focused_text: None,
            pointer_held: false,
            viewport: Size::new(800.0, 600.0),
            changes: Vec::new(),
        }
    }

    /// Allocate the raster surface at the drawing area's canvas-space size
    /// and device-pixel-ratio `scale`. Failure is reported once, here; the
    /// shell decides whether to log it. Afterwards all drawing operations
    /// are silent no-ops until a surface exists.
    pub fn init_surface(&mut self, width: f64, height: f64, scale: f64) -> Result<(), EngineError> {
        let surface = InkSurface::new(width, height, scale, Color::white())?;
        self.surface = Some(surface);
        self.viewport = Size::new(width, height);
        log::info!("ink surface initialized at {width}x{height} (scale {scale})");
        self.note(Change::Surface);
        Ok(())
    }

    /// Update the visible viewport size (used to center pasted images).
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport = Size::new(width, height);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Step the zoom in. The engine is the single writer of zoom state.
    pub fn zoom_in(&mut self) {
        self.camera.zoom_in();
    }

    /// Step the zoom out, clamped at the floor.
    pub fn zoom_out(&mut self) {
        self.camera.zoom_out();
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The shared style record; the shell's color/width controls write it.
    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    pub fn surface(&self) -> Option<&InkSurface> {
        self.surface.as_ref()
    }

    pub fn stickers(&self) -> &Registry<Sticker> {
        &self.stickers
    }

    pub fn texts(&self) -> &Registry<TextBox> {
        &self.texts
    }

    pub fn images(&self) -> &Registry<ImageObject> {
        &self.images
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch the active tool. A gesture still in flight (e.g. the pointer
    /// released outside the canvas) is finalized at its last known point.
    pub fn set_tool(&mut self, tool: Tool) {
        self.finish_gesture();
        self.tool = tool;
        if tool != Tool::Sticker {
            self.pending_icon = None;
        }
    }

    /// Pre-select a sticker kind and arm the sticker tool for a
    /// single-shot placement.
    pub fn set_sticker_kind(&mut self, icon: IconKind) {
        self.set_tool(Tool::Sticker);
        self.pending_icon = Some(icon);
    }

    /// The text box currently focused for typing, if any.
    pub fn focused_text(&self) -> Option<ObjectId> {
        self.focused_text
    }

    /// Drop text focus (e.g. the user clicked elsewhere).
    pub fn blur_text(&mut self) {
        self.focused_text = None;
    }

    /// Pointer pressed on the drawing surface.
    ///
    /// `client` is the pointer position in client space; `origin` is the
    /// client-space position of the surface's top-left corner.
    pub fn pointer_down(&mut self, client: Point, origin: Point) {
        let point = self.camera.to_canvas(client, origin);
        match self.tool {
            Tool::Pen => {
                if let Some(surface) = self.surface.as_mut() {
                    surface.begin_stroke(point, &self.style);
                    self.pointer_held = true;
                    self.note(Change::Surface);
                }
            }
            Tool::Eraser => {
                self.pointer_held = true;
                self.erase_at(point);
            }
            _ => {}
        }
    }

    /// Pointer moved while over the drawing surface.
    pub fn pointer_moved(&mut self, client: Point, origin: Point) {
        if !self.pointer_held {
            return;
        }
        let point = self.camera.to_canvas(client, origin);
        match self.tool {
            Tool::Pen => {
                if let Some(surface) = self.surface.as_mut() {
                    surface.extend_stroke(point, &self.style);
                    self.note(Change::Surface);
                }
            }
            Tool::Eraser => self.erase_at(point),
            _ => {}
        }
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        self.finish_gesture();
    }

    /// Pointer left the drawing surface mid-gesture. There is no separate
    /// cancel signal: the stroke or eraser drag finalizes at its last known
    /// point.
    pub fn pointer_left(&mut self) {
        self.finish_gesture();
    }

    /// Route a click according to the active tool.
    ///
    /// Sticker and text placement are single-shot: the tool resets to
    /// [`Tool::None`] after inserting. Returns the inserted object's id
    /// when the click placed one.
    pub fn handle_click(&mut self, client: Point, origin: Point) -> Option<ObjectId> {
        let point = self.camera.to_canvas(client, origin);
        match self.tool {
            Tool::Sticker => {
                let icon = self.pending_icon.take()?;
                let id = self.stickers.insert(Sticker::new(icon, point.x, point.y));
                self.tool = Tool::None;
                self.note(Change::Stickers);
                Some(id)
            }
            Tool::Text => {
                let id = self.texts.insert(TextBox::new(point.x, point.y));
                self.focused_text = Some(id);
                self.tool = Tool::None;
                self.note(Change::Texts);
                Some(id)
            }
            Tool::Eraser => {
                self.erase_at(point);
                None
            }
            // Pen strokes go through the pointer handlers; None ignores.
            Tool::Pen | Tool::None => None,
        }
    }

    /// Move an object to `(x, y)`. No-op if the id is gone, so an in-flight
    /// drag against an erased object is harmless.
    pub fn move_object(&mut self, layer: Layer, id: ObjectId, x: f64, y: f64) {
        let moved = match layer {
            Layer::Stickers => self.stickers.move_to(id, x, y),
            Layer::Texts => self.texts.move_to(id, x, y),
            Layer::Images => self.images.move_to(id, x, y),
        };
        if moved {
            self.note(Self::layer_change(layer));
        }
    }

    /// Replace an object's geometry atomically. Image resizes are
    /// aspect-locked: the height follows the requested width.
    pub fn resize_object(
        &mut self,
        layer: Layer,
        id: ObjectId,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) {
        let resized = match layer {
            Layer::Stickers => self.stickers.resize_to(id, x, y, width, height),
            Layer::Texts => self.texts.resize_to(id, x, y, width, height),
            Layer::Images => {
                let locked_height = self
                    .images
                    .get(id)
                    .map(|img| width / img.aspect_ratio())
                    .unwrap_or(height);
                self.images.resize_to(id, x, y, width, locked_height)
            }
        };
        if resized {
            self.note(Self::layer_change(layer));
        }
    }

    /// Replace a text box's content.
    pub fn set_text_content(&mut self, id: ObjectId, text: impl Into<String>) {
        if self.texts.set_content(id, text) {
            self.note(Change::Texts);
        }
    }

    /// Ingest paste payloads (see [`clipboard::ingest`]).
    pub fn paste(&mut self, payloads: Vec<PastePayload>) -> Vec<ObjectId> {
        let inserted = clipboard::ingest(payloads, &self.camera, self.viewport, &mut self.images);
        if !inserted.is_empty() {
            self.note(Change::Images);
        }
        inserted
    }

    /// Wipe all ink and remove every scene object.
    pub fn clear(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
            self.note(Change::Surface);
        }
        if !self.stickers.clear().is_empty() {
            self.note(Change::Stickers);
        }
        if !self.texts.clear().is_empty() {
            self.note(Change::Texts);
        }
        if !self.images.clear().is_empty() {
            self.note(Change::Images);
        }
        self.focused_text = None;
    }

    /// Take the pending change notifications; the shell redraws the
    /// matching layers.
    pub fn drain_changes(&mut self) -> Vec<Change> {
        std::mem::take(&mut self.changes)
    }

    fn erase_at(&mut self, point: Point) {
        let outcome = eraser::apply(
            self.surface.as_mut(),
            &mut self.stickers,
            &mut self.texts,
            &mut self.images,
            point,
            self.style.pen_width,
        );
        if self.surface.is_some() {
            self.note(Change::Surface);
        }
        if !outcome.stickers.is_empty() {
            self.note(Change::Stickers);
        }
        if !outcome.texts.is_empty() {
            self.note(Change::Texts);
        }
        if !outcome.images.is_empty() {
            self.note(Change::Images);
        }
        // The focused text box may be gone now.
        if let Some(focused) = self.focused_text {
            if outcome.texts.contains(&focused) {
                self.focused_text = None;
            }
        }
    }

    fn finish_gesture(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            if surface.is_stroking() {
                surface.end_stroke();
                self.note(Change::Surface);
            }
        }
        self.pointer_held = false;
    }

    fn layer_change(layer: Layer) -> Change {
        match layer {
            Layer::Stickers => Change::Stickers,
            Layer::Texts => Change::Texts,
            Layer::Images => Change::Images,
        }
    }

    fn note(&mut self, change: Change) {
        if !self.changes.contains(&change) {
            self.changes.push(change);
        }
    }
}
