//! Camera module for the zoom transform between client and canvas space.

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Smallest allowed zoom level.
pub const MIN_ZOOM: f64 = 0.5;
/// Largest allowed zoom level.
pub const MAX_ZOOM: f64 = 3.0;
/// Discrete zoom step applied by the zoom controls.
pub const ZOOM_STEP: f64 = 0.1;

/// Camera manages the zoom transform for the canvas.
///
/// All object geometry is stored in canvas space (logical pixels at 1x
/// zoom); the camera converts pointer positions from client space so that
/// zooming never distorts previously placed content. The zoom level is
/// single-writer: only the engine's zoom commands mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Current zoom level, always within [`MIN_ZOOM`, `MAX_ZOOM`].
    zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

impl Camera {
    /// Create a new camera at 1x zoom.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current zoom level.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom level, clamping out-of-range requests.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Step the zoom in by [`ZOOM_STEP`], clamped to [`MAX_ZOOM`].
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    /// Step the zoom out by [`ZOOM_STEP`], clamped to [`MIN_ZOOM`].
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Convert a client-space point to canvas space.
    ///
    /// `origin` is the client-space position of the drawing surface's
    /// top-left corner. The zoom bounds guarantee the divisor is never zero.
    pub fn to_canvas(&self, client: Point, origin: Point) -> Point {
        Point::new(
            (client.x - origin.x) / self.zoom,
            (client.y - origin.y) / self.zoom,
        )
    }

    /// Convert a canvas-space point back to client space.
    pub fn to_client(&self, canvas: Point, origin: Point) -> Point {
        Point::new(
            canvas.x * self.zoom + origin.x,
            canvas.y * self.zoom + origin.y,
        )
    }

    /// Canvas-space center of the visible viewport.
    ///
    /// `viewport` is the client-space size of the visible drawing area.
    /// Used to center pasted images where the user is currently looking.
    pub fn viewport_center(&self, viewport: Size) -> Point {
        self.to_canvas(
            Point::new(viewport.width / 2.0, viewport.height / 2.0),
            Point::ZERO,
        )
    }
}
