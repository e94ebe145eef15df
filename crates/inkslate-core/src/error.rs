//! Engine error types.

use thiserror::Error;

/// Errors surfaced by the annotation engine.
///
/// Only surface allocation can fail, and it fails once at setup time. All
/// per-operation problems (mutating an absent object, malformed paste
/// payloads, out-of-range parameters) are silent no-ops or clamps.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The raster surface cannot be allocated at the requested size.
    #[error("invalid surface size {width}x{height} at scale {scale}")]
    SurfaceSize { width: f64, height: f64, scale: f64 },
}
