//! Raster ink surface.
//!
//! Holds the single persistent bitmap all freehand ink is painted into.
//! Strokes are baked into pixels at draw time and are not individually
//! editable afterwards; they can only be erased by overdrawing with the
//! background color.

use crate::error::EngineError;
use crate::style::{Color, Style};
use image::{Rgba, RgbaImage};
use kurbo::Point;

/// Transient state of a pen stroke in progress.
///
/// Exists only between pointer-down and pointer-up/leave; destroyed when
/// the stroke ends.
#[derive(Debug, Clone, Copy)]
struct StrokeState {
    /// Last point the stroke was extended to, in canvas space.
    last_point: Point,
}

/// The persistent raster bitmap holding all freehand ink.
///
/// Public coordinates are canvas space; internally they are multiplied by
/// the fixed device-pixel-ratio `scale` so ink stays sharp on high-DPI
/// displays.
#[derive(Debug, Clone)]
pub struct InkSurface {
    pixels: RgbaImage,
    background: Color,
    scale: f64,
    stroke: Option<StrokeState>,
}

impl InkSurface {
    /// Allocate a surface of `width x height` canvas-space pixels, upscaled
    /// by `scale`, filled with the background color.
    pub fn new(
        width: f64,
        height: f64,
        scale: f64,
        background: Color,
    ) -> Result<Self, EngineError> {
        if !(width > 0.0 && height > 0.0 && scale > 0.0)
            || !width.is_finite()
            || !height.is_finite()
            || !scale.is_finite()
        {
            return Err(EngineError::SurfaceSize {
                width,
                height,
                scale,
            });
        }
        let px_w = (width * scale).ceil() as u32;
        let px_h = (height * scale).ceil() as u32;
        if px_w == 0 || px_h == 0 {
            return Err(EngineError::SurfaceSize {
                width,
                height,
                scale,
            });
        }
        let pixels = RgbaImage::from_pixel(px_w, px_h, Rgba(background.to_rgba()));
        Ok(Self {
            pixels,
            background,
            scale,
            stroke: None,
        })
    }

    /// Whether a stroke is currently in progress.
    pub fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }

    /// The backing bitmap, for the shell to blit.
    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Begin a new stroke at `point`.
    ///
    /// Stamps the round cap immediately so a click with no drag still
    /// leaves a dot.
    pub fn begin_stroke(&mut self, point: Point, style: &Style) {
        self.stroke = Some(StrokeState { last_point: point });
        let radius = (style.pen_width / 2.0) * self.scale;
        let center = self.to_device(point);
        self.fill_disc(center, radius, style.color);
    }

    /// Extend the stroke in progress to `point`.
    ///
    /// Draws a round-capped segment from the last point, so consecutive
    /// short segments join into a smooth curve. Silent no-op when no stroke
    /// is in progress.
    pub fn extend_stroke(&mut self, point: Point, style: &Style) {
        let Some(state) = self.stroke else {
            return;
        };
        let radius = (style.pen_width / 2.0) * self.scale;
        let from = self.to_device(state.last_point);
        let to = self.to_device(point);
        self.stamp_segment(from, to, radius, style.color);
        self.stroke = Some(StrokeState { last_point: point });
    }

    /// Finish the stroke in progress. Idempotent.
    pub fn end_stroke(&mut self) {
        self.stroke = None;
    }

    /// Fill a circular region at `center` (canvas space) with the
    /// background color.
    ///
    /// Only the bounding square of side `2 * radius` is visited, and pixels
    /// outside the circle within that square are left untouched.
    pub fn erase_circle(&mut self, center: Point, radius: f64) {
        let dev_center = self.to_device(center);
        self.fill_disc(dev_center, radius * self.scale, self.background);
    }

    /// Reset the whole surface to the background color and drop any stroke
    /// in progress.
    pub fn clear(&mut self) {
        let bg = Rgba(self.background.to_rgba());
        for px in self.pixels.pixels_mut() {
            *px = bg;
        }
        self.stroke = None;
    }

    fn to_device(&self, point: Point) -> Point {
        Point::new(point.x * self.scale, point.y * self.scale)
    }

    /// Stamp filled discs along the segment at sub-pixel steps. Round caps
    /// and joins fall out of the disc shape; a zero-length segment is a dot.
    fn stamp_segment(&mut self, from: Point, to: Point, radius: f64, color: Color) {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let dist = (dx * dx + dy * dy).sqrt();
        let steps = dist.ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let p = Point::new(from.x + dx * t, from.y + dy * t);
            self.fill_disc(p, radius, color);
        }
    }

    /// Fill all pixels whose center lies within `radius` of `center`
    /// (device space), clipped to the bitmap.
    fn fill_disc(&mut self, center: Point, radius: f64, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let (w, h) = (self.pixels.width() as i64, self.pixels.height() as i64);
        let x_min = ((center.x - radius).floor() as i64).max(0);
        let x_max = ((center.x + radius).ceil() as i64).min(w - 1);
        let y_min = ((center.y - radius).floor() as i64).max(0);
        let y_max = ((center.y + radius).ceil() as i64).min(h - 1);
        let r_sq = radius * radius;
        let rgba = Rgba(color.to_rgba());
        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let dx = x as f64 + 0.5 - center.x;
                let dy = y as f64 + 0.5 - center.y;
                if dx * dx + dy * dy <= r_sq {
                    self.pixels.put_pixel(x as u32, y as u32, rgba);
                }
            }
        }
    }

    #[cfg(test)]
    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels.get_pixel(x, y).0
    }
}
