//! Clipboard image ingestion.
//!
//! The shell forwards paste events as raw payloads (bytes plus declared
//! MIME kind); image payloads are decoded and inserted centered in the
//! visible viewport. Everything else is ignored without error.

use crate::camera::Camera;
use crate::objects::{ImageObject, ObjectId, Registry, SceneObject};
use kurbo::Size;

/// One clipboard payload as delivered by the host paste event.
#[derive(Debug, Clone)]
pub struct PastePayload {
    /// Declared MIME kind, e.g. `image/png`.
    pub kind: String,
    /// Raw payload bytes.
    pub bytes: Vec<u8>,
}

impl PastePayload {
    pub fn new(kind: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            kind: kind.into(),
            bytes,
        }
    }

    /// Whether this payload plausibly carries an image: either the declared
    /// kind says so or the magic bytes do.
    pub fn is_image(&self) -> bool {
        self.kind.starts_with("image/") || sniff_image(&self.bytes)
    }
}

/// Detect an image payload from magic bytes (PNG, JPEG, WebP).
fn sniff_image(data: &[u8]) -> bool {
    if data.len() < 4 {
        return false;
    }
    // PNG: 89 50 4E 47
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        return true;
    }
    // JPEG: FF D8 FF
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return true;
    }
    // WebP: RIFF....WEBP
    data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP"
}

/// Ingest paste payloads into the image registry.
///
/// Each decodable image payload becomes an [`ImageObject`] displayed
/// [`ImageObject::DEFAULT_WIDTH`] wide (aspect preserved) and centered on
/// the visible viewport in canvas space, so the picture lands where the
/// user is currently looking regardless of zoom. Non-image payloads and
/// decode failures are skipped; a bad payload never inserts a partial
/// object and never aborts the remaining payloads.
pub fn ingest(
    payloads: Vec<PastePayload>,
    camera: &Camera,
    viewport: Size,
    images: &mut Registry<ImageObject>,
) -> Vec<ObjectId> {
    let center = camera.viewport_center(viewport);
    let mut inserted = Vec::new();
    for payload in payloads {
        if !payload.is_image() {
            log::debug!("ignoring non-image paste payload: {}", payload.kind);
            continue;
        }
        let bitmap = match image::load_from_memory(&payload.bytes) {
            Ok(decoded) => decoded.to_rgba8(),
            Err(err) => {
                log::warn!("failed to decode pasted image ({}): {err}", payload.kind);
                continue;
            }
        };
        let mut obj = ImageObject::from_bitmap(bitmap, 0.0, 0.0);
        obj.set_position(center.x - obj.width / 2.0, center.y - obj.height / 2.0);
        log::info!(
            "pasted image {}x{} displayed {}x{}",
            obj.source_width,
            obj.source_height,
            obj.width,
            obj.height
        );
        inserted.push(images.insert(obj));
    }
    inserted
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let bitmap = RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(bitmap)
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_paste_centers_in_viewport() {
        // Scenario C: 600x400 image, viewport 1000x800, zoom 1.0
        // -> width 300, height 200, x 350, y 300.
        let camera = Camera::new();
        let mut images = Registry::new();
        let ids = ingest(
            vec![PastePayload::new("image/png", png_bytes(600, 400))],
            &camera,
            Size::new(1000.0, 800.0),
            &mut images,
        );
        assert_eq!(ids.len(), 1);
        let img = images.get(ids[0]).unwrap();
        assert!((img.width - 300.0).abs() < f64::EPSILON);
        assert!((img.height - 200.0).abs() < f64::EPSILON);
        assert!((img.x - 350.0).abs() < f64::EPSILON);
        assert!((img.y - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_paste_respects_zoom() {
        let mut camera = Camera::new();
        camera.set_zoom(2.0);
        let mut images = Registry::new();
        let ids = ingest(
            vec![PastePayload::new("image/png", png_bytes(600, 400))],
            &camera,
            Size::new(1000.0, 800.0),
            &mut images,
        );
        let img = images.get(ids[0]).unwrap();
        // Viewport center in canvas space is (250, 200) at 2x zoom.
        assert!((img.x - (250.0 - 150.0)).abs() < f64::EPSILON);
        assert!((img.y - (200.0 - 100.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_image_payloads_ignored() {
        let camera = Camera::new();
        let mut images = Registry::new();
        let ids = ingest(
            vec![PastePayload::new("text/plain", b"hello".to_vec())],
            &camera,
            Size::new(800.0, 600.0),
            &mut images,
        );
        assert!(ids.is_empty());
        assert!(images.is_empty());
    }

    #[test]
    fn test_decode_failure_skips_payload_only() {
        let camera = Camera::new();
        let mut images = Registry::new();
        // Corrupt "png" first, a valid one after; the valid one still lands.
        let corrupt = vec![0x89, 0x50, 0x4E, 0x47, 0x00, 0x01, 0x02];
        let ids = ingest(
            vec![
                PastePayload::new("image/png", corrupt),
                PastePayload::new("image/png", png_bytes(100, 100)),
            ],
            &camera,
            Size::new(800.0, 600.0),
            &mut images,
        );
        assert_eq!(ids.len(), 1);
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn test_sniffing_recognizes_undeclared_image() {
        let camera = Camera::new();
        let mut images = Registry::new();
        // Declared kind is opaque but the bytes are a real PNG.
        let ids = ingest(
            vec![PastePayload::new(
                "application/octet-stream",
                png_bytes(50, 50),
            )],
            &camera,
            Size::new(800.0, 600.0),
            &mut images,
        );
        assert_eq!(ids.len(), 1);
    }
}
