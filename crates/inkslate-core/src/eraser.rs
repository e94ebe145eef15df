//! Eraser: raster clearing plus center-point object removal.

use crate::objects::{ImageObject, ObjectId, Registry, Sticker, TextBox};
use crate::surface::InkSurface;
use kurbo::Point;

/// Multiplier from the nominal pen-size radius to the erase radius; erasing
/// clears a wider area than the current pen width suggests.
const RADIUS_FACTOR: f64 = 2.0;

/// Effective erase radius for a nominal base radius.
pub fn effective_radius(base_radius: f64) -> f64 {
    base_radius * RADIUS_FACTOR
}

/// Ids removed by one eraser application, per layer, for cleanup.
#[derive(Debug, Clone, Default)]
pub struct EraseOutcome {
    pub stickers: Vec<ObjectId>,
    pub texts: Vec<ObjectId>,
    pub images: Vec<ObjectId>,
}

impl EraseOutcome {
    /// Whether any scene object was removed.
    pub fn any_removed(&self) -> bool {
        !(self.stickers.is_empty() && self.texts.is_empty() && self.images.is_empty())
    }
}

/// Apply the eraser at `center` with nominal radius `base_radius`.
///
/// Clears the raster surface in the effective radius, then removes every
/// scene object whose **center** falls within that radius. This is a
/// center-point test, not a bounding-box overlap test: a large object
/// survives a pass through its edge as long as its center stays outside,
/// and a small object fully inside a larger one's bounds is erased
/// independently. Removed image objects drop their decoded bitmaps.
pub fn apply(
    surface: Option<&mut InkSurface>,
    stickers: &mut Registry<Sticker>,
    texts: &mut Registry<TextBox>,
    images: &mut Registry<ImageObject>,
    center: Point,
    base_radius: f64,
) -> EraseOutcome {
    let radius = effective_radius(base_radius);
    if let Some(surface) = surface {
        surface.erase_circle(center, radius);
    }
    let hit = |obj_center: Point| obj_center.distance(center) <= radius;
    EraseOutcome {
        stickers: stickers.remove_where(|_, c| hit(c)),
        texts: texts.remove_where(|_, c| hit(c)),
        images: images.remove_where(|_, c| hit(c)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{IconKind, SceneObject};

    fn registries() -> (Registry<Sticker>, Registry<TextBox>, Registry<ImageObject>) {
        (Registry::new(), Registry::new(), Registry::new())
    }

    #[test]
    fn test_erase_removes_sticker_within_radius() {
        // Scenario A: sticker at (100,100) 50x50, center (125,125);
        // eraser at (120,120) radius 30 -> distance ~7.07 <= 30, removed.
        let (mut stickers, mut texts, mut images) = registries();
        let id = stickers.insert(Sticker::new(IconKind::Star, 100.0, 100.0));

        let outcome = apply(
            None,
            &mut stickers,
            &mut texts,
            &mut images,
            Point::new(120.0, 120.0),
            15.0,
        );
        assert_eq!(outcome.stickers, vec![id]);
        assert!(stickers.is_empty());
    }

    #[test]
    fn test_distant_sticker_survives() {
        // Scenario B: same sticker, eraser at (200,200) radius 30;
        // distance ~106 > 30, survives.
        let (mut stickers, mut texts, mut images) = registries();
        let id = stickers.insert(Sticker::new(IconKind::Star, 100.0, 100.0));

        let outcome = apply(
            None,
            &mut stickers,
            &mut texts,
            &mut images,
            Point::new(200.0, 200.0),
            15.0,
        );
        assert!(!outcome.any_removed());
        assert!(stickers.get(id).is_some());
    }

    #[test]
    fn test_center_point_not_bounds() {
        // A huge object whose edge overlaps the circle survives as long as
        // its center stays outside the radius.
        let (mut stickers, mut texts, mut images) = registries();
        let mut big = Sticker::new(IconKind::Flag, 0.0, 0.0);
        big.set_geometry(0.0, 0.0, 400.0, 400.0);
        let id = stickers.insert(big);

        apply(
            None,
            &mut stickers,
            &mut texts,
            &mut images,
            Point::new(10.0, 10.0),
            15.0,
        );
        assert!(stickers.get(id).is_some());
    }

    #[test]
    fn test_survivors_are_strictly_outside() {
        let (mut stickers, mut texts, mut images) = registries();
        for i in 0..20 {
            let mut s = Sticker::new(IconKind::Check, i as f64 * 10.0, 0.0);
            // Make each sticker's center land on (i*10, 0).
            s.set_geometry(i as f64 * 10.0 - 25.0, -25.0, 50.0, 50.0);
            stickers.insert(s);
        }
        let center = Point::new(50.0, 0.0);
        let radius = effective_radius(20.0);
        apply(None, &mut stickers, &mut texts, &mut images, center, 20.0);
        for s in stickers.iter() {
            assert!(s.center().distance(center) > radius);
        }
    }

    #[test]
    fn test_all_layers_erased_and_bitmaps_released() {
        let (mut stickers, mut texts, mut images) = registries();
        stickers.insert(Sticker::new(IconKind::Star, 0.0, 0.0));
        texts.insert(TextBox::new(0.0, 0.0));
        images.insert(ImageObject::from_bitmap(
            image::RgbaImage::new(30, 30),
            -150.0,
            -100.0,
        ));

        let outcome = apply(
            None,
            &mut stickers,
            &mut texts,
            &mut images,
            Point::new(0.0, 0.0),
            100.0,
        );
        assert_eq!(outcome.stickers.len(), 1);
        assert_eq!(outcome.texts.len(), 1);
        assert_eq!(outcome.images.len(), 1);
        // The image registry dropped the object, and with it the bitmap.
        assert!(images.is_empty());
    }
}
