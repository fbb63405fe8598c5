use glam::Vec2;

use sketchbook::camera::PageCamera;
use sketchbook::gallery::{GallerySketch, RemeasurePolicy};
use sketchbook::layout::{ElementBounds, Viewport};
use sketchbook::math::pointer_to_ndc;
use sketchbook::page::{PageElement, PageLayout, TextureSpec};
use sketchbook::picking::{pick, PlaneTarget};

fn camera() -> PageCamera {
    PageCamera::new(Viewport::new(800.0, 600.0))
}

fn pointer_ray(cam: &PageCamera, px: f32, py: f32) -> sketchbook::camera::Ray {
    cam.ray_from_ndc(pointer_to_ndc(px, py, 800.0, 600.0))
}

#[test]
fn pointer_at_screen_center_hits_centered_plane() {
    let cam = camera();
    let planes = [PlaneTarget {
        position: Vec2::ZERO,
        width: 200.0,
        height: 150.0,
    }];

    let hit = pick(&pointer_ray(&cam, 400.0, 300.0), &planes).unwrap();
    assert_eq!(hit.index, 0);
    assert!((hit.uv - Vec2::new(0.5, 0.5)).length() < 1e-3);
}

#[test]
fn pointer_offset_maps_linearly_to_uv() {
    let cam = camera();
    let planes = [PlaneTarget {
        position: Vec2::ZERO,
        width: 200.0,
        height: 150.0,
    }];

    // +50px right, +30px down of center -> world (50, 30) under the
    // non-inverted NDC mapping -> uv (0.75, 0.7)
    let hit = pick(&pointer_ray(&cam, 450.0, 330.0), &planes).unwrap();
    assert!((hit.uv - Vec2::new(0.75, 0.7)).length() < 1e-3);
}

#[test]
fn pointer_outside_all_planes_hits_nothing() {
    let cam = camera();
    let planes = [PlaneTarget {
        position: Vec2::new(0.0, 0.0),
        width: 100.0,
        height: 100.0,
    }];

    assert!(pick(&pointer_ray(&cam, 790.0, 590.0), &planes).is_none());
}

#[test]
fn nearest_hit_wins_with_overlapping_planes() {
    let cam = camera();
    // Coplanar overlap: equal distance, first index kept
    let planes = [
        PlaneTarget { position: Vec2::ZERO, width: 300.0, height: 300.0 },
        PlaneTarget { position: Vec2::new(20.0, 0.0), width: 300.0, height: 300.0 },
    ];

    let hit = pick(&pointer_ray(&cam, 400.0, 300.0), &planes).unwrap();
    assert_eq!(hit.index, 0);
}

#[test]
fn sketch_writes_hit_uv_into_hover_uniform() {
    let page = PageLayout {
        viewport: Viewport::new(800.0, 600.0),
        elements: vec![PageElement {
            bounds: ElementBounds::new(50.0, 100.0, 200.0, 150.0),
            texture: TextureSpec::Ocean,
        }],
    };
    let mut sketch = GallerySketch::new(&page, RemeasurePolicy::KeepBounds);

    // The plane sits at world (-200, 175); under the preserved NDC mapping
    // that world point is under screen pixel (200, 475)
    sketch.pointer_moved(200.0, 475.0);

    let hover = sketch.planes()[0].hover;
    assert!((hover - Vec2::new(0.5, 0.5)).length() < 1e-3);
}

#[test]
fn hover_uniform_untouched_on_miss() {
    let page = PageLayout {
        viewport: Viewport::new(800.0, 600.0),
        elements: vec![PageElement {
            bounds: ElementBounds::new(50.0, 100.0, 200.0, 150.0),
            texture: TextureSpec::Ocean,
        }],
    };
    let mut sketch = GallerySketch::new(&page, RemeasurePolicy::KeepBounds);

    sketch.pointer_moved(795.0, 5.0);
    assert_eq!(sketch.planes()[0].hover, Vec2::new(0.5, 0.5)); // default kept
}
