use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Screen-space bounding box of a page element, in CSS-style pixels
/// (top/left measured from the page origin, y growing downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementBounds {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementBounds {
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self { top, left, width, height }
    }

    /// Scale by per-axis factors, as if the page had been laid out again
    /// for a proportionally resized viewport.
    pub fn scaled(&self, sx: f32, sy: f32) -> Self {
        Self {
            top: self.top * sy,
            left: self.left * sx,
            width: self.width * sx,
            height: self.height * sy,
        }
    }
}

/// Viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// World position of a plane, reproducing DOM placement in a 3D space whose
/// origin sits at the viewport center with y up.
///
/// x: left edge minus half the viewport, plus half the element.
/// y: scroll offset stands in for the page's natural scroll translation.
///
/// Pure in (bounds, scroll, viewport) - recomputed every frame, so plane
/// placement can never drift.
pub fn plane_position(bounds: &ElementBounds, scroll: f32, viewport: &Viewport) -> Vec2 {
    Vec2::new(
        bounds.left - viewport.width / 2.0 + bounds.width / 2.0,
        scroll - bounds.top + viewport.height / 2.0 - bounds.height / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_element_position() {
        // 800x600 viewport, element {top:50, left:100, width:200, height:150}
        let viewport = Viewport::new(800.0, 600.0);
        let bounds = ElementBounds::new(50.0, 100.0, 200.0, 150.0);

        let pos = plane_position(&bounds, 0.0, &viewport);
        assert_eq!(pos, Vec2::new(-200.0, 175.0));
    }

    #[test]
    fn scroll_translates_vertically_only() {
        let viewport = Viewport::new(800.0, 600.0);
        let bounds = ElementBounds::new(50.0, 100.0, 200.0, 150.0);

        let rest = plane_position(&bounds, 0.0, &viewport);
        let scrolled = plane_position(&bounds, 120.0, &viewport);
        assert_eq!(scrolled.x, rest.x);
        assert_eq!(scrolled.y, rest.y + 120.0);
    }

    #[test]
    fn position_is_idempotent() {
        let viewport = Viewport::new(1024.0, 768.0);
        let bounds = ElementBounds::new(300.0, 40.0, 320.0, 240.0);

        let first = plane_position(&bounds, 55.5, &viewport);
        for _ in 0..10 {
            assert_eq!(plane_position(&bounds, 55.5, &viewport), first);
        }
    }

    #[test]
    fn centered_element_sits_at_origin() {
        let viewport = Viewport::new(800.0, 600.0);
        let bounds = ElementBounds::new(250.0, 300.0, 200.0, 100.0);
        assert_eq!(plane_position(&bounds, 0.0, &viewport), Vec2::ZERO);
    }

    #[test]
    fn scaled_bounds_follow_viewport_ratio() {
        let bounds = ElementBounds::new(50.0, 100.0, 200.0, 150.0);
        let scaled = bounds.scaled(2.0, 0.5);
        assert_eq!(scaled, ElementBounds::new(25.0, 200.0, 400.0, 75.0));
    }
}
