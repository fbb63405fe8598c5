/// Interpolation factor applied per frame while easing toward the target
/// offset. Matches the smooth-scroll feel of the original page.
pub const SCROLL_EASE: f32 = 0.1;

/// Pixels of scroll per wheel line.
pub const WHEEL_LINE_PX: f32 = 40.0;

/// Smoothed vertical scroll offset.
///
/// Wheel events move the target; `advance` eases the rendered offset toward
/// it once per frame. The rendered value is what the layout reads.
#[derive(Debug, Clone, Copy)]
pub struct SmoothScroll {
    target: f32,
    current: f32,
    max: f32,
}

impl SmoothScroll {
    /// `max` is the scrollable extent: page height minus viewport height.
    pub fn new(max: f32) -> Self {
        Self {
            target: 0.0,
            current: 0.0,
            max: max.max(0.0),
        }
    }

    /// Wheel delta in scrolled lines (positive scrolls down the page).
    pub fn wheel_lines(&mut self, lines: f32) {
        self.wheel_pixels(lines * WHEEL_LINE_PX);
    }

    /// Wheel delta in pixels.
    pub fn wheel_pixels(&mut self, delta: f32) {
        self.target = (self.target + delta).clamp(0.0, self.max);
    }

    pub fn set_target(&mut self, offset: f32) {
        self.target = offset.clamp(0.0, self.max);
    }

    /// Ease the rendered offset toward the target; returns the new offset.
    pub fn advance(&mut self) -> f32 {
        self.current += (self.target - self.current) * SCROLL_EASE;
        if (self.target - self.current).abs() < 0.01 {
            self.current = self.target;
        }
        self.current
    }

    /// Offset the layout should use this frame.
    pub fn offset(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Re-clamp after the scrollable extent changes (viewport resize).
    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.target = self.target.clamp(0.0, self.max);
        self.current = self.current.clamp(0.0, self.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_to_target() {
        let mut scroll = SmoothScroll::new(2000.0);
        scroll.wheel_pixels(500.0);

        for _ in 0..300 {
            scroll.advance();
        }
        assert_eq!(scroll.offset(), 500.0);
    }

    #[test]
    fn eases_rather_than_jumps() {
        let mut scroll = SmoothScroll::new(2000.0);
        scroll.wheel_pixels(500.0);

        let first = scroll.advance();
        assert!(first > 0.0 && first < 500.0);
    }

    #[test]
    fn clamps_to_page_extent() {
        let mut scroll = SmoothScroll::new(1000.0);
        scroll.wheel_pixels(5000.0);
        assert_eq!(scroll.target(), 1000.0);

        scroll.wheel_pixels(-9000.0);
        assert_eq!(scroll.target(), 0.0);
    }

    #[test]
    fn wheel_lines_scale_to_pixels() {
        let mut scroll = SmoothScroll::new(1000.0);
        scroll.wheel_lines(3.0);
        assert_eq!(scroll.target(), 3.0 * WHEEL_LINE_PX);
    }

    #[test]
    fn shrinking_extent_reclamps() {
        let mut scroll = SmoothScroll::new(1000.0);
        scroll.set_target(800.0);
        for _ in 0..300 {
            scroll.advance();
        }

        scroll.set_max(300.0);
        assert_eq!(scroll.target(), 300.0);
        assert_eq!(scroll.offset(), 300.0);
    }
}
