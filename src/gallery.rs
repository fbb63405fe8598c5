use glam::{Mat4, Vec2, Vec3};

use crate::camera::PageCamera;
use crate::frame::{FrameInfo, FrameTicker, TIME_STEP};
use crate::layout::{plane_position, ElementBounds, Viewport};
use crate::math::pointer_to_ndc;
use crate::page::{PageLayout, TextureSpec, PAGE_BOTTOM_MARGIN};
use crate::picking::{pick, PlaneTarget};
use crate::scroll::SmoothScroll;
use crate::tween::TweenChannel;
use crate::types::{PlaneUniforms, Vertex};

/// What to do with element bounds when the viewport resizes.
///
/// The original page never re-measured its elements after startup, so
/// planes kept their original positions on resize. `KeepBounds` preserves
/// that; `Rescale` approximates a re-measure of a fluid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemeasurePolicy {
    #[default]
    KeepBounds,
    Rescale,
}

/// One image element turned into a textured plane.
#[derive(Debug, Clone)]
pub struct ImagePlane {
    pub bounds: ElementBounds,
    pub texture: TextureSpec,
    /// World position on the z = 0 page plane, recomputed every frame.
    pub position: Vec2,
    /// Last raycast hit UV, fed to the shader's `hover` uniform.
    pub hover: Vec2,
    hover_tween: TweenChannel,
}

impl ImagePlane {
    fn new(bounds: ElementBounds, texture: TextureSpec) -> Self {
        Self {
            bounds,
            texture,
            position: Vec2::ZERO,
            hover: Vec2::new(0.5, 0.5),
            hover_tween: TweenChannel::new(0.0),
        }
    }

    /// Current hover blend in [0, 1].
    pub fn hover_state(&self) -> f32 {
        self.hover_tween.value()
    }

    /// Screen rect test in page coordinates, used for enter/leave events.
    fn contains_pointer(&self, px: f32, py: f32, scroll: f32) -> bool {
        let x0 = self.bounds.left;
        let y0 = self.bounds.top - scroll;
        px >= x0 && px <= x0 + self.bounds.width && py >= y0 && py <= y0 + self.bounds.height
    }
}

/// Variant A controller: the scrollable image gallery.
///
/// Holds everything except the GPU - plane state, camera, scroll, tweens,
/// and the frame accumulator - so the whole per-frame contract can run
/// headless.
pub struct GallerySketch {
    pub viewport: Viewport,
    pub camera: PageCamera,
    planes: Vec<ImagePlane>,
    scroll: SmoothScroll,
    ticker: FrameTicker,
    hovered: Option<usize>,
    remeasure: RemeasurePolicy,
}

impl GallerySketch {
    pub fn new(page: &PageLayout, remeasure: RemeasurePolicy) -> Self {
        let viewport = page.viewport;
        let planes = page
            .elements
            .iter()
            .map(|e| ImagePlane::new(e.bounds, e.texture))
            .collect();

        let mut sketch = Self {
            viewport,
            camera: PageCamera::new(viewport),
            planes,
            scroll: SmoothScroll::new(page.scroll_extent()),
            ticker: FrameTicker::new(),
            hovered: None,
            remeasure,
        };
        sketch.set_positions();
        sketch
    }

    pub fn planes(&self) -> &[ImagePlane] {
        &self.planes
    }

    pub fn time(&self) -> f32 {
        self.ticker.time()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Recompute every plane's world position from its stored bounds, the
    /// current scroll offset and the viewport. Pure per-frame layout.
    fn set_positions(&mut self) {
        let scroll = self.scroll.offset();
        for plane in &mut self.planes {
            plane.position = plane_position(&plane.bounds, scroll, &self.viewport);
        }
    }

    /// Advance one frame: time, scroll easing, layout, hover tweens.
    pub fn frame(&mut self) -> FrameInfo {
        let info = self.ticker.tick();
        self.scroll.advance();
        self.set_positions();
        for plane in &mut self.planes {
            plane.hover_tween.advance(TIME_STEP);
        }
        info
    }

    /// Wheel input, in scrolled lines.
    pub fn wheel_lines(&mut self, lines: f32) {
        self.scroll.wheel_lines(lines);
    }

    /// Wheel input, in pixels.
    pub fn wheel_pixels(&mut self, delta: f32) {
        self.scroll.wheel_pixels(delta);
    }

    /// Pointer motion: raycast for the hover UV, then run enter/leave
    /// detection against the element rects.
    pub fn pointer_moved(&mut self, px: f32, py: f32) {
        let ndc = pointer_to_ndc(px, py, self.viewport.width, self.viewport.height);
        let ray = self.camera.ray_from_ndc(ndc);

        let targets: Vec<PlaneTarget> = self
            .planes
            .iter()
            .map(|p| PlaneTarget {
                position: p.position,
                width: p.bounds.width,
                height: p.bounds.height,
            })
            .collect();

        if let Some(hit) = pick(&ray, &targets) {
            self.planes[hit.index].hover = hit.uv;
        }

        let scroll = self.scroll.offset();
        let now_over = self
            .planes
            .iter()
            .position(|p| p.contains_pointer(px, py, scroll));
        if now_over != self.hovered {
            if let Some(prev) = self.hovered {
                self.planes[prev].hover_tween.to(0.0);
            }
            if let Some(next) = now_over {
                self.planes[next].hover_tween.to(1.0);
            }
            self.hovered = now_over;
        }
    }

    /// Pointer left the window entirely.
    pub fn pointer_left(&mut self) {
        if let Some(prev) = self.hovered.take() {
            self.planes[prev].hover_tween.to(0.0);
        }
    }

    /// Viewport resize. Bounds are only touched under `Rescale`.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.remeasure == RemeasurePolicy::Rescale {
            let sx = viewport.width / self.viewport.width;
            let sy = viewport.height / self.viewport.height;
            for plane in &mut self.planes {
                plane.bounds = plane.bounds.scaled(sx, sy);
            }
        }

        self.viewport = viewport;
        self.camera.resize(viewport);

        let extent = self
            .planes
            .iter()
            .map(|p| p.bounds.top + p.bounds.height)
            .fold(viewport.height, f32::max)
            + PAGE_BOTTOM_MARGIN
            - viewport.height;
        self.scroll.set_max(extent);
        self.set_positions();
    }

    /// Uniform block for one plane under the current camera.
    pub fn plane_uniforms(&self, index: usize) -> PlaneUniforms {
        let plane = &self.planes[index];
        let model = Mat4::from_translation(Vec3::new(plane.position.x, plane.position.y, 0.0));
        PlaneUniforms::new(
            self.camera.view_projection() * model,
            plane.hover,
            self.ticker.time(),
            plane.hover_state(),
        )
    }
}

/// Subdivided plane mesh in pixel units, centered at the origin. The
/// subdivisions give the hover wave in the vertex shader something to bend.
pub struct PlaneMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl PlaneMesh {
    pub fn new(width: f32, height: f32, subdivisions: u32) -> Self {
        let n = subdivisions.max(1);

        let mut vertices = Vec::with_capacity(((n + 1) * (n + 1)) as usize);
        for row in 0..=n {
            let v = row as f32 / n as f32;
            for col in 0..=n {
                let u = col as f32 / n as f32;
                let position = [(u - 0.5) * width, (v - 0.5) * height, 0.0];
                vertices.push(Vertex::new(position, [u, v]));
            }
        }

        let stride = n + 1;
        let mut indices = Vec::with_capacity((n * n * 6) as usize);
        for row in 0..n {
            for col in 0..n {
                let a = row * stride + col;
                let b = a + stride;
                indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
            }
        }

        Self { vertices, indices }
    }
}
