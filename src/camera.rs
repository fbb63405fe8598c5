use glam::{Mat4, Vec2, Vec3};

use crate::layout::Viewport;

/// Distance from the camera to the page plane, in pixels.
pub const CAMERA_DISTANCE: f32 = 660.0;
pub const NEAR_PLANE: f32 = 100.0;
pub const FAR_PLANE: f32 = 2000.0;

/// Picking ray in world space.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Perspective camera calibrated so that one world unit equals one page
/// pixel on the z = 0 plane.
///
/// Sits at z = 660 looking at the origin; the vertical fov is derived from
/// the viewport height (`2 * atan(h / 2 / 660)`), which makes the frustum
/// cross-section at z = 0 exactly the viewport.
#[derive(Debug, Clone, Copy)]
pub struct PageCamera {
    pub position: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
}

impl PageCamera {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            fov_y: 2.0 * (viewport.height / 2.0 / CAMERA_DISTANCE).atan(),
            aspect: viewport.aspect(),
        }
    }

    /// Recompute aspect and fov for a resized viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        self.fov_y = 2.0 * (viewport.height / 2.0 / CAMERA_DISTANCE).atan();
        self.aspect = viewport.aspect();
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, NEAR_PLANE, FAR_PLANE)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unproject an NDC point into a world-space picking ray.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        // wgpu clip space: z = 0 at the near plane, z = 1 at the far plane
        let near = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));

        Ray {
            origin: near,
            dir: (far - near).normalize(),
        }
    }
}
