use glam::{Mat4, Quat};

use crate::camera::PageCamera;
use crate::frame::{FrameInfo, FrameTicker};
use crate::layout::Viewport;
use crate::page::TextureSpec;
use crate::types::{SphereUniforms, Vertex};

/// Fixed divisors turning accumulated frame time into rotation angles.
pub const ROT_Y_DIVISOR: f32 = 20.0;
pub const ROT_X_DIVISOR: f32 = 40.0;

/// Sphere radius in page pixels.
pub const SPHERE_RADIUS: f32 = 200.0;

/// Triangulated UV sphere.
pub struct SphereMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Generate a latitude/longitude sphere. `segments` is the horizontal
    /// resolution, `rings` the vertical one.
    pub fn new(radius: f32, segments: u32, rings: u32) -> Self {
        let segments = segments.max(3);
        let rings = rings.max(2);

        let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
        for ring in 0..=rings {
            let v = ring as f32 / rings as f32;
            let phi = v * std::f32::consts::PI;
            for seg in 0..=segments {
                let u = seg as f32 / segments as f32;
                let theta = u * std::f32::consts::TAU;

                let position = [
                    radius * phi.sin() * theta.cos(),
                    radius * phi.cos(),
                    radius * phi.sin() * theta.sin(),
                ];
                vertices.push(Vertex::new(position, [u, v]));
            }
        }

        let mut indices = Vec::with_capacity((segments * rings * 6) as usize);
        let stride = segments + 1;
        for ring in 0..rings {
            for seg in 0..segments {
                let a = ring * stride + seg;
                let b = a + stride;
                indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
            }
        }

        Self { vertices, indices }
    }
}

/// Variant B controller: one textured sphere spinning with frame time.
pub struct SphereSketch {
    pub viewport: Viewport,
    pub camera: PageCamera,
    pub texture: TextureSpec,
    ticker: FrameTicker,
}

impl SphereSketch {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            camera: PageCamera::new(viewport),
            texture: TextureSpec::Ocean,
            ticker: FrameTicker::new(),
        }
    }

    pub fn time(&self) -> f32 {
        self.ticker.time()
    }

    pub fn frame(&mut self) -> FrameInfo {
        self.ticker.tick()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.resize(viewport);
    }

    /// Rotation is a pure function of accumulated time - nothing integrates
    /// frame to frame, so there is no drift beyond the accumulator itself.
    pub fn rotation(&self) -> Quat {
        let time = self.ticker.time();
        Quat::from_rotation_y(time / ROT_Y_DIVISOR) * Quat::from_rotation_x(time / ROT_X_DIVISOR)
    }

    pub fn uniforms(&self) -> SphereUniforms {
        let model = Mat4::from_quat(self.rotation());
        SphereUniforms::new(self.camera.view_projection() * model, self.ticker.time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn mesh_indices_stay_in_bounds() {
        let mesh = SphereMesh::new(200.0, 32, 16);
        let max = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < max));
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn mesh_vertices_sit_on_the_sphere() {
        let mesh = SphereMesh::new(200.0, 16, 8);
        for vertex in &mesh.vertices {
            let r = Vec3::from_array(vertex.position).length();
            assert!((r - 200.0).abs() < 1e-2);
        }
    }

    #[test]
    fn mesh_uvs_cover_unit_square() {
        let mesh = SphereMesh::new(1.0, 8, 4);
        for vertex in &mesh.vertices {
            assert!(vertex.uv[0] >= 0.0 && vertex.uv[0] <= 1.0);
            assert!(vertex.uv[1] >= 0.0 && vertex.uv[1] <= 1.0);
        }
    }

    #[test]
    fn rotation_is_pure_in_time() {
        let mut sketch = SphereSketch::new(Viewport::new(800.0, 600.0));
        for _ in 0..100 {
            sketch.frame();
        }

        let expected_y = sketch.time() / ROT_Y_DIVISOR;
        let expected = Quat::from_rotation_y(expected_y)
            * Quat::from_rotation_x(sketch.time() / ROT_X_DIVISOR);
        assert!(sketch.rotation().abs_diff_eq(expected, 1e-6));

        // Repeated reads at the same time are identical
        assert_eq!(sketch.rotation(), sketch.rotation());
    }

    #[test]
    fn rotation_divisors_are_20_and_40() {
        let mut sketch = SphereSketch::new(Viewport::new(800.0, 600.0));
        for _ in 0..100 {
            sketch.frame();
        }

        let t = sketch.time();
        let expected = Quat::from_rotation_y(t / 20.0) * Quat::from_rotation_x(t / 40.0);
        assert!(sketch.rotation().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn uniforms_track_time() {
        let mut sketch = SphereSketch::new(Viewport::new(800.0, 600.0));
        sketch.frame();
        assert_eq!(sketch.uniforms().time, 0.05);
    }
}
