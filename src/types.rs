use glam::{Mat4, Vec2};

/// Mesh vertex: position plus texture coordinate.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const fn new(position: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, uv }
    }

    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Per-plane uniform data for the gallery shader. Field order matches the
/// WGSL struct; mat4x4 then vec2 then two scalars needs no padding.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneUniforms {
    pub mvp: [[f32; 4]; 4],
    pub hover: [f32; 2],
    pub time: f32,
    pub hover_state: f32,
}

impl PlaneUniforms {
    pub fn new(mvp: Mat4, hover: Vec2, time: f32, hover_state: f32) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
            hover: hover.to_array(),
            time,
            hover_state,
        }
    }
}

/// Uniform data for the sphere shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereUniforms {
    pub mvp: [[f32; 4]; 4],
    pub time: f32,
    pub _pad: [f32; 3],
}

impl SphereUniforms {
    pub fn new(mvp: Mat4, time: f32) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
            time,
            _pad: [0.0; 3],
        }
    }
}
