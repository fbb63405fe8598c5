use glam::Vec2;

/// Map client pixel coordinates to normalized device coordinates.
///
/// (0, 0) maps to (-1, -1) and (width, height) to (1, 1). Neither axis is
/// inverted - the original page built its picking ray from exactly this
/// mapping, so it is preserved as-is.
pub fn pointer_to_ndc(px: f32, py: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new((px / width) * 2.0 - 1.0, (py / height) * 2.0 - 1.0)
}
