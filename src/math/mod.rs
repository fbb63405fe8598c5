pub mod easing;
pub mod ndc;

pub use easing::ease_out_quad;
pub use ndc::pointer_to_ndc;
