pub mod app;
pub mod camera;
pub mod cli;
pub mod frame;
pub mod gallery;
pub mod layout;
pub mod math;
pub mod page;
pub mod picking;
pub mod ready;
pub mod renderer;
pub mod scroll;
pub mod sphere;
pub mod tween;
pub mod types;

pub use frame::{CancelToken, FrameInfo, FrameTicker, TIME_STEP};
pub use gallery::{GallerySketch, RemeasurePolicy};
pub use layout::{plane_position, ElementBounds, Viewport};
pub use page::{demo_page, PageLayout};
pub use sphere::SphereSketch;
