// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// Scrollable image gallery with hover-reactive planes
    Gallery,
    /// Rotating textured sphere
    Sphere,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "sketchbook")]
#[command(about = "Interactive WebGPU sketches", long_about = None)]
pub struct Cli {
    /// Which sketch to run
    #[arg(long, value_enum, default_value_t = Demo::Gallery)]
    pub demo: Demo,

    /// Disable the FPS overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Page layout JSON (gallery only); defaults to the built-in demo page
    #[arg(long)]
    pub page: Option<PathBuf>,

    /// Rescale element bounds when the window resizes instead of keeping
    /// the originally measured ones
    #[arg(long, default_value = "false")]
    pub remeasure_on_resize: bool,

    /// Seconds to wait for asset readiness before giving up
    #[arg(long, default_value = "10")]
    pub ready_timeout_secs: u64,
}
