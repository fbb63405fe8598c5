use clap::Parser;
use winit::event_loop::EventLoop;

use sketchbook::app::App;
use sketchbook::cli::Cli;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    println!("sketchbook - scroll with the wheel, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
