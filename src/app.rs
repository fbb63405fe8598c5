use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::cli::{Cli, Demo};
use crate::frame::CancelToken;
use crate::gallery::{GallerySketch, RemeasurePolicy};
use crate::layout::Viewport;
use crate::page::{demo_page, PageLayout, TextureData};
use crate::ready::ReadyGate;
use crate::renderer::{GalleryRenderer, SphereRenderer, TEXTURE_SIZE};
use crate::sphere::SphereSketch;

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

/// Fonts the original page waited on before building the scene. Natively
/// each entry holds one readiness slot; the overlay bundles its own fonts.
const FONT_WARMUPS: [&str; 2] = ["Open Sans", "Playfair Display"];

enum Sketch {
    Gallery {
        sketch: GallerySketch,
        renderer: GalleryRenderer,
    },
    Sphere {
        sketch: SphereSketch,
        renderer: SphereRenderer,
    },
}

/// Check font data and bake plane textures off-thread, joined through the
/// readiness gate. Returns the textures once all three signals complete,
/// or an error if the timeout passes first.
fn preload_gallery_assets(page: &PageLayout, timeout: Duration) -> anyhow::Result<Vec<TextureData>> {
    let (gate, signals) = ReadyGate::new(3);
    let mut signals = signals.into_iter();

    for font in FONT_WARMUPS {
        let signal = signals.next().expect("gate has three slots");
        thread::spawn(move || {
            // Stand-in for the page's per-font load observer: check the
            // bundled font data exists, then report the slot ready
            let fonts = egui::FontDefinitions::default();
            if fonts.font_data.is_empty() {
                eprintln!("no font data available for {}", font);
            }
            signal.complete();
        });
    }

    let (tx, rx) = mpsc::channel();
    let signal = signals.next().expect("gate has three slots");
    let elements = page.elements.clone();
    thread::spawn(move || {
        let textures: Vec<TextureData> = elements
            .iter()
            .map(|e| e.texture.bake(TEXTURE_SIZE, TEXTURE_SIZE))
            .collect();
        tx.send(textures).ok();
        signal.complete();
    });

    gate.wait(timeout)
        .map_err(|e| anyhow!("asset preload failed: {}", e))?;
    rx.recv().context("texture preload thread dropped its result")
}

pub struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    sketch: Option<Sketch>,
    cancel: CancelToken,
    last_frame_time: Instant,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            sketch: None,
            cancel: CancelToken::new(),
            last_frame_time: Instant::now(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn build_sketch(&self, window: Arc<Window>) -> anyhow::Result<Sketch> {
        let size = window.inner_size();
        let viewport = Viewport::new(size.width as f32, size.height as f32);
        let with_overlay = !self.cli.no_ui;
        let timeout = Duration::from_secs(self.cli.ready_timeout_secs);

        match self.cli.demo {
            Demo::Gallery => {
                let mut page = match &self.cli.page {
                    Some(path) => PageLayout::load(path)?,
                    None => demo_page(viewport),
                };
                page.viewport = viewport;

                let textures = preload_gallery_assets(&page, timeout)?;

                let policy = if self.cli.remeasure_on_resize {
                    RemeasurePolicy::Rescale
                } else {
                    RemeasurePolicy::KeepBounds
                };
                let sketch = GallerySketch::new(&page, policy);
                let renderer = pollster::block_on(GalleryRenderer::new(
                    window,
                    &sketch,
                    &textures,
                    with_overlay,
                ))
                .map_err(|e| anyhow!("failed to initialize gallery renderer: {}", e))?;

                Ok(Sketch::Gallery { sketch, renderer })
            }
            Demo::Sphere => {
                let sketch = SphereSketch::new(viewport);
                let renderer =
                    pollster::block_on(SphereRenderer::new(window, &sketch, with_overlay))
                        .map_err(|e| anyhow!("failed to initialize sphere renderer: {}", e))?;

                Ok(Sketch::Sphere { sketch, renderer })
            }
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        self.update_fps(delta);
        let fps = self.fps;

        let Some(window) = self.window.clone() else {
            return;
        };

        let result = match &mut self.sketch {
            Some(Sketch::Gallery { sketch, renderer }) => {
                sketch.frame();
                renderer.render(sketch, &window, fps)
            }
            Some(Sketch::Sphere { sketch, renderer }) => {
                sketch.frame();
                renderer.render(sketch, &window, fps)
            }
            None => return,
        };

        match result {
            Ok(()) => {}
            // A lost or outdated surface recovers on reconfigure; the loop
            // itself never dies silently
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = window.inner_size();
                self.resize_surface(size.width, size.height);
            }
            Err(e) => eprintln!("Render error: {}", e),
        }
    }

    fn resize_surface(&mut self, width: u32, height: u32) {
        let viewport = Viewport::new(width.max(1) as f32, height.max(1) as f32);
        match &mut self.sketch {
            Some(Sketch::Gallery { sketch, renderer }) => {
                sketch.resize(viewport);
                renderer.resize(width, height);
            }
            Some(Sketch::Sphere { sketch, renderer }) => {
                sketch.resize(viewport);
                renderer.resize(width, height);
            }
            None => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let title = match self.cli.demo {
                Demo::Gallery => "sketchbook - gallery",
                Demo::Sphere => "sketchbook - sphere",
            };
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title(title)
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            match self.build_sketch(window.clone()) {
                Ok(sketch) => {
                    self.window = Some(window);
                    self.sketch = Some(sketch);
                }
                Err(e) => {
                    eprintln!("Failed to initialize sketch: {:#}", e);
                    self.cancel.cancel();
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let the overlay see the event first
        if let (Some(sketch), Some(window)) = (&mut self.sketch, &self.window) {
            let consumed = match sketch {
                Sketch::Gallery { renderer, .. } => renderer.handle_event(window, &event),
                Sketch::Sphere { renderer, .. } => renderer.handle_event(window, &event),
            };
            if consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                self.cancel.cancel();
                event_loop.exit();
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(Sketch::Gallery { sketch, .. }) = &mut self.sketch {
                    sketch.pointer_moved(position.x as f32, position.y as f32);
                }
            }
            WindowEvent::CursorLeft { .. } => {
                if let Some(Sketch::Gallery { sketch, .. }) = &mut self.sketch {
                    sketch.pointer_left();
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(Sketch::Gallery { sketch, .. }) = &mut self.sketch {
                    // Wheel-up is positive in winit; scrolling down the page
                    // increases the offset
                    match delta {
                        MouseScrollDelta::LineDelta(_, y) => sketch.wheel_lines(-y),
                        MouseScrollDelta::PixelDelta(p) => sketch.wheel_pixels(-p.y as f32),
                    }
                }
            }
            WindowEvent::Resized(size) => {
                self.resize_surface(size.width, size.height);
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.cancel.is_cancelled() {
            event_loop.exit();
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
