//! Solo Tennis entry point
//!
//! Owns the window and the frame loop: polls input into a per-frame
//! `TickInput`, steps the simulation by elapsed wall-clock time, and
//! hands the frame's rectangle list to the renderer. Everything gameplay
//! lives in `solo_tennis::sim`.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use solo_tennis::renderer::{RenderState, frame_rects};
use solo_tennis::sim::{GameEvent, GameState, TickInput, tick};
use solo_tennis::{Settings, consts, pixel_to_ndc};

struct App {
    settings: Settings,
    state: GameState,
    window: Option<Arc<Window>>,
    renderer: Option<RenderState>,
    /// Input accumulated since the last frame: last pointer position
    /// wins, any launch press wins.
    input: TickInput,
    quit_requested: bool,
    last_frame: Option<Instant>,
}

impl App {
    fn new(settings: Settings, state: GameState) -> Self {
        Self {
            settings,
            state,
            window: None,
            renderer: None,
            input: TickInput::default(),
            quit_requested: false,
            last_frame: None,
        }
    }

    /// One frame: elapsed time, simulation step, event reporting, draw.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|prev| now.duration_since(prev).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        let events = tick(&mut self.state, &self.input, dt);
        // One-shot inputs are consumed by the step; the pointer persists.
        self.input.launch = false;

        for event in events {
            match event {
                GameEvent::Served => {
                    log::info!("serve (score {}, misses {})", self.state.score, self.state.fails)
                }
                GameEvent::Failed { fails } => {
                    log::info!("miss {} of {}", fails, consts::ROUND_FAILS)
                }
                GameEvent::TargetHit { score, size } => {
                    log::info!("hit! score {}, next target size {:.3}", score, size)
                }
                GameEvent::RoundOver { score } => {
                    // The round's one observable output.
                    println!("Game over! Round score: {score}");
                }
            }
        }

        if let Some(renderer) = self.renderer.as_mut() {
            let rects = frame_rects(&self.state);
            match renderer.render(&rects) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (width, height) = renderer.size;
                    renderer.resize(width, height);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of video memory");
                    event_loop.exit();
                }
                Err(err) => log::warn!("Render error: {:?}", err),
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title("Solo Tennis")
                        .with_inner_size(LogicalSize::new(
                            self.settings.width,
                            self.settings.height,
                        )),
                )
                .expect("Failed to create window"),
        );
        window.set_cursor_visible(!self.settings.hide_cursor);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let renderer = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
        ));

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.quit_requested = true;
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape)
                {
                    self.quit_requested = true;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    self.input.pointer = Some(pixel_to_ndc(
                        position.x as f32,
                        position.y as f32,
                        size.width,
                        size.height,
                    ));
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.input.launch = true;
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                // Quit is honored only at the frame boundary.
                if self.quit_requested {
                    event_loop.exit();
                    return;
                }
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load();
    let seed = std::env::var("SOLO_TENNIS_SEED")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(time_seed);
    log::info!("Solo Tennis starting (seed {})", seed);

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings, GameState::new(seed));
    event_loop.run_app(&mut app).expect("Event loop failed");

    app.settings.save();
    log::info!("Clean exit");
}
