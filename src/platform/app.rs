//! winit application: window, GPU and one game frame per redraw

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use super::InitError;
use super::keys::key_from_code;
use crate::config::GameConfig;
use crate::game::Game;
use crate::input::KeySet;
use crate::pacing::SystemClock;
use crate::renderer::RenderState;

/// Everything created during initialization
struct Session {
    // Field order is drop order: GPU state goes before the window
    render: RenderState,
    game: Game<SystemClock>,
    window: Arc<Window>,
}

pub struct App {
    config: GameConfig,
    seed: u64,
    session: Option<Session>,
    keys: KeySet,
    close_requested: bool,
    init_error: Option<InitError>,
}

impl App {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            session: None,
            keys: KeySet::new(),
            close_requested: false,
            init_error: None,
        }
    }

    /// Failure recorded while the event loop was starting, if any
    pub fn take_init_error(&mut self) -> Option<InitError> {
        self.init_error.take()
    }

    fn init(&self, event_loop: &ActiveEventLoop) -> Result<Session, InitError> {
        let size = PhysicalSize::new(self.config.window_width, self.config.window_height);
        let mut attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(size)
            .with_resizable(false);

        if let Some(monitor) = event_loop.primary_monitor() {
            let screen = monitor.size();
            let x = (screen.width as i32 - size.width as i32) / 2;
            let y = (screen.height as i32 - size.height as i32) / 2;
            attributes = attributes.with_position(PhysicalPosition::new(x.max(0), y.max(0)));
        }

        let window = Arc::new(event_loop.create_window(attributes)?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let inner = window.inner_size();
        let field = &self.config.field;
        let render = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            inner.width.max(1),
            inner.height.max(1),
            (field.width, field.height),
        ))?;

        let game = Game::new(self.config.clone(), self.seed, SystemClock::new());
        log::info!(
            "Game initialized with seed {} and {} balls",
            self.seed,
            game.state().balls.len()
        );

        Ok(Session {
            render,
            game,
            window,
        })
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let Some(key) = key_from_code(code) else {
            return;
        };
        match event.state {
            ElementState::Pressed => self.keys.press(key),
            ElementState::Released => self.keys.release(key),
        }
    }

    /// One loop iteration: input, step, present
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let Some(scene) = session.game.frame(&self.keys, self.close_requested) else {
            log::info!("Game ended after {} frames", session.game.frames());
            event_loop.exit();
            return;
        };

        match session.render.render(&scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                session.render.reconfigure();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() || self.init_error.is_some() {
            return;
        }

        match self.init(event_loop) {
            Ok(session) => self.session = Some(session),
            Err(e) => {
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(session) = &self.session {
            session.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.close_requested = true;
                // No redraw would observe the flag if there is no session
                if self.session.is_none() {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(session) = &mut self.session {
                    session.render.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
