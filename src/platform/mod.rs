//! Platform layer
//!
//! Handles everything the simulation doesn't:
//! - Window creation and the winit event loop
//! - Keyboard events into a `KeySet`
//! - GPU surface/device setup
//!
//! Any failure while setting these up is an `InitError`; the caller logs it
//! and exits normally without entering the game loop.

mod app;
mod keys;

use std::fmt;

use winit::event_loop::{ControlFlow, EventLoop};

pub use app::App;
pub use keys::key_from_code;

use crate::config::{ConfigError, GameConfig};

/// Something the game needs before its first frame could not be created
#[derive(Debug)]
pub enum InitError {
    Config(ConfigError),
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
    Surface(wgpu::CreateSurfaceError),
    Adapter(wgpu::RequestAdapterError),
    Device(wgpu::RequestDeviceError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Config(e) => write!(f, "Invalid configuration: {e}"),
            InitError::EventLoop(e) => write!(f, "Unable to initialize event loop: {e}"),
            InitError::Window(e) => write!(f, "Unable to initialize window: {e}"),
            InitError::Surface(e) => write!(f, "Unable to create surface: {e}"),
            InitError::Adapter(e) => write!(f, "Unable to find a GPU adapter: {e}"),
            InitError::Device(e) => write!(f, "Unable to initialize renderer: {e}"),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::Config(e) => Some(e),
            InitError::EventLoop(e) => Some(e),
            InitError::Window(e) => Some(e),
            InitError::Surface(e) => Some(e),
            InitError::Adapter(e) => Some(e),
            InitError::Device(e) => Some(e),
        }
    }
}

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        InitError::Config(e)
    }
}

impl From<winit::error::EventLoopError> for InitError {
    fn from(e: winit::error::EventLoopError) -> Self {
        InitError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for InitError {
    fn from(e: winit::error::OsError) -> Self {
        InitError::Window(e)
    }
}

impl From<wgpu::CreateSurfaceError> for InitError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        InitError::Surface(e)
    }
}

impl From<wgpu::RequestAdapterError> for InitError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        InitError::Adapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for InitError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        InitError::Device(e)
    }
}

/// Open the window and run the game until it ends.
///
/// Returns once the event loop exits. Whatever was created before a failure
/// is dropped on the way out.
pub fn run(config: GameConfig, seed: u64) -> Result<(), InitError> {
    config.validate()?;
    match serde_json::to_string(&config) {
        Ok(json) => log::debug!("config: {json}"),
        Err(e) => log::debug!("config not serializable: {e}"),
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, seed);
    event_loop.run_app(&mut app)?;

    match app.take_init_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_surfaces_before_window() {
        let mut config = GameConfig::default();
        config.field.height = -1.0;
        let err = run(config, 0).unwrap_err();
        assert!(matches!(err, InitError::Config(ConfigError::NonPositive("height"))));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: height must be positive"
        );
    }
}
