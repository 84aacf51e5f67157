//! Multi-ball Pong entry point
//!
//! Sets up logging, picks a seed and hands over to the platform loop.

use std::time::{SystemTime, UNIX_EPOCH};

use multiball_pong::GameConfig;
use multiball_pong::platform;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Multi-ball Pong starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    // An init failure skips the game loop but still exits cleanly
    if let Err(e) = platform::run(GameConfig::default(), seed) {
        log::error!("Startup aborted: {e}");
    }
}
