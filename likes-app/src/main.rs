use likes_app::config::Config;
use likes_app::{fixtures, launch_app, AppContext};
use tracing::{info, warn};

#[cfg(not(target_arch = "wasm32"))]
fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

// The web renderer installs its own console logger at launch
#[cfg(target_arch = "wasm32")]
fn configure_logging() {}

fn main() {
    configure_logging();

    let config = Config::load().unwrap_or_else(|e| {
        warn!("{}, using default configuration", e);
        Config::default()
    });
    let liked = fixtures::load(&config);
    info!(
        "Loaded {} liked songs and {} liked playlists",
        liked.liked_songs.len(),
        liked.liked_playlists.len()
    );

    launch_app(AppContext { config, liked });
}
