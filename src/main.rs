//! Egg Timer - HTTP control surface for the cook timer
//!
//! This is the main entry point for the egg-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use egg_timer::{
    api::create_router,
    config::Config,
    state::{format_clock, lookup_duration, AppState},
    surfaces::{CommandAudio, LoggingHaptics},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("egg_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting egg-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, selection={} {} ({})",
        config.host,
        config.port,
        config.doneness,
        config.size,
        format_clock(lookup_duration(config.size, config.doneness))
    );
    match &config.alarm_sound {
        Some(sound) => info!("Alarm: {} {}", config.alarm_player, sound.display()),
        None => info!("Alarm: terminal bell"),
    }

    let audio = Arc::new(CommandAudio::new(
        config.alarm_player.clone(),
        config.alarm_sound.clone(),
    ));
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        Arc::new(LoggingHaptics),
        audio,
    ));
    state.timer.select_size(config.size);
    state.timer.select_doneness(config.doneness);

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /                          - Home");
    info!("  GET  /timer                     - Timer view");
    info!("  GET  /timer/table               - Cook-time table");
    info!("  POST /timer/size/:size          - Select egg size");
    info!("  POST /timer/doneness/:doneness  - Select doneness");
    info!("  POST /timer/start               - Start cooking");
    info!("  POST /timer/stop                - Stop cooking");
    info!("  GET  /alerts                    - Alerts shown");
    info!("  POST /alerts/dismiss            - Dismiss alerts");
    info!("  GET  /status                    - Timer and server status");
    info!("  GET  /health                    - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if state.timer.stop() {
        info!("Cancelled the running timer on shutdown");
    }
    info!("Server shutdown complete");
    Ok(())
}
