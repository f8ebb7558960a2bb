// Framework bootstrap for the controller server runtime.

use crate::frameworks::config::{self, GameConfig};
use crate::interface_adapters::net::spawn_session_serializer;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::AppState;
use crate::use_cases::SessionHandle;

use std::net::SocketAddr;
use std::{io::Result, sync::Arc};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, config: GameConfig) -> Result<()> {
    let address = listener.local_addr()?;
    // build state
    let state = build_state(&config)?;
    let session = state.session.clone();
    // Start the Web Server
    let app = app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "server error");
        });

    if let Some(actor) = session.stop().await {
        tracing::info!(x = actor.x, y = actor.y, "session stopped");
    }
    served
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let path = config::config_path();
    let game_config = config::load_game_config(path.as_deref())
        .inspect_err(|e| {
            tracing::error!(error = %e, "invalid game config");
        })
        .map_err(std::io::Error::other)?;

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, game_config).await
}

fn build_state(config: &GameConfig) -> Result<Arc<AppState>> {
    config.validate().map_err(std::io::Error::other)?;
    let world = config.build_world().map_err(std::io::Error::other)?;

    let settings = config.session_settings();
    tracing::debug!(
        profile = ?config.profile,
        tick_ms = settings.tick_interval.as_millis() as u64,
        start_listening = settings.start_listening,
        "session configured"
    );

    // The single session owns the world task; serializers fan its output out.
    let session = SessionHandle::spawn(&settings, world);
    spawn_session_serializer(&session);

    Ok(Arc::new(AppState { session }))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        // Without a signal source, serve until the process is killed.
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
