//! Unduck HTTP service
//!
//! Routes:
//! - `/?q=...` redirects to the resolved engine, or serves the landing page
//! - `/opensearch.xml` lets browsers register the service
//! - `/api/...` engine search and preference actions for the landing page

mod commands;
mod state;

use axum::routing::{get, post, put};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use state::AppState;
use unduck_core::{Config, Unduck};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(commands::navigation::redirect))
        .route("/opensearch.xml", get(commands::opensearch::descriptor))
        .route("/api/bangs", get(commands::bangs::search_bangs))
        .route("/api/settings", get(commands::settings::get_settings))
        .route(
            "/api/settings/default-bang",
            put(commands::settings::set_default_bang)
                .delete(commands::settings::reset_default_bang),
        )
        .route("/api/settings/theme", put(commands::settings::set_theme))
        .route(
            "/api/settings/theme/toggle",
            post(commands::settings::toggle_theme),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    // Initialize logging
    unduck_core::init_logging();

    let config = Config::from_env()?;
    let bind_addr = config.bind_addr();
    let public_url = config.public_url.clone();

    let state = AppState::new(Unduck::new(config)?);
    let app = router(state);

    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        "Unduck listening on {} (add {}?q=%s as a search engine)",
        listener.local_addr()?,
        public_url.trim_end_matches('/')
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Unduck stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
