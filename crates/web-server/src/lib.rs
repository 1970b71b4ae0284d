use axum::{extract::DefaultBodyLimit, Router};
use axum_extra::routing::RouterExt;
use configuration::Settings;
use database::{CountryRepository, DbRepository};
use scenarios::CountryScenarios;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod origin;
pub mod paths;

/// Country payloads are a handful of short strings; anything bigger is not one.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub scenarios: CountryScenarios,
    /// Whether `X-Forwarded-*` headers may shape the URIs handed to clients.
    pub trust_forwarded_headers: bool,
}

impl AppState {
    pub fn new(repository: Arc<dyn CountryRepository>) -> Self {
        Self {
            scenarios: CountryScenarios::new(repository),
            trust_forwarded_headers: false,
        }
    }

    pub fn with_trusted_forwarded_headers(mut self, trust: bool) -> Self {
        self.trust_forwarded_headers = trust;
        self
    }
}

/// Builds the API router with its middleware stack.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .typed_get(handlers::index)
        .typed_get(handlers::ping)
        .typed_get(handlers::list_countries)
        .typed_post(handlers::store_country)
        .typed_get(handlers::get_country)
        .typed_delete(handlers::delete_country)
        .typed_patch(handlers::edit_country)
        .with_state(Arc::new(state))
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

/// Serves the API over `repository` until Ctrl-C.
pub async fn serve(settings: &Settings, repository: Arc<dyn CountryRepository>) -> anyhow::Result<()> {
    let addr = settings.server.socket_addr()?;
    let state = AppState::new(repository)
        .with_trusted_forwarded_headers(settings.server.trust_forwarded_headers);
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped.");
    Ok(())
}

/// Connects to the configured PostgreSQL database and serves the API over it.
/// An unreachable database is fatal before the listener is bound.
pub async fn run_server(settings: &Settings) -> anyhow::Result<()> {
    let repository = DbRepository::connect(&settings.database).await?;
    serve(settings, Arc::new(repository)).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received.");
}
