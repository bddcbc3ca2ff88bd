pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::AppState;

use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Create app router
///
/// Used by `mealmate serve` and by integration tests, which drive it with
/// `tower::ServiceExt::oneshot` without binding a socket.
pub fn create_app(config: Config) -> axum::Router {
    routes::router(AppState::new(config))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
