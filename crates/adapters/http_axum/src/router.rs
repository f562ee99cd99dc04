//! Axum router assembly.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use catalog_app::ports::ProductRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the product routes at the root and a `/health` probe. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: ProductRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
