//! JSON REST API handler modules and route table.

#[allow(clippy::missing_errors_doc)]
pub mod products;

use axum::routing::get;
use axum::Router;

use catalog_app::ports::ProductRepository;

use crate::state::AppState;

/// Build the product routes.
///
/// The full route table, assembled once at startup:
///
/// | Method | Path | Handler |
/// |---|---|---|
/// | `POST` | `/products` | [`products::create`] |
/// | `GET` | `/products` | [`products::list`] (requires `?name=`) |
/// | `GET` | `/products/{id}` | [`products::get`] |
/// | `PUT` | `/products/{id}` | [`products::update`] |
/// | `DELETE` | `/products/{id}` | [`products::delete`] |
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ProductRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/products",
            get(products::list::<R>).post(products::create::<R>),
        )
        .route(
            "/products/{id}",
            get(products::get::<R>)
                .put(products::update::<R>)
                .delete(products::delete::<R>),
        )
}
