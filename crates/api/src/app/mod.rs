//! HTTP API application wiring (Axum router + shared view builder).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use partdash_views::PartViewBuilder;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Every handler reads the same immutable catalog through `builder`, so no
/// locking is involved however many sessions are served.
pub fn build_app(builder: PartViewBuilder) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(builder)))
}
