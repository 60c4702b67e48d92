use axum::Router;

pub mod parts;
pub mod suppliers;
pub mod system;

/// Router for all catalog endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/parts", parts::router())
        .nest("/suppliers", suppliers::router())
}
