use axum::{routing::get, Router};

pub mod contact;
pub mod products;
pub mod seed;
pub mod system;

/// Router for every service endpoint except `/health`.
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .route(
            "/collections/:collection/products",
            get(products::list_products_by_collection),
        )
        .nest("/seed", seed::router())
        .nest("/contact", contact::router())
}
