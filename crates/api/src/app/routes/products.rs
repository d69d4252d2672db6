use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use dixm_core::ProductId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(add_product).get(list_products))
        .route("/:id", get(get_product))
}

pub async fn add_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AddProductRequest>,
) -> axum::response::Response {
    match services.add_product(body.into()) {
        Ok(id) => (StatusCode::CREATED, Json(dto::CreatedResponse { id: id.get() })).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.products_list() {
        Ok(items) => (StatusCode::OK, Json(dto::ItemsResponse { items })).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.products_get(product_id) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_products_by_collection(
    Extension(services): Extension<Arc<AppServices>>,
    Path(collection): Path<String>,
) -> axum::response::Response {
    match services.products_by_collection(&collection) {
        Ok(items) => (StatusCode::OK, Json(dto::ItemsResponse { items })).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
