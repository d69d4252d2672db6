use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use dixm_products::Collection;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/heritage", post(seed_heritage))
        .route("/precision", post(seed_precision))
        .route("/avant-garde", post(seed_avant_garde))
}

pub async fn seed_heritage(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    seed(&services, Collection::Heritage)
}

pub async fn seed_precision(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    seed(&services, Collection::Precision)
}

pub async fn seed_avant_garde(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    seed(&services, Collection::AvantGarde)
}

fn seed(services: &AppServices, collection: Collection) -> axum::response::Response {
    match services.seed(collection) {
        Ok(outcome) => (StatusCode::OK, Json(dto::SeedResponse::from(outcome))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
