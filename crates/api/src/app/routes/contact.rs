use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", post(submit_contact_message).get(list_contact_messages))
}

pub async fn submit_contact_message(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SubmitContactRequest>,
) -> axum::response::Response {
    match services.submit_contact(body.into()) {
        Ok(id) => (StatusCode::CREATED, Json(dto::CreatedResponse { id: id.get() })).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_contact_messages(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.contacts_list() {
        Ok(items) => (StatusCode::OK, Json(dto::ItemsResponse { items })).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
