use serde::{Deserialize, Serialize};

use dixm_contact::NewContactMessage;
use dixm_infra::SeedOutcome;
use dixm_products::NewWatchProduct;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct AddProductRequest {
    pub name: String,
    pub collection: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub material: String,
    pub available: bool,
}

impl From<AddProductRequest> for NewWatchProduct {
    fn from(req: AddProductRequest) -> Self {
        NewWatchProduct::new(
            req.name,
            req.collection,
            req.price,
            req.description,
            req.material,
            req.available,
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<SubmitContactRequest> for NewContactMessage {
    fn from(req: SubmitContactRequest) -> Self {
        NewContactMessage::new(req.name, req.email, req.message)
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: u64,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub collection: String,
    pub inserted: usize,
    pub already_seeded: bool,
}

impl From<SeedOutcome> for SeedResponse {
    fn from(outcome: SeedOutcome) -> Self {
        Self {
            collection: outcome.collection.to_string(),
            inserted: outcome.inserted.len(),
            already_seeded: outcome.already_seeded,
        }
    }
}
