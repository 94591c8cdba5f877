//! Product entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stampa_core::types::{DbId, Timestamp};

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub base_model_url: String,
    pub available_colors: Vec<String>,
    /// Unit price in cents; avoids floating-point money.
    pub price_cents: i64,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub category: String,
    pub base_model_url: String,
    pub available_colors: Vec<String>,
    pub price_cents: i64,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
}

/// DTO for updating a product. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub category: Option<String>,
    pub base_model_url: Option<String>,
    pub available_colors: Option<Vec<String>>,
    pub price_cents: Option<i64>,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Query parameters for product listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductFilter {
    pub category: Option<String>,
    /// Defaults to `true` at the handler: the public catalog hides
    /// deactivated products unless explicitly asked.
    pub active: Option<bool>,
}
