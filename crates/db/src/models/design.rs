//! Design entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use stampa_core::transform::Transforms;
use stampa_core::types::{DbId, Timestamp};

/// A row from the `designs` table.
///
/// `transforms` is a typed JSONB column: the `Json` wrapper serializes
/// transparently as the inner [`Transforms`] value, so the wire shape is
/// `{"position": ..., "rotation": ..., "scale": ...}`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Design {
    pub id: DbId,
    pub user_id: DbId,
    pub product_id: DbId,
    pub color: String,
    pub image_url: String,
    pub transforms: Json<Transforms>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A design joined with its owner and product summaries.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DesignWithRelations {
    pub id: DbId,
    pub user_id: DbId,
    pub product_id: DbId,
    pub color: String,
    pub image_url: String,
    pub transforms: Json<Transforms>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub user_email: String,
    pub user_name: Option<String>,
    pub product_name: String,
    pub product_category: String,
    pub product_thumbnail_url: Option<String>,
}

/// DTO for creating a new design. The owner comes from the caller's
/// authentication, never from the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDesign {
    pub product_id: DbId,
    pub color: String,
    pub image_url: String,
    pub transforms: Transforms,
}

/// DTO for updating a design. Only non-`None` fields are applied.
///
/// `status` is accepted here purely so the handler can detect and reject
/// payloads that try to set it; [`crate::repositories::DesignRepo::update`]
/// never writes it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDesign {
    pub color: Option<String>,
    pub image_url: Option<String>,
    pub transforms: Option<Transforms>,
    pub status: Option<String>,
}

/// Query parameters for design listing.
#[derive(Debug, Default, Deserialize)]
pub struct DesignFilter {
    pub user_id: Option<DbId>,
    pub product_id: Option<DbId>,
    pub status: Option<String>,
    pub date_from: Option<Timestamp>,
    pub date_to: Option<Timestamp>,
}
