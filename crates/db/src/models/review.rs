//! Review entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stampa_core::types::{DbId, Timestamp};

/// A row from the `reviews` table. Immutable once written.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub design_id: DbId,
    pub reviewer_id: DbId,
    pub status: String,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A review joined with its reviewer summary.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewWithReviewer {
    pub id: DbId,
    pub design_id: DbId,
    pub reviewer_id: DbId,
    pub status: String,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub reviewer_email: String,
    pub reviewer_name: Option<String>,
}

/// Request body for the approve endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApproveRequest {
    pub comment: Option<String>,
}

/// Request body for the reject endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RejectRequest {
    pub comment: Option<String>,
}
