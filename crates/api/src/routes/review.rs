//! Route definitions for the design review workflow.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// Routes mounted at `/reviews`. All require designer or admin role.
///
/// ```text
/// POST /{design_id}/approve           approve
/// POST /{design_id}/reject            reject
/// GET  /{design_id}                   list reviews for design
/// GET  /{design_id}/technical-sheet   generate technical sheet
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{design_id}/approve", post(review::approve))
        .route("/{design_id}/reject", post(review::reject))
        .route("/{design_id}", get(review::list_for_design))
        .route(
            "/{design_id}/technical-sheet",
            get(review::technical_sheet),
        )
}
