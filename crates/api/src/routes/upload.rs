//! Route definitions for stamp uploads.

use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes mounted at `/uploads`.
///
/// ```text
/// POST /    upload a stamp image (auth, multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(upload::upload_stamp))
}
