//! Route definitions for the `/designs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::design;
use crate::state::AppState;

/// Routes mounted at `/designs`.
///
/// ```text
/// POST   /               create (auth)
/// GET    /               list with filters (designer/admin)
/// GET    /user/me        own designs (auth)
/// GET    /pending/all    review queue (designer/admin)
/// GET    /{id}           get (auth + ownership policy)
/// PUT    /{id}           update (owner, pending only)
/// DELETE /{id}           delete (owner or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(design::list).post(design::create))
        .route("/user/me", get(design::list_mine))
        .route("/pending/all", get(design::list_pending))
        .route(
            "/{id}",
            get(design::get_by_id)
                .put(design::update)
                .delete(design::delete),
        )
}
