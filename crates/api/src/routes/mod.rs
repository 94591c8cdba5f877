pub mod auth;
pub mod design;
pub mod health;
pub mod product;
pub mod review;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                          register (public)
/// /auth/login                             login (public)
/// /auth/me                                current user (auth)
///
/// /products                               list (public), create (admin)
/// /products/{id}                          get (public), update, deactivate (admin)
///
/// /designs                                create (auth), list (designer/admin)
/// /designs/user/me                        own designs (auth)
/// /designs/pending/all                    review queue (designer/admin)
/// /designs/{id}                           get, update, delete (policy-gated)
///
/// /reviews/{design_id}/approve            approve (designer/admin)
/// /reviews/{design_id}/reject             reject (designer/admin)
/// /reviews/{design_id}                    review history (designer/admin)
/// /reviews/{design_id}/technical-sheet    technical sheet (designer/admin)
///
/// /uploads                                stamp upload (auth, multipart)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/products", product::router())
        .nest("/designs", design::router())
        .nest("/reviews", review::router())
        .nest("/uploads", upload::router())
}
