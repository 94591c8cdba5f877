//! Handlers for the `/designs` resource.
//!
//! Every operation that touches an existing design loads it first and runs
//! the caller through `stampa_core::policy` before acting.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use stampa_core::design::{ensure_editable, validate_color_choice, STATUS_PENDING};
use stampa_core::error::CoreError;
use stampa_core::policy;
use stampa_core::types::DbId;
use stampa_db::models::design::{
    CreateDesign, Design, DesignFilter, DesignWithRelations, UpdateDesign,
};
use stampa_db::repositories::{DesignRepo, ProductRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireDesigner;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/designs
///
/// Create a design for the authenticated user. The chosen color must be in
/// the product's available colors; the design starts `pending`.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateDesign>,
) -> AppResult<(StatusCode, Json<DataResponse<Design>>)> {
    let product = ProductRepo::find_by_id(&state.pool, input.product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: input.product_id,
        }))?;

    validate_color_choice(&product.available_colors, &input.color)?;

    let design = DesignRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        design_id = design.id,
        product_id = design.product_id,
        "Design created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: design })))
}

/// GET /api/v1/designs
///
/// List designs matching the filter. Designer/admin only.
pub async fn list(
    RequireDesigner(_auth): RequireDesigner,
    State(state): State<AppState>,
    Query(filter): Query<DesignFilter>,
) -> AppResult<Json<DataResponse<Vec<DesignWithRelations>>>> {
    let designs = DesignRepo::list_with_relations(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: designs }))
}

/// GET /api/v1/designs/user/me
///
/// List the authenticated user's own designs.
pub async fn list_mine(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<DesignWithRelations>>>> {
    let filter = DesignFilter {
        user_id: Some(auth.user_id),
        ..Default::default()
    };
    let designs = DesignRepo::list_with_relations(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: designs }))
}

/// GET /api/v1/designs/pending/all
///
/// The review queue: all pending designs, newest first. Designer/admin only.
pub async fn list_pending(
    RequireDesigner(_auth): RequireDesigner,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<DesignWithRelations>>>> {
    let filter = DesignFilter {
        status: Some(STATUS_PENDING.to_string()),
        ..Default::default()
    };
    let designs = DesignRepo::list_with_relations(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: designs }))
}

/// GET /api/v1/designs/{id}
///
/// Fetch a design with its relations. Owners see their own; designers and
/// admins see any.
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DesignWithRelations>>> {
    let design = DesignRepo::find_by_id_with_relations(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Design",
            id,
        }))?;

    policy::ensure_can_view(&auth.role, auth.user_id, design.user_id)?;

    Ok(Json(DataResponse { data: design }))
}

/// PUT /api/v1/designs/{id}
///
/// Update a design's color/image/transforms. Owner only, pending only, and
/// `status` is never writable here.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDesign>,
) -> AppResult<Json<DataResponse<Design>>> {
    let design = DesignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Design",
            id,
        }))?;

    // The status guard comes first: a payload carrying `status` fails even
    // when the rest of the update would be legal.
    policy::ensure_no_status_change(&auth.role, input.status.is_some())?;
    policy::ensure_can_update(&auth.role, auth.user_id, design.user_id)?;
    ensure_editable(&design.status)?;

    // A color change must re-validate against the product catalog.
    if let Some(color) = &input.color {
        let product = ProductRepo::find_by_id(&state.pool, design.product_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Product",
                id: design.product_id,
            }))?;
        validate_color_choice(&product.available_colors, color)?;
    }

    let updated = DesignRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Design",
            id,
        }))?;

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/designs/{id}
///
/// Delete a design. Owner or admin.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let design = DesignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Design",
            id,
        }))?;

    policy::ensure_can_delete(&auth.role, auth.user_id, design.user_id)?;

    DesignRepo::delete(&state.pool, id).await?;

    tracing::info!(
        user_id = auth.user_id,
        design_id = id,
        "Design deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
