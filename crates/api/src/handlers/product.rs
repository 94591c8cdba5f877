//! Handlers for the `/products` resource.
//!
//! The catalog is public to read; mutations are admin-only.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use stampa_core::error::CoreError;
use stampa_core::types::DbId;
use stampa_db::models::product::{CreateProduct, Product, ProductFilter, UpdateProduct};
use stampa_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/products
///
/// List the catalog. Unless the query says otherwise, only active products
/// are shown.
pub async fn list(
    State(state): State<AppState>,
    Query(mut filter): Query<ProductFilter>,
) -> AppResult<Json<DataResponse<Vec<Product>>>> {
    if filter.active.is_none() {
        filter.active = Some(true);
    }
    let products = ProductRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: products }))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Product>>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(DataResponse { data: product }))
}

/// POST /api/v1/products (admin only)
pub async fn create(
    RequireAdmin(auth): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<DataResponse<Product>>)> {
    if input.available_colors.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "A product needs at least one available color".into(),
        )));
    }

    let product = ProductRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        product_id = product.id,
        "Product created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: product })))
}

/// PUT /api/v1/products/{id} (admin only)
pub async fn update(
    RequireAdmin(_auth): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<DataResponse<Product>>> {
    if input
        .available_colors
        .as_ref()
        .is_some_and(|c| c.is_empty())
    {
        return Err(AppError::Core(CoreError::Validation(
            "A product needs at least one available color".into(),
        )));
    }

    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(DataResponse { data: product }))
}

/// DELETE /api/v1/products/{id} (admin only)
///
/// Deactivates rather than deletes: existing designs keep their product.
pub async fn delete(
    RequireAdmin(auth): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = ProductRepo::deactivate(&state.pool, id).await?;
    if deactivated {
        tracing::info!(user_id = auth.user_id, product_id = id, "Product deactivated");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
    }
}
