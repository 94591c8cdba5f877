//! Handlers for the design review workflow.
//!
//! Approve and reject are deliberately symmetric: validate the comment,
//! load the design, then let the repository's guarded transaction flip the
//! status and append the review in one step. The review row is the
//! permanent record of why a design left `pending`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use stampa_core::design::{ensure_reviewable, ensure_sheet_ready};
use stampa_core::error::CoreError;
use stampa_core::review::{validate_comment, DECISION_APPROVED, DECISION_REJECTED};
use stampa_core::technical_sheet::{ClientSummary, ProductSummary, TechnicalSheet};
use stampa_core::types::DbId;
use stampa_db::models::review::{ApproveRequest, RejectRequest, Review, ReviewWithReviewer};
use stampa_db::repositories::{DesignRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireDesigner;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/reviews/{design_id}/approve
///
/// Approve a pending design. The comment is optional.
pub async fn approve(
    RequireDesigner(auth): RequireDesigner,
    State(state): State<AppState>,
    Path(design_id): Path<DbId>,
    Json(input): Json<ApproveRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Review>>)> {
    let review = decide(
        &state,
        design_id,
        auth.user_id,
        DECISION_APPROVED,
        input.comment,
    )
    .await?;

    tracing::info!(
        reviewer_id = auth.user_id,
        design_id = design_id,
        decision = DECISION_APPROVED,
        "Design approved"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}

/// POST /api/v1/reviews/{design_id}/reject
///
/// Reject a pending design. The comment is mandatory and is validated
/// before any state is touched.
pub async fn reject(
    RequireDesigner(auth): RequireDesigner,
    State(state): State<AppState>,
    Path(design_id): Path<DbId>,
    Json(input): Json<RejectRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Review>>)> {
    let review = decide(
        &state,
        design_id,
        auth.user_id,
        DECISION_REJECTED,
        input.comment,
    )
    .await?;

    tracing::info!(
        reviewer_id = auth.user_id,
        design_id = design_id,
        decision = DECISION_REJECTED,
        "Design rejected"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}

/// Shared decision path: guard, flip status, append the review.
async fn decide(
    state: &AppState,
    design_id: DbId,
    reviewer_id: DbId,
    decision: &str,
    comment: Option<String>,
) -> Result<Review, AppError> {
    validate_comment(decision, comment.as_deref())?;

    let design = DesignRepo::find_by_id(&state.pool, design_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Design",
            id: design_id,
        }))?;

    // Fast-path check for a readable error; the transactional guard below
    // re-checks under the database's protection.
    ensure_reviewable(&design.status)?;

    let review = ReviewRepo::create_decision(
        &state.pool,
        design_id,
        reviewer_id,
        decision,
        comment.as_deref(),
    )
    .await?
    // A concurrent reviewer won the race between our check and the
    // guarded update.
    .ok_or_else(|| {
        AppError::Core(CoreError::InvalidState(
            "Only pending designs can be reviewed".into(),
        ))
    })?;

    Ok(review)
}

/// GET /api/v1/reviews/{design_id}
///
/// List all review records for a design, newest first.
pub async fn list_for_design(
    RequireDesigner(_auth): RequireDesigner,
    State(state): State<AppState>,
    Path(design_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ReviewWithReviewer>>>> {
    // Distinguish "no reviews yet" from "no such design".
    DesignRepo::find_by_id(&state.pool, design_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Design",
            id: design_id,
        }))?;

    let reviews = ReviewRepo::find_by_design_id_with_relations(&state.pool, design_id).await?;
    Ok(Json(DataResponse { data: reviews }))
}

/// GET /api/v1/reviews/{design_id}/technical-sheet
///
/// Generate the production technical sheet for an approved design. Pure
/// projection over persisted state; nothing is stored.
pub async fn technical_sheet(
    RequireDesigner(_auth): RequireDesigner,
    State(state): State<AppState>,
    Path(design_id): Path<DbId>,
) -> AppResult<Json<DataResponse<TechnicalSheet>>> {
    let design = DesignRepo::find_by_id_with_relations(&state.pool, design_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Design",
            id: design_id,
        }))?;

    ensure_sheet_ready(&design.status)?;

    let reviews = ReviewRepo::find_by_design_id(&state.pool, design_id).await?;
    let approving = reviews
        .into_iter()
        .find(|r| r.status == DECISION_APPROVED)
        // An approved design with no approving review on record is data
        // corruption, not caller misuse.
        .ok_or_else(|| {
            AppError::Core(CoreError::InvariantViolation(
                "No approval review found".into(),
            ))
        })?;

    let sheet = TechnicalSheet::assemble(
        design.id,
        approving.created_at,
        ProductSummary {
            id: design.product_id,
            name: design.product_name,
            category: design.product_category,
            base_model: design.product_thumbnail_url.unwrap_or_default(),
        },
        ClientSummary {
            id: design.user_id,
            name: design.user_name,
            email: design.user_email,
        },
        design.color,
        design.image_url,
        design.transforms.0,
        approving.comment,
    );

    Ok(Json(DataResponse { data: sheet }))
}
