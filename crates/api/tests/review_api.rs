//! HTTP-level integration tests for the review workflow: approve, reject,
//! the terminal-state guard, RBAC enforcement, and technical sheet
//! generation.

mod common;

use axum::http::StatusCode;
use common::{
    expect_status, get_auth, post_json_auth, seed_design, seed_product, seed_user,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Approve
// ---------------------------------------------------------------------------

/// Approving a pending design returns 201 with the review and flips the
/// design's status.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_approve_pending_design(pool: PgPool) {
    let (client_id, client_token) = seed_user(&pool, "client@test.com", "client").await;
    let (designer_id, designer_token) = seed_user(&pool, "designer@test.com", "designer").await;
    let product_id = seed_product(&pool, &["white"]).await;
    let design_id = seed_design(&pool, client_id, product_id).await;
    let app = common::build_test_app(pool).await;

    let response = post_json_auth(
        &app,
        &format!("/api/v1/reviews/{design_id}/approve"),
        serde_json::json!({ "comment": "Great placement" }),
        &designer_token,
    )
    .await;
    let json = expect_status(response, StatusCode::CREATED).await;

    assert_eq!(json["data"]["design_id"], design_id);
    assert_eq!(json["data"]["reviewer_id"], designer_id);
    assert_eq!(json["data"]["status"], "approved");
    assert_eq!(json["data"]["comment"], "Great placement");

    // The owner sees the new status.
    let response = get_auth(&app, &format!("/api/v1/designs/{design_id}"), &client_token).await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "approved");
}

/// Approval works without a comment.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_approve_without_comment(pool: PgPool) {
    let (client_id, _) = seed_user(&pool, "client@test.com", "client").await;
    let (_, designer_token) = seed_user(&pool, "designer@test.com", "designer").await;
    let product_id = seed_product(&pool, &["white"]).await;
    let design_id = seed_design(&pool, client_id, product_id).await;
    let app = common::build_test_app(pool).await;

    let response = post_json_auth(
        &app,
        &format!("/api/v1/reviews/{design_id}/approve"),
        serde_json::json!({}),
        &designer_token,
    )
    .await;
    let json = expect_status(response, StatusCode::CREATED).await;
    assert!(json["data"]["comment"].is_null());
}

/// Clients may not invoke review operations, not even on their own designs.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_client_cannot_approve(pool: PgPool) {
    let (client_id, client_token) = seed_user(&pool, "client@test.com", "client").await;
    let product_id = seed_product(&pool, &["white"]).await;
    let design_id = seed_design(&pool, client_id, product_id).await;
    let app = common::build_test_app(pool).await;

    let response = post_json_auth(
        &app,
        &format!("/api/v1/reviews/{design_id}/approve"),
        serde_json::json!({}),
        &client_token,
    )
    .await;
    let json = expect_status(response, StatusCode::FORBIDDEN).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

/// Approving a missing design returns 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_approve_missing_design(pool: PgPool) {
    let (_, designer_token) = seed_user(&pool, "designer@test.com", "designer").await;
    let app = common::build_test_app(pool).await;

    let response = post_json_auth(
        &app,
        "/api/v1/reviews/9999/approve",
        serde_json::json!({}),
        &designer_token,
    )
    .await;
    expect_status(response, StatusCode::NOT_FOUND).await;
}

// ---------------------------------------------------------------------------
// Reject
// ---------------------------------------------------------------------------

/// Rejection records the mandatory comment and flips the status.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reject_with_comment(pool: PgPool) {
    let (client_id, client_token) = seed_user(&pool, "client@test.com", "client").await;
    let (_, designer_token) = seed_user(&pool, "designer@test.com", "designer").await;
    let product_id = seed_product(&pool, &["white"]).await;
    let design_id = seed_design(&pool, client_id, product_id).await;
    let app = common::build_test_app(pool).await;

    let response = post_json_auth(
        &app,
        &format!("/api/v1/reviews/{design_id}/reject"),
        serde_json::json!({ "comment": "Image resolution too low" }),
        &designer_token,
    )
    .await;
    let json = expect_status(response, StatusCode::CREATED).await;
    assert_eq!(json["data"]["status"], "rejected");
    assert_eq!(json["data"]["comment"], "Image resolution too low");

    let response = get_auth(&app, &format!("/api/v1/designs/{design_id}"), &client_token).await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "rejected");
}

/// Rejection without a comment fails validation and leaves the design
/// pending with no review recorded.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reject_without_comment_mutates_nothing(pool: PgPool) {
    let (client_id, _) = seed_user(&pool, "client@test.com", "client").await;
    let (_, designer_token) = seed_user(&pool, "designer@test.com", "designer").await;
    let product_id = seed_product(&pool, &["white"]).await;
    let design_id = seed_design(&pool, client_id, product_id).await;
    let app = common::build_test_app(pool).await;

    for body in [serde_json::json!({}), serde_json::json!({ "comment": "" })] {
        let response = post_json_auth(
            &app,
            &format!("/api/v1/reviews/{design_id}/reject"),
            body,
            &designer_token,
        )
        .await;
        let json = expect_status(response, StatusCode::BAD_REQUEST).await;
        assert_eq!(json["error"], "Comment is required for rejection");
    }

    // Status untouched, no review rows.
    let response = get_auth(&app, &format!("/api/v1/reviews/{design_id}"), &designer_token).await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Terminal-state guard
// ---------------------------------------------------------------------------

/// A second decision on the same design fails with INVALID_STATE, in either
/// direction.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_decision_conflicts(pool: PgPool) {
    let (client_id, _) = seed_user(&pool, "client@test.com", "client").await;
    let (_, designer_token) = seed_user(&pool, "designer@test.com", "designer").await;
    let product_id = seed_product(&pool, &["white"]).await;
    let design_id = seed_design(&pool, client_id, product_id).await;
    let app = common::build_test_app(pool).await;

    let response = post_json_auth(
        &app,
        &format!("/api/v1/reviews/{design_id}/approve"),
        serde_json::json!({}),
        &designer_token,
    )
    .await;
    expect_status(response, StatusCode::CREATED).await;

    for uri in [
        format!("/api/v1/reviews/{design_id}/approve"),
        format!("/api/v1/reviews/{design_id}/reject"),
    ] {
        let response = post_json_auth(
            &app,
            &uri,
            serde_json::json!({ "comment": "second thoughts" }),
            &designer_token,
        )
        .await;
        let json = expect_status(response, StatusCode::CONFLICT).await;
        assert_eq!(json["code"], "INVALID_STATE");
        assert_eq!(json["error"], "Only pending designs can be reviewed");
    }
}

// ---------------------------------------------------------------------------
// Technical sheet
// ---------------------------------------------------------------------------

/// The full happy path: approve, then generate a sheet whose print area is
/// linear in the stamp scale (base 30x40, scale 2x1 -> 60x40).
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_technical_sheet_after_approval(pool: PgPool) {
    let (client_id, _) = seed_user(&pool, "client@test.com", "client").await;
    let (_, designer_token) = seed_user(&pool, "designer@test.com", "designer").await;
    let product_id = seed_product(&pool, &["white"]).await;
    let design_id = seed_design(&pool, client_id, product_id).await;
    let app = common::build_test_app(pool).await;

    let response = post_json_auth(
        &app,
        &format!("/api/v1/reviews/{design_id}/approve"),
        serde_json::json!({ "comment": "Ship it" }),
        &designer_token,
    )
    .await;
    expect_status(response, StatusCode::CREATED).await;

    let response = get_auth(
        &app,
        &format!("/api/v1/reviews/{design_id}/technical-sheet"),
        &designer_token,
    )
    .await;
    let json = expect_status(response, StatusCode::OK).await;
    let sheet = &json["data"];

    assert_eq!(sheet["design_id"], design_id);
    assert_eq!(sheet["product"]["id"], product_id);
    assert_eq!(sheet["product"]["name"], "Basic Tee");
    assert_eq!(sheet["product"]["base_model"], "/thumbnails/tee-basic.jpg");
    assert_eq!(sheet["client"]["id"], client_id);
    assert_eq!(sheet["client"]["email"], "client@test.com");

    let specs = &sheet["specifications"];
    assert_eq!(specs["color"], "white");
    assert_eq!(specs["print_area"]["width"], 60.0);
    assert_eq!(specs["print_area"]["height"], 40.0);
    assert_eq!(specs["print_area"]["position"], "center-front");
    // The stamp placement is echoed exactly.
    assert_eq!(specs["transforms"]["scale"]["x"], 2.0);
    assert_eq!(specs["transforms"]["position"]["z"], -2.3);

    assert_eq!(sheet["production"]["estimated_quantity"], 1);
    assert_eq!(sheet["production"]["notes"], "Ship it");
}

/// A pending design has no technical sheet.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_technical_sheet_requires_approval(pool: PgPool) {
    let (client_id, _) = seed_user(&pool, "client@test.com", "client").await;
    let (_, designer_token) = seed_user(&pool, "designer@test.com", "designer").await;
    let product_id = seed_product(&pool, &["white"]).await;
    let design_id = seed_design(&pool, client_id, product_id).await;
    let app = common::build_test_app(pool).await;

    let response = get_auth(
        &app,
        &format!("/api/v1/reviews/{design_id}/technical-sheet"),
        &designer_token,
    )
    .await;
    let json = expect_status(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "INVALID_STATE");
    assert_eq!(
        json["error"],
        "Only approved designs can generate technical sheets"
    );
}

/// An approved design with no approving review row is a data-integrity
/// failure, surfaced as a 500.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_technical_sheet_invariant_violation(pool: PgPool) {
    let (client_id, _) = seed_user(&pool, "client@test.com", "client").await;
    let (_, designer_token) = seed_user(&pool, "designer@test.com", "designer").await;
    let product_id = seed_product(&pool, &["white"]).await;
    let design_id = seed_design(&pool, client_id, product_id).await;

    // Corrupt the state deliberately: approved with no review row.
    sqlx::query("UPDATE designs SET status = 'approved' WHERE id = $1")
        .bind(design_id)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool).await;

    let response = get_auth(
        &app,
        &format!("/api/v1/reviews/{design_id}/technical-sheet"),
        &designer_token,
    )
    .await;
    let json = expect_status(response, StatusCode::INTERNAL_SERVER_ERROR).await;
    assert_eq!(json["code"], "INVARIANT_VIOLATION");
    assert_eq!(json["error"], "No approval review found");
}

// ---------------------------------------------------------------------------
// Review history
// ---------------------------------------------------------------------------

/// The review list carries reviewer summaries.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_review_history(pool: PgPool) {
    let (client_id, _) = seed_user(&pool, "client@test.com", "client").await;
    let (designer_id, designer_token) = seed_user(&pool, "designer@test.com", "designer").await;
    let product_id = seed_product(&pool, &["white"]).await;
    let design_id = seed_design(&pool, client_id, product_id).await;
    let app = common::build_test_app(pool).await;

    let response = post_json_auth(
        &app,
        &format!("/api/v1/reviews/{design_id}/approve"),
        serde_json::json!({}),
        &designer_token,
    )
    .await;
    expect_status(response, StatusCode::CREATED).await;

    let response = get_auth(&app, &format!("/api/v1/reviews/{design_id}"), &designer_token).await;
    let json = expect_status(response, StatusCode::OK).await;
    let reviews = json["data"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["reviewer_id"], designer_id);
    assert_eq!(reviews[0]["reviewer_email"], "designer@test.com");
}
