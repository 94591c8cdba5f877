//! Repository for the `reviews` table.

use sqlx::PgPool;
use stampa_core::types::DbId;

use crate::models::review::{Review, ReviewWithReviewer};
use crate::repositories::DesignRepo;

/// Column list for reviews queries.
const COLUMNS: &str = "id, design_id, reviewer_id, status, comment, created_at, updated_at";

/// Provides operations for review records. Reviews are append-only: there
/// is no update or delete.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Record a review decision for a pending design.
    ///
    /// Runs in a transaction: flip the design's status behind the
    /// pending-status guard, then insert the review row. Returns
    /// `Ok(None)` -- with nothing written -- when the design was no longer
    /// pending, which is how a losing concurrent reviewer finds out.
    ///
    /// The decision string doubles as the design's new status; both use
    /// the `approved` / `rejected` vocabulary from `stampa_core`.
    pub async fn create_decision(
        pool: &PgPool,
        design_id: DbId,
        reviewer_id: DbId,
        decision: &str,
        comment: Option<&str>,
    ) -> Result<Option<Review>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let transitioned = DesignRepo::transition_status(&mut *tx, design_id, decision).await?;
        if !transitioned {
            tx.rollback().await?;
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO reviews (design_id, reviewer_id, status, comment)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let review = sqlx::query_as::<_, Review>(&query)
            .bind(design_id)
            .bind(reviewer_id)
            .bind(decision)
            .bind(comment)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(review))
    }

    /// Find a review by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all reviews for a design, newest first.
    pub async fn find_by_design_id(
        pool: &PgPool,
        design_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE design_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(design_id)
            .fetch_all(pool)
            .await
    }

    /// List all reviews for a design joined with reviewer summaries,
    /// newest first.
    pub async fn find_by_design_id_with_relations(
        pool: &PgPool,
        design_id: DbId,
    ) -> Result<Vec<ReviewWithReviewer>, sqlx::Error> {
        sqlx::query_as::<_, ReviewWithReviewer>(
            "SELECT r.id, r.design_id, r.reviewer_id, r.status, r.comment,
                    r.created_at, r.updated_at,
                    u.email AS reviewer_email, u.name AS reviewer_name
             FROM reviews r
             INNER JOIN users u ON u.id = r.reviewer_id
             WHERE r.design_id = $1
             ORDER BY r.created_at DESC",
        )
        .bind(design_id)
        .fetch_all(pool)
        .await
    }

    /// List all reviews, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews ORDER BY created_at DESC");
        sqlx::query_as::<_, Review>(&query).fetch_all(pool).await
    }
}
