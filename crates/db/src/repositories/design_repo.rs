//! Repository for the `designs` table.

use sqlx::types::Json;
use sqlx::PgPool;
use stampa_core::design::STATUS_PENDING;
use stampa_core::transform::Transforms;
use stampa_core::types::DbId;

use crate::models::design::{CreateDesign, Design, DesignFilter, DesignWithRelations, UpdateDesign};

/// Column list for designs queries.
const COLUMNS: &str =
    "id, user_id, product_id, color, image_url, transforms, status, created_at, updated_at";

/// Column list for designs joined with owner and product summaries.
const RELATION_COLUMNS: &str = "d.id, d.user_id, d.product_id, d.color, d.image_url, \
    d.transforms, d.status, d.created_at, d.updated_at, \
    u.email AS user_email, u.name AS user_name, \
    p.name AS product_name, p.category AS product_category, \
    p.thumbnail_url AS product_thumbnail_url";

/// Provides CRUD operations for designs.
pub struct DesignRepo;

impl DesignRepo {
    /// Insert a new design for `user_id`. Status always starts `pending`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateDesign,
    ) -> Result<Design, sqlx::Error> {
        let query = format!(
            "INSERT INTO designs (user_id, product_id, color, image_url, transforms)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Design>(&query)
            .bind(user_id)
            .bind(input.product_id)
            .bind(&input.color)
            .bind(&input.image_url)
            .bind(Json(&input.transforms))
            .fetch_one(pool)
            .await
    }

    /// Find a design by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Design>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM designs WHERE id = $1");
        sqlx::query_as::<_, Design>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a design joined with its owner and product summaries.
    pub async fn find_by_id_with_relations(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DesignWithRelations>, sqlx::Error> {
        let query = format!(
            "SELECT {RELATION_COLUMNS}
             FROM designs d
             INNER JOIN users u ON u.id = d.user_id
             INNER JOIN products p ON p.id = d.product_id
             WHERE d.id = $1"
        );
        sqlx::query_as::<_, DesignWithRelations>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List designs matching the filter (with relations), newest first.
    ///
    /// `NULL` filter fields match everything.
    pub async fn list_with_relations(
        pool: &PgPool,
        filter: &DesignFilter,
    ) -> Result<Vec<DesignWithRelations>, sqlx::Error> {
        let query = format!(
            "SELECT {RELATION_COLUMNS}
             FROM designs d
             INNER JOIN users u ON u.id = d.user_id
             INNER JOIN products p ON p.id = d.product_id
             WHERE ($1::bigint IS NULL OR d.user_id = $1)
               AND ($2::bigint IS NULL OR d.product_id = $2)
               AND ($3::text IS NULL OR d.status = $3)
               AND ($4::timestamptz IS NULL OR d.created_at >= $4)
               AND ($5::timestamptz IS NULL OR d.created_at <= $5)
             ORDER BY d.created_at DESC"
        );
        sqlx::query_as::<_, DesignWithRelations>(&query)
            .bind(filter.user_id)
            .bind(filter.product_id)
            .bind(&filter.status)
            .bind(filter.date_from)
            .bind(filter.date_to)
            .fetch_all(pool)
            .await
    }

    /// Update a design's client-editable fields. Returns the updated row,
    /// or `None` if not found.
    ///
    /// `status` is deliberately not written here; transitions go through
    /// [`crate::repositories::ReviewRepo::create_decision`].
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDesign,
    ) -> Result<Option<Design>, sqlx::Error> {
        let query = format!(
            "UPDATE designs SET
                color = COALESCE($1, color),
                image_url = COALESCE($2, image_url),
                transforms = COALESCE($3, transforms)
             WHERE id = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Design>(&query)
            .bind(&input.color)
            .bind(&input.image_url)
            .bind(input.transforms.as_ref().map(Json))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Conditionally move a pending design into a terminal status.
    ///
    /// The `WHERE status = 'pending'` guard makes the check-then-set
    /// atomic: a concurrent reviewer that loses the race observes `false`
    /// and can report the design as already reviewed. Accepts an executor
    /// so the review workflow can run it inside its transaction.
    pub async fn transition_status<'e, E>(
        executor: E,
        id: DbId,
        to_status: &str,
    ) -> Result<bool, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = sqlx::Postgres>,
    {
        let result = sqlx::query("UPDATE designs SET status = $1 WHERE id = $2 AND status = $3")
            .bind(to_status)
            .bind(id)
            .bind(STATUS_PENDING)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a design by ID.
    ///
    /// Returns `true` if a row was deleted. Reviews cascade with it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM designs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
