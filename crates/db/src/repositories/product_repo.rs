//! Repository for the `products` table.

use sqlx::PgPool;
use stampa_core::types::DbId;

use crate::models::product::{CreateProduct, Product, ProductFilter, UpdateProduct};

/// Column list for products queries.
const COLUMNS: &str = "id, name, category, base_model_url, available_colors, \
    price_cents, thumbnail_url, description, is_active, created_at, updated_at";

/// Provides CRUD operations for the product catalog.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products
                (name, category, base_model_url, available_colors,
                 price_cents, thumbnail_url, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.base_model_url)
            .bind(&input.available_colors)
            .bind(input.price_cents)
            .bind(&input.thumbnail_url)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List products matching the filter, newest first.
    ///
    /// `NULL` filter fields match everything, so a default filter lists the
    /// whole catalog.
    pub async fn list(pool: &PgPool, filter: &ProductFilter) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE ($1::text IS NULL OR category = $1)
               AND ($2::boolean IS NULL OR is_active = $2)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&filter.category)
            .bind(filter.active)
            .fetch_all(pool)
            .await
    }

    /// Update a product. Returns the updated row, or `None` if not found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = COALESCE($1, name),
                category = COALESCE($2, category),
                base_model_url = COALESCE($3, base_model_url),
                available_colors = COALESCE($4, available_colors),
                price_cents = COALESCE($5, price_cents),
                thumbnail_url = COALESCE($6, thumbnail_url),
                description = COALESCE($7, description),
                is_active = COALESCE($8, is_active)
             WHERE id = $9
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.base_model_url)
            .bind(&input.available_colors)
            .bind(input.price_cents)
            .bind(&input.thumbnail_url)
            .bind(&input.description)
            .bind(input.is_active)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-deactivate a product by setting `is_active = false`.
    ///
    /// Existing designs keep their FK; the product just leaves the public
    /// catalog. Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE products SET is_active = false WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
