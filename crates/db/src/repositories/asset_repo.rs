//! Repository for the `assets` inventory table.

use assetflow_core::assets::TYPE_RETURNABLE;
use assetflow_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::asset::{Asset, CreateAsset, UpdateAsset};
use crate::repositories::{clamp_limit, clamp_offset};

/// Column list for `assets` queries.
const ASSET_COLUMNS: &str = "\
    id, organization_id, name, image_url, asset_type, quantity, \
    created_at, updated_at";

/// Provides CRUD and stock operations for the asset inventory.
pub struct AssetRepo;

impl AssetRepo {
    /// Register a new asset for an organization.
    pub async fn create(
        pool: &PgPool,
        organization_id: DbId,
        input: &CreateAsset,
    ) -> Result<Asset, sqlx::Error> {
        let asset_type = input.asset_type.as_deref().unwrap_or(TYPE_RETURNABLE);

        let query = format!(
            "INSERT INTO assets (organization_id, name, image_url, asset_type, quantity) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(organization_id)
            .bind(&input.name)
            .bind(input.image_url.as_deref())
            .bind(asset_type)
            .bind(input.quantity)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an organization's assets, newest first, with pagination.
    pub async fn list_by_organization(
        pool: &PgPool,
        organization_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let limit = clamp_limit(limit);
        let offset = clamp_offset(offset);

        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM assets \
             WHERE organization_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(organization_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count an organization's assets (for page computation).
    pub async fn count_by_organization(
        pool: &PgPool,
        organization_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM assets WHERE organization_id = $1")
            .bind(organization_id)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// Update an existing asset. Returns the updated row, or `None` if not
    /// found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAsset,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET \
                name = COALESCE($2, name), \
                image_url = COALESCE($3, image_url), \
                asset_type = COALESCE($4, asset_type), \
                quantity = COALESCE($5, quantity) \
             WHERE id = $1 \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.image_url.as_deref())
            .bind(input.asset_type.as_deref())
            .bind(input.quantity)
            .fetch_optional(pool)
            .await
    }

    /// Delete an asset by ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Take one unit of stock if any remains.
    ///
    /// The predicate and the decrement are a single statement, so two
    /// concurrent approvals of the last unit cannot both succeed: the loser
    /// re-evaluates `quantity > 0` after the winner's lock is released and
    /// affects zero rows. A `false` return means stock-out.
    pub async fn decrement_if_available<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE assets SET quantity = quantity - 1 WHERE id = $1 AND quantity > 0")
                .bind(id)
                .execute(executor)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
