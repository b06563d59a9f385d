//! Repository for the `packages` reference table.

use assetflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::package::Package;

const PACKAGE_COLUMNS: &str = "id, name, employee_limit, price_cents, created_at, updated_at";

/// Read-only access to the seeded subscription packages.
pub struct PackageRepo;

impl PackageRepo {
    /// List all packages, cheapest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Package>, sqlx::Error> {
        let query = format!("SELECT {PACKAGE_COLUMNS} FROM packages ORDER BY price_cents");
        sqlx::query_as::<_, Package>(&query).fetch_all(pool).await
    }

    /// Find a package by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Package>, sqlx::Error> {
        let query = format!("SELECT {PACKAGE_COLUMNS} FROM packages WHERE id = $1");
        sqlx::query_as::<_, Package>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
