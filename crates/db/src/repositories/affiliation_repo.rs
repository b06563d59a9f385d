//! Repository for the `affiliations` membership registry.

use assetflow_core::affiliations::AFFILIATION_ACTIVE;
use assetflow_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

/// Provides existence checks, conditional inserts, and active counts over
/// the affiliation registry. There is no update or delete operation.
pub struct AffiliationRepo;

impl AffiliationRepo {
    /// Whether any affiliation (active or not) exists for the pair.
    pub async fn exists(
        pool: &PgPool,
        organization_id: DbId,
        employee_email: &str,
    ) -> Result<bool, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM affiliations \
             WHERE organization_id = $1 AND employee_email = $2",
        )
        .bind(organization_id)
        .bind(employee_email)
        .fetch_one(pool)
        .await?;
        Ok(count.0 > 0)
    }

    /// Insert an active affiliation unless one already exists for the pair.
    ///
    /// Returns `true` only when a row was actually inserted, so the caller
    /// can tie the organization counter increment to real growth. Under
    /// concurrent duplicate inserts the unique constraint guarantees exactly
    /// one row and exactly one `true`.
    pub async fn insert_if_absent<'e>(
        executor: impl PgExecutor<'e>,
        organization_id: DbId,
        employee_email: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO affiliations (organization_id, employee_email, status) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_affiliations_org_employee DO NOTHING",
        )
        .bind(organization_id)
        .bind(employee_email)
        .bind(AFFILIATION_ACTIVE)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Live count of active affiliations for an organization.
    ///
    /// Feeds quota enforcement; computed fresh on every call since the
    /// registry mutates concurrently with reads.
    pub async fn count_active(pool: &PgPool, organization_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM affiliations WHERE organization_id = $1 AND status = $2",
        )
        .bind(organization_id)
        .bind(AFFILIATION_ACTIVE)
        .fetch_one(pool)
        .await?;
        Ok(count.0)
    }
}
