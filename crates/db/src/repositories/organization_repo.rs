//! Repository for the `organizations` table.

use assetflow_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::organization::{CreateOrganization, Organization};

/// Column list for `organizations` queries.
const ORG_COLUMNS: &str = "\
    id, hr_email, company_name, company_logo, \
    employee_limit, current_employees, \
    created_at, updated_at";

/// Provides CRUD operations for organizations.
pub struct OrganizationRepo;

impl OrganizationRepo {
    /// Register a new organization for an HR account.
    ///
    /// Fails with a unique violation on `uq_organizations_hr_email` when the
    /// account already owns one.
    pub async fn create(
        pool: &PgPool,
        hr_email: &str,
        input: &CreateOrganization,
        employee_limit: i32,
    ) -> Result<Organization, sqlx::Error> {
        let query = format!(
            "INSERT INTO organizations (hr_email, company_name, company_logo, employee_limit) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {ORG_COLUMNS}"
        );
        sqlx::query_as::<_, Organization>(&query)
            .bind(hr_email)
            .bind(&input.company_name)
            .bind(input.company_logo.as_deref())
            .bind(employee_limit)
            .fetch_one(pool)
            .await
    }

    /// Find an organization by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!("SELECT {ORG_COLUMNS} FROM organizations WHERE id = $1");
        sqlx::query_as::<_, Organization>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an organization by its HR account email.
    pub async fn find_by_hr_email(
        pool: &PgPool,
        hr_email: &str,
    ) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!("SELECT {ORG_COLUMNS} FROM organizations WHERE hr_email = $1");
        sqlx::query_as::<_, Organization>(&query)
            .bind(hr_email)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the configured seat limit. Errors with `RowNotFound` if the
    /// organization has vanished.
    pub async fn employee_limit(pool: &PgPool, id: DbId) -> Result<i32, sqlx::Error> {
        let row: (i32,) = sqlx::query_as("SELECT employee_limit FROM organizations WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Bump the denormalized active-employee counter by one.
    ///
    /// Called inside the approval transaction, only when a new affiliation
    /// row was actually inserted.
    pub async fn increment_current_employees<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE organizations SET current_employees = current_employees + 1 WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }
}
