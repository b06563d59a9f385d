//! Repository for the `assignments` table.

use assetflow_core::assignments::ASSIGNMENT_ASSIGNED;
use assetflow_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::assignment::Assignment;
use crate::repositories::{clamp_limit, clamp_offset};

/// Column list for `assignments` queries.
const ASSIGNMENT_COLUMNS: &str = "\
    id, request_id, asset_id, organization_id, employee_email, employee_name, \
    asset_name, asset_image, asset_type, status, assigned_at, return_date, \
    created_at, updated_at";

/// Provides assignment creation and per-employee history.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Record an assignment, snapshotting the asset and requester fields as
    /// they stand inside the approval transaction.
    ///
    /// `uq_assignments_request` turns a duplicate approval race into a
    /// unique violation instead of a second assignment row.
    pub async fn insert_snapshot<'e>(
        executor: impl PgExecutor<'e>,
        request_id: DbId,
        asset_id: DbId,
    ) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO assignments (\
                request_id, asset_id, organization_id, employee_email, employee_name, \
                asset_name, asset_image, asset_type, status\
             ) \
             SELECT r.id, a.id, r.organization_id, r.requester_email, r.requester_name, \
                    a.name, a.image_url, a.asset_type, $3 \
             FROM requests r, assets a \
             WHERE r.id = $1 AND a.id = $2 \
             RETURNING {ASSIGNMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(request_id)
            .bind(asset_id)
            .bind(ASSIGNMENT_ASSIGNED)
            .fetch_one(executor)
            .await
    }

    /// Find the assignment created for a request, if any.
    pub async fn find_by_request(
        pool: &PgPool,
        request_id: DbId,
    ) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!("SELECT {ASSIGNMENT_COLUMNS} FROM assignments WHERE request_id = $1");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(request_id)
            .fetch_optional(pool)
            .await
    }

    /// List an employee's assignments, newest first, with pagination.
    pub async fn list_by_employee(
        pool: &PgPool,
        employee_email: &str,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Assignment>, sqlx::Error> {
        let limit = clamp_limit(limit);
        let offset = clamp_offset(offset);

        let query = format!(
            "SELECT {ASSIGNMENT_COLUMNS} FROM assignments \
             WHERE employee_email = $1 \
             ORDER BY assigned_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(employee_email)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count an employee's assignments.
    pub async fn count_by_employee(
        pool: &PgPool,
        employee_email: &str,
    ) -> Result<i64, sqlx::Error> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM assignments WHERE employee_email = $1")
                .bind(employee_email)
                .fetch_one(pool)
                .await?;
        Ok(count.0)
    }
}
