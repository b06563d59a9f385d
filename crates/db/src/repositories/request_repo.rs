//! Repository for the `requests` table.

use assetflow_core::requests::RequestStatus;
use assetflow_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::request::{CreateRequest, Request, UpdateRequest};
use crate::repositories::{clamp_limit, clamp_offset};

/// Column list for `requests` queries.
const REQUEST_COLUMNS: &str = "\
    id, organization_id, requester_email, requester_name, asset_id, note, \
    status, requested_at, approved_at, created_at, updated_at";

/// Provides request lifecycle storage operations.
pub struct RequestRepo;

impl RequestRepo {
    /// File a new pending request.
    pub async fn create(
        pool: &PgPool,
        requester_email: &str,
        input: &CreateRequest,
    ) -> Result<Request, sqlx::Error> {
        let query = format!(
            "INSERT INTO requests (organization_id, requester_email, requester_name, asset_id, note, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {REQUEST_COLUMNS}"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(input.organization_id)
            .bind(requester_email)
            .bind(&input.requester_name)
            .bind(input.asset_id)
            .bind(input.note.as_deref())
            .bind(RequestStatus::Pending.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a request by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Request>, sqlx::Error> {
        let query = format!("SELECT {REQUEST_COLUMNS} FROM requests WHERE id = $1");
        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an organization's pending requests, oldest first, with
    /// pagination.
    pub async fn list_pending_by_organization(
        pool: &PgPool,
        organization_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Request>, sqlx::Error> {
        let limit = clamp_limit(limit);
        let offset = clamp_offset(offset);

        let query = format!(
            "SELECT {REQUEST_COLUMNS} FROM requests \
             WHERE organization_id = $1 AND status = $2 \
             ORDER BY requested_at, id \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(organization_id)
            .bind(RequestStatus::Pending.as_str())
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count an organization's pending requests.
    pub async fn count_pending_by_organization(
        pool: &PgPool,
        organization_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM requests WHERE organization_id = $1 AND status = $2",
        )
        .bind(organization_id)
        .bind(RequestStatus::Pending.as_str())
        .fetch_one(pool)
        .await?;
        Ok(count.0)
    }

    /// Patch descriptive request fields. `status` is deliberately not
    /// updatable here; lifecycle transitions go through [`mark_approved`].
    ///
    /// [`mark_approved`]: RequestRepo::mark_approved
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRequest,
    ) -> Result<Option<Request>, sqlx::Error> {
        let query = format!(
            "UPDATE requests SET \
                requester_name = COALESCE($2, requester_name), \
                note = COALESCE($3, note), \
                asset_id = COALESCE($4, asset_id) \
             WHERE id = $1 \
             RETURNING {REQUEST_COLUMNS}"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .bind(input.requester_name.as_deref())
            .bind(input.note.as_deref())
            .bind(input.asset_id)
            .fetch_optional(pool)
            .await
    }

    /// Transition `pending -> approved`, recording the granted asset and the
    /// approval time.
    ///
    /// The status guard in the WHERE clause makes the transition a one-shot:
    /// a concurrent second approval affects zero rows and reports `false`.
    pub async fn mark_approved<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        asset_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE requests SET status = $3, asset_id = $2, approved_at = now() \
             WHERE id = $1 AND status = $4",
        )
        .bind(id)
        .bind(asset_id)
        .bind(RequestStatus::Approved.as_str())
        .bind(RequestStatus::Pending.as_str())
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
