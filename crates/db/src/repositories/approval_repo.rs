//! The approval orchestrator.
//!
//! Turns a pending request into an approved, stock-decremented,
//! employee-affiliated assignment. Admission checks run first and touch
//! nothing; all mutations happen inside a single transaction, so a failure
//! at any mutation step leaves the system exactly as it was.

use assetflow_core::quota::QuotaUsage;
use assetflow_core::requests::RequestStatus;
use assetflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::assignment::Assignment;
use crate::repositories::{
    AffiliationRepo, AssetRepo, AssignmentRepo, OrganizationRepo, RequestRepo,
};

/// Why an approval was refused (or failed).
#[derive(Debug, thiserror::Error)]
pub enum ApprovalError {
    #[error("Request {0} not found")]
    RequestNotFound(DbId),

    #[error("Asset {0} not found")]
    AssetNotFound(DbId),

    #[error("Asset {asset_id} does not belong to organization {organization_id}")]
    WrongOrganization { asset_id: DbId, organization_id: DbId },

    #[error("Asset {0} is out of stock")]
    StockOut(DbId),

    #[error("Request {0} is already approved")]
    AlreadyApproved(DbId),

    #[error("Employee quota reached: {used} of {max} seats in use")]
    QuotaExceeded { used: i64, max: i64 },

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Sequences the admission checks and mutations of a request approval.
pub struct ApprovalRepo;

impl ApprovalRepo {
    /// Approve `request_id`, granting one unit of `asset_id`.
    ///
    /// Admission checks (read-only, in order): request exists and is still
    /// pending; asset exists, belongs to the request's organization, and has
    /// stock; the requester either already holds an affiliation or the
    /// organization has a free seat. The quota gate is skipped for
    /// already-affiliated requesters since granting them does not grow
    /// headcount.
    ///
    /// Mutations (one transaction): status-guarded approve, conditional
    /// stock decrement, assignment snapshot insert, conditional affiliation
    /// insert with counter increment. The status guard and the decrement
    /// re-check their predicates under row locks, so concurrent approvals of
    /// the same request or the last unit of stock resolve to exactly one
    /// winner.
    pub async fn approve(
        pool: &PgPool,
        request_id: DbId,
        asset_id: DbId,
    ) -> Result<Assignment, ApprovalError> {
        // --- Admission checks: no side effects past this comment until the
        // transaction opens. ---

        let request = RequestRepo::find_by_id(pool, request_id)
            .await?
            .ok_or(ApprovalError::RequestNotFound(request_id))?;

        if request.status == RequestStatus::Approved.as_str() {
            return Err(ApprovalError::AlreadyApproved(request_id));
        }

        let asset = AssetRepo::find_by_id(pool, asset_id)
            .await?
            .ok_or(ApprovalError::AssetNotFound(asset_id))?;

        if asset.organization_id != request.organization_id {
            return Err(ApprovalError::WrongOrganization {
                asset_id,
                organization_id: request.organization_id,
            });
        }

        if asset.quantity <= 0 {
            return Err(ApprovalError::StockOut(asset_id));
        }

        let affiliated =
            AffiliationRepo::exists(pool, request.organization_id, &request.requester_email)
                .await?;

        if !affiliated {
            let max = OrganizationRepo::employee_limit(pool, request.organization_id).await?;
            let used = AffiliationRepo::count_active(pool, request.organization_id).await?;
            let usage = QuotaUsage::new(used, i64::from(max));
            if usage.is_full() {
                return Err(ApprovalError::QuotaExceeded {
                    used: usage.used,
                    max: usage.max,
                });
            }
        }

        // --- Mutations: all or nothing. Early returns drop the transaction
        // and roll back. ---

        let mut tx = pool.begin().await?;

        if !RequestRepo::mark_approved(&mut *tx, request_id, asset_id).await? {
            return Err(ApprovalError::AlreadyApproved(request_id));
        }

        if !AssetRepo::decrement_if_available(&mut *tx, asset_id).await? {
            return Err(ApprovalError::StockOut(asset_id));
        }

        let assignment = AssignmentRepo::insert_snapshot(&mut *tx, request_id, asset_id).await?;

        let inserted = AffiliationRepo::insert_if_absent(
            &mut *tx,
            request.organization_id,
            &request.requester_email,
        )
        .await?;
        if inserted {
            OrganizationRepo::increment_current_employees(&mut *tx, request.organization_id)
                .await?;
        }

        tx.commit().await?;

        tracing::debug!(
            request_id,
            asset_id,
            assignment_id = assignment.id,
            new_affiliation = inserted,
            "approval committed",
        );

        Ok(assignment)
    }
}
