//! Read-only roster and team aggregation queries.
//!
//! These join the affiliation registry with profiles and assignment history.
//! Profiles are outer-joined: an employee with no `users` row produces a row
//! with null profile fields, never a failed row.

use assetflow_core::affiliations::AFFILIATION_ACTIVE;
use assetflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::roster::{RosterEntry, TeamGroup, TeamMember, TeamRow};

/// Read-only multi-table views over affiliations, assignments, and profiles.
pub struct RosterRepo;

impl RosterRepo {
    /// List an organization's active employees with profile photo, first
    /// assignment date, and assigned-asset count.
    pub async fn organization_roster(
        pool: &PgPool,
        organization_id: DbId,
    ) -> Result<Vec<RosterEntry>, sqlx::Error> {
        sqlx::query_as::<_, RosterEntry>(
            "SELECT \
                af.employee_email, \
                u.full_name, \
                u.photo_url, \
                MIN(asg.assigned_at) AS joined_at, \
                COUNT(asg.id) AS asset_count \
             FROM affiliations af \
             LEFT JOIN users u ON u.email = af.employee_email \
             LEFT JOIN assignments asg \
                ON asg.employee_email = af.employee_email \
               AND asg.organization_id = af.organization_id \
             WHERE af.organization_id = $1 AND af.status = $2 \
             GROUP BY af.employee_email, u.full_name, u.photo_url \
             ORDER BY af.employee_email",
        )
        .bind(organization_id)
        .bind(AFFILIATION_ACTIVE)
        .fetch_all(pool)
        .await
    }

    /// Hierarchical team view for an employee: every organization they are
    /// actively affiliated with, each carrying its other active members
    /// joined with profile data.
    pub async fn my_team(
        pool: &PgPool,
        employee_email: &str,
    ) -> Result<Vec<TeamGroup>, sqlx::Error> {
        let rows = sqlx::query_as::<_, TeamRow>(
            "SELECT \
                o.id AS organization_id, \
                o.company_name, \
                o.company_logo, \
                teammate.employee_email, \
                u.full_name, \
                u.photo_url \
             FROM affiliations mine \
             JOIN affiliations teammate \
                ON teammate.organization_id = mine.organization_id \
               AND teammate.status = $2 \
               AND teammate.employee_email <> mine.employee_email \
             JOIN organizations o ON o.id = mine.organization_id \
             LEFT JOIN users u ON u.email = teammate.employee_email \
             WHERE mine.employee_email = $1 AND mine.status = $2 \
             ORDER BY o.id, teammate.employee_email",
        )
        .bind(employee_email)
        .bind(AFFILIATION_ACTIVE)
        .fetch_all(pool)
        .await?;

        Ok(group_team_rows(rows))
    }
}

/// Fold the flat (organization, teammate) rows into per-organization groups.
/// Rows arrive ordered by organization id.
fn group_team_rows(rows: Vec<TeamRow>) -> Vec<TeamGroup> {
    let mut groups: Vec<TeamGroup> = Vec::new();

    for row in rows {
        let member = TeamMember {
            employee_email: row.employee_email,
            full_name: row.full_name,
            photo_url: row.photo_url,
        };

        match groups.last_mut() {
            Some(group) if group.organization_id == row.organization_id => {
                group.members.push(member);
            }
            _ => groups.push(TeamGroup {
                organization_id: row.organization_id,
                company_name: row.company_name,
                company_logo: row.company_logo,
                members: vec![member],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(org: i64, email: &str) -> TeamRow {
        TeamRow {
            organization_id: org,
            company_name: format!("Org {org}"),
            company_logo: None,
            employee_email: email.to_string(),
            full_name: None,
            photo_url: None,
        }
    }

    #[test]
    fn test_grouping_preserves_org_order() {
        let groups = group_team_rows(vec![
            row(1, "a@example.com"),
            row(1, "b@example.com"),
            row(2, "c@example.com"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].organization_id, 1);
        assert_eq!(groups[0].members.len(), 2);
        assert_eq!(groups[1].organization_id, 2);
        assert_eq!(groups[1].members.len(), 1);
    }

    #[test]
    fn test_grouping_empty() {
        assert!(group_team_rows(Vec::new()).is_empty());
    }
}
