//! Repository for the `users` profile table.

use sqlx::PgPool;

use crate::models::user::{UpsertProfile, User};

const USER_COLUMNS: &str = "id, email, full_name, photo_url, created_at, updated_at";

/// Provides profile upsert and lookup.
pub struct UserRepo;

impl UserRepo {
    /// Create or replace the profile for an email.
    pub async fn upsert(
        pool: &PgPool,
        email: &str,
        input: &UpsertProfile,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, full_name, photo_url) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_users_email \
             DO UPDATE SET full_name = EXCLUDED.full_name, photo_url = EXCLUDED.photo_url \
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(&input.full_name)
            .bind(input.photo_url.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Find a profile by email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
