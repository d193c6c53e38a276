use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::vault::repo::CredentialEntry;

/// User record in the database. One row holds the whole account document,
/// including the embedded credential sequence.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 hash, not exposed in JSON
    #[serde(rename = "savedPasswords")]
    pub saved_credentials: Json<Vec<CredentialEntry>>,
    pub created_at: OffsetDateTime,
}

impl User {
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, saved_credentials, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, saved_credentials, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user with an empty credential sequence. Returns the raw
    /// sqlx error so callers can detect a unique-index violation on email.
    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, saved_credentials, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }

    /// Persist the whole credential sequence back onto the user row. Every
    /// vault mutation goes through here; last write wins at the row level.
    pub async fn save_credentials(
        db: &PgPool,
        user_id: Uuid,
        entries: &[CredentialEntry],
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET saved_credentials = $1
            WHERE id = $2
            "#,
        )
        .bind(Json(entries))
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(())
    }
}
