//! Repository for the `users` table.

use sqlx::{PgConnection, PgPool};

use crate::models::user::{CreateUser, User, UserListParams, USER_TYPE_VENDOR};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, user_type, created_at, updated_at";

/// Provides CRUD operations and owner-existence checks for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Fails with a unique violation on `uq_users_email` if the email is
    /// already registered.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, name, email, user_type)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(uuid::Uuid::now_v7())
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.user_type)
            .fetch_one(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List users ordered by most recently created first, optionally
    /// filtered by user type.
    pub async fn list(pool: &PgPool, params: &UserListParams) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             WHERE ($1::TEXT IS NULL OR user_type = $1)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&params.user_type)
            .fetch_all(pool)
            .await
    }

    /// True if any user exists with the given email.
    ///
    /// Takes a bare connection so vendor-scoped repositories can run the
    /// check inside the same transaction as their mutation.
    pub async fn exists_by_email(
        conn: &mut PgConnection,
        email: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(conn)
            .await
    }

    /// True if a "Vendor"-typed user exists with the given email.
    pub async fn vendor_exists(conn: &mut PgConnection, email: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE email = $1 AND user_type = $2)",
        )
        .bind(email)
        .bind(USER_TYPE_VENDOR)
        .fetch_one(conn)
        .await
    }
}
