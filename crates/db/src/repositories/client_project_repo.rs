//! Repository for the `client_projects` table (vendor work orders).
//!
//! Creation re-resolves both the vendor and client users inside the insert
//! transaction, so a work order can never be created against an owner that
//! was deleted concurrently. Update and delete are scoped to the stored
//! `client_email`.

use sqlx::PgPool;
use stafflink_core::types::DbId;

use crate::error::RepoError;
use crate::models::client_project::{
    ClientProject, ClientProjectListParams, CreateClientProject, UpdateClientProject,
};
use crate::repositories::UserRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, vendor_email, client_email, budget, deadline, \
                       status, assigned_employees, created_at, updated_at";

/// Provides CRUD operations for client work orders.
pub struct ClientProjectRepo;

impl ClientProjectRepo {
    /// Insert a new work order, returning the created row.
    ///
    /// Both `vendor_email` and `client_email` must resolve to existing
    /// users; the checks run in the same transaction as the insert.
    pub async fn create(
        pool: &PgPool,
        input: &CreateClientProject,
    ) -> Result<ClientProject, RepoError> {
        let mut tx = pool.begin().await?;

        if !UserRepo::exists_by_email(&mut tx, &input.vendor_email).await? {
            return Err(RepoError::OwnerNotFound {
                role: "Vendor",
                email: input.vendor_email.clone(),
            });
        }
        if !UserRepo::exists_by_email(&mut tx, &input.client_email).await? {
            return Err(RepoError::OwnerNotFound {
                role: "Client",
                email: input.client_email.clone(),
            });
        }

        let query = format!(
            "INSERT INTO client_projects (id, title, description, vendor_email, client_email,
                                          budget, deadline, status, assigned_employees)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 'Pending'), $9)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, ClientProject>(&query)
            .bind(uuid::Uuid::now_v7())
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.vendor_email)
            .bind(&input.client_email)
            .bind(input.budget)
            .bind(input.deadline)
            .bind(&input.status)
            .bind(&input.assigned_employees)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(project)
    }

    /// List work orders for one client, newest first, optionally filtered
    /// by status.
    pub async fn list(
        pool: &PgPool,
        params: &ClientProjectListParams,
    ) -> Result<Vec<ClientProject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM client_projects
             WHERE client_email = $1
               AND ($2::TEXT IS NULL OR status = $2)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ClientProject>(&query)
            .bind(&params.client_email)
            .bind(&params.status)
            .fetch_all(pool)
            .await
    }

    /// Update a work order owned by `input.client_email`. Only non-`None`
    /// fields are applied.
    ///
    /// Returns `None` if no row matches the id for that owner.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClientProject,
    ) -> Result<Option<ClientProject>, sqlx::Error> {
        let query = format!(
            "UPDATE client_projects SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                vendor_email = COALESCE($5, vendor_email),
                budget = COALESCE($6, budget),
                deadline = COALESCE($7, deadline),
                status = COALESCE($8, status),
                assigned_employees = COALESCE($9, assigned_employees),
                updated_at = NOW()
             WHERE id = $1 AND client_email = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientProject>(&query)
            .bind(id)
            .bind(&input.client_email)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.vendor_email)
            .bind(input.budget)
            .bind(input.deadline)
            .bind(&input.status)
            .bind(&input.assigned_employees)
            .fetch_optional(pool)
            .await
    }

    /// Delete a work order owned by `client_email`. Returns `true` if a
    /// row was removed.
    pub async fn delete(
        pool: &PgPool,
        id: DbId,
        client_email: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM client_projects WHERE id = $1 AND client_email = $2")
            .bind(id)
            .bind(client_email)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
