//! Repository for the `vendor_history` table.
//!
//! History entries are created directly in the "Completed" state. Creation
//! requires a "Vendor"-typed owner, checked in the insert transaction;
//! mutations only match rows for the requesting vendor that are still
//! "Completed".

use sqlx::PgPool;
use stafflink_core::types::DbId;

use crate::error::RepoError;
use crate::models::vendor_history::{
    CreateVendorHistory, UpdateVendorHistory, VendorHistory, VendorHistoryListParams,
};
use crate::repositories::UserRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, vendor_email, title, description, client_email, year, technologies, \
                       budget, duration, status, created_at, updated_at";

/// Provides CRUD operations for vendor project history.
pub struct VendorHistoryRepo;

impl VendorHistoryRepo {
    /// Insert a new history entry, returning the created row.
    ///
    /// `vendor_email` must resolve to a "Vendor"-typed user. Status is
    /// stamped "Completed" regardless of input.
    pub async fn create(
        pool: &PgPool,
        input: &CreateVendorHistory,
    ) -> Result<VendorHistory, RepoError> {
        let mut tx = pool.begin().await?;

        if !UserRepo::vendor_exists(&mut tx, &input.vendor_email).await? {
            return Err(RepoError::OwnerNotFound {
                role: "Vendor",
                email: input.vendor_email.clone(),
            });
        }

        let query = format!(
            "INSERT INTO vendor_history (id, vendor_email, title, description, client_email,
                                         year, technologies, budget, duration, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'Completed')
             RETURNING {COLUMNS}"
        );
        let entry = sqlx::query_as::<_, VendorHistory>(&query)
            .bind(uuid::Uuid::now_v7())
            .bind(&input.vendor_email)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.client_email)
            .bind(input.year)
            .bind(&input.technologies)
            .bind(input.budget)
            .bind(&input.duration)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(entry)
    }

    /// List history entries for one vendor, newest first.
    ///
    /// Optional year filter plus a case-insensitive substring search over
    /// title, description, and client email.
    pub async fn list(
        pool: &PgPool,
        params: &VendorHistoryListParams,
    ) -> Result<Vec<VendorHistory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vendor_history
             WHERE vendor_email = $1
               AND ($2::INT IS NULL OR year = $2)
               AND ($3::TEXT IS NULL
                    OR title ILIKE '%' || $3 || '%'
                    OR description ILIKE '%' || $3 || '%'
                    OR client_email ILIKE '%' || $3 || '%')
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, VendorHistory>(&query)
            .bind(&params.vendor_email)
            .bind(params.year)
            .bind(&params.search)
            .fetch_all(pool)
            .await
    }

    /// Update a history entry owned by `input.vendor_email`. Only matches
    /// rows with status "Completed"; only non-`None` fields are applied.
    ///
    /// Returns `None` if no row matches the id for that owner.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVendorHistory,
    ) -> Result<Option<VendorHistory>, sqlx::Error> {
        let query = format!(
            "UPDATE vendor_history SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                client_email = COALESCE($5, client_email),
                year = COALESCE($6, year),
                technologies = COALESCE($7, technologies),
                budget = COALESCE($8, budget),
                duration = COALESCE($9, duration),
                updated_at = NOW()
             WHERE id = $1 AND vendor_email = $2 AND status = 'Completed'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VendorHistory>(&query)
            .bind(id)
            .bind(&input.vendor_email)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.client_email)
            .bind(input.year)
            .bind(&input.technologies)
            .bind(input.budget)
            .bind(&input.duration)
            .fetch_optional(pool)
            .await
    }

    /// Delete a history entry owned by `vendor_email` with status
    /// "Completed". Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, vendor_email: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM vendor_history
             WHERE id = $1 AND vendor_email = $2 AND status = 'Completed'",
        )
        .bind(id)
        .bind(vendor_email)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
