//! Repository for the `vendor_services` table.
//!
//! Every write re-resolves the owning vendor (a "Vendor"-typed user) inside
//! the write transaction; reads are filtered by vendor email and the
//! `service_type` discriminator.

use sqlx::PgPool;
use stafflink_core::types::DbId;

use crate::error::RepoError;
use crate::models::vendor_service::{
    CreateVendorService, UpdateVendorService, VendorService, VendorServiceListParams,
};
use crate::repositories::UserRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, vendor_email, service_type, title, details, price, created_at, updated_at";

/// Provides CRUD operations for vendor service listings.
pub struct VendorServiceRepo;

impl VendorServiceRepo {
    /// Insert a new listing, returning the created row.
    ///
    /// `vendor_email` must resolve to a "Vendor"-typed user.
    pub async fn create(
        pool: &PgPool,
        input: &CreateVendorService,
    ) -> Result<VendorService, RepoError> {
        let mut tx = pool.begin().await?;

        if !UserRepo::vendor_exists(&mut tx, &input.vendor_email).await? {
            return Err(RepoError::OwnerNotFound {
                role: "Vendor",
                email: input.vendor_email.clone(),
            });
        }

        let query = format!(
            "INSERT INTO vendor_services (id, vendor_email, service_type, title, details, price)
             VALUES ($1, $2, $3, $4, COALESCE($5, '{{}}'::jsonb), $6)
             RETURNING {COLUMNS}"
        );
        let service = sqlx::query_as::<_, VendorService>(&query)
            .bind(uuid::Uuid::now_v7())
            .bind(&input.vendor_email)
            .bind(&input.service_type)
            .bind(&input.title)
            .bind(&input.details)
            .bind(input.price)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(service)
    }

    /// List listings for one vendor, newest first, optionally narrowed to
    /// one `service_type`.
    pub async fn list(
        pool: &PgPool,
        params: &VendorServiceListParams,
    ) -> Result<Vec<VendorService>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vendor_services
             WHERE vendor_email = $1
               AND ($2::TEXT IS NULL OR service_type = $2)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, VendorService>(&query)
            .bind(&params.email)
            .bind(&params.service_type)
            .fetch_all(pool)
            .await
    }

    /// Update a listing owned by `input.vendor_email`. Only non-`None`
    /// fields are applied.
    ///
    /// Returns `None` if the owner resolves but no row matches the id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVendorService,
    ) -> Result<Option<VendorService>, RepoError> {
        let mut tx = pool.begin().await?;

        if !UserRepo::vendor_exists(&mut tx, &input.vendor_email).await? {
            return Err(RepoError::OwnerNotFound {
                role: "Vendor",
                email: input.vendor_email.clone(),
            });
        }

        let query = format!(
            "UPDATE vendor_services SET
                title = COALESCE($3, title),
                details = COALESCE($4, details),
                price = COALESCE($5, price),
                updated_at = NOW()
             WHERE id = $1 AND vendor_email = $2
             RETURNING {COLUMNS}"
        );
        let service = sqlx::query_as::<_, VendorService>(&query)
            .bind(id)
            .bind(&input.vendor_email)
            .bind(&input.title)
            .bind(&input.details)
            .bind(input.price)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(service)
    }

    /// Delete a listing owned by `vendor_email`. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: DbId, vendor_email: &str) -> Result<bool, RepoError> {
        let mut tx = pool.begin().await?;

        if !UserRepo::vendor_exists(&mut tx, vendor_email).await? {
            return Err(RepoError::OwnerNotFound {
                role: "Vendor",
                email: vendor_email.to_string(),
            });
        }

        let result = sqlx::query("DELETE FROM vendor_services WHERE id = $1 AND vendor_email = $2")
            .bind(id)
            .bind(vendor_email)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
