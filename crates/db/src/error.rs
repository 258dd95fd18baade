//! Error type for repositories that perform owner resolution.
//!
//! Vendor- and client-scoped writes re-resolve the owning user by email
//! inside the same transaction as the mutation. A missing owner is a domain
//! outcome (mapped to 404 at the API layer), not a database failure, so it
//! gets its own variant instead of being squeezed into `sqlx::Error`.

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The owning user referenced by email does not exist, or does not have
    /// the required user type.
    #[error("{role} with email {email} not found")]
    OwnerNotFound { role: &'static str, email: String },

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
