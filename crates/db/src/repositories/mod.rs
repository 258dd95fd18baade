//! Repository modules, one per entity.
//!
//! Repositories are stateless unit structs with associated async functions
//! taking a pool (or, for owner checks, a connection inside an open
//! transaction). Plain reads and unscoped writes return `sqlx::Error`;
//! operations that resolve an owner return [`RepoError`](crate::error::RepoError).

pub mod blog_repo;
pub mod client_project_repo;
pub mod project_repo;
pub mod user_repo;
pub mod vendor_history_repo;
pub mod vendor_service_repo;

pub use blog_repo::BlogRepo;
pub use client_project_repo::ClientProjectRepo;
pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;
pub use vendor_history_repo::VendorHistoryRepo;
pub use vendor_service_repo::VendorServiceRepo;
