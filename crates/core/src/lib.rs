//! Shared domain types and errors for the Stafflink portal backend.

pub mod error;
pub mod text;
pub mod types;
