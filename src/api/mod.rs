//! HTTP transport for the production-management API.
//!
//! [`ProductionApi`] is the seam the stores depend on; [`ApiClient`] is the
//! reqwest implementation. Failures of any shape the server produces are
//! normalized into [`ApiError`], whose `Display` output is the user-facing
//! message.

mod client;
mod error;

pub use client::{ApiClient, ProductionApi};
pub use error::{normalize_error, ApiError, UNEXPECTED_ERROR};
