//! Client-side synchronization core for a production-management console.
//!
//! Keeps an in-memory view of the server's raw materials, products and
//! production-suggestion report, applies mutations against the REST API and
//! reconciles the results:
//!
//! - [`api`]: the transport adapter and the failure-normalization rules
//! - [`store`]: per-entity stores owning the cached collections and the
//!   status of their last operation
//! - [`form`]: the product form and the material name-to-id resolver
//! - [`commands`]: the CLI shell consuming the stores

pub mod api;
pub mod commands;
pub mod config;
pub mod form;
pub mod models;
pub mod store;
