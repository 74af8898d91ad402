//! Customer module: three-layer architecture (domain, repository, service).
//!
//! The repository owns storage-to-display field mapping; the service adds
//! tracing and is what the HTTP layer holds.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::CustomerService;
