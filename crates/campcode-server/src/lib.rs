//! HTTP service for campaign code generation.
//!
//! Thin plumbing around `campcode-core`: JSON request/response envelopes,
//! a health endpoint, and a persistent idempotency store keyed by
//! normalized campaign identity.

pub mod api;
pub mod envelope;
pub mod error;
pub mod router;
pub mod store;

pub use api::AppState;
pub use error::{ApiError, ServerError};
pub use router::{create_router, serve};
pub use store::{JsonFileStore, StoreError, normalize_key};
