//! # avatar-api
//!
//! Shared API types for the animal-avatar backend.
//! This crate has no server-side dependencies and can be used by any
//! client that talks to the HTTP surface (native or WASM).
//!
//! ## Features
//!
//! - Request DTOs (`UserCreate`)
//! - Response DTOs (`UserResponse`, `UploadResponse`, `GenerationHistoryResponse`)
//! - Error response format (`ErrorResponse`)
//! - Generic response wrapper (`AppResponse`)
//! - `openapi` feature: derives `utoipa::ToSchema` on all of the above
//!
//! ## Example
//!
//! ```rust
//! use avatar_api::UserCreate;
//!
//! let request = UserCreate {
//!     username: "fox".to_string(),
//!     email: "fox@example.com".to_string(),
//! };
//! ```

pub mod error;
pub mod requests;
pub mod responses;
pub mod result;

// Re-exports for convenient access
pub use error::ErrorResponse;
pub use requests::*;
pub use responses::*;
pub use result::{AppResponse, StatusCode};
