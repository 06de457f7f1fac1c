//! Data Transfer Objects for REST request/response serialization.
//!
//! Request fields are optional so that a missing field is reported as a
//! validation error with a readable message rather than a decode failure.

pub mod website_dto;

pub use website_dto::*;
