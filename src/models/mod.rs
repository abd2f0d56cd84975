//! Request and Response models for the cache server API
//!
//! This module defines the DTOs used for decoding query strings and
//! serializing HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CheckAndSetQuery, KeyQuery, WriteQuery};
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
