//! API Module
//!
//! HTTP handlers and routing for the cache server.
//!
//! # Endpoints
//! - `/get?key=` - Retrieve a value
//! - `/set?key=&value=&expire=` - Store a value
//! - `/delete?key=` - Delete a key
//! - `/checkandset?key=&value=&compare=&expire=` - Conditional store
//! - `/increment`, `/decrement` - Integer arithmetic (`value` is the amount)
//! - `/append`, `/prepend` - String concatenation
//! - `/flush` - Drop every key
//! - `/stats` - Key count, capacity and counters
//! - `/health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
