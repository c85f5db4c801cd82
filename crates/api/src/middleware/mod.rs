//! Request extractors that gate access.
//!
//! - [`auth::RequireAdmin`] -- Requires the `X-User: admin` header.

pub mod auth;
