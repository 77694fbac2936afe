//! Request extractors.
//!
//! - [`auth::AuthArchitect`] -- the architect identified by a JWT Bearer token.

pub mod auth;
