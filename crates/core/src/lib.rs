//! Domain types and pure business rules for the ArchiMatch intake backend.
//!
//! Nothing in this crate touches the database or the network; the `db`,
//! `storage` and `api` crates build on these types and validators.

pub mod answer;
pub mod catalog;
pub mod error;
pub mod interaction;
pub mod question;
pub mod room_type;
pub mod session;
pub mod types;
pub mod upload;
