//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod architect;
pub mod client_answer;
pub mod client_session;
pub mod inspiration_photo;
pub mod photo_interaction;
pub mod question;
pub mod room_type;
