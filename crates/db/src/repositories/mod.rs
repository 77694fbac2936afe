//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods taking an
//! `architect_id` only ever see that architect's rows.

pub mod architect_repo;
pub mod client_answer_repo;
pub mod client_session_repo;
pub mod inspiration_photo_repo;
pub mod photo_interaction_repo;
pub mod question_repo;
pub mod room_type_repo;

pub use architect_repo::ArchitectRepo;
pub use client_answer_repo::ClientAnswerRepo;
pub use client_session_repo::ClientSessionRepo;
pub use inspiration_photo_repo::InspirationPhotoRepo;
pub use photo_interaction_repo::PhotoInteractionRepo;
pub use question_repo::QuestionRepo;
pub use room_type_repo::RoomTypeRepo;
