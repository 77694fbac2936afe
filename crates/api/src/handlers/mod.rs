pub mod architect;
pub mod client_answer;
pub mod client_session;
pub mod dashboard;
pub mod inspiration_photo;
pub mod photo_interaction;
pub mod question;
pub mod room_type;
pub mod upload;
