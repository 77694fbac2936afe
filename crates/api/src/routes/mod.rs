pub mod architect;
pub mod client_answer;
pub mod client_session;
pub mod dashboard;
pub mod health;
pub mod inspiration_photo;
pub mod photo_interaction;
pub mod question;
pub mod room_type;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /architects/register                             register (public)
/// /architects/login                                login (public)
/// /architects/me                                   profile (auth)
/// /architects/me/password                          change password (auth)
///
/// /room-types                                      list, create (auth)
/// /room-types/seed-default                         seed default catalog (auth)
/// /room-types/{id}                                 update, deactivate (auth)
///
/// /questions                                       list, create (auth)
/// /questions/{id}                                  update, deactivate (auth)
///
/// /inspiration-photos                              list, create (auth)
/// /inspiration-photos/{id}                         update, deactivate (auth)
///
/// /dashboard/stats                                 counters (auth)
///
/// /client-sessions                                 create (public), list (auth)
/// /client-sessions/update-status                   complete answered sessions (auth)
/// /client-sessions/{id}                            get (public), delete (auth)
/// /client-sessions/{id}/general-info               general info (public)
/// /client-sessions/{id}/room-selection             room selection (public)
/// /client-sessions/{id}/complete                   complete (public)
/// /client-sessions/{id}/abandon                    abandon (auth)
/// /client-sessions/{id}/photos                     photo board, client upload (public)
/// /client-sessions/{id}/pdf                        HTML report (auth)
///
/// /client-answers                                  upsert (public)
/// /photo-interactions                              list, upsert (public)
/// /upload                                          multipart image upload (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/architects", architect::router())
        .nest("/room-types", room_type::router())
        .nest("/questions", question::router())
        .nest("/inspiration-photos", inspiration_photo::router())
        .nest("/dashboard", dashboard::router())
        .nest("/client-sessions", client_session::router())
        .nest("/client-answers", client_answer::router())
        .nest("/photo-interactions", photo_interaction::router())
        .nest("/upload", upload::router())
}
