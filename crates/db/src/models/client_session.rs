//! Client session model: one client's run through the intake wizard.

use archimatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::models::architect::ArchitectSummary;
use crate::models::client_answer::AnswerWithQuestion;
use crate::models::photo_interaction::InteractionWithPhoto;

/// A row from the `client_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientSession {
    pub id: DbId,
    pub architect_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: String,
    pub completed_at: Option<Timestamp>,
    pub project_type: Option<String>,
    pub housing_type: Option<String>,
    pub housing_type_other: Option<String>,
    pub property_usage: Option<String>,
    pub household_adults: Option<i32>,
    pub household_children: Option<i32>,
    pub household_grandchildren: Option<i32>,
    pub children_ages: Option<String>,
    pub has_animals: Option<bool>,
    pub desired_organization: Option<String>,
    pub organization_comments: Option<String>,
    pub selected_room_types: Json<Vec<String>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for starting a session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClientSession {
    pub architect_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// General information step. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGeneralInfo {
    pub project_type: Option<String>,
    pub housing_type: Option<String>,
    pub housing_type_other: Option<String>,
    pub property_usage: Option<String>,
    pub household_adults: Option<i32>,
    pub household_children: Option<i32>,
    pub household_grandchildren: Option<i32>,
    pub children_ages: Option<String>,
    pub has_animals: Option<bool>,
    pub desired_organization: Option<String>,
    pub organization_comments: Option<String>,
}

/// A session with everything the admin views and the report need.
#[derive(Debug, Clone, Serialize)]
pub struct ClientSessionDetail {
    #[serde(flatten)]
    pub session: ClientSession,
    pub architect: Option<ArchitectSummary>,
    pub answers: Vec<AnswerWithQuestion>,
    pub photo_interactions: Vec<InteractionWithPhoto>,
}

/// Aggregated counters for the architect dashboard.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct DashboardStats {
    pub total_sessions: i64,
    pub completed_sessions: i64,
    pub in_progress_sessions: i64,
    pub total_questions: i64,
    pub total_photos: i64,
}
