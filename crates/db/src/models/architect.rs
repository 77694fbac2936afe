//! Architect (tenant) account model.

use archimatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `architects` table.
///
/// `password_hash` is never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Architect {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub company: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert DTO. The password must already be hashed.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArchitect {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub company: Option<String>,
}

/// Public identity of the architect embedded in session payloads and reports.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArchitectSummary {
    pub id: DbId,
    pub name: String,
    pub company: Option<String>,
    pub email: String,
}
