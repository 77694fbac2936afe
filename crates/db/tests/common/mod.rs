//! Shared fixtures for the repository integration tests.

#![allow(dead_code)]

use archimatch_core::types::DbId;
use archimatch_db::models::architect::{Architect, CreateArchitect};
use archimatch_db::models::client_session::{ClientSession, CreateClientSession};
use archimatch_db::models::inspiration_photo::{InspirationPhoto, NewInspirationPhoto};
use archimatch_db::models::question::{Question, QuestionFields};
use archimatch_db::models::room_type::{CreateRoomType, RoomType};
use archimatch_db::repositories::{
    ArchitectRepo, ClientSessionRepo, InspirationPhotoRepo, QuestionRepo, RoomTypeRepo,
};
use sqlx::PgPool;

pub async fn architect(pool: &PgPool, email: &str) -> Architect {
    ArchitectRepo::create(
        pool,
        &CreateArchitect {
            email: email.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            name: "Claire Martin".to_string(),
            company: Some("Atelier Martin".to_string()),
        },
    )
    .await
    .unwrap()
}

pub async fn room_type(pool: &PgPool, architect_id: DbId, name: &str, parent_id: Option<DbId>) -> RoomType {
    RoomTypeRepo::create(
        pool,
        architect_id,
        &CreateRoomType {
            name: name.to_string(),
            display_order: None,
            parent_id,
        },
    )
    .await
    .unwrap()
}

pub async fn question(pool: &PgPool, room_type_id: DbId, text: &str, display_order: i32) -> Question {
    QuestionRepo::create(
        pool,
        room_type_id,
        &QuestionFields {
            question_text: text.to_string(),
            question_type: "text".to_string(),
            options: None,
            required: true,
            display_order,
            is_active: true,
        },
    )
    .await
    .unwrap()
}

pub async fn session(pool: &PgPool, architect_id: DbId) -> ClientSession {
    ClientSessionRepo::create(
        pool,
        &CreateClientSession {
            architect_id,
            first_name: "Jean".to_string(),
            last_name: "Dupont".to_string(),
            email: "jean.dupont@example.com".to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn curated_photo(pool: &PgPool, architect_id: DbId, url: &str, room_type_ids: Vec<DbId>) -> InspirationPhoto {
    InspirationPhotoRepo::create(
        pool,
        &NewInspirationPhoto {
            architect_id,
            session_id: None,
            image_url: url.to_string(),
            title: None,
            description: None,
            tags: Vec::new(),
            room_type_ids,
            is_client_upload: false,
        },
    )
    .await
    .unwrap()
}

pub async fn client_upload(pool: &PgPool, architect_id: DbId, session_id: DbId, url: &str) -> InspirationPhoto {
    InspirationPhotoRepo::create(
        pool,
        &NewInspirationPhoto {
            architect_id,
            session_id: Some(session_id),
            image_url: url.to_string(),
            title: Some("Photo personnelle".to_string()),
            description: None,
            tags: Vec::new(),
            room_type_ids: Vec::new(),
            is_client_upload: true,
        },
    )
    .await
    .unwrap()
}
