//! Integration tests for client sessions, answers and interactions.

mod common;

use archimatch_core::interaction::Annotation;
use archimatch_db::models::client_session::UpdateGeneralInfo;
use archimatch_db::repositories::{
    ClientAnswerRepo, ClientSessionRepo, InspirationPhotoRepo, PhotoInteractionRepo,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_general_info_keeps_absent_fields(pool: PgPool) {
    let a = common::architect(&pool, "a@example.com").await;
    let s = common::session(&pool, a.id).await;

    let first = UpdateGeneralInfo {
        project_type: Some("renovation".to_string()),
        household_adults: Some(2),
        ..Default::default()
    };
    ClientSessionRepo::update_general_info(&pool, s.id, &first).await.unwrap().unwrap();

    let second = UpdateGeneralInfo {
        has_animals: Some(true),
        ..Default::default()
    };
    let updated = ClientSessionRepo::update_general_info(&pool, s.id, &second)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.project_type.as_deref(), Some("renovation"));
    assert_eq!(updated.household_adults, Some(2));
    assert_eq!(updated.has_animals, Some(true));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_answer_upsert_keeps_single_row(pool: PgPool) {
    let a = common::architect(&pool, "a@example.com").await;
    let rt = common::room_type(&pool, a.id, "Salon", None).await;
    let q = common::question(&pool, rt.id, "Ambiance ?", 0).await;
    let s = common::session(&pool, a.id).await;

    let first = ClientAnswerRepo::upsert(&pool, s.id, q.id, "Cosy").await.unwrap();
    let second = ClientAnswerRepo::upsert(&pool, s.id, q.id, "Moderne").await.unwrap();
    assert_eq!(first.id, second.id);

    let answers = ClientAnswerRepo::list_for_sessions(&pool, &[s.id]).await.unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].answer_value, "Moderne");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_interaction_upsert_replaces_action_and_annotations(pool: PgPool) {
    let a = common::architect(&pool, "a@example.com").await;
    let s = common::session(&pool, a.id).await;
    let p = common::curated_photo(&pool, a.id, "https://cdn.example.com/1.jpg", vec![]).await;

    let note = Annotation {
        x: 10.0,
        y: 90.0,
        comment: "J'aime cette lumière".to_string(),
    };
    PhotoInteractionRepo::upsert(&pool, s.id, p.id, "like", &[note.clone()])
        .await
        .unwrap();
    let second = PhotoInteractionRepo::upsert(&pool, s.id, p.id, "dislike", &[])
        .await
        .unwrap();
    assert_eq!(second.action, "dislike");
    assert!(second.annotations.0.is_empty());

    let listed = PhotoInteractionRepo::list_for_session(&pool, s.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].photo.id, p.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_leave_in_progress_only_once(pool: PgPool) {
    let a = common::architect(&pool, "a@example.com").await;
    let s = common::session(&pool, a.id).await;

    let done = ClientSessionRepo::leave_in_progress(&pool, s.id, "completed")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(done.status, "completed");
    assert!(done.completed_at.is_some());

    let again = ClientSessionRepo::leave_in_progress(&pool, s.id, "abandoned").await.unwrap();
    assert!(again.is_none(), "a completed session cannot move again");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_complete_with_answers(pool: PgPool) {
    let a = common::architect(&pool, "a@example.com").await;
    let rt = common::room_type(&pool, a.id, "Salon", None).await;
    let q = common::question(&pool, rt.id, "Ambiance ?", 0).await;
    let answered = common::session(&pool, a.id).await;
    let silent = common::session(&pool, a.id).await;
    ClientAnswerRepo::upsert(&pool, answered.id, q.id, "Cosy").await.unwrap();

    let count = ClientSessionRepo::complete_with_answers(&pool, a.id).await.unwrap();
    assert_eq!(count, 1);

    let silent = ClientSessionRepo::find_by_id(&pool, silent.id).await.unwrap().unwrap();
    assert_eq!(silent.status, "in_progress");
    let stats = ClientSessionRepo::dashboard_stats(&pool, a.id).await.unwrap();
    assert_eq!(stats.total_sessions, 2);
    assert_eq!(stats.completed_sessions, 1);
    assert_eq!(stats.in_progress_sessions, 1);
    assert_eq!(stats.total_questions, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_cascades(pool: PgPool) {
    let a = common::architect(&pool, "a@example.com").await;
    let rt = common::room_type(&pool, a.id, "Salon", None).await;
    let q = common::question(&pool, rt.id, "Ambiance ?", 0).await;
    let s = common::session(&pool, a.id).await;
    let curated = common::curated_photo(&pool, a.id, "https://cdn.example.com/1.jpg", vec![]).await;
    let upload = common::client_upload(&pool, a.id, s.id, "https://cdn.example.com/mine.jpg").await;

    ClientAnswerRepo::upsert(&pool, s.id, q.id, "Cosy").await.unwrap();
    PhotoInteractionRepo::upsert(&pool, s.id, curated.id, "like", &[]).await.unwrap();

    let other = common::architect(&pool, "b@example.com").await;
    assert!(!ClientSessionRepo::delete(&pool, other.id, s.id).await.unwrap());
    assert!(ClientSessionRepo::delete(&pool, a.id, s.id).await.unwrap());

    assert!(ClientAnswerRepo::list_for_sessions(&pool, &[s.id]).await.unwrap().is_empty());
    assert!(PhotoInteractionRepo::list_for_sessions(&pool, &[s.id]).await.unwrap().is_empty());
    assert!(InspirationPhotoRepo::find_by_id(&pool, a.id, upload.id).await.unwrap().is_none());
    assert!(InspirationPhotoRepo::find_by_id(&pool, a.id, curated.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_detail_loads_relations(pool: PgPool) {
    let a = common::architect(&pool, "a@example.com").await;
    let rt = common::room_type(&pool, a.id, "Salon", None).await;
    let q = common::question(&pool, rt.id, "Ambiance ?", 0).await;
    let s = common::session(&pool, a.id).await;
    let p = common::curated_photo(&pool, a.id, "https://cdn.example.com/1.jpg", vec![rt.id]).await;
    ClientAnswerRepo::upsert(&pool, s.id, q.id, "Cosy").await.unwrap();
    PhotoInteractionRepo::upsert(&pool, s.id, p.id, "like", &[]).await.unwrap();

    let detail = ClientSessionRepo::find_detail(&pool, s.id).await.unwrap().unwrap();
    assert_eq!(detail.architect.as_ref().map(|x| x.name.as_str()), Some("Claire Martin"));
    assert_eq!(detail.answers.len(), 1);
    assert_eq!(detail.answers[0].question.room_type.id, rt.id);
    assert_eq!(detail.photo_interactions.len(), 1);
    assert_eq!(detail.photo_interactions[0].photo.room_type_ids, vec![rt.id]);
}
