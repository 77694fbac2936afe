//! Integration tests for room types, questions and the default catalog.

mod common;

use archimatch_core::catalog::{DEFAULT_CATALOG, DEFAULT_QUESTIONS};
use archimatch_db::models::room_type::UpdateRoomType;
use archimatch_db::repositories::{QuestionRepo, RoomTypeRepo};
use sqlx::PgPool;

fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("23505") && db.constraint() == Some(constraint),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_active_name_unique_case_insensitive(pool: PgPool) {
    let a = common::architect(&pool, "a@example.com").await;
    common::room_type(&pool, a.id, "Salon", None).await;

    let err = RoomTypeRepo::create(
        &pool,
        a.id,
        &archimatch_db::models::room_type::CreateRoomType {
            name: "salon".to_string(),
            display_order: None,
            parent_id: None,
        },
    )
    .await
    .unwrap_err();
    assert!(is_unique_violation(&err, "uq_room_types_active_name"), "unexpected error: {err}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_name_reusable_after_soft_delete_and_across_architects(pool: PgPool) {
    let a = common::architect(&pool, "a@example.com").await;
    let b = common::architect(&pool, "b@example.com").await;

    let first = common::room_type(&pool, a.id, "Bureau", None).await;
    common::room_type(&pool, b.id, "Bureau", None).await;

    RoomTypeRepo::deactivate(&pool, a.id, first.id).await.unwrap().unwrap();
    let again = common::room_type(&pool, a.id, "Bureau", None).await;
    assert_ne!(again.id, first.id);
}

// ---------------------------------------------------------------------------
// Soft delete and tree listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_deleting_category_hides_children_only_from_lists(pool: PgPool) {
    let a = common::architect(&pool, "a@example.com").await;
    let category = common::room_type(&pool, a.id, "Espaces nuit", None).await;
    let child = common::room_type(&pool, a.id, "Chambre", Some(category.id)).await;

    RoomTypeRepo::deactivate(&pool, a.id, category.id).await.unwrap().unwrap();

    let stored_child = RoomTypeRepo::find_by_id(&pool, a.id, child.id).await.unwrap().unwrap();
    assert!(stored_child.is_active, "children are not modified");

    let visible = RoomTypeRepo::list_active(&pool, a.id).await.unwrap();
    assert!(visible.is_empty(), "child of an inactive category must be hidden");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tree_nests_children_and_active_questions(pool: PgPool) {
    let a = common::architect(&pool, "a@example.com").await;
    let category = common::room_type(&pool, a.id, "Espaces de vie", None).await;
    let salon = common::room_type(&pool, a.id, "Salon", Some(category.id)).await;
    let second = common::question(&pool, salon.id, "Deuxième", 2).await;
    let first = common::question(&pool, salon.id, "Première", 1).await;
    let retired = common::question(&pool, salon.id, "Retirée", 0).await;
    QuestionRepo::deactivate(&pool, a.id, retired.id).await.unwrap().unwrap();

    let tree = RoomTypeRepo::list_tree(&pool, a.id).await.unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].room_type.id, category.id);
    assert_eq!(tree[0].children.len(), 1);

    let ids: Vec<_> = tree[0].children[0].questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_is_scoped_to_owner(pool: PgPool) {
    let a = common::architect(&pool, "a@example.com").await;
    let b = common::architect(&pool, "b@example.com").await;
    let rt = common::room_type(&pool, a.id, "Cuisine", None).await;

    let input = UpdateRoomType {
        name: Some("Cuisine ouverte".to_string()),
        ..Default::default()
    };
    assert!(RoomTypeRepo::update(&pool, b.id, rt.id, &input).await.unwrap().is_none());

    let updated = RoomTypeRepo::update(&pool, a.id, rt.id, &input).await.unwrap().unwrap();
    assert_eq!(updated.name, "Cuisine ouverte");
    assert_eq!(updated.display_order, rt.display_order);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_question_of_other_architect_not_found(pool: PgPool) {
    let a = common::architect(&pool, "a@example.com").await;
    let b = common::architect(&pool, "b@example.com").await;
    let rt = common::room_type(&pool, a.id, "Salon", None).await;
    let q = common::question(&pool, rt.id, "Ambiance ?", 0).await;

    assert!(QuestionRepo::find_by_id(&pool, b.id, q.id).await.unwrap().is_none());
    assert!(QuestionRepo::deactivate(&pool, b.id, q.id).await.unwrap().is_none());
    assert_eq!(QuestionRepo::count_active(&pool, a.id).await.unwrap(), 1);
    assert_eq!(QuestionRepo::count_active(&pool, b.id).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_active_owned_drops_foreign_and_deleted(pool: PgPool) {
    let a = common::architect(&pool, "a@example.com").await;
    let b = common::architect(&pool, "b@example.com").await;
    let salon = common::room_type(&pool, a.id, "Salon", None).await;
    let cuisine = common::room_type(&pool, a.id, "Cuisine", None).await;
    let foreign = common::room_type(&pool, b.id, "Suite secrete", None).await;
    RoomTypeRepo::deactivate(&pool, a.id, cuisine.id).await.unwrap().unwrap();

    let found = RoomTypeRepo::find_active_owned(&pool, a.id, &[salon.id, cuisine.id, foreign.id])
        .await
        .unwrap();
    let ids: Vec<_> = found.iter().map(|rt| rt.id).collect();
    assert_eq!(ids, vec![salon.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_answerable_requires_active_question_and_room(pool: PgPool) {
    let a = common::architect(&pool, "a@example.com").await;
    let b = common::architect(&pool, "b@example.com").await;
    let salon = common::room_type(&pool, a.id, "Salon", None).await;
    let cuisine = common::room_type(&pool, a.id, "Cuisine", None).await;
    let live = common::question(&pool, salon.id, "Ambiance ?", 0).await;
    let retired = common::question(&pool, salon.id, "Cheminee ?", 1).await;
    let orphaned = common::question(&pool, cuisine.id, "Ilot ?", 0).await;

    QuestionRepo::deactivate(&pool, a.id, retired.id).await.unwrap().unwrap();
    RoomTypeRepo::deactivate(&pool, a.id, cuisine.id).await.unwrap().unwrap();

    assert!(QuestionRepo::find_answerable(&pool, a.id, live.id).await.unwrap().is_some());
    assert!(QuestionRepo::find_answerable(&pool, b.id, live.id).await.unwrap().is_none());
    assert!(QuestionRepo::find_answerable(&pool, a.id, retired.id).await.unwrap().is_none());
    assert!(QuestionRepo::find_answerable(&pool, a.id, orphaned.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Default catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_default_catalog(pool: PgPool) {
    let a = common::architect(&pool, "a@example.com").await;

    let created = RoomTypeRepo::seed_default_catalog(&pool, a.id).await.unwrap();
    let expected: usize = DEFAULT_CATALOG.iter().map(|c| 1 + c.rooms.len()).sum();
    assert_eq!(created, expected);

    let tree = RoomTypeRepo::list_tree(&pool, a.id).await.unwrap();
    assert_eq!(tree.len(), DEFAULT_CATALOG.len());
    assert_eq!(tree[0].room_type.name, DEFAULT_CATALOG[0].name);

    let questions = QuestionRepo::count_active(&pool, a.id).await.unwrap();
    assert_eq!(questions as usize, DEFAULT_QUESTIONS.len());
}
