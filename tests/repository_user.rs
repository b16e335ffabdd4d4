mod common;

use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;
use user_api::domain::entities::NewUser;
use user_api::domain::repositories::UserRepository;
use user_api::infrastructure::persistence::PgUserRepository;
use user_api::routes;

fn new_user(name: &str, dob: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        dob: dob.parse().unwrap(),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_create_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let user = repo.create(new_user("Ada", "2000-01-01")).await.unwrap();

    assert!(user.id > 0);
    assert_eq!(user.name, "Ada");
    assert_eq!(user.dob.to_string(), "2000-01-01");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_id(pool: PgPool) {
    let id = common::insert_user(&pool, "Grace", "1906-12-09").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let user = repo.find_by_id(id).await.unwrap();

    let user = user.unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.name, "Grace");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let user = repo.find_by_id(999_999).await.unwrap();

    assert!(user.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_list_all_is_ordered_by_id(pool: PgPool) {
    for name in ["c", "a", "b"] {
        common::insert_user(&pool, name, "2000-01-01").await;
    }
    let repo = PgUserRepository::new(Arc::new(pool));

    let users = repo.list_all().await.unwrap();
    let count = repo.count().await.unwrap();

    assert_eq!(count, 3);
    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(users[0].name, "c");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_user(pool: PgPool) {
    let id = common::insert_user(&pool, "Ada", "2000-01-01").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let updated = repo
        .update(id, new_user("Grace", "1990-12-09"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Grace");
    assert_eq!(updated.dob.to_string(), "1990-12-09");

    let missing = repo.update(id + 1000, new_user("X", "2000-01-01")).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_user(pool: PgPool) {
    let id = common::insert_user(&pool, "Ada", "2000-01-01").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_http_round_trip_on_postgres(pool: PgPool) {
    let app = routes::router(common::create_pg_state(pool), common::TEST_TIMEOUT);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/v1/users")
        .json(&json!({ "name": "Ada", "dob": "2000-01-01" }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let id = response.json::<Value>()["id"].as_i64().unwrap();

    let fetched = server
        .get(&format!("/api/v1/users/{id}"))
        .await
        .json::<Value>();
    assert_eq!(fetched["dob"], "2000-01-01");
    assert!(fetched["age"].is_u64());
}
