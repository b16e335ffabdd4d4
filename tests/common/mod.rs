#![allow(dead_code)]

use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use user_api::application::services::{UserService, UserServiceImpl};
use user_api::infrastructure::persistence::{InMemoryUserRepository, PgUserRepository};
use user_api::routes;
use user_api::state::AppState;

pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_memory_state() -> AppState {
    let repository = Arc::new(InMemoryUserRepository::new());
    let service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(repository));
    AppState::new(service)
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgUserRepository::new(Arc::new(pool)));
    let service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(repository));
    AppState::new(service)
}

pub fn memory_app() -> Router {
    routes::router(create_memory_state(), TEST_TIMEOUT)
}

pub async fn insert_user(pool: &PgPool, name: &str, dob: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO users (name, dob) VALUES ($1, $2::date) RETURNING id",
    )
    .bind(name)
    .bind(dob)
    .fetch_one(pool)
    .await
    .unwrap()
}
