//! Shared fixtures

use std::sync::Arc;

use axum::Router;
use bibliomanager::{
    api,
    config::{AppConfig, DatabaseConfig},
    models::{Book, BookInput, Member, MemberInput},
    repository::Repository,
    services::Services,
    AppState,
};

pub async fn repository() -> Repository {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
    };
    Repository::connect(&config)
        .await
        .expect("Failed to open in-memory database")
}

pub async fn services() -> Services {
    Services::new(repository().await, AppConfig::default().loans)
}

pub async fn app() -> Router {
    api::create_router(AppState {
        services: Arc::new(services().await),
    })
}

pub async fn add_book(services: &Services, title: &str, author: &str, total: i64) -> Book {
    services
        .books
        .add_book(BookInput::new(title, author, total))
        .await
        .expect("Failed to add book")
}

pub async fn add_member(services: &Services, name: &str) -> Member {
    services
        .members
        .add_member(MemberInput::new(name, Some("555-0100")))
        .await
        .expect("Failed to add member")
}
