//! HTTP adapter over the services.
//!
//! Handlers only translate between JSON and service calls; every rule lives
//! in the service layer.

pub mod books;
pub mod health;
pub mod loans;
pub mod members;
pub mod openapi;

use axum::{
    extract::{FromRequest, FromRequestParts},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body whose rejections are reported as [`AppError`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);

/// Path parameters whose rejections are reported as [`AppError`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ValidPath<T>(pub T);

/// Query string whose rejections are reported as [`AppError`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ValidQuery<T>(pub T);

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        // Members
        .route("/members", get(members::list_members).post(members::create_member))
        .route(
            "/members/:id",
            get(members::get_member)
                .put(members::update_member)
                .delete(members::delete_member),
        )
        .route("/members/:id/loans", get(members::get_member_loans))
        // Loans
        .route("/loans", get(loans::list_open_loans).post(loans::create_loan))
        .route("/loans/:id", get(loans::get_loan))
        .route("/loans/:id/return", post(loans::return_loan))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
