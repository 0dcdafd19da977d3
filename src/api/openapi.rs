//! OpenAPI documentation

use axum::Json;
use utoipa::OpenApi;

use crate::api::{books, health, loans, members};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bibliomanager API",
        version = "1.0.0",
        description = "Books, members and loans of a small library"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        health::health_check,
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        members::list_members,
        members::get_member,
        members::create_member,
        members::update_member,
        members::delete_member,
        members::get_member_loans,
        loans::list_open_loans,
        loans::get_loan,
        loans::create_loan,
        loans::return_loan,
    ),
    components(
        schemas(
            health::HealthResponse,
            crate::models::book::Book,
            crate::models::book::BookInput,
            crate::models::member::Member,
            crate::models::member::MemberInput,
            crate::models::loan::Loan,
            crate::models::loan::LoanStatus,
            crate::models::loan::OpenLoan,
            crate::models::loan::CreateLoan,
            loans::LoanResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "books", description = "Book catalog"),
        (name = "members", description = "Library members"),
        (name = "loans", description = "Lending and returns")
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
