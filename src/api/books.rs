//! Book endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, BookInput, BookQuery},
    AppState,
};

use super::{ValidJson, ValidPath, ValidQuery};

/// List books, optionally filtered by title/author substring
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Books, newest first", body = Vec<Book>)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<BookQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list_books(query.search.as_deref()).await?;
    Ok(Json(books))
}

/// Get a book
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_book(id).await?;
    Ok(Json(book))
}

/// Add a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookInput,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid title, author or copy count")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidJson(data): ValidJson<BookInput>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.add_book(data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = BookInput,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(data): ValidJson<BookInput>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update_book(id, data).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book has open loans")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> AppResult<StatusCode> {
    state.services.books.delete_book(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
