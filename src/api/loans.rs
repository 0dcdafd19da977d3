//! Loan endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::loan::{CreateLoan, Loan, LoanStatus, OpenLoan},
    AppState,
};

use super::{ValidJson, ValidPath};

/// Loan with its lifecycle status
#[derive(Serialize, ToSchema)]
pub struct LoanResponse {
    pub id: i64,
    pub book_id: i64,
    pub member_id: i64,
    pub loan_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub status: LoanStatus,
    pub is_overdue: bool,
}

impl From<Loan> for LoanResponse {
    fn from(loan: Loan) -> Self {
        Self {
            status: loan.status(),
            is_overdue: loan.is_overdue(Utc::now()),
            id: loan.id,
            book_id: loan.book_id,
            member_id: loan.member_id,
            loan_date: loan.loan_date,
            due_date: loan.due_date,
            return_date: loan.return_date,
        }
    }
}

/// List open loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "Open loans, newest first", body = Vec<OpenLoan>)
    )
)]
pub async fn list_open_loans(State(state): State<AppState>) -> AppResult<Json<Vec<OpenLoan>>> {
    let loans = state.services.loans.list_open_loans().await?;
    Ok(Json(loans))
}

/// Get a loan
#[utoipa::path(
    get,
    path = "/loans/{id}",
    tag = "loans",
    params(("id" = i64, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Loan", body = LoanResponse),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn get_loan(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> AppResult<Json<LoanResponse>> {
    let loan = state.services.loans.get_loan(id).await?;
    Ok(Json(loan.into()))
}

/// Lend a book to a member
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Loan created", body = LoanResponse),
        (status = 400, description = "Invalid duration"),
        (status = 404, description = "Book or member not found"),
        (status = 409, description = "No copy available")
    )
)]
pub async fn create_loan(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateLoan>,
) -> AppResult<(StatusCode, Json<LoanResponse>)> {
    let loan = state.services.loans.create_loan(request).await?;
    Ok((StatusCode::CREATED, Json(loan.into())))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/loans/{id}/return",
    tag = "loans",
    params(("id" = i64, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Loan returned", body = LoanResponse),
        (status = 404, description = "Loan not found"),
        (status = 409, description = "Already returned")
    )
)]
pub async fn return_loan(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> AppResult<Json<LoanResponse>> {
    let loan = state.services.loans.return_loan(id).await?;
    Ok(Json(loan.into()))
}
