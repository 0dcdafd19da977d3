//! Loan (borrow) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Loan lifecycle. `Returned` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Open,
    Returned,
}

/// Loan model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: i64,
    pub book_id: i64,
    pub member_id: i64,
    pub loan_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    /// `None` while the loan is open
    pub return_date: Option<DateTime<Utc>>,
}

impl Loan {
    pub fn status(&self) -> LoanStatus {
        match self.return_date {
            None => LoanStatus::Open,
            Some(_) => LoanStatus::Returned,
        }
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.return_date.is_none() && is_past_due(self.due_date, now)
    }
}

/// Whether an open loan with this due date is late at `now`
pub fn is_past_due(due_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    due_date < now
}

/// Open loan joined with the current book title and member name
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OpenLoan {
    pub id: i64,
    pub book_id: i64,
    pub book_title: String,
    pub member_id: i64,
    pub member_name: String,
    pub loan_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    #[sqlx(skip)]
    pub is_overdue: bool,
}

/// Create loan request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateLoan {
    pub book_id: i64,
    pub member_id: i64,
    /// Loan duration in days (configured default when omitted)
    pub duration_days: Option<i64>,
}
