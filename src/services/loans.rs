//! Loan management service

use crate::{
    config::LoansConfig,
    error::{AppError, AppResult},
    models::loan::{CreateLoan, Loan, OpenLoan},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
    config: LoansConfig,
}

impl LoansService {
    pub fn new(repository: Repository, config: LoansConfig) -> Self {
        Self { repository, config }
    }

    /// Get a loan by ID
    pub async fn get_loan(&self, id: i64) -> AppResult<Loan> {
        self.repository.loans.get_by_id(id).await
    }

    /// Open loans with book title and member name, newest first
    pub async fn list_open_loans(&self) -> AppResult<Vec<OpenLoan>> {
        self.repository.loans.list_open().await
    }

    /// Lend a copy of a book to a member
    pub async fn create_loan(&self, loan: CreateLoan) -> AppResult<Loan> {
        let duration_days = loan
            .duration_days
            .unwrap_or(self.config.default_duration_days);

        if duration_days < 1 {
            return Err(AppError::Validation(format!(
                "Loan duration must be at least 1 day (got {})",
                duration_days
            )));
        }

        let created = self
            .repository
            .loans
            .create(loan.book_id, loan.member_id, duration_days)
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    "Loan of book {} to member {} refused: {}",
                    loan.book_id,
                    loan.member_id,
                    e
                );
            })?;

        tracing::info!(
            "Loan {} created: book {} to member {}, due {}",
            created.id,
            created.book_id,
            created.member_id,
            created.due_date
        );
        Ok(created)
    }

    /// Return a borrowed copy
    pub async fn return_loan(&self, loan_id: i64) -> AppResult<Loan> {
        let loan = self.repository.loans.return_loan(loan_id).await.inspect_err(|e| {
            tracing::warn!("Return of loan {} refused: {}", loan_id, e);
        })?;
        tracing::info!("Loan {} returned (book {})", loan.id, loan.book_id);
        Ok(loan)
    }
}
