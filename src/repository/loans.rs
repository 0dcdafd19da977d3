//! Loans repository for database operations

use chrono::{Duration, Utc};
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::loan::{is_past_due, Loan, OpenLoan},
};

const OPEN_LOANS_QUERY: &str = r#"
    SELECT l.id, l.book_id, b.title AS book_title, l.member_id, m.name AS member_name,
           l.loan_date, l.due_date
    FROM loans l
    JOIN books b ON b.id = l.book_id
    JOIN members m ON m.id = l.member_id
    WHERE l.return_date IS NULL
"#;

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Sqlite>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))
    }

    /// Open loans with book title and member name, newest first
    pub async fn list_open(&self) -> AppResult<Vec<OpenLoan>> {
        let query = format!("{} ORDER BY l.id DESC", OPEN_LOANS_QUERY);
        let loans = sqlx::query_as::<_, OpenLoan>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(with_overdue_flag(loans))
    }

    /// Open loans of one member, newest first
    pub async fn list_open_for_member(&self, member_id: i64) -> AppResult<Vec<OpenLoan>> {
        let query = format!("{} AND l.member_id = ? ORDER BY l.id DESC", OPEN_LOANS_QUERY);
        let loans = sqlx::query_as::<_, OpenLoan>(&query)
            .bind(member_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(with_overdue_flag(loans))
    }

    /// Lend one copy of a book.
    ///
    /// The loan row and the availability decrement commit together.
    pub async fn create(&self, book_id: i64, member_id: i64, duration_days: i64) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await?;

        let available = sqlx::query_scalar::<_, i64>("SELECT available_copies FROM books WHERE id = ?")
            .bind(book_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book_id)))?;

        let member_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM members WHERE id = ?)")
                .bind(member_id)
                .fetch_one(&mut *tx)
                .await?;

        if !member_exists {
            return Err(AppError::NotFound(format!("Member with id {} not found", member_id)));
        }

        if available <= 0 {
            return Err(AppError::Conflict(format!(
                "No copy available for book {}",
                book_id
            )));
        }

        let loan_date = Utc::now();
        let due_date = Duration::try_days(duration_days)
            .and_then(|d| loan_date.checked_add_signed(d))
            .ok_or_else(|| {
                AppError::Validation(format!("Loan duration of {} days is out of range", duration_days))
            })?;

        let loan = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (book_id, member_id, loan_date, due_date, return_date)
            VALUES (?, ?, ?, ?, NULL)
            RETURNING *
            "#,
        )
        .bind(book_id)
        .bind(member_id)
        .bind(loan_date)
        .bind(due_date)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE books SET available_copies = available_copies - 1 WHERE id = ?")
            .bind(book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(loan)
    }

    /// Mark a loan returned and put the copy back on the shelf.
    ///
    /// Availability never exceeds the book's total, even if the total was
    /// lowered while the loan was open.
    pub async fn return_loan(&self, loan_id: i64) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await?;

        let loan = sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE id = ?")
            .bind(loan_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", loan_id)))?;

        if loan.return_date.is_some() {
            return Err(AppError::Conflict(format!("Loan {} already returned", loan_id)));
        }

        let loan = sqlx::query_as::<_, Loan>(
            "UPDATE loans SET return_date = ? WHERE id = ? AND return_date IS NULL RETURNING *",
        )
        .bind(Utc::now())
        .bind(loan_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE books
            SET available_copies = MIN(available_copies + 1, total_copies)
            WHERE id = ?
            "#,
        )
        .bind(loan.book_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(loan)
    }
}

fn with_overdue_flag(mut loans: Vec<OpenLoan>) -> Vec<OpenLoan> {
    let now = Utc::now();
    for loan in &mut loans {
        loan.is_overdue = is_past_due(loan.due_date, now);
    }
    loans
}
