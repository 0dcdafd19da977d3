//! Books repository for database operations

use sqlx::{Pool, Sqlite};

use super::SearchFilter;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// List books whose title or author contains `search`, newest first
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<Book>> {
        let filter = SearchFilter::new(search);

        let books = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .filter(|b| filter.matches([b.title.as_str(), b.author.as_str()]))
            .collect();

        Ok(books)
    }

    /// Insert a book with every copy available
    pub async fn create(&self, data: &BookInput) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, total_copies, available_copies)
            VALUES (?1, ?2, ?3, ?3)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(data.total_copies)
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }

    /// Update a book.
    ///
    /// When the new total is below the stored available count, available is
    /// clamped down to the new total. Raising the total leaves available as is.
    pub async fn update(&self, id: i64, data: &BookInput) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let available = sqlx::query_scalar::<_, i64>("SELECT available_copies FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        let available = clamp_available(available, data.total_copies);

        let book = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = ?, author = ?, total_copies = ?, available_copies = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(data.total_copies)
        .bind(available)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(book)
    }

    /// Delete a book that has no open loan. Its returned loans go with it.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let open_loans: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM loans WHERE book_id = ? AND return_date IS NULL",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        if open_loans > 0 {
            return Err(AppError::Conflict(format!(
                "Book {} is referenced by {} open loan(s)",
                id, open_loans
            )));
        }

        sqlx::query("DELETE FROM loans WHERE book_id = ? AND return_date IS NOT NULL")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }
}

/// Keep `available <= total` after an edit of the total
fn clamp_available(available: i64, total: i64) -> i64 {
    available.min(total).max(0)
}
