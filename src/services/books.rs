//! Book catalog service

use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Book, BookInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a book by ID
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// List books matching `search` on title or author (all when empty)
    pub async fn list_books(&self, search: Option<&str>) -> AppResult<Vec<Book>> {
        tracing::debug!("Listing books, search: {:?}", search);
        self.repository.books.list(search).await
    }

    /// Add a book; every copy starts available
    pub async fn add_book(&self, data: BookInput) -> AppResult<Book> {
        let data = data.normalized();
        data.validate()?;

        let book = self.repository.books.create(&data).await?;
        tracing::info!("Book {} added: {:?} ({} copies)", book.id, book.title, book.total_copies);
        Ok(book)
    }

    /// Edit a book, clamping available copies down to a lowered total
    pub async fn update_book(&self, id: i64, data: BookInput) -> AppResult<Book> {
        let data = data.normalized();
        data.validate()?;

        let book = self.repository.books.update(id, &data).await?;
        tracing::info!(
            "Book {} updated: total {}, available {}",
            book.id,
            book.total_copies,
            book.available_copies
        );
        Ok(book)
    }

    /// Delete a book with no open loan
    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await.inspect_err(|e| {
            tracing::warn!("Book {} not deleted: {}", id, e);
        })?;
        tracing::info!("Book {} deleted", id);
        Ok(())
    }
}
