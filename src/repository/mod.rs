//! Repository layer for database operations

pub mod books;
pub mod loans;
pub mod members;

use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};

use crate::{config::DatabaseConfig, error::AppResult};

/// Main repository struct holding the store handle
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
    pub loans: loans::LoansRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            members: members::MembersRepository::new(pool.clone()),
            loans: loans::LoansRepository::new(pool.clone()),
            pool,
        }
    }

    /// Open the store and create the schema if absent.
    ///
    /// The pool holds a single long-lived connection: there is one writer, and
    /// an in-memory database lives exactly as long as that connection.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;

        Ok(Self::new(pool))
    }

    /// Release the store connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Case-insensitive substring filter for list searches.
///
/// Folding happens in Rust with full Unicode lowercasing; SQLite's `LOWER`
/// and `LIKE` only fold ASCII.
pub(crate) struct SearchFilter {
    needle: Option<String>,
}

impl SearchFilter {
    /// Blank or absent search text matches everything
    pub(crate) fn new(search: Option<&str>) -> Self {
        let needle = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        Self { needle }
    }

    /// True when any of `fields` contains the search text
    pub(crate) fn matches<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => fields
                .into_iter()
                .any(|field| field.to_lowercase().contains(needle.as_str())),
        }
    }
}
