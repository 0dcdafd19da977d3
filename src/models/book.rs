//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Book record.
///
/// `available_copies` is the number of copies currently on the shelf and
/// always stays within `0..=total_copies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub total_copies: i64,
    pub available_copies: i64,
}

/// Create or update book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BookInput {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(range(min = 0, message = "Total copies must be >= 0"))]
    pub total_copies: i64,
}

impl BookInput {
    pub fn new(title: impl Into<String>, author: impl Into<String>, total_copies: i64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            total_copies,
        }
    }

    /// Trim text fields before validation and storage
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            total_copies: self.total_copies,
        }
    }
}

/// Book search parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Case-insensitive substring matched against title or author
    pub search: Option<String>,
}
