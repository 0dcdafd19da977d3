//! Member (borrower) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Member record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub id: i64,
    pub name: String,
    /// Empty string when no phone was given; older rows may hold NULL
    pub phone: Option<String>,
}

/// Create or update member request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct MemberInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub phone: Option<String>,
}

impl MemberInput {
    pub fn new(name: impl Into<String>, phone: Option<&str>) -> Self {
        Self {
            name: name.into(),
            phone: phone.map(str::to_string),
        }
    }

    /// Trim fields; an absent phone is stored as an empty string
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: Some(self.phone.as_deref().unwrap_or("").trim().to_string()),
        }
    }
}

/// Member search parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct MemberQuery {
    /// Case-insensitive substring matched against name or phone
    pub search: Option<String>,
}
