//! Bibliomanager
//!
//! Books, members and loans of a small library, with copy-availability and
//! referential rules enforced in one transaction per operation. The HTTP
//! adapter in [`api`] is one possible presentation layer over [`services`].

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
