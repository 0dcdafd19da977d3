//! Integration tests against an in-memory store

mod api_tests;
mod common;
