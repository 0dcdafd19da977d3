//! Data models for Bibliomanager

pub mod book;
pub mod loan;
pub mod member;

// Re-export commonly used types
pub use book::{Book, BookInput, BookQuery};
pub use loan::{CreateLoan, Loan, LoanStatus, OpenLoan};
pub use member::{Member, MemberInput, MemberQuery};
