//! Domain-specific errors for the transaction store.
//!
//! Each variant names the rule a record or command broke:
//! - Validation errors (duplicate id, negative amount, future date)
//! - Lookup errors (no record with the given id)
//! - Malformed commands (a required column is empty)
//!
//! These errors represent business logic failures rather than
//! technical errors like I/O or parsing issues.

use chrono::NaiveDateTime;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    #[error("a transaction with this id is already stored")]
    DuplicateTransaction,

    #[error("transaction amount must not be negative")]
    AmountMustBeNonNegative,

    /// Transactions record events that have already happened.
    #[error("{0} is a date in the future, which is not allowed")]
    FutureDate(NaiveDateTime),

    #[error("no transaction with this id is stored")]
    TransactionNotFound,

    #[error("command is missing a required field: {0}")]
    InvalidCommand(&'static str),
}
