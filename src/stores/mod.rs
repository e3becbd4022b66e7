//! Storage layer for transaction records ([`TransactionStore`]).
//!
//! Current implementation is optimized for synchronous, direct memory
//! access.

mod transactions;

pub use transactions::TransactionStore;
