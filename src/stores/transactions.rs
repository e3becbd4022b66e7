//! In-memory transaction record storage.
//!
//! Records are kept in insertion order and looked up by linear scan.
//! `add` checks for duplicate ids, negative amounts and future dates;
//! `update` only checks the amount.

use crate::clock::{Clock, SystemClock};
use crate::model::{Transaction, TransactionId};
use crate::Error;

#[derive(Debug, Default)]
pub struct TransactionStore<C = SystemClock> {
    transactions: Vec<Transaction>,
    clock: C,
}

impl TransactionStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> TransactionStore<C> {
    /// Creates an empty store that validates dates against `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            transactions: Vec::new(),
            clock,
        }
    }

    /// Appends a transaction, or returns the first rule it breaks.
    /// The store is left untouched on error.
    pub fn try_add(&mut self, transaction: Transaction) -> Result<(), Error> {
        if self.contains(transaction.id) {
            return Err(Error::DuplicateTransaction);
        }
        if transaction.money.is_negative() {
            return Err(Error::AmountMustBeNonNegative);
        }
        // Read fresh on every call.
        if transaction.date > self.clock.now() {
            return Err(Error::FutureDate(transaction.date));
        }
        tracing::debug!(id = transaction.id, "added transaction");
        self.transactions.push(transaction);
        Ok(())
    }

    pub fn add(&mut self, transaction: Transaction) -> bool {
        let id = transaction.id;
        self.try_add(transaction)
            .inspect_err(|err| tracing::debug!(id, %err, "rejected add"))
            .is_ok()
    }

    /// All stored transactions in insertion order.
    pub fn get_all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// An owned copy of [`Self::get_all`], detached from the store.
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Replaces the first stored transaction with the same id, keeping its position.
    /// Only the amount is validated; the date and other records' ids are not checked.
    pub fn try_update(&mut self, transaction: Transaction) -> Result<(), Error> {
        if transaction.money.is_negative() {
            return Err(Error::AmountMustBeNonNegative);
        }
        let stored = self
            .transactions
            .iter_mut()
            .find(|stored| stored.id == transaction.id)
            .ok_or(Error::TransactionNotFound)?;
        tracing::debug!(id = transaction.id, "updated transaction");
        *stored = transaction;
        Ok(())
    }

    pub fn update(&mut self, transaction: Transaction) -> bool {
        let id = transaction.id;
        self.try_update(transaction)
            .inspect_err(|err| tracing::debug!(id, %err, "rejected update"))
            .is_ok()
    }

    /// Removes every transaction with the given id.
    pub fn try_delete(&mut self, id: TransactionId) -> Result<(), Error> {
        let before = self.transactions.len();
        self.transactions.retain(|stored| stored.id != id);
        let removed = before - self.transactions.len();
        if removed == 0 {
            return Err(Error::TransactionNotFound);
        }
        tracing::debug!(id, removed, "deleted transaction");
        Ok(())
    }

    pub fn delete(&mut self, id: TransactionId) -> bool {
        self.try_delete(id)
            .inspect_err(|err| tracing::debug!(id, %err, "rejected delete"))
            .is_ok()
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.transactions.iter().any(|stored| stored.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    #[cfg(test)]
    fn push_unchecked(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }
}
