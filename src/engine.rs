use crate::clock::Clock;
use crate::dto::{CommandRow, CommandType};
use crate::model::{Money, Transaction, TransactionId};
use crate::stores::TransactionStore;
use crate::Error;

#[derive(Debug)]
enum Command {
    Add(Transaction),
    Update(Transaction),
    Delete(TransactionId),
}

/// Applies parsed command rows to a [`TransactionStore`].
pub struct Engine<C> {
    store: TransactionStore<C>,
}

impl<C: Clock> Engine<C> {
    pub fn new(clock: C) -> Self {
        Self {
            store: TransactionStore::with_clock(clock),
        }
    }

    fn validate_and_parse_command(row: CommandRow) -> Result<Command, Error> {
        match row.cmd_type {
            CommandType::Add => Ok(Command::Add(Self::parse_transaction(row)?)),
            CommandType::Update => Ok(Command::Update(Self::parse_transaction(row)?)),
            CommandType::Delete => Ok(Command::Delete(row.id)),
        }
    }

    fn parse_transaction(row: CommandRow) -> Result<Transaction, Error> {
        let amount = row.amount.ok_or(Error::InvalidCommand("amount"))?;
        let currency = row.currency.ok_or(Error::InvalidCommand("currency"))?;
        let date = row.date.ok_or(Error::InvalidCommand("date"))?;
        Ok(Transaction {
            id: row.id,
            money: Money::new(amount, currency),
            date,
            description: row.description,
        })
    }

    pub fn process_command(&mut self, row: CommandRow) -> Result<(), Error> {
        match Self::validate_and_parse_command(row)? {
            Command::Add(transaction) => self.store.try_add(transaction),
            Command::Update(transaction) => self.store.try_update(transaction),
            Command::Delete(id) => self.store.try_delete(id),
        }
    }

    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.store.get_all().iter()
    }

    pub fn into_store(self) -> TransactionStore<C> {
        self.store
    }
}
