use chrono::NaiveDateTime;
use rust_decimal::Decimal;

pub type TransactionId = i32;

#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    pub amount: Decimal,
    pub currency: String,
}

impl Money {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

/// A single financial entry. Only `id`, `money.amount` and `date` take part in validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub money: Money,
    pub date: NaiveDateTime,
    pub description: Option<String>,
}
