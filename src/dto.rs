use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

use crate::model::{Transaction, TransactionId};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Add,
    Update,
    Delete,
}

/// One row of the input command log.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CommandRow {
    #[serde(rename = "type")]
    pub cmd_type: CommandType,
    pub id: TransactionId,
    #[serde(deserialize_with = "deserialize_decimal_4dp")]
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub description: Option<String>,
}

/// One row of the output listing.
#[derive(Debug, Serialize, PartialEq)]
pub struct TransactionRow {
    pub id: TransactionId,
    pub amount: Decimal,
    pub currency: String,
    pub date: NaiveDateTime,
    pub description: Option<String>,
}

impl From<&Transaction> for TransactionRow {
    fn from(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id,
            amount: transaction.money.amount,
            currency: transaction.money.currency.clone(),
            date: transaction.date,
            description: transaction.description.clone(),
        }
    }
}

fn deserialize_decimal_4dp<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Decimal>::deserialize(deserializer)
        .map(|opt_dec| opt_dec.map(|dec| dec.round_dp_with_strategy(4, RoundingStrategy::ToZero)))
}
