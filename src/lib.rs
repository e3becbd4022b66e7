mod clock;
mod csv_utils;
mod dto;
mod engine;
mod error;
mod model;
mod runner;
mod stores;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dto::{CommandRow, CommandType, TransactionRow};
pub use engine::Engine;
pub use error::Error;
pub use model::{Money, Transaction, TransactionId};
pub use runner::run;
pub use stores::TransactionStore;
