#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod ledger;
pub mod model;
pub mod services;

pub use error::LedgerError;
pub use ledger::Ledger;
pub use model::{
    BalanceStatus, Balances, Expense, Money, NewExpense, ParseAmountError, Transfer,
};
pub use services::{BalanceAccumulator, SettlementCalculator};
