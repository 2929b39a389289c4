#![warn(clippy::uninlined_format_args)]

pub mod command_processor;
pub mod error;
pub mod model;
pub mod ports;

pub use command_processor::{CommandOutcome, CommandProcessor};
pub use error::{CommandError, UnknownDatePolicy};
pub use model::{Command, DatePolicy, ExpenseRequest};
pub use ports::{Clock, CommandParser};
