#![warn(clippy::uninlined_format_args)]

pub mod clock;
pub mod parser;

pub use clock::SystemClock;
pub use parser::NomCommandParser;
