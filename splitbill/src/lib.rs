#![warn(clippy::uninlined_format_args)]

pub mod bootstrap;
pub mod session;

pub use bootstrap::{AppConfig, ConfigError};
pub use session::{Session, SharedSession};
