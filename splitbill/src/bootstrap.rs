use crate::session::Session;
use splitbill_application::{DatePolicy, UnknownDatePolicy};
use std::env;
use tracing_subscriber::EnvFilter;

const DATE_POLICY_VAR: &str = "SPLITBILL_DATE_POLICY";
const LOG_VAR: &str = "SPLITBILL_LOG";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SPLITBILL_DATE_POLICY: {0}")]
    DatePolicy(#[from] UnknownDatePolicy),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub date_policy: DatePolicy,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            date_policy: DatePolicy::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `.env` (if any) and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let date_policy = match lookup(DATE_POLICY_VAR) {
            Some(raw) => raw.parse()?,
            None => DatePolicy::default(),
        };
        let log_filter = lookup(LOG_VAR)
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            date_policy,
            log_filter,
        })
    }

    pub fn session(&self) -> Session {
        Session::new().with_date_policy(self.date_policy)
    }
}

/// Initialize logging. `RUST_LOG` wins over the configured filter. Output goes
/// to stderr so replies on stdout stay clean.
pub fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
