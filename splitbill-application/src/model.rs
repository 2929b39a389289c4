use crate::error::UnknownDatePolicy;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRequest<'a> {
    pub payer: &'a str,
    pub amount: &'a str,
    pub description: &'a str,
    pub split_among: Option<Vec<&'a str>>,
    pub date: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    AddExpense(ExpenseRequest<'a>),
    ShowBalance,
    ShowSummary,
    Help,
    Clear,
    Unknown,
}

/// What to do with a date that does not parse as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatePolicy {
    /// Record the expense on the processing date.
    #[default]
    Lenient,
    /// Reject the command.
    Strict,
}

impl FromStr for DatePolicy {
    type Err = UnknownDatePolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => Err(UnknownDatePolicy(s.to_string())),
        }
    }
}
