use crate::model::Command;
use chrono::NaiveDate;

pub trait CommandParser: Send + Sync {
    fn parse<'a>(&self, input: &'a str) -> Command<'a>;
}

/// Source of the processing date used for undated expenses.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
