use crate::{
    error::CommandError,
    model::{Command, DatePolicy, ExpenseRequest},
    ports::{Clock, CommandParser},
};
use chrono::NaiveDate;
use splitbill_domain::{Expense, Ledger, Money, NewExpense, Transfer};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub enum CommandOutcome<'a> {
    ExpenseAdded(&'a Expense),
    Transactions(Vec<Transfer<'a>>),
    Summary(&'a [Expense]),
    Help,
    Cleared,
    Unrecognized,
    Rejected(CommandError),
}

#[derive(Clone, Copy)]
pub struct CommandProcessor<'a> {
    parser: &'a dyn CommandParser,
    clock: &'a dyn Clock,
    date_policy: DatePolicy,
}

impl<'a> CommandProcessor<'a> {
    pub fn new(parser: &'a dyn CommandParser, clock: &'a dyn Clock) -> Self {
        Self {
            parser,
            clock,
            date_policy: DatePolicy::default(),
        }
    }

    pub fn with_date_policy(mut self, date_policy: DatePolicy) -> Self {
        self.date_policy = date_policy;
        self
    }

    pub fn date_policy(&self) -> DatePolicy {
        self.date_policy
    }

    /// Applies one line of input to `ledger`.
    pub fn process<'l>(&self, ledger: &'l mut Ledger, input: &str) -> CommandOutcome<'l> {
        let command = self.parser.parse(input);
        tracing::debug!(?command, "classified command");

        match command {
            Command::AddExpense(request) => match self.add_expense(ledger, request) {
                Ok(expense) => CommandOutcome::ExpenseAdded(expense),
                Err(err) => {
                    tracing::warn!(%err, "rejected expense");
                    CommandOutcome::Rejected(err)
                }
            },
            Command::ShowBalance => CommandOutcome::Transactions(ledger.get_transactions()),
            Command::ShowSummary => CommandOutcome::Summary(ledger.expenses()),
            Command::Help => CommandOutcome::Help,
            Command::Clear => {
                ledger.reset();
                CommandOutcome::Cleared
            }
            Command::Unknown => CommandOutcome::Unrecognized,
        }
    }

    fn add_expense<'l>(
        &self,
        ledger: &'l mut Ledger,
        request: ExpenseRequest<'_>,
    ) -> Result<&'l Expense, CommandError> {
        let amount: Money = request
            .amount
            .parse()
            .map_err(|_| CommandError::InvalidAmount(request.amount.to_string()))?;
        let date = self.resolve_date(request.date)?;

        ledger
            .add_expense(
                NewExpense {
                    paid_by: request.payer,
                    amount,
                    description: request.description,
                    split_among: request.split_among,
                    date,
                },
                self.clock.today(),
            )
            .map_err(|err| CommandError::from_ledger(err, request.amount))
    }

    fn resolve_date(&self, raw: Option<&str>) -> Result<Option<NaiveDate>, CommandError> {
        let Some(raw) = raw else {
            return Ok(None);
        };

        match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
            Ok(date) => Ok(Some(date)),
            Err(_) => match self.date_policy {
                DatePolicy::Lenient => {
                    tracing::warn!(input = raw, "unparsable date, using processing date");
                    Ok(None)
                }
                DatePolicy::Strict => Err(CommandError::InvalidDate(raw.to_string())),
            },
        }
    }
}
