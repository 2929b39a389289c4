use splitbill_application::{Clock, CommandParser, CommandProcessor, DatePolicy};
use splitbill_domain::{Balances, Expense, Ledger, LedgerError, NewExpense, Transfer};
use splitbill_infrastructure::{NomCommandParser, SystemClock};
use splitbill_presentation::{BalancePresenter, HistoryPresenter, ResponsePresenter};
use std::sync::{PoisonError, RwLock};

/// One expense-splitting conversation: a ledger plus the interpreter wired to it.
pub struct Session {
    ledger: Ledger,
    parser: &'static dyn CommandParser,
    clock: &'static dyn Clock,
    date_policy: DatePolicy,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
            parser: &NomCommandParser,
            clock: &SystemClock,
            date_policy: DatePolicy::default(),
        }
    }

    pub fn with_clock(mut self, clock: &'static dyn Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_date_policy(mut self, date_policy: DatePolicy) -> Self {
        self.date_policy = date_policy;
        self
    }

    fn processor(&self) -> CommandProcessor<'static> {
        CommandProcessor::new(self.parser, self.clock).with_date_policy(self.date_policy)
    }

    /// Runs one line of free text and returns the reply. Never fails.
    pub fn interpret(&mut self, input: &str) -> String {
        let processor = self.processor();
        let outcome = processor.process(&mut self.ledger, input);
        ResponsePresenter::render(&outcome)
    }

    pub fn add_expense(&mut self, request: NewExpense<'_>) -> Result<&Expense, LedgerError> {
        let today = self.clock.today();
        self.ledger.add_expense(request, today)
    }

    pub fn calculate_balances(&self) -> Balances<'_> {
        self.ledger.calculate_balances()
    }

    pub fn get_transactions(&self) -> Vec<Transfer<'_>> {
        self.ledger.get_transactions()
    }

    pub fn expenses(&self) -> &[Expense] {
        self.ledger.expenses()
    }

    pub fn participants(&self) -> impl Iterator<Item = &str> + '_ {
        self.ledger.participants()
    }

    pub fn reset(&mut self) {
        self.ledger.reset();
    }

    pub fn balance_report(&self) -> String {
        BalancePresenter::render(&self.calculate_balances())
    }

    pub fn history_report(&self) -> String {
        HistoryPresenter::render(self.expenses())
    }
}

/// A [`Session`] behind one `RwLock`. Mutations take the write lock, queries
/// the read lock, so readers never observe a half-recorded expense.
#[derive(Default)]
pub struct SharedSession {
    inner: RwLock<Session>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: RwLock::new(session),
        }
    }

    pub fn interpret(&self, input: &str) -> String {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .interpret(input)
    }

    pub fn add_expense(&self, request: NewExpense<'_>) -> Result<(), LedgerError> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .add_expense(request)
            .map(|_| ())
    }

    pub fn reset(&self) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .reset();
    }

    /// Runs `f` against a consistent snapshot of the session.
    pub fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        let session = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    pub fn balance_report(&self) -> String {
        self.read(Session::balance_report)
    }

    pub fn history_report(&self) -> String {
        self.read(Session::history_report)
    }
}
