use splitbill_application::{CommandError, CommandOutcome};
use splitbill_domain::{Expense, Transfer};
use splitbill_i18n as i18n;
use std::fmt::Write as _;

pub struct ResponsePresenter;

impl ResponsePresenter {
    pub fn render(outcome: &CommandOutcome<'_>) -> String {
        match outcome {
            CommandOutcome::ExpenseAdded(expense) => i18n::expense_added(
                expense.description(),
                expense.amount(),
                expense.paid_by(),
                expense.split_among().join(", "),
            ),
            CommandOutcome::Transactions(transfers) => Self::render_transfers(transfers),
            CommandOutcome::Summary(expenses) => Self::render_summary(expenses),
            CommandOutcome::Help => i18n::HELP.to_string(),
            CommandOutcome::Cleared => i18n::EXPENSES_CLEARED.to_string(),
            CommandOutcome::Unrecognized => i18n::UNKNOWN_COMMAND.to_string(),
            CommandOutcome::Rejected(err) => Self::render_error(err),
        }
    }

    pub fn render_transfers(transfers: &[Transfer<'_>]) -> String {
        if transfers.is_empty() {
            return i18n::ALL_SETTLED.to_string();
        }

        let mut reply = String::with_capacity(64 * (transfers.len() + 1));
        reply.push_str(i18n::BALANCE_HEADER);
        for transfer in transfers {
            let _ = write!(
                &mut reply,
                "\n{}",
                i18n::owes(transfer.from, transfer.to, transfer.amount)
            );
        }
        reply
    }

    pub fn render_summary(expenses: &[Expense]) -> String {
        if expenses.is_empty() {
            return i18n::NO_EXPENSES.to_string();
        }

        let mut reply = String::with_capacity(96 * (expenses.len() + 1));
        reply.push_str(i18n::SUMMARY_HEADER);
        for (idx, expense) in expenses.iter().enumerate() {
            let _ = write!(
                &mut reply,
                "\n{}",
                i18n::summary_entry(
                    idx + 1,
                    expense.description(),
                    expense.amount(),
                    expense.paid_by(),
                    expense.split_among().join(", "),
                )
            );
        }
        reply
    }

    pub fn render_error(err: &CommandError) -> String {
        match err {
            CommandError::InvalidAmount(input) => i18n::invalid_amount(input),
            CommandError::InvalidDate(input) => i18n::invalid_date(input),
            CommandError::EmptySplitGroup => i18n::EMPTY_SPLIT_GROUP.to_string(),
            CommandError::BlankSplitGroup => i18n::BLANK_SPLIT_GROUP.to_string(),
            CommandError::BlankParticipant => i18n::BLANK_PARTICIPANT.to_string(),
        }
    }
}
