use crate::text_table::{Alignment, TextTableBuilder};
use splitbill_domain::{BalanceStatus, Balances, Expense};
use splitbill_i18n as i18n;
use std::borrow::Cow;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct BalancePresenter;

impl BalancePresenter {
    /// `Person | Balance | Status`, one row per participant in roster order.
    pub fn render(balances: &Balances<'_>) -> String {
        if balances.is_empty() {
            return i18n::NO_EXPENSES.to_string();
        }

        let headers = [
            Cow::Borrowed(i18n::PERSON),
            Cow::Borrowed(i18n::BALANCE),
            Cow::Borrowed(i18n::STATUS),
        ];
        TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right, Alignment::Left])
            .headers(&headers)
            .rows(balances.iter().map(|(&name, balance)| {
                [
                    Cow::Borrowed(name),
                    Cow::Owned(format!("${balance}")),
                    Cow::Borrowed(status_label(balance.balance_status())),
                ]
            }))
            .build()
    }
}

fn status_label(status: BalanceStatus) -> &'static str {
    match status {
        BalanceStatus::Settled => i18n::SETTLED,
        BalanceStatus::IsOwed => i18n::IS_OWED,
        BalanceStatus::Owes => i18n::OWES,
    }
}

pub struct HistoryPresenter;

impl HistoryPresenter {
    /// `Date | Description | Amount | Paid By | Split Among` in entry order.
    pub fn render(expenses: &[Expense]) -> String {
        if expenses.is_empty() {
            return i18n::NO_EXPENSES.to_string();
        }

        let headers = [
            Cow::Borrowed(i18n::DATE),
            Cow::Borrowed(i18n::DESCRIPTION),
            Cow::Borrowed(i18n::AMOUNT),
            Cow::Borrowed(i18n::PAID_BY),
            Cow::Borrowed(i18n::SPLIT_AMONG),
        ];
        TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Left,
                Alignment::Right,
                Alignment::Left,
                Alignment::Left,
            ])
            .headers(&headers)
            .rows(expenses.iter().map(|expense| {
                [
                    Cow::Owned(expense.date().format(DATE_FORMAT).to_string()),
                    Cow::Borrowed(expense.description()),
                    Cow::Owned(format!("${}", expense.amount())),
                    Cow::Borrowed(expense.paid_by()),
                    Cow::Owned(expense.split_among().join(", ")),
                ]
            }))
            .build()
    }
}
