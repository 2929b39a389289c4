use crate::{
    error::LedgerError,
    model::{Balances, Expense, NewExpense, Transfer},
    services::{BalanceAccumulator, SettlementCalculator},
};
use chrono::NaiveDate;
use indexmap::IndexMap;

/// Participants and the append-only expense log of one session.
///
/// Names are matched case-insensitively; the roster keeps the first spelling seen.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    participants: IndexMap<String, String>,
    expenses: Vec<Expense>,
}

fn name_key(name: &str) -> String {
    name.to_lowercase()
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Known participants in first-seen order.
    pub fn participants(&self) -> impl Iterator<Item = &str> + '_ {
        self.participants.values().map(String::as_str)
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Records an expense and registers everyone involved.
    ///
    /// Without an explicit split group the cost is shared by the roster as it
    /// stands at call time. The payer always takes a share. `processing_date`
    /// is used when the request carries no date.
    pub fn add_expense(
        &mut self,
        request: NewExpense<'_>,
        processing_date: NaiveDate,
    ) -> Result<&Expense, LedgerError> {
        let paid_by = request.paid_by.trim();
        if paid_by.is_empty() {
            return Err(LedgerError::BlankParticipant);
        }
        if !request.amount.is_valid_expense_amount() {
            return Err(LedgerError::InvalidAmount(request.amount));
        }

        let paid_by = self.spelling_of(paid_by).to_string();
        let payer_key = name_key(&paid_by);

        let mut split_among: Vec<String> = match request.split_among {
            Some(names) => {
                let mut keys: Vec<String> = Vec::with_capacity(names.len() + 1);
                let mut group: Vec<String> = Vec::with_capacity(names.len() + 1);
                for name in names.into_iter().map(str::trim) {
                    if name.is_empty() {
                        continue;
                    }
                    let key = name_key(name);
                    if keys.contains(&key) {
                        continue;
                    }
                    let spelling = if key == payer_key {
                        paid_by.clone()
                    } else {
                        self.spelling_of(name).to_string()
                    };
                    keys.push(key);
                    group.push(spelling);
                }
                if group.is_empty() {
                    return Err(LedgerError::BlankSplitGroup);
                }
                group
            }
            None => self.participants.values().cloned().collect(),
        };
        if split_among.is_empty() {
            return Err(LedgerError::EmptySplitGroup);
        }
        if !split_among
            .iter()
            .any(|member| name_key(member) == payer_key)
        {
            split_among.push(paid_by.clone());
        }

        let amount_per_person = request
            .amount
            .split(split_among.len())
            .ok_or(LedgerError::EmptySplitGroup)?;

        self.register(&paid_by);
        for member in &split_among {
            self.register(member);
        }

        let expense = Expense::new(
            request.date.unwrap_or(processing_date),
            paid_by,
            request.amount,
            request.description.trim().to_string(),
            split_among,
            amount_per_person,
        );
        tracing::info!(
            paid_by = expense.paid_by(),
            amount = %expense.amount(),
            shares = expense.split_among().len(),
            "recorded expense"
        );

        self.expenses.push(expense);
        let index = self.expenses.len() - 1;
        Ok(&self.expenses[index])
    }

    /// Roster spelling of `name`, or `name` itself when it is new.
    fn spelling_of<'n>(&'n self, name: &'n str) -> &'n str {
        self.participants
            .get(&name_key(name))
            .map_or(name, String::as_str)
    }

    fn register(&mut self, name: &str) {
        self.participants
            .entry(name_key(name))
            .or_insert_with(|| name.to_string());
    }

    pub fn calculate_balances(&self) -> Balances<'_> {
        let mut accumulator = BalanceAccumulator::new(self.participants());
        for expense in &self.expenses {
            accumulator.apply(expense);
        }
        accumulator.into_balances()
    }

    pub fn get_transactions(&self) -> Vec<Transfer<'_>> {
        SettlementCalculator.calculate(&self.calculate_balances())
    }

    pub fn reset(&mut self) {
        tracing::info!(
            expenses = self.expenses.len(),
            participants = self.participants.len(),
            "ledger reset"
        );
        self.expenses.clear();
        self.participants.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Money;
    use rstest::{fixture, rstest};

    fn processing_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    fn expense<'a>(
        paid_by: &'a str,
        amount: i64,
        split_among: Option<Vec<&'a str>>,
    ) -> NewExpense<'a> {
        NewExpense {
            paid_by,
            amount: Money::from_i64(amount),
            description: "dinner",
            split_among,
            date: None,
        }
    }

    #[fixture]
    fn dinner_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .add_expense(
                expense("John", 50, Some(vec!["John", "Mary", "Bob"])),
                processing_date(),
            )
            .unwrap();
        ledger
    }

    #[rstest]
    fn scenario_three_way_dinner(dinner_ledger: Ledger) {
        let balances = dinner_ledger.calculate_balances();
        assert_eq!(balances["John"].to_string(), "33.33");
        assert_eq!(balances["Mary"].to_string(), "-16.67");
        assert_eq!(balances["Bob"].to_string(), "-16.67");

        let transfers = dinner_ledger.get_transactions();
        let pairs: Vec<_> = transfers.iter().map(|t| (t.from, t.to)).collect();
        assert_eq!(pairs, vec![("Mary", "John"), ("Bob", "John")]);
    }

    #[rstest]
    fn payer_is_appended_to_split_group() {
        let mut ledger = Ledger::new();
        let recorded = ledger
            .add_expense(expense("Alex", 75, Some(vec!["Taylor"])), processing_date())
            .unwrap();

        assert_eq!(recorded.split_among(), ["Taylor", "Alex"]);
        assert_eq!(recorded.amount_per_person().to_string(), "37.50");
        assert_eq!(
            ledger.participants().collect::<Vec<_>>(),
            vec!["Alex", "Taylor"]
        );
    }

    #[rstest]
    fn split_names_are_trimmed_and_deduplicated() {
        let mut ledger = Ledger::new();
        let recorded = ledger
            .add_expense(
                expense("Ann", 30, Some(vec![" Ben", "Ann ", "Ben", "", "Cat"])),
                processing_date(),
            )
            .unwrap();

        assert_eq!(recorded.split_among(), ["Ben", "Ann", "Cat"]);
        assert_eq!(recorded.amount_per_person(), Money::from_i64(10));
    }

    #[rstest]
    fn default_split_uses_roster_at_call_time(mut dinner_ledger: Ledger) {
        let recorded = dinner_ledger
            .add_expense(expense("Mary", 30, None), processing_date())
            .unwrap();
        assert_eq!(recorded.split_among(), ["John", "Mary", "Bob"]);

        dinner_ledger
            .add_expense(expense("Zoe", 40, Some(vec!["Zoe"])), processing_date())
            .unwrap();
        let recorded = dinner_ledger
            .add_expense(expense("Bob", 40, None), processing_date())
            .unwrap();
        assert_eq!(recorded.split_among(), ["John", "Mary", "Bob", "Zoe"]);
    }

    #[rstest]
    fn payer_joins_default_split_when_new() {
        let mut ledger = Ledger::new();
        ledger
            .add_expense(expense("Ann", 20, Some(vec!["Ben"])), processing_date())
            .unwrap();
        let recorded = ledger
            .add_expense(expense("Cat", 30, None), processing_date())
            .unwrap();
        assert_eq!(recorded.split_among(), ["Ann", "Ben", "Cat"]);
    }

    #[rstest]
    #[case::zero(expense("Ann", 0, Some(vec!["Ben"])), LedgerError::InvalidAmount(Money::ZERO))]
    #[case::negative(
        expense("Ann", -5, Some(vec!["Ben"])),
        LedgerError::InvalidAmount(Money::from_i64(-5))
    )]
    #[case::blank_payer(expense("  ", 10, Some(vec!["Ben"])), LedgerError::BlankParticipant)]
    #[case::empty_group(expense("Ann", 10, Some(vec![])), LedgerError::BlankSplitGroup)]
    #[case::blank_group(expense("Ann", 10, Some(vec![" ", ""])), LedgerError::BlankSplitGroup)]
    #[case::no_roster(expense("Ann", 10, None), LedgerError::EmptySplitGroup)]
    fn rejects_invalid_expenses(#[case] request: NewExpense<'static>, #[case] expected: LedgerError) {
        let mut ledger = Ledger::new();
        let err = ledger.add_expense(request, processing_date()).unwrap_err();
        assert_eq!(err, expected);
        assert!(ledger.is_empty());
        assert_eq!(ledger.participants().count(), 0);
    }

    #[rstest]
    fn names_differing_in_case_are_one_participant() {
        let mut ledger = Ledger::new();
        let recorded = ledger
            .add_expense(
                expense("Sarah", 30, Some(vec!["sarah", "Mike", "MIKE"])),
                processing_date(),
            )
            .unwrap();
        assert_eq!(recorded.split_among(), ["Sarah", "Mike"]);
        assert_eq!(recorded.amount_per_person(), Money::from_i64(15));

        let transfers = ledger.get_transactions();
        let pairs: Vec<_> = transfers.iter().map(|t| (t.from, t.to)).collect();
        assert_eq!(pairs, vec![("Mike", "Sarah")]);
    }

    #[rstest]
    fn roster_keeps_first_spelling(mut dinner_ledger: Ledger) {
        let recorded = dinner_ledger
            .add_expense(expense("MARY", 20, Some(vec!["bob"])), processing_date())
            .unwrap();

        assert_eq!(recorded.paid_by(), "Mary");
        assert_eq!(recorded.split_among(), ["Bob", "Mary"]);
        assert_eq!(
            dinner_ledger.participants().collect::<Vec<_>>(),
            vec!["John", "Mary", "Bob"]
        );
        let balances = dinner_ledger.calculate_balances();
        assert_eq!(balances.len(), 3);
        assert_eq!(balances["Bob"].to_string(), "-26.67");
    }

    #[rstest]
    fn explicit_date_wins_over_processing_date() {
        let mut ledger = Ledger::new();
        let date = NaiveDate::from_ymd_opt(2023, 12, 24).unwrap();
        let recorded = ledger
            .add_expense(
                NewExpense {
                    date: Some(date),
                    ..expense("Ann", 10, Some(vec!["Ben"]))
                },
                processing_date(),
            )
            .unwrap();
        assert_eq!(recorded.date(), date);
    }

    #[rstest]
    fn reset_returns_to_fresh_state(mut dinner_ledger: Ledger) {
        dinner_ledger.reset();

        assert!(dinner_ledger.is_empty());
        assert!(dinner_ledger.calculate_balances().is_empty());
        assert!(dinner_ledger.get_transactions().is_empty());
    }

    #[rstest]
    fn empty_ledger_has_no_transactions() {
        let ledger = Ledger::new();
        assert!(ledger.calculate_balances().is_empty());
        assert!(ledger.get_transactions().is_empty());
    }
}
