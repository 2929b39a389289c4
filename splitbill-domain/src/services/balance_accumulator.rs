use crate::model::{Balances, Expense, Money};

/// Folds expenses into per-participant net balances.
pub struct BalanceAccumulator<'a> {
    balances: Balances<'a>,
}

impl<'a> BalanceAccumulator<'a> {
    pub fn new<I>(participants: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let balances = participants
            .into_iter()
            .map(|name| (name, Money::ZERO))
            .collect();
        Self { balances }
    }

    /// Credits the payer with the full amount and debits every split member one share.
    pub fn apply(&mut self, expense: &'a Expense) {
        *self
            .balances
            .entry(expense.paid_by())
            .or_insert(Money::ZERO) += expense.amount();

        let share = expense.amount_per_person();
        for member in expense.split_among() {
            *self
                .balances
                .entry(member.as_str())
                .or_insert(Money::ZERO) -= share;
        }
    }

    pub fn balances(&self) -> &Balances<'a> {
        &self.balances
    }

    pub fn into_balances(self) -> Balances<'a> {
        self.balances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ledger, NewExpense};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn participants_without_expenses_start_at_zero() {
        let accumulator = BalanceAccumulator::new(["Ann", "Ben"]);
        let balances = accumulator.into_balances();
        assert_eq!(balances.len(), 2);
        assert!(balances.values().all(|b| *b == Money::ZERO));
    }

    #[test]
    fn payer_nets_their_own_share() {
        let mut ledger = Ledger::new();
        ledger
            .add_expense(
                NewExpense {
                    paid_by: "Ann",
                    amount: Money::from_i64(90),
                    description: "cabin",
                    split_among: Some(vec!["Ann", "Ben", "Cat"]),
                    date: None,
                },
                date(),
            )
            .unwrap();

        let mut accumulator = BalanceAccumulator::new(ledger.participants());
        for expense in ledger.expenses() {
            accumulator.apply(expense);
        }

        let balances = accumulator.balances();
        assert_eq!(balances["Ann"], Money::from_i64(60));
        assert_eq!(balances["Ben"], Money::from_i64(-30));
        assert_eq!(balances["Cat"], Money::from_i64(-30));
    }
}
