use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

/// Net position per participant, in roster (first-seen) order.
pub type Balances<'a> = IndexMap<&'a str, Money>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid amount '{input}'")]
pub struct ParseAmountError {
    input: String,
}

impl ParseAmountError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceStatus {
    Settled,
    IsOwed,
    Owes,
}

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    /// `units * 10^-scale`, e.g. `from_scaled(1650, 2)` is 16.50.
    pub fn from_scaled(units: i64, scale: u32) -> Self {
        Self(Decimal::new(units, scale))
    }

    pub fn decimal(self) -> Decimal {
        self.0
    }

    /// Largest amount a single expense may carry.
    pub fn max_expense() -> Self {
        Self(Decimal::from(1_000_000_000_000_i64))
    }

    /// Residue left by repeated division; anything smaller counts as nothing owed.
    pub fn dust() -> Self {
        Self(Decimal::new(1, 9))
    }

    /// Display tolerance under which a balance is reported as settled.
    pub fn settled_tolerance() -> Self {
        Self(Decimal::new(1, 2))
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_dust(self) -> bool {
        self.abs() < Self::dust()
    }

    pub fn is_settled(self) -> bool {
        self.abs() < Self::settled_tolerance()
    }

    /// Sign of the amount, with dust collapsed to zero.
    pub fn signum(self) -> i64 {
        if self.is_dust() {
            0
        } else if self.0.is_sign_negative() {
            -1
        } else {
            1
        }
    }

    pub fn is_valid_expense_amount(self) -> bool {
        self.0 > Decimal::ZERO && self <= Self::max_expense()
    }

    /// Equal share of `self` across `parts` people.
    pub fn split(self, parts: usize) -> Option<Self> {
        self.0.checked_div(Decimal::from(parts)).map(Self)
    }

    pub fn balance_status(self) -> BalanceStatus {
        if self.is_settled() {
            BalanceStatus::Settled
        } else if self.0.is_sign_positive() {
            BalanceStatus::IsOwed
        } else {
            BalanceStatus::Owes
        }
    }

    /// Rounded to cents for display, halves to even.
    pub fn to_cents(self) -> Decimal {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        if rounded.is_zero() {
            Decimal::ZERO
        } else {
            rounded
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.to_cents())
    }
}

impl FromStr for Money {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Self)
            .map_err(|_| ParseAmountError {
                input: s.to_string(),
            })
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Request to record an expense. `split_among: None` means "everyone known so far".
#[derive(Clone, Debug, PartialEq)]
pub struct NewExpense<'a> {
    pub paid_by: &'a str,
    pub amount: Money,
    pub description: &'a str,
    pub split_among: Option<Vec<&'a str>>,
    pub date: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    date: NaiveDate,
    paid_by: String,
    amount: Money,
    description: String,
    split_among: Vec<String>,
    amount_per_person: Money,
}

impl Expense {
    pub(crate) fn new(
        date: NaiveDate,
        paid_by: String,
        amount: Money,
        description: String,
        split_among: Vec<String>,
        amount_per_person: Money,
    ) -> Self {
        Self {
            date,
            paid_by,
            amount,
            description,
            split_among,
            amount_per_person,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn paid_by(&self) -> &str {
        &self.paid_by
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn split_among(&self) -> &[String] {
        &self.split_among
    }

    pub fn amount_per_person(&self) -> Money {
        self.amount_per_person
    }
}

/// Suggested payment: `from` pays `amount` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub amount: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::whole("50", Money::from_i64(50))]
    #[case::fractional("12.75", Money::from_scaled(1275, 2))]
    #[case::padded(" 7.5 ", Money::from_scaled(75, 1))]
    fn parses_amounts(#[case] input: &str, #[case] expected: Money) {
        assert_eq!(input.parse::<Money>(), Ok(expected));
    }

    #[rstest]
    #[case::word("ten")]
    #[case::empty("")]
    fn rejects_non_numeric_amounts(#[case] input: &str) {
        let err = input.parse::<Money>().unwrap_err();
        assert_eq!(err.input(), input);
    }

    #[rstest]
    #[case::third(Money::from_i64(50).split(3).unwrap(), "16.67")]
    #[case::negative(-Money::from_scaled(16_675, 3), "-16.68")]
    #[case::half_rounds_down_to_even(Money::from_scaled(125, 3), "0.12")]
    #[case::half_rounds_up_to_even(Money::from_scaled(135, 3), "0.14")]
    #[case::negative_half_to_even(-Money::from_scaled(16_665, 3), "-16.66")]
    #[case::negative_dust(-Money::from_scaled(1, 4), "0.00")]
    #[case::whole(Money::from_i64(15), "15.00")]
    fn displays_two_decimals(#[case] money: Money, #[case] expected: &str) {
        assert_eq!(money.to_string(), expected);
    }

    #[rstest]
    #[case::zero(Money::ZERO, false)]
    #[case::negative(Money::from_i64(-1), false)]
    #[case::positive(Money::from_scaled(1, 2), true)]
    #[case::ceiling(Money::max_expense(), true)]
    #[case::above_ceiling(Money::max_expense() + Money::from_i64(1), false)]
    fn validates_expense_amounts(#[case] money: Money, #[case] expected: bool) {
        assert_eq!(money.is_valid_expense_amount(), expected);
    }

    #[rstest]
    #[case::settled(Money::from_scaled(-4, 3), BalanceStatus::Settled)]
    #[case::owed(Money::from_scaled(3333, 2), BalanceStatus::IsOwed)]
    #[case::owes(Money::from_scaled(-1667, 2), BalanceStatus::Owes)]
    fn classifies_balances(#[case] money: Money, #[case] expected: BalanceStatus) {
        assert_eq!(money.balance_status(), expected);
    }

    #[test]
    fn split_by_zero_is_none() {
        assert_eq!(Money::from_i64(10).split(0), None);
    }

    #[test]
    fn signum_ignores_dust() {
        let third = Money::from_i64(50).split(3).unwrap();
        let residue = Money::from_i64(50) - third - third - third;
        assert_eq!(residue.signum(), 0);
        assert_eq!(third.signum(), 1);
        assert_eq!((-third).signum(), -1);
    }
}
