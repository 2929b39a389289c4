use crate::model::{Balances, Money, Transfer};

/// Greedy debt clearing.
///
/// Debtors are visited from the largest debt down. Each one pays the creditors
/// in order of their remaining credit (largest first) until the debt is gone.
/// Ties keep the order of `balances`, which makes the plan reproducible.
pub struct SettlementCalculator;

impl SettlementCalculator {
    pub fn calculate<'a>(&self, balances: &Balances<'a>) -> Vec<Transfer<'a>> {
        let mut debtors: Vec<(&'a str, Money)> = balances
            .iter()
            .filter(|(_, balance)| balance.signum() < 0)
            .map(|(&name, &balance)| (name, balance.abs()))
            .collect();
        let mut creditors: Vec<(&'a str, Money)> = balances
            .iter()
            .filter(|(_, balance)| balance.signum() > 0)
            .map(|(&name, &balance)| (name, balance))
            .collect();

        debtors.sort_by(|a, b| b.1.cmp(&a.1));

        let mut transfers = Vec::new();
        for (debtor, debt) in debtors {
            let mut remaining = debt;

            let mut order: Vec<usize> = (0..creditors.len()).collect();
            order.sort_by(|&a, &b| creditors[b].1.cmp(&creditors[a].1));

            for idx in order {
                if remaining.is_dust() {
                    break;
                }
                let (creditor, credit) = &mut creditors[idx];
                if credit.is_dust() {
                    continue;
                }

                let amount = remaining.min(*credit);
                remaining -= amount;
                *credit -= amount;
                transfers.push(Transfer {
                    from: debtor,
                    to: *creditor,
                    amount,
                });
            }
        }

        tracing::debug!(transfers = transfers.len(), "computed settlement plan");
        transfers
    }
}
