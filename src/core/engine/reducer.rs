use crate::core::models::{Debt, Expense, Split};
use crate::core::money::{percent_of, round_currency};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;
use uuid::Uuid;

/// `owed[debtor][creditor]`, built fresh for every balance query.
type OwedTable = BTreeMap<Uuid, BTreeMap<Uuid, Decimal>>;

/// Reduces a group's expenses to net pairwise debts.
///
/// Every split whose participant is not the payer adds its (cent-rounded)
/// amount to what that participant owes the payer. Each unordered pair of
/// users is then netted once: the larger direction wins and the difference
/// is emitted, a zero difference emits nothing. The result holds at most one
/// debt per pair, is ordered by the pair's smaller id first and does not
/// depend on the order of `expenses`.
pub fn compute_balances<'a, I>(expenses: I) -> Vec<Debt>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let owed = accumulate(expenses);
    let debts = net_pairs(&owed);
    debug!("Reduced {} debtor(s) to {} debt(s)", owed.len(), debts.len());
    debts
}

fn accumulate<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> OwedTable {
    let mut owed = OwedTable::new();
    for expense in expenses {
        for split in &expense.splits {
            if split.user_id == expense.paid_by {
                continue;
            }
            let Some(amount) = split_amount(expense, split).map(round_currency) else {
                continue;
            };
            if amount.is_zero() {
                continue;
            }
            *owed
                .entry(split.user_id)
                .or_default()
                .entry(expense.paid_by)
                .or_default() += amount;
        }
    }
    owed
}

/// The stored amount, or the percentage share of the expense when a split
/// row carries only a percentage.
fn split_amount(expense: &Expense, split: &Split) -> Option<Decimal> {
    split
        .amount
        .or_else(|| split.percentage.map(|pct| percent_of(pct, expense.amount)))
}

fn net_pairs(owed: &OwedTable) -> Vec<Debt> {
    let pairs: BTreeSet<(Uuid, Uuid)> = owed
        .iter()
        .flat_map(|(&debtor, creditors)| creditors.keys().map(move |&creditor| pair_key(debtor, creditor)))
        .collect();

    pairs
        .into_iter()
        .filter_map(|(low, high)| {
            let net = round_currency(owed_between(owed, low, high) - owed_between(owed, high, low));
            match net.cmp(&Decimal::ZERO) {
                Ordering::Greater => Some(Debt {
                    from: low,
                    to: high,
                    amount: net,
                }),
                Ordering::Less => Some(Debt {
                    from: high,
                    to: low,
                    amount: -net,
                }),
                Ordering::Equal => None,
            }
        })
        .collect()
}

fn pair_key(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a < b { (a, b) } else { (b, a) }
}

fn owed_between(owed: &OwedTable, debtor: Uuid, creditor: Uuid) -> Decimal {
    owed.get(&debtor)
        .and_then(|creditors| creditors.get(&creditor))
        .copied()
        .unwrap_or(Decimal::ZERO)
}
