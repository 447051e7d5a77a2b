//! Property-based tests for the balance engine.

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::allocator::{Participant, allocate};
use super::reducer::compute_balances;
use super::reducer::tests::{expense, user};
use crate::core::models::SplitPolicy;

/// Positive amounts from 0.01 to 1,000,000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Whole percentages (as basis points) summing to exactly 100.00.
fn percentages_summing_to_100() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(1u32..100, 1..10).prop_map(|weights| {
        let total: u32 = weights.iter().sum();
        let mut basis_points: Vec<i64> = weights
            .iter()
            .map(|w| i64::from(*w) * 10_000 / i64::from(total))
            .collect();
        let assigned: i64 = basis_points.iter().sum();
        basis_points[0] += 10_000 - assigned;
        basis_points.into_iter().map(|bp| Decimal::new(bp, 2)).collect()
    })
}

/// Expenses among five users, each paid by one of them for a subset of them.
fn expenses() -> impl Strategy<Value = Vec<(u128, Vec<(u128, Decimal)>)>> {
    prop::collection::vec(
        (1u128..=5, prop::collection::vec((1u128..=5, positive_amount()), 0..5)),
        0..12,
    )
}

fn cent() -> Decimal {
    Decimal::new(1, 2)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_equal_split_shares_equal_and_close_to_total(
        total in positive_amount(),
        count in 1usize..50,
    ) {
        let participants: Vec<Participant> =
            (0..count).map(|n| Participant::equal(Uuid::from_u128(n as u128))).collect();
        let result = allocate(total, SplitPolicy::Equal, &participants).unwrap();

        prop_assert_eq!(result.len(), count);
        prop_assert!(result.iter().all(|a| a.amount == result[0].amount));
        let sum: Decimal = result.iter().map(|a| a.amount).sum();
        prop_assert!((sum - total).abs() <= cent() * Decimal::from(count));
    }

    #[test]
    fn prop_percentage_split_sums_to_total(
        total in positive_amount(),
        percentages in percentages_summing_to_100(),
    ) {
        let participants: Vec<Participant> = percentages
            .iter()
            .enumerate()
            .map(|(n, pct)| Participant::with_percentage(Uuid::from_u128(n as u128), *pct))
            .collect();
        let result = allocate(total, SplitPolicy::Percentage, &participants).unwrap();

        let sum: Decimal = result.iter().map(|a| a.amount).sum();
        // each amount is off by at most half a cent
        prop_assert!((sum - total).abs() <= cent() * Decimal::from(participants.len()) / Decimal::TWO);
    }

    #[test]
    fn prop_allocate_is_deterministic(
        total in positive_amount(),
        percentages in percentages_summing_to_100(),
    ) {
        let participants: Vec<Participant> = percentages
            .iter()
            .enumerate()
            .map(|(n, pct)| Participant::with_percentage(Uuid::from_u128(n as u128), *pct))
            .collect();
        for policy in [SplitPolicy::Equal, SplitPolicy::Percentage] {
            prop_assert_eq!(
                allocate(total, policy, &participants).unwrap(),
                allocate(total, policy, &participants).unwrap()
            );
        }
    }

    #[test]
    fn prop_balances_one_positive_debt_per_pair(raw in expenses()) {
        let expenses: Vec<_> = raw
            .iter()
            .map(|(payer, shares)| {
                let shares: Vec<(Uuid, Decimal)> = shares.iter().map(|(u, a)| (user(*u), *a)).collect();
                expense(user(*payer), &shares)
            })
            .collect();
        let debts = compute_balances(&expenses);

        let mut seen = std::collections::HashSet::new();
        for debt in &debts {
            prop_assert!(debt.amount > Decimal::ZERO);
            prop_assert_ne!(debt.from, debt.to);
            let key = if debt.from < debt.to { (debt.from, debt.to) } else { (debt.to, debt.from) };
            prop_assert!(seen.insert(key));
        }
    }

    #[test]
    fn prop_balances_ignore_expense_order(raw in expenses()) {
        let mut expenses: Vec<_> = raw
            .iter()
            .map(|(payer, shares)| {
                let shares: Vec<(Uuid, Decimal)> = shares.iter().map(|(u, a)| (user(*u), *a)).collect();
                expense(user(*payer), &shares)
            })
            .collect();
        let forward = compute_balances(&expenses);
        expenses.reverse();
        prop_assert_eq!(forward, compute_balances(&expenses));
    }

    #[test]
    fn prop_net_positions_are_conserved(raw in expenses()) {
        let expenses: Vec<_> = raw
            .iter()
            .map(|(payer, shares)| {
                let shares: Vec<(Uuid, Decimal)> = shares.iter().map(|(u, a)| (user(*u), *a)).collect();
                expense(user(*payer), &shares)
            })
            .collect();
        let debts = compute_balances(&expenses);

        // Per user: what the debts say equals what the raw splits say.
        for n in 1u128..=5 {
            let id = user(n);
            let from_debts: Decimal = debts
                .iter()
                .map(|d| if d.to == id { d.amount } else if d.from == id { -d.amount } else { Decimal::ZERO })
                .sum();
            let from_splits: Decimal = expenses
                .iter()
                .flat_map(|e| e.splits.iter().map(move |s| (e.paid_by, s)))
                .filter(|(payer, s)| *payer != s.user_id)
                .map(|(payer, s)| {
                    let amount = s.amount.unwrap_or_default();
                    if payer == id { amount } else if s.user_id == id { -amount } else { Decimal::ZERO }
                })
                .sum();
            prop_assert_eq!(from_debts, from_splits);
        }
    }
}
