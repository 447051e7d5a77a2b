//! Currency rounding shared by the split allocator and the balance reducer.
//!
//! Amounts are `rust_decimal::Decimal` everywhere; floats never touch money.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places every stored or computed amount is rounded to.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds to cents with banker's rounding.
///
/// Split amounts are rounded with this when allocated and again when
/// accumulated into balances, so stored splits and computed debts never drift.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// `percentage` percent of `total`, unrounded.
pub fn percent_of(percentage: Decimal, total: Decimal) -> Decimal {
    percentage / Decimal::ONE_HUNDRED * total
}
