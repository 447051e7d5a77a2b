use crate::core::errors::{LedgerError, SplitViolation};
use crate::core::models::SplitPolicy;
use crate::core::money::{percent_of, round_currency};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

/// A participant of an expense, in the order the caller listed them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub user_id: Uuid,
    pub percentage: Option<Decimal>,
}

impl Participant {
    pub fn equal(user_id: Uuid) -> Self {
        Participant {
            user_id,
            percentage: None,
        }
    }

    pub fn with_percentage(user_id: Uuid, percentage: Decimal) -> Self {
        Participant {
            user_id,
            percentage: Some(percentage),
        }
    }
}

/// One participant's computed share of an expense.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub user_id: Uuid,
    pub amount: Decimal,
    pub percentage: Option<Decimal>,
}

/// Divides `total` among `participants` according to `policy`.
///
/// Either every participant gets an allocation or the call fails with
/// [`LedgerError::InvalidSplit`]; there is no partial result.
///
/// Equal splits give every participant `round(total / n, 2)` and do not
/// reconcile the rounding remainder, so 100.00 over three people allocates
/// 33.33 each and leaves one cent unassigned.
pub fn allocate(
    total: Decimal,
    policy: SplitPolicy,
    participants: &[Participant],
) -> Result<Vec<Allocation>, LedgerError> {
    if total <= Decimal::ZERO {
        return Err(SplitViolation::NonPositiveAmount(total).into());
    }
    if participants.is_empty() {
        return Err(SplitViolation::EmptyParticipants.into());
    }

    let allocations = match policy {
        SplitPolicy::Equal => allocate_equal(total, participants),
        SplitPolicy::Percentage => allocate_by_percentage(total, participants)?,
    };
    debug!(
        "Allocated {} {} split(s) for total {}",
        allocations.len(),
        policy,
        total
    );
    Ok(allocations)
}

fn allocate_equal(total: Decimal, participants: &[Participant]) -> Vec<Allocation> {
    let share = round_currency(total / Decimal::from(participants.len()));
    participants
        .iter()
        .map(|p| Allocation {
            user_id: p.user_id,
            amount: share,
            percentage: None,
        })
        .collect()
}

// Each percentage is bounded to 0..=100 before summing, so neither the sum
// nor `percent_of` can overflow and no allocated amount is negative.
fn allocate_by_percentage(total: Decimal, participants: &[Participant]) -> Result<Vec<Allocation>, LedgerError> {
    let mut percentages = Vec::with_capacity(participants.len());
    for p in participants {
        let percentage = p
            .percentage
            .ok_or(SplitViolation::MissingPercentage(p.user_id))?;
        if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
            return Err(SplitViolation::PercentageOutOfRange(p.user_id, percentage).into());
        }
        percentages.push((p.user_id, percentage));
    }

    let sum: Decimal = percentages.iter().map(|(_, pct)| *pct).sum();
    if round_currency(sum) != Decimal::ONE_HUNDRED {
        return Err(SplitViolation::PercentagesNotHundred(sum).into());
    }

    Ok(percentages
        .into_iter()
        .map(|(user_id, percentage)| Allocation {
            user_id,
            amount: round_currency(percent_of(percentage, total)),
            percentage: Some(percentage),
        })
        .collect())
}
