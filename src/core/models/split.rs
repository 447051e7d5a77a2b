use crate::core::errors::{LedgerError, SplitViolation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// How an expense's total is divided among its participants.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SplitPolicy {
    Equal,
    Percentage,
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SplitPolicy::Equal => "equal",
            SplitPolicy::Percentage => "percentage",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SplitPolicy {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equal" => Ok(SplitPolicy::Equal),
            "percentage" => Ok(SplitPolicy::Percentage),
            _ => Err(SplitViolation::UnknownPolicy(s.to_string()).into()),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Split {
    pub id: Uuid,
    pub expense_id: Uuid,
    pub user_id: Uuid,
    /// Owed amount, rounded to cents
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    /// Input percentage; only set for percentage splits
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub percentage: Option<Decimal>,
}
