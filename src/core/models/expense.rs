use super::split::{Split, SplitPolicy};
use crate::core::engine::allocator::Participant;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Expense {
    pub id: Uuid,
    pub group_id: Uuid,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub paid_by: Uuid,
    pub split_type: SplitPolicy,
    pub splits: Vec<Split>,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
}

/// An expense as submitted, before its splits are allocated.
#[derive(Clone, Debug)]
pub struct NewExpense {
    pub description: String,
    pub amount: Decimal,
    pub paid_by: Uuid,
    pub split_type: SplitPolicy,
    pub participants: Vec<Participant>,
}
