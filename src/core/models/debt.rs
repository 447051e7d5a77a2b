use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// `from` owes `to` a strictly positive `amount`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Debt {
    pub from: Uuid,
    pub to: Uuid,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}
