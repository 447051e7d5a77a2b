use axum::{Json, http::StatusCode, response::IntoResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::core::engine::Participant;
use crate::core::errors::LedgerError;
use crate::core::models::{NewExpense, SplitPolicy};

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct UserInGroup {
    pub name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateGroupRequest {
    pub name: String,
    #[serde(default)]
    pub users: Vec<UserInGroup>,
}

#[derive(Deserialize, ToSchema)]
pub struct SplitRatio {
    pub user_id: Uuid,
    /// Required for percentage splits only
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub percentage: Option<Decimal>,
}

#[derive(Deserialize, ToSchema)]
pub struct AddExpenseRequest {
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub paid_by: Uuid,
    /// `equal` or `percentage`
    pub split_type: String,
    pub splits: Vec<SplitRatio>,
}

impl AddExpenseRequest {
    pub fn into_new_expense(self) -> Result<NewExpense, LedgerError> {
        let split_type: SplitPolicy = self.split_type.parse()?;
        Ok(NewExpense {
            description: self.description,
            amount: self.amount,
            paid_by: self.paid_by,
            split_type,
            participants: self
                .splits
                .into_iter()
                .map(|s| Participant {
                    user_id: s.user_id,
                    percentage: s.percentage,
                })
                .collect(),
        })
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
}

// Error response struct
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for LedgerError to implement IntoResponse
pub struct ApiError(pub LedgerError);

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            LedgerError::InvalidSplit(_) | LedgerError::InvalidInput(..) | LedgerError::NotGroupMember(_) => {
                StatusCode::BAD_REQUEST
            }
            LedgerError::GroupNotFound(_) | LedgerError::UserNotFound(_) => StatusCode::NOT_FOUND,
            LedgerError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorResponse { error: self.0.to_string() })).into_response()
    }
}
