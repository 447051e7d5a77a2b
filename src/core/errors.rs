use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn new(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            title: title.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.description)
    }
}

/// Why a split request was rejected by the allocator.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SplitViolation {
    #[error("empty participant list")]
    EmptyParticipants,

    #[error("missing percentage for participant {0}")]
    MissingPercentage(Uuid),

    #[error("percentage for participant {0} must be between 0 and 100 (got {1})")]
    PercentageOutOfRange(Uuid, Decimal),

    #[error("percentages must total 100 (got {0})")]
    PercentagesNotHundred(Decimal),

    #[error("unknown policy `{0}`")]
    UnknownPolicy(String),

    #[error("amount must be positive (got {0})")]
    NonPositiveAmount(Decimal),
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LedgerError {
    /// Split input violates a policy invariant
    #[error("Invalid split: {0}")]
    InvalidSplit(SplitViolation),

    /// Group with given ID not found
    #[error("Group {0} not found")]
    GroupNotFound(Uuid),

    /// User with given ID not found
    #[error("User {0} not found")]
    UserNotFound(Uuid),

    /// User is not a member of the group
    #[error("User {0} is not a group member")]
    NotGroupMember(Uuid),

    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1}")]
    InvalidInput(String, FieldError),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<SplitViolation> for LedgerError {
    fn from(violation: SplitViolation) -> Self {
        LedgerError::InvalidSplit(violation)
    }
}

impl LedgerError {
    pub fn invalid_input(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        LedgerError::InvalidInput(field.to_string(), FieldError::new(field, title, description))
    }
}
