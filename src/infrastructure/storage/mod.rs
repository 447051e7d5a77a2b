use crate::core::errors::LedgerError;
use crate::core::models::{Expense, Group, User};
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence collaborator for users, groups and expenses.
///
/// `save_expense` stores an expense together with its splits as one write;
/// `get_group_expenses` returns them in the order they were saved.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn find_or_create_user(&self, name: &str) -> Result<User, LedgerError>;
    async fn save_group(&self, group: Group) -> Result<(), LedgerError>;
    async fn get_group(&self, group_id: Uuid) -> Result<Option<Group>, LedgerError>;
    async fn list_groups(&self) -> Result<Vec<Group>, LedgerError>;
    async fn save_expense(&self, expense: Expense) -> Result<(), LedgerError>;
    async fn get_group_expenses(&self, group_id: Uuid) -> Result<Vec<Expense>, LedgerError>;
}

pub mod in_memory;
