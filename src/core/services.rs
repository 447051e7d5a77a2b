use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_EXPENSE_AMOUNT, MAX_NAME_LENGTH};
use crate::core::engine::{allocate, compute_balances};
use crate::core::errors::LedgerError;
use crate::core::models::{Debt, Expense, Group, NewExpense, Split, User};
use crate::core::money::CURRENCY_SCALE;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct LedgerService<S: Storage> {
    storage: S,
}

impl<S: Storage> LedgerService<S> {
    pub fn new(storage: S) -> Self {
        LedgerService { storage }
    }

    async fn require_group(&self, group_id: Uuid) -> Result<Group, LedgerError> {
        self.storage.get_group(group_id).await?.ok_or_else(|| {
            warn!("Group {} not found", group_id);
            LedgerError::GroupNotFound(group_id)
        })
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), LedgerError> {
        if value.trim().is_empty() {
            return Err(LedgerError::invalid_input(
                field,
                format!("Invalid {}", field),
                format!("{} cannot be empty", field),
            ));
        }
        if value.chars().count() > max_length {
            return Err(LedgerError::invalid_input(
                field,
                format!("{} Too Long", field),
                format!("{} cannot exceed {} characters", field, max_length),
            ));
        }
        if value.chars().any(|c| c.is_control()) {
            return Err(LedgerError::invalid_input(
                field,
                format!("Invalid {}", field),
                format!("{} contains invalid characters", field),
            ));
        }
        Ok(())
    }

    fn validate_amount_input(&self, field: &str, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_input(
                field,
                "Invalid Amount",
                "Amount must be greater than 0",
            ));
        }
        if amount > Decimal::from(MAX_EXPENSE_AMOUNT) {
            return Err(LedgerError::invalid_input(
                field,
                "Amount Too Large",
                format!("Amount cannot exceed {}", MAX_EXPENSE_AMOUNT),
            ));
        }
        if amount.normalize().scale() > CURRENCY_SCALE {
            return Err(LedgerError::invalid_input(
                field,
                "Invalid Amount",
                format!("Amount cannot have more than {} decimal places", CURRENCY_SCALE),
            ));
        }
        Ok(())
    }

    /// Creates a group whose members are looked up by name, creating users
    /// that do not exist yet. Repeated names join the group once.
    pub async fn create_group(&self, name: String, member_names: Vec<String>) -> Result<Group, LedgerError> {
        self.validate_string_input("name", &name, MAX_NAME_LENGTH)?;
        for member_name in &member_names {
            self.validate_string_input("users.name", member_name, MAX_NAME_LENGTH)?;
        }

        let mut members: Vec<User> = Vec::with_capacity(member_names.len());
        for member_name in &member_names {
            let user = self.storage.find_or_create_user(member_name.trim()).await?;
            if !members.iter().any(|m| m.id == user.id) {
                members.push(user);
            }
        }

        let group = Group {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            members,
        };
        self.storage.save_group(group.clone()).await?;

        info!("Created group {} '{}' with {} member(s)", group.id, group.name, group.members.len());
        Ok(group)
    }

    pub async fn get_group(&self, group_id: Uuid) -> Result<Group, LedgerError> {
        self.require_group(group_id).await
    }

    pub async fn list_groups(&self) -> Result<Vec<Group>, LedgerError> {
        self.storage.list_groups().await
    }

    /// Records an expense in a group. The splits are allocated before anything
    /// is written, so a rejected split leaves storage untouched.
    pub async fn add_expense(&self, group_id: Uuid, new_expense: NewExpense) -> Result<Expense, LedgerError> {
        let group = self.require_group(group_id).await?;

        self.validate_string_input("description", &new_expense.description, MAX_DESCRIPTION_LENGTH)?;
        self.validate_amount_input("amount", new_expense.amount)?;

        if !group.is_member(new_expense.paid_by) {
            warn!("Payer {} is not a member of group {}", new_expense.paid_by, group_id);
            return Err(LedgerError::NotGroupMember(new_expense.paid_by));
        }

        let mut seen = HashSet::with_capacity(new_expense.participants.len());
        for participant in &new_expense.participants {
            if !group.is_member(participant.user_id) {
                warn!("Split user {} is not a member of group {}", participant.user_id, group_id);
                return Err(LedgerError::NotGroupMember(participant.user_id));
            }
            if !seen.insert(participant.user_id) {
                return Err(LedgerError::invalid_input(
                    "splits",
                    "Duplicate participant",
                    format!("User {} appears more than once", participant.user_id),
                ));
            }
        }

        let allocations = allocate(new_expense.amount, new_expense.split_type, &new_expense.participants)
            .inspect_err(|e| warn!("Rejected expense for group {}: {}", group_id, e))?;

        let expense_id = Uuid::new_v4();
        let splits = allocations
            .into_iter()
            .map(|allocation| Split {
                id: Uuid::new_v4(),
                expense_id,
                user_id: allocation.user_id,
                amount: Some(allocation.amount),
                percentage: allocation.percentage,
            })
            .collect();

        let expense = Expense {
            id: expense_id,
            group_id,
            description: new_expense.description.trim().to_string(),
            amount: new_expense.amount,
            paid_by: new_expense.paid_by,
            split_type: new_expense.split_type,
            splits,
            created_at: Utc::now(),
        };
        self.storage.save_expense(expense.clone()).await?;

        info!(
            "Recorded expense {} of {} in group {} paid by {} ({} split)",
            expense.id, expense.amount, group_id, expense.paid_by, expense.split_type
        );
        Ok(expense)
    }

    pub async fn get_group_expenses(&self, group_id: Uuid) -> Result<Vec<Expense>, LedgerError> {
        self.require_group(group_id).await?;
        self.storage.get_group_expenses(group_id).await
    }

    /// Recomputes the group's net debts from its full expense history.
    pub async fn get_group_balances(&self, group_id: Uuid) -> Result<Vec<Debt>, LedgerError> {
        self.require_group(group_id).await?;
        let expenses = self.storage.get_group_expenses(group_id).await?;
        let debts = compute_balances(&expenses);
        debug!(
            "Computed {} debt(s) from {} expense(s) for group {}",
            debts.len(),
            expenses.len(),
            group_id
        );
        Ok(debts)
    }
}
