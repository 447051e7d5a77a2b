use crate::core::errors::LedgerError;
use crate::core::models::{Expense, Group, GroupUser, User};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone)]
struct GroupRecord {
    id: Uuid,
    name: String,
}

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    users_by_name: Arc<RwLock<HashMap<String, Uuid>>>,
    groups: Arc<RwLock<HashMap<Uuid, GroupRecord>>>,
    group_users: Arc<RwLock<Vec<GroupUser>>>,
    expenses: Arc<RwLock<HashMap<Uuid, Vec<Expense>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn assemble_group(record: &GroupRecord, group_users: &[GroupUser], users: &HashMap<Uuid, User>) -> Group {
        let members = group_users
            .iter()
            .filter(|gu| gu.group_id == record.id)
            .filter_map(|gu| users.get(&gu.user_id).cloned())
            .collect();
        Group {
            id: record.id,
            name: record.name.clone(),
            members,
        }
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn find_or_create_user(&self, name: &str) -> Result<User, LedgerError> {
        let mut users = self.users.write().await;
        let mut users_by_name = self.users_by_name.write().await;
        if let Some(user) = users_by_name.get(name).and_then(|id| users.get(id)) {
            return Ok(user.clone());
        }
        let user = User::new(name);
        users_by_name.insert(user.name.clone(), user.id);
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn save_group(&self, group: Group) -> Result<(), LedgerError> {
        let users = self.users.read().await;
        if let Some(missing) = group.members.iter().find(|m| !users.contains_key(&m.id)) {
            return Err(LedgerError::UserNotFound(missing.id));
        }
        let mut groups = self.groups.write().await;
        let mut group_users = self.group_users.write().await;
        group_users.retain(|gu| gu.group_id != group.id);
        group_users.extend(group.memberships());
        groups.insert(
            group.id,
            GroupRecord {
                id: group.id,
                name: group.name,
            },
        );
        Ok(())
    }

    async fn get_group(&self, group_id: Uuid) -> Result<Option<Group>, LedgerError> {
        let users = self.users.read().await;
        let groups = self.groups.read().await;
        let group_users = self.group_users.read().await;
        Ok(groups
            .get(&group_id)
            .map(|record| Self::assemble_group(record, &group_users, &users)))
    }

    async fn list_groups(&self) -> Result<Vec<Group>, LedgerError> {
        let users = self.users.read().await;
        let groups = self.groups.read().await;
        let group_users = self.group_users.read().await;
        let mut result: Vec<Group> = groups
            .values()
            .map(|record| Self::assemble_group(record, &group_users, &users))
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(result)
    }

    async fn save_expense(&self, expense: Expense) -> Result<(), LedgerError> {
        let groups = self.groups.read().await;
        if !groups.contains_key(&expense.group_id) {
            return Err(LedgerError::GroupNotFound(expense.group_id));
        }
        let mut expenses = self.expenses.write().await;
        expenses.entry(expense.group_id).or_default().push(expense);
        Ok(())
    }

    async fn get_group_expenses(&self, group_id: Uuid) -> Result<Vec<Expense>, LedgerError> {
        let expenses = self.expenses.read().await;
        Ok(expenses.get(&group_id).cloned().unwrap_or_default())
    }
}
