use super::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Membership row joining a group and a user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupUser {
    pub group_id: Uuid,
    pub user_id: Uuid,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub members: Vec<User>,
}

impl Group {
    pub fn is_member(&self, user_id: Uuid) -> bool {
        self.members.iter().any(|m| m.id == user_id)
    }

    pub fn memberships(&self) -> impl Iterator<Item = GroupUser> + '_ {
        self.members.iter().map(|m| GroupUser {
            group_id: self.id,
            user_id: m.id,
        })
    }
}
