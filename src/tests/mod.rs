
use crate::core::engine::Participant;
use crate::core::models::{Group, NewExpense, SplitPolicy, User};
use crate::core::services::LedgerService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use rust_decimal::Decimal;

pub fn create_test_service() -> LedgerService<InMemoryStorage> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    LedgerService::new(InMemoryStorage::new())
}

/// Creates a group and returns it with its members in the order they were named.
pub async fn create_test_group(service: &LedgerService<InMemoryStorage>, names: &[&str]) -> (Group, Vec<User>) {
    let group = service
        .create_group(
            "Test Group".to_string(),
            names.iter().map(|n| n.to_string()).collect(),
        )
        .await
        .unwrap();
    let members = group.members.clone();
    (group, members)
}

pub fn equal_expense(description: &str, amount: Decimal, paid_by: &User, participants: &[&User]) -> NewExpense {
    NewExpense {
        description: description.to_string(),
        amount,
        paid_by: paid_by.id,
        split_type: SplitPolicy::Equal,
        participants: participants.iter().map(|u| Participant::equal(u.id)).collect(),
    }
}

pub fn percentage_expense(
    description: &str,
    amount: Decimal,
    paid_by: &User,
    shares: &[(&User, Decimal)],
) -> NewExpense {
    NewExpense {
        description: description.to_string(),
        amount,
        paid_by: paid_by.id,
        split_type: SplitPolicy::Percentage,
        participants: shares
            .iter()
            .map(|(u, pct)| Participant::with_percentage(u.id, *pct))
            .collect(),
    }
}
