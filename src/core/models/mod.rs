pub mod debt;
pub mod expense;
pub mod group;
pub mod split;
pub mod user;

pub use debt::Debt;
pub use expense::{Expense, NewExpense};
pub use group::{Group, GroupUser};
pub use split::{Split, SplitPolicy};
pub use user::User;
