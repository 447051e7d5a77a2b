pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::engine::{allocate, compute_balances};
pub use crate::core::errors::{LedgerError, SplitViolation};
pub use crate::core::services::LedgerService;
pub use crate::infrastructure::storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests;
