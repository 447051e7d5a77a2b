//! The balance engine: pure, synchronous computations over already-validated
//! expense data. Nothing in here touches storage.
//!
//! - [`allocator`] turns an expense total and a split policy into per-user
//!   owed amounts.
//! - [`reducer`] turns a group's expenses into net pairwise debts.

pub mod allocator;
pub mod reducer;

#[cfg(test)]
mod props;

pub use allocator::{Allocation, Participant, allocate};
pub use reducer::compute_balances;
