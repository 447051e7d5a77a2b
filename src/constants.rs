pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 255;
/// Largest single expense the service accepts, in whole currency units.
pub const MAX_EXPENSE_AMOUNT: i64 = 1_000_000;
