pub mod ownership;
pub mod vesting_wallet;
pub mod swap_ledger;
pub mod swap_account;

pub use ownership::*;
pub use vesting_wallet::*;
pub use swap_ledger::*;
pub use swap_account::*;
