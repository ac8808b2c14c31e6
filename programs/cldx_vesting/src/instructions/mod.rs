pub mod create_vesting_wallet;
pub mod deposit_tokens;
pub mod initialize;
pub mod release;
pub mod withdraw;
pub mod quote_vesting;
pub mod set_beneficiary;
pub mod pause;
pub mod unpause;
pub mod sweep_dust_after_end;
pub mod wallet_ownership;

pub mod initialize_swap_ledger;
pub mod ledger_admin;
pub mod wallet_approval;
pub mod burn;
pub mod initiate_swap;
pub mod deposit_for_swap;
pub mod swap_cldx_to_eco;
pub mod swap_eco_to_cldx;

pub use create_vesting_wallet::*;
pub use deposit_tokens::*;
pub use initialize::*;
pub use release::*;
pub use withdraw::*;
pub use quote_vesting::*;
pub use set_beneficiary::*;
pub use pause::*;
pub use unpause::*;
pub use sweep_dust_after_end::*;
pub use wallet_ownership::*;

pub use initialize_swap_ledger::*;
pub use ledger_admin::*;
pub use wallet_approval::*;
pub use burn::*;
pub use initiate_swap::*;
pub use deposit_for_swap::*;
pub use swap_cldx_to_eco::*;
pub use swap_eco_to_cldx::*;
