use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("HsRbSyLjsc18Gxo8j6h2as9vpiwRRHiYTLT9fvBN6HzL");

#[program]
pub mod cldx_vesting {
    use super::*;

    // Vesting wallet

    pub fn create_vesting_wallet(
        ctx: Context<CreateVestingWallet>,
        wallet_id: u8,
        duration_months: u8,
        cliff_seconds: i64,
        vesting_allocation: u64,
    ) -> Result<()> {
        instructions::create_vesting_wallet::create_vesting_wallet(
            ctx,
            wallet_id,
            duration_months,
            cliff_seconds,
            vesting_allocation,
        )
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    pub fn initialize(ctx: Context<Initialize>, beneficiary: Pubkey) -> Result<()> {
        instructions::initialize::initialize(ctx, beneficiary)
    }

    pub fn release(ctx: Context<Release>) -> Result<()> {
        instructions::release::release(ctx)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::withdraw(ctx, amount)
    }

    pub fn quote_vesting(ctx: Context<QuoteVesting>) -> Result<()> {
        instructions::quote_vesting::quote_vesting(ctx)
    }

    pub fn set_beneficiary(ctx: Context<SetBeneficiary>, new_beneficiary: Pubkey) -> Result<()> {
        instructions::set_beneficiary::set_beneficiary(ctx, new_beneficiary)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause::pause(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause::unpause(ctx)
    }

    pub fn sweep_dust_after_end(ctx: Context<SweepDustAfterEnd>) -> Result<()> {
        instructions::sweep_dust_after_end::sweep_dust_after_end(ctx)
    }

    pub fn transfer_wallet_ownership(
        ctx: Context<TransferWalletOwnership>,
        candidate: Pubkey,
    ) -> Result<()> {
        instructions::wallet_ownership::transfer_wallet_ownership(ctx, candidate)
    }

    pub fn accept_wallet_ownership(ctx: Context<AcceptWalletOwnership>) -> Result<()> {
        instructions::wallet_ownership::accept_wallet_ownership(ctx)
    }

    // Swap ledger

    pub fn initialize_swap_ledger(
        ctx: Context<InitializeSwapLedger>,
        oracle: Pubkey,
        burn_percentage: u8,
        max_burn_bps: Option<u16>,
    ) -> Result<()> {
        instructions::initialize_swap_ledger::initialize_swap_ledger(
            ctx,
            oracle,
            burn_percentage,
            max_burn_bps,
        )
    }

    pub fn set_oracle(ctx: Context<LedgerAdmin>, new_oracle: Pubkey) -> Result<()> {
        instructions::ledger_admin::set_oracle(ctx, new_oracle)
    }

    pub fn set_burn_percentage(ctx: Context<LedgerAdmin>, burn_percentage: u8) -> Result<()> {
        instructions::ledger_admin::set_burn_percentage(ctx, burn_percentage)
    }

    pub fn pause_swaps(ctx: Context<LedgerAdmin>) -> Result<()> {
        instructions::ledger_admin::pause_swaps(ctx)
    }

    pub fn unpause_swaps(ctx: Context<LedgerAdmin>) -> Result<()> {
        instructions::ledger_admin::unpause_swaps(ctx)
    }

    pub fn transfer_ledger_ownership(ctx: Context<LedgerAdmin>, candidate: Pubkey) -> Result<()> {
        instructions::ledger_admin::transfer_ledger_ownership(ctx, candidate)
    }

    pub fn accept_ledger_ownership(ctx: Context<LedgerAdmin>) -> Result<()> {
        instructions::ledger_admin::accept_ledger_ownership(ctx)
    }

    pub fn approve_wallet(ctx: Context<WalletApproval>, wallet: Pubkey) -> Result<()> {
        instructions::wallet_approval::approve_wallet(ctx, wallet)
    }

    pub fn remove_wallet(ctx: Context<WalletApproval>, wallet: Pubkey) -> Result<()> {
        instructions::wallet_approval::remove_wallet(ctx, wallet)
    }

    pub fn burn(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
        instructions::burn::burn(ctx, amount)
    }

    pub fn initiate_swap(ctx: Context<InitiateSwap>, amount: u64, account: Pubkey) -> Result<()> {
        instructions::initiate_swap::initiate_swap(ctx, amount, account)
    }

    pub fn deposit_for_swap(ctx: Context<DepositForSwap>, amount: u64) -> Result<()> {
        instructions::deposit_for_swap::deposit_for_swap(ctx, amount)
    }

    pub fn swap_cldx_to_eco(
        ctx: Context<SwapCldxToEco>,
        amount: u64,
        recipient: Pubkey,
    ) -> Result<()> {
        instructions::swap_cldx_to_eco::swap_cldx_to_eco(ctx, amount, recipient)
    }

    pub fn swap_eco_to_cldx(
        ctx: Context<SwapEcoToCldx>,
        amount: u64,
        recipient: Pubkey,
    ) -> Result<()> {
        instructions::swap_eco_to_cldx::swap_eco_to_cldx(ctx, amount, recipient)
    }
}
