use anchor_lang::prelude::*;

use crate::constants::VESTING_WALLET_SEED;
use crate::state::VestingWallet;

/// Build the release schedule and activate the wallet. One-shot.
pub fn initialize(ctx: Context<Initialize>, beneficiary: Pubkey) -> Result<()> {
    let w = &mut ctx.accounts.vesting_wallet;
    w.ownership.require_owner(&ctx.accounts.owner.key())?;

    let now = Clock::get()?.unix_timestamp;
    w.initialize_schedule(beneficiary, now)?;

    msg!(
        "vesting wallet {} initialized: {} periods, start {}",
        w.wallet_id,
        w.schedules.len(),
        w.start_ts
    );

    emit!(VestingInitialized {
        wallet: w.key(),
        beneficiary,
        start_ts: w.start_ts,
        duration_months: w.duration_months,
        total_vesting: w.total_vesting(),
        schedule_hash: w.schedule_hash,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        mut,
        seeds = [VESTING_WALLET_SEED, vesting_wallet.mint.as_ref(), &[vesting_wallet.wallet_id]],
        bump = vesting_wallet.bump
    )]
    pub vesting_wallet: Account<'info, VestingWallet>,

    pub owner: Signer<'info>,
}

#[event]
pub struct VestingInitialized {
    pub wallet: Pubkey,
    pub beneficiary: Pubkey,
    pub start_ts: i64,
    pub duration_months: u8,
    pub total_vesting: u64,
    pub schedule_hash: [u8; 32],
}
