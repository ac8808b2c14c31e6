use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{VESTING_VAULT_SEED, VESTING_WALLET_SEED};
use crate::error::CldxError;
use crate::state::{Ownership, VestingWallet};
use crate::utils::schedule::VestingDuration;

pub fn create_vesting_wallet(
    ctx: Context<CreateVestingWallet>,
    wallet_id: u8,
    duration_months: u8,
    cliff_seconds: i64,
    vesting_allocation: u64,
) -> Result<()> {
    VestingDuration::try_from(duration_months)?;
    require!(vesting_allocation > 0, CldxError::VestingAllocationZero);
    require!(cliff_seconds >= 0, CldxError::InvalidCliff);

    let w = &mut ctx.accounts.vesting_wallet;
    w.ownership = Ownership::new(ctx.accounts.admin.key());
    w.mint = ctx.accounts.mint.key();
    w.vault = ctx.accounts.vault.key();
    w.beneficiary = Pubkey::default();
    w.wallet_id = wallet_id;
    w.duration_months = duration_months;
    w.cliff_seconds = cliff_seconds;
    w.vesting_allocation = vesting_allocation;
    w.start_ts = 0;
    w.released_amount = 0;
    // Constructed paused; `initialize` activates it.
    w.paused = true;
    w.initialized = false;
    w.locked = false;
    w.schedule_hash = [0u8; 32];
    w.bump = ctx.bumps.vesting_wallet;
    w.vault_bump = ctx.bumps.vault;
    w.schedules = Vec::new();
    w.prefix_totals = Vec::new();

    emit!(VestingWalletCreated {
        wallet: w.key(),
        owner: w.ownership.owner,
        mint: w.mint,
        wallet_id,
        duration_months,
        cliff_seconds,
        vesting_allocation,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet_id: u8)]
pub struct CreateVestingWallet<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + VestingWallet::SIZE,
        seeds = [VESTING_WALLET_SEED, mint.key().as_ref(), &[wallet_id]],
        bump
    )]
    pub vesting_wallet: Account<'info, VestingWallet>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = vesting_wallet,
        seeds = [VESTING_VAULT_SEED, vesting_wallet.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingWalletCreated {
    pub wallet: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub wallet_id: u8,
    pub duration_months: u8,
    pub cliff_seconds: i64,
    pub vesting_allocation: u64,
}
