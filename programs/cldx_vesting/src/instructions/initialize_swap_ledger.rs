use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{DEFAULT_MAX_BURN_BPS, SWAP_LEDGER_SEED, TREASURY_VAULT_SEED};
use crate::error::CldxError;
use crate::state::{burn_cap_for, validate_burn_percentage, Ownership, SwapLedger};

/// `max_burn_bps` defaults to the strict 20% cap when omitted.
pub fn initialize_swap_ledger(
    ctx: Context<InitializeSwapLedger>,
    oracle: Pubkey,
    burn_percentage: u8,
    max_burn_bps: Option<u16>,
) -> Result<()> {
    require!(oracle != Pubkey::default(), CldxError::ZeroAddress);
    validate_burn_percentage(burn_percentage)?;

    let total_supply = ctx.accounts.mint.supply;
    let burn_cap = burn_cap_for(total_supply, max_burn_bps.unwrap_or(DEFAULT_MAX_BURN_BPS))?;

    let l = &mut ctx.accounts.swap_ledger;
    l.ownership = Ownership::new(ctx.accounts.admin.key());
    l.oracle = oracle;
    l.mint = ctx.accounts.mint.key();
    l.vault = ctx.accounts.treasury_vault.key();
    l.burn_percentage = burn_percentage;
    l.total_supply = total_supply;
    l.burn_cap = burn_cap;
    l.total_burnt = 0;
    l.paused = false;
    l.locked = false;
    l.bump = ctx.bumps.swap_ledger;
    l.vault_bump = ctx.bumps.treasury_vault;

    emit!(SwapLedgerInitialized {
        ledger: l.key(),
        owner: l.ownership.owner,
        oracle,
        mint: l.mint,
        burn_percentage,
        total_supply,
        burn_cap,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeSwapLedger<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + SwapLedger::SIZE,
        seeds = [SWAP_LEDGER_SEED, mint.key().as_ref()],
        bump
    )]
    pub swap_ledger: Account<'info, SwapLedger>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = swap_ledger,
        seeds = [TREASURY_VAULT_SEED, swap_ledger.key().as_ref()],
        bump
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct SwapLedgerInitialized {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub oracle: Pubkey,
    pub mint: Pubkey,
    pub burn_percentage: u8,
    pub total_supply: u64,
    pub burn_cap: u64,
}
