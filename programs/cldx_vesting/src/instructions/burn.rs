use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{SWAP_LEDGER_SEED, TREASURY_VAULT_SEED};
use crate::error::CldxError;
use crate::instructions::deposit_for_swap::TokensBurnt;
use crate::state::SwapLedger;
use crate::utils::guard::{non_reentrant, ReentrancyLock};
use crate::utils::token::burn_from_treasury;

/// Owner-only burn out of the treasury, counted against the burn cap.
pub fn burn(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
    non_reentrant(ctx.accounts, |accts| burn_treasury(accts, amount))
}

fn burn_treasury(accts: &mut BurnTokens, amount: u64) -> Result<()> {
    accts.swap_ledger.ownership.require_owner(&accts.owner.key())?;
    require!(amount > 0, CldxError::InsufficientAmount);
    require!(
        accts.treasury_vault.amount >= amount,
        CldxError::InsufficientTokens
    );

    accts.swap_ledger.record_burn(amount)?;
    burn_from_treasury(
        &accts.token_program,
        &accts.mint,
        &accts.treasury_vault,
        &accts.swap_ledger,
        amount,
    )?;

    emit!(TokensBurnt {
        ledger: accts.swap_ledger.key(),
        amount,
        total_burnt: accts.swap_ledger.total_burnt,
    });
    Ok(())
}

impl ReentrancyLock for BurnTokens<'_> {
    fn lock_flag(&mut self) -> &mut bool {
        &mut self.swap_ledger.locked
    }

    fn persist_lock(&self) -> Result<()> {
        self.swap_ledger.exit(&crate::ID)
    }
}

#[derive(Accounts)]
pub struct BurnTokens<'info> {
    #[account(
        mut,
        seeds = [SWAP_LEDGER_SEED, swap_ledger.mint.as_ref()],
        bump = swap_ledger.bump
    )]
    pub swap_ledger: Account<'info, SwapLedger>,

    #[account(
        mut,
        seeds = [TREASURY_VAULT_SEED, swap_ledger.key().as_ref()],
        bump = swap_ledger.vault_bump,
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    #[account(mut, address = swap_ledger.mint @ CldxError::InvalidTokenMint)]
    pub mint: Account<'info, Mint>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
