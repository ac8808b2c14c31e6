use anchor_lang::prelude::*;

use crate::constants::SWAP_LEDGER_SEED;
use crate::error::CldxError;
use crate::state::SwapLedger;

pub fn set_oracle(ctx: Context<LedgerAdmin>, new_oracle: Pubkey) -> Result<()> {
    require!(new_oracle != Pubkey::default(), CldxError::ZeroAddress);

    let l = &mut ctx.accounts.swap_ledger;
    l.ownership.require_owner(&ctx.accounts.owner.key())?;

    let old = l.oracle;
    l.oracle = new_oracle;

    emit!(OracleSet {
        ledger: l.key(),
        old_oracle: old,
        new_oracle,
    });
    Ok(())
}

pub fn set_burn_percentage(ctx: Context<LedgerAdmin>, burn_percentage: u8) -> Result<()> {
    let l = &mut ctx.accounts.swap_ledger;
    l.ownership.require_owner(&ctx.accounts.owner.key())?;

    let old = l.set_burn_percentage(burn_percentage)?;

    emit!(BurnPercentageSet {
        ledger: l.key(),
        old_percentage: old,
        new_percentage: burn_percentage,
    });
    Ok(())
}

pub fn pause_swaps(ctx: Context<LedgerAdmin>) -> Result<()> {
    let l = &mut ctx.accounts.swap_ledger;
    l.ownership.require_owner(&ctx.accounts.owner.key())?;
    require!(!l.paused, CldxError::AlreadyPaused);
    l.paused = true;
    emit!(SwapsPaused { ledger: l.key() });
    Ok(())
}

pub fn unpause_swaps(ctx: Context<LedgerAdmin>) -> Result<()> {
    let l = &mut ctx.accounts.swap_ledger;
    l.ownership.require_owner(&ctx.accounts.owner.key())?;
    require!(l.paused, CldxError::NotPaused);
    l.paused = false;
    emit!(SwapsUnpaused { ledger: l.key() });
    Ok(())
}

pub fn transfer_ledger_ownership(ctx: Context<LedgerAdmin>, candidate: Pubkey) -> Result<()> {
    let l = &mut ctx.accounts.swap_ledger;
    l.ownership.propose(&ctx.accounts.owner.key(), candidate)?;
    emit!(LedgerOwnershipProposed {
        ledger: l.key(),
        owner: l.ownership.owner,
        candidate,
    });
    Ok(())
}

/// Signed by the nominated candidate, not the current owner.
pub fn accept_ledger_ownership(ctx: Context<LedgerAdmin>) -> Result<()> {
    let l = &mut ctx.accounts.swap_ledger;
    let previous = l.ownership.accept(&ctx.accounts.owner.key())?;
    emit!(LedgerOwnershipTransferred {
        ledger: l.key(),
        previous_owner: previous,
        new_owner: l.ownership.owner,
    });
    Ok(())
}

/// Owner-signed configuration change on a swap ledger.
#[derive(Accounts)]
pub struct LedgerAdmin<'info> {
    #[account(
        mut,
        seeds = [SWAP_LEDGER_SEED, swap_ledger.mint.as_ref()],
        bump = swap_ledger.bump
    )]
    pub swap_ledger: Account<'info, SwapLedger>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OracleSet {
    pub ledger: Pubkey,
    pub old_oracle: Pubkey,
    pub new_oracle: Pubkey,
}

#[event]
pub struct BurnPercentageSet {
    pub ledger: Pubkey,
    pub old_percentage: u8,
    pub new_percentage: u8,
}

#[event]
pub struct SwapsPaused {
    pub ledger: Pubkey,
}

#[event]
pub struct SwapsUnpaused {
    pub ledger: Pubkey,
}

#[event]
pub struct LedgerOwnershipProposed {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub candidate: Pubkey,
}

#[event]
pub struct LedgerOwnershipTransferred {
    pub ledger: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
