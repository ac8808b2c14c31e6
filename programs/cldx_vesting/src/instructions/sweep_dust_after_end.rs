use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{VESTING_VAULT_SEED, VESTING_WALLET_SEED};
use crate::error::CldxError;
use crate::state::VestingWallet;
use crate::utils::guard::{non_reentrant, ReentrancyLock};

/// Recover what the schedule never covers (truncation dust, over-funding)
/// once every scheduled token has been released.
pub fn sweep_dust_after_end(ctx: Context<SweepDustAfterEnd>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    non_reentrant(ctx.accounts, |accts| sweep_vault(accts, now))
}

fn sweep_vault(accts: &mut SweepDustAfterEnd, now: i64) -> Result<()> {
    let w = &accts.vesting_wallet;
    w.ownership.require_owner(&accts.owner.key())?;
    require!(w.is_settled(now)?, CldxError::SweepNotAllowedOutstanding);

    require_keys_eq!(
        accts.owner_destination.owner,
        accts.owner.key(),
        CldxError::InvalidTokenAccount
    );

    let amount = accts.vault.amount;
    if amount == 0 {
        emit!(DustSwept {
            wallet: w.key(),
            owner: w.ownership.owner,
            amount: 0,
        });
        return Ok(());
    }

    let wallet_id = [w.wallet_id];
    let bump = [w.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[VESTING_WALLET_SEED, w.mint.as_ref(), &wallet_id, &bump]];
    token::transfer(
        CpiContext::new_with_signer(
            accts.token_program.to_account_info(),
            Transfer {
                from: accts.vault.to_account_info(),
                to: accts.owner_destination.to_account_info(),
                authority: w.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(DustSwept {
        wallet: w.key(),
        owner: w.ownership.owner,
        amount,
    });
    Ok(())
}

impl ReentrancyLock for SweepDustAfterEnd<'_> {
    fn lock_flag(&mut self) -> &mut bool {
        &mut self.vesting_wallet.locked
    }

    fn persist_lock(&self) -> Result<()> {
        self.vesting_wallet.exit(&crate::ID)
    }
}

#[derive(Accounts)]
pub struct SweepDustAfterEnd<'info> {
    #[account(
        mut,
        seeds = [VESTING_WALLET_SEED, vesting_wallet.mint.as_ref(), &[vesting_wallet.wallet_id]],
        bump = vesting_wallet.bump
    )]
    pub vesting_wallet: Account<'info, VestingWallet>,

    #[account(
        mut,
        seeds = [VESTING_VAULT_SEED, vesting_wallet.key().as_ref()],
        bump = vesting_wallet.vault_bump,
        constraint = vault.mint == vesting_wallet.mint @ CldxError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = owner_destination.mint == vesting_wallet.mint @ CldxError::InvalidTokenMint,
    )]
    pub owner_destination: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct DustSwept {
    pub wallet: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}
