use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{VESTING_VAULT_SEED, VESTING_WALLET_SEED};
use crate::error::CldxError;
use crate::state::VestingWallet;
use crate::utils::guard::{non_reentrant, ReentrancyLock};

pub fn release(ctx: Context<Release>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    non_reentrant(ctx.accounts, |accts| release_vested(accts, now))
}

fn release_vested(accts: &mut Release, now: i64) -> Result<()> {
    accts.vesting_wallet.ensure_active()?;

    let quote = accts.vesting_wallet.compute_releasable(now)?;
    if quote.releasable == 0 {
        msg!("nothing to release at {}", now);
        return Ok(());
    }

    require!(
        accts.vault.amount >= quote.releasable,
        CldxError::InsufficientTokens
    );

    // CPI transfer from vault to beneficiary, signed by the wallet PDA.
    let w = &accts.vesting_wallet;
    let wallet_id = [w.wallet_id];
    let bump = [w.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[VESTING_WALLET_SEED, w.mint.as_ref(), &wallet_id, &bump]];
    token::transfer(
        CpiContext::new_with_signer(
            accts.token_program.to_account_info(),
            Transfer {
                from: accts.vault.to_account_info(),
                to: accts.beneficiary_token_account.to_account_info(),
                authority: w.to_account_info(),
            },
            signer_seeds,
        ),
        quote.releasable,
    )?;

    let w = &mut accts.vesting_wallet;
    w.record_release(quote.releasable)?;

    emit!(TokensReleased {
        wallet: w.key(),
        beneficiary: w.beneficiary,
        amount: quote.releasable,
        released_total: w.released_amount,
        vested_total: quote.total,
    });

    Ok(())
}

impl ReentrancyLock for Release<'_> {
    fn lock_flag(&mut self) -> &mut bool {
        &mut self.vesting_wallet.locked
    }

    fn persist_lock(&self) -> Result<()> {
        self.vesting_wallet.exit(&crate::ID)
    }
}

#[derive(Accounts)]
pub struct Release<'info> {
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
        constraint = beneficiary_token_account.mint == vesting_wallet.mint @ CldxError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == vesting_wallet.beneficiary @ CldxError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensReleased {
    pub wallet: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub released_total: u64,
    pub vested_total: u64,
}
