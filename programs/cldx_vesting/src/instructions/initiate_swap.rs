use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{SWAP_ACCOUNT_SEED, SWAP_LEDGER_SEED};
use crate::error::CldxError;
use crate::state::{SwapAccount, SwapLedger, SwapStatus};

/// Oracle records that `account` intends to swap exactly `amount`. The swap
/// is consummated later by a matching `deposit_for_swap`. A new intent
/// replaces the old one; intents never expire.
pub fn initiate_swap(ctx: Context<InitiateSwap>, amount: u64, account: Pubkey) -> Result<()> {
    let l = &ctx.accounts.swap_ledger;
    l.require_oracle(&ctx.accounts.oracle.key())?;
    l.ensure_not_paused()?;
    require!(account != Pubkey::default(), CldxError::ZeroAddress);
    require!(amount > 0, CldxError::InsufficientAmount);
    require!(
        ctx.accounts.account_token_account.amount >= amount,
        CldxError::InsufficientTokens
    );

    let ledger = l.key();
    let s = &mut ctx.accounts.swap_account;
    s.bind(ledger, account, ctx.bumps.swap_account);
    let replaced = s.initiate(amount);

    emit!(SwapInitiated {
        ledger,
        account,
        amount,
        replaced_amount: match replaced.status {
            SwapStatus::Pending => replaced.amount,
            _ => 0,
        },
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(amount: u64, account: Pubkey)]
pub struct InitiateSwap<'info> {
    #[account(
        seeds = [SWAP_LEDGER_SEED, swap_ledger.mint.as_ref()],
        bump = swap_ledger.bump
    )]
    pub swap_ledger: Account<'info, SwapLedger>,

    #[account(
        init_if_needed,
        payer = oracle,
        space = 8 + SwapAccount::SIZE,
        seeds = [SWAP_ACCOUNT_SEED, swap_ledger.key().as_ref(), account.as_ref()],
        bump
    )]
    pub swap_account: Account<'info, SwapAccount>,

    #[account(
        constraint = account_token_account.mint == swap_ledger.mint @ CldxError::InvalidTokenMint,
        constraint = account_token_account.owner == account @ CldxError::InvalidTokenAccount,
    )]
    pub account_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub oracle: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct SwapInitiated {
    pub ledger: Pubkey,
    pub account: Pubkey,
    pub amount: u64,
    /// Amount of the still-pending intent this one replaced (0 if none).
    pub replaced_amount: u64,
}
