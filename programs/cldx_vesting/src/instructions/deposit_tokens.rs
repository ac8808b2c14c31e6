use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{VESTING_VAULT_SEED, VESTING_WALLET_SEED};
use crate::error::CldxError;
use crate::state::VestingWallet;

pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, CldxError::InsufficientAmount);

    let w = &ctx.accounts.vesting_wallet;
    w.ownership.require_owner(&ctx.accounts.owner.key())?;

    require_keys_eq!(
        ctx.accounts.owner_token_account.mint,
        w.mint,
        CldxError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.owner_token_account.owner,
        ctx.accounts.owner.key(),
        CldxError::InvalidTokenAccount
    );

    w.check_deposit(ctx.accounts.vault.amount, amount)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;

    emit!(TokensDeposited {
        wallet: ctx.accounts.vesting_wallet.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(
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

    #[account(mut)]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub wallet: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
