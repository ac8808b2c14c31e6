use anchor_lang::prelude::*;

use crate::constants::{APPROVED_WALLET_SEED, SWAP_LEDGER_SEED};
use crate::error::CldxError;
use crate::state::{ApprovedWallet, SwapLedger};

pub fn approve_wallet(ctx: Context<WalletApproval>, wallet: Pubkey) -> Result<()> {
    require!(wallet != Pubkey::default(), CldxError::ZeroAddress);
    ctx.accounts
        .swap_ledger
        .ownership
        .require_owner(&ctx.accounts.owner.key())?;

    let ledger = ctx.accounts.swap_ledger.key();
    let entry = &mut ctx.accounts.approved_wallet;
    entry.bind(ledger, wallet, ctx.bumps.approved_wallet);
    entry.approve()?;

    emit!(WalletApproved { ledger, wallet });
    Ok(())
}

pub fn remove_wallet(ctx: Context<WalletApproval>, wallet: Pubkey) -> Result<()> {
    ctx.accounts
        .swap_ledger
        .ownership
        .require_owner(&ctx.accounts.owner.key())?;

    let ledger = ctx.accounts.swap_ledger.key();
    let entry = &mut ctx.accounts.approved_wallet;
    entry.bind(ledger, wallet, ctx.bumps.approved_wallet);
    entry.remove()?;

    emit!(WalletRemoved { ledger, wallet });
    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct WalletApproval<'info> {
    #[account(
        seeds = [SWAP_LEDGER_SEED, swap_ledger.mint.as_ref()],
        bump = swap_ledger.bump
    )]
    pub swap_ledger: Account<'info, SwapLedger>,

    // Created on first touch so that removing an unknown wallet reports
    // NotApprovedWallet; the failed transaction leaves nothing behind.
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + ApprovedWallet::SIZE,
        seeds = [APPROVED_WALLET_SEED, swap_ledger.key().as_ref(), wallet.as_ref()],
        bump
    )]
    pub approved_wallet: Account<'info, ApprovedWallet>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct WalletApproved {
    pub ledger: Pubkey,
    pub wallet: Pubkey,
}

#[event]
pub struct WalletRemoved {
    pub ledger: Pubkey,
    pub wallet: Pubkey,
}
