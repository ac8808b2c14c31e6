use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{APPROVED_WALLET_SEED, SWAP_ACCOUNT_SEED, SWAP_LEDGER_SEED, TREASURY_VAULT_SEED};
use crate::error::CldxError;
use crate::instructions::deposit_for_swap::TokensBurnt;
use crate::state::{require_approved, ApprovedWallet, SwapAccount, SwapLedger};
use crate::utils::guard::{non_reentrant, ReentrancyLock};
use crate::utils::token::burn_from_treasury;

/// Settle `amount` of treasury CLDX toward ECO for `recipient`. Gated on
/// caller approval and on the ledger's own mint.
pub fn swap_cldx_to_eco(ctx: Context<SwapCldxToEco>, amount: u64, recipient: Pubkey) -> Result<()> {
    let swap_account_bump = ctx.bumps.swap_account;
    non_reentrant(ctx.accounts, |accts| {
        settle_swap(accts, amount, recipient, swap_account_bump)
    })
}

fn settle_swap(
    accts: &mut SwapCldxToEco,
    amount: u64,
    recipient: Pubkey,
    swap_account_bump: u8,
) -> Result<()> {
    require_approved(accts.approved_wallet.as_deref())?;
    accts.swap_ledger.ensure_not_paused()?;
    require!(recipient != Pubkey::default(), CldxError::ZeroAddress);
    require!(amount > 0, CldxError::InsufficientAmount);
    require!(
        accts.treasury_vault.amount >= amount,
        CldxError::InsufficientTokens
    );

    let ledger = accts.swap_ledger.key();
    accts.swap_account.bind(ledger, recipient, swap_account_bump);

    let split = accts
        .swap_ledger
        .swap_cldx_to_eco(&mut accts.swap_account, amount)?;

    if split.burn > 0 {
        burn_from_treasury(
            &accts.token_program,
            &accts.mint,
            &accts.treasury_vault,
            &accts.swap_ledger,
            split.burn,
        )?;
        emit!(TokensBurnt {
            ledger,
            amount: split.burn,
            total_burnt: accts.swap_ledger.total_burnt,
        });
    }

    emit!(SwapCldxToEcoEvent {
        ledger,
        caller: accts.caller.key(),
        recipient,
        amount,
        burnt: split.burn,
        locked: split.lock,
        swapped_for_eco: accts.swap_account.swapped_for_eco,
    });
    Ok(())
}

impl ReentrancyLock for SwapCldxToEco<'_> {
    fn lock_flag(&mut self) -> &mut bool {
        &mut self.swap_ledger.locked
    }

    fn persist_lock(&self) -> Result<()> {
        self.swap_ledger.exit(&crate::ID)
    }
}

#[derive(Accounts)]
#[instruction(amount: u64, recipient: Pubkey)]
pub struct SwapCldxToEco<'info> {
    #[account(
        mut,
        seeds = [SWAP_LEDGER_SEED, swap_ledger.mint.as_ref()],
        bump = swap_ledger.bump
    )]
    pub swap_ledger: Account<'info, SwapLedger>,

    /// Absent when the caller was never approved.
    #[account(
        seeds = [APPROVED_WALLET_SEED, swap_ledger.key().as_ref(), caller.key().as_ref()],
        bump = approved_wallet.bump
    )]
    pub approved_wallet: Option<Account<'info, ApprovedWallet>>,

    #[account(
        init_if_needed,
        payer = caller,
        space = 8 + SwapAccount::SIZE,
        seeds = [SWAP_ACCOUNT_SEED, swap_ledger.key().as_ref(), recipient.as_ref()],
        bump
    )]
    pub swap_account: Account<'info, SwapAccount>,

    #[account(
        mut,
        seeds = [TREASURY_VAULT_SEED, swap_ledger.key().as_ref()],
        bump = swap_ledger.vault_bump,
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    #[account(mut, address = swap_ledger.mint @ CldxError::InvalidTokenMint)]
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct SwapCldxToEcoEvent {
    pub ledger: Pubkey,
    pub caller: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub burnt: u64,
    pub locked: u64,
    pub swapped_for_eco: u64,
}
