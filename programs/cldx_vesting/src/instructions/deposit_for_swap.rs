use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{SWAP_ACCOUNT_SEED, SWAP_LEDGER_SEED, TREASURY_VAULT_SEED};
use crate::error::CldxError;
use crate::utils::guard::{non_reentrant, ReentrancyLock};
use crate::utils::token::burn_from_treasury;
use crate::state::{SwapAccount, SwapLedger};

/// Incoming transfer into the treasury. Consummates the sender's pending
/// swap when the amount matches it exactly; otherwise it is a plain deposit.
pub fn deposit_for_swap(ctx: Context<DepositForSwap>, amount: u64) -> Result<()> {
    let swap_account_bump = ctx.bumps.swap_account;
    non_reentrant(ctx.accounts, |accts| {
        receive_transfer(accts, amount, swap_account_bump)
    })
}

fn receive_transfer(accts: &mut DepositForSwap, amount: u64, swap_account_bump: u8) -> Result<()> {
    require!(amount > 0, CldxError::InsufficientAmount);
    require!(
        accts.sender_token_account.amount >= amount,
        CldxError::InsufficientTokens
    );

    token::transfer(
        CpiContext::new(
            accts.token_program.to_account_info(),
            Transfer {
                from: accts.sender_token_account.to_account_info(),
                to: accts.treasury_vault.to_account_info(),
                authority: accts.sender.to_account_info(),
            },
        ),
        amount,
    )?;

    let ledger = accts.swap_ledger.key();
    let sender = accts.sender.key();
    accts.swap_account.bind(ledger, sender, swap_account_bump);

    if !accts.swap_account.pending_matches(amount) {
        msg!("deposit of {} from {} matches no pending swap", amount, sender);
        emit!(TreasuryDeposit {
            ledger,
            sender,
            amount,
        });
        return Ok(());
    }

    accts.swap_ledger.ensure_not_paused()?;
    let split = accts
        .swap_ledger
        .settle_cldx_to_eco(&mut accts.swap_account, amount)?;
    accts.swap_account.complete_pending();

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

    emit!(SwapCompleted {
        ledger,
        account: sender,
        amount,
        burnt: split.burn,
        locked: split.lock,
        swapped_for_eco: accts.swap_account.swapped_for_eco,
    });
    Ok(())
}

impl ReentrancyLock for DepositForSwap<'_> {
    fn lock_flag(&mut self) -> &mut bool {
        &mut self.swap_ledger.locked
    }

    fn persist_lock(&self) -> Result<()> {
        self.swap_ledger.exit(&crate::ID)
    }
}

#[derive(Accounts)]
pub struct DepositForSwap<'info> {
    #[account(
        mut,
        seeds = [SWAP_LEDGER_SEED, swap_ledger.mint.as_ref()],
        bump = swap_ledger.bump
    )]
    pub swap_ledger: Account<'info, SwapLedger>,

    #[account(
        init_if_needed,
        payer = sender,
        space = 8 + SwapAccount::SIZE,
        seeds = [SWAP_ACCOUNT_SEED, swap_ledger.key().as_ref(), sender.key().as_ref()],
        bump
    )]
    pub swap_account: Account<'info, SwapAccount>,

    #[account(
        mut,
        seeds = [TREASURY_VAULT_SEED, swap_ledger.key().as_ref()],
        bump = swap_ledger.vault_bump,
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = sender_token_account.mint == swap_ledger.mint @ CldxError::InvalidTokenMint,
        constraint = sender_token_account.owner == sender.key() @ CldxError::InvalidTokenAccount,
    )]
    pub sender_token_account: Account<'info, TokenAccount>,

    #[account(mut, address = swap_ledger.mint @ CldxError::InvalidTokenMint)]
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub sender: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TreasuryDeposit {
    pub ledger: Pubkey,
    pub sender: Pubkey,
    pub amount: u64,
}

#[event]
pub struct SwapCompleted {
    pub ledger: Pubkey,
    pub account: Pubkey,
    pub amount: u64,
    pub burnt: u64,
    pub locked: u64,
    pub swapped_for_eco: u64,
}

#[event]
pub struct TokensBurnt {
    pub ledger: Pubkey,
    pub amount: u64,
    pub total_burnt: u64,
}
