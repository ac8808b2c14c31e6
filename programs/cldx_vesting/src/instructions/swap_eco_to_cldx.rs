use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{APPROVED_WALLET_SEED, SWAP_ACCOUNT_SEED, SWAP_LEDGER_SEED, TREASURY_VAULT_SEED};
use crate::error::CldxError;
use crate::state::{require_approved, ApprovedWallet, SwapAccount, SwapLedger};
use crate::utils::guard::{non_reentrant, ReentrancyLock};
use crate::utils::token::transfer_from_treasury;

/// Oracle attests an ECO-side event and pays `amount` of CLDX out of the
/// treasury to `recipient`. No burn on this leg.
pub fn swap_eco_to_cldx(ctx: Context<SwapEcoToCldx>, amount: u64, recipient: Pubkey) -> Result<()> {
    let swap_account_bump = ctx.bumps.swap_account;
    non_reentrant(ctx.accounts, |accts| {
        pay_out(accts, amount, recipient, swap_account_bump)
    })
}

fn pay_out(
    accts: &mut SwapEcoToCldx,
    amount: u64,
    recipient: Pubkey,
    swap_account_bump: u8,
) -> Result<()> {
    accts.swap_ledger.require_oracle(&accts.oracle.key())?;
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
    accts.swap_account.credit_cldx(amount)?;

    transfer_from_treasury(
        &accts.token_program,
        &accts.treasury_vault,
        &accts.recipient_token_account,
        &accts.swap_ledger,
        amount,
    )?;

    emit!(SwapEcoToCldxEvent {
        ledger,
        recipient,
        amount,
        swapped_for_cldx: accts.swap_account.swapped_for_cldx,
    });
    Ok(())
}

impl ReentrancyLock for SwapEcoToCldx<'_> {
    fn lock_flag(&mut self) -> &mut bool {
        &mut self.swap_ledger.locked
    }

    fn persist_lock(&self) -> Result<()> {
        self.swap_ledger.exit(&crate::ID)
    }
}

#[derive(Accounts)]
#[instruction(amount: u64, recipient: Pubkey)]
pub struct SwapEcoToCldx<'info> {
    #[account(
        mut,
        seeds = [SWAP_LEDGER_SEED, swap_ledger.mint.as_ref()],
        bump = swap_ledger.bump
    )]
    pub swap_ledger: Account<'info, SwapLedger>,

    #[account(
        seeds = [APPROVED_WALLET_SEED, swap_ledger.key().as_ref(), oracle.key().as_ref()],
        bump = approved_wallet.bump
    )]
    pub approved_wallet: Option<Account<'info, ApprovedWallet>>,

    #[account(
        init_if_needed,
        payer = oracle,
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

    #[account(
        mut,
        constraint = recipient_token_account.mint == swap_ledger.mint @ CldxError::InvalidTokenMint,
        constraint = recipient_token_account.owner == recipient @ CldxError::InvalidTokenAccount,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub oracle: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct SwapEcoToCldxEvent {
    pub ledger: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub swapped_for_cldx: u64,
}
