//! Token CPIs signed by the swap ledger PDA.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount, Transfer};

use crate::constants::SWAP_LEDGER_SEED;
use crate::state::SwapLedger;

/// Burn `amount` out of the treasury vault, reducing mint supply.
pub fn burn_from_treasury<'info>(
    token_program: &Program<'info, Token>,
    mint: &Account<'info, Mint>,
    treasury_vault: &Account<'info, TokenAccount>,
    ledger: &Account<'info, SwapLedger>,
    amount: u64,
) -> Result<()> {
    let bump = [ledger.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[SWAP_LEDGER_SEED, ledger.mint.as_ref(), &bump]];
    token::burn(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Burn {
                mint: mint.to_account_info(),
                from: treasury_vault.to_account_info(),
                authority: ledger.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
}

pub fn transfer_from_treasury<'info>(
    token_program: &Program<'info, Token>,
    treasury_vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    ledger: &Account<'info, SwapLedger>,
    amount: u64,
) -> Result<()> {
    let bump = [ledger.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[SWAP_LEDGER_SEED, ledger.mint.as_ref(), &bump]];
    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: treasury_vault.to_account_info(),
                to: to.to_account_info(),
                authority: ledger.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
}
