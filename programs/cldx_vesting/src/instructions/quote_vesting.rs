use anchor_lang::prelude::*;

use crate::constants::VESTING_WALLET_SEED;
use crate::error::CldxError;
use crate::state::{ReleaseQuote, VestingWallet};

/// Read-only: emit the current vesting position. Before the start the quote
/// is all zeros instead of an error.
pub fn quote_vesting(ctx: Context<QuoteVesting>) -> Result<()> {
    let w = &ctx.accounts.vesting_wallet;
    let now = Clock::get()?.unix_timestamp;

    let (quote, started) = match w.compute_releasable(now) {
        Ok(q) => (q, true),
        Err(CldxError::VestingNotStarted) => (ReleaseQuote::default(), false),
        Err(e) => return Err(e.into()),
    };

    emit!(VestingQuote {
        wallet: w.key(),
        beneficiary: w.beneficiary,
        started,
        releasable: quote.releasable,
        released: quote.released,
        vested_total: quote.total,
        daily_releasable: w.daily_releasable(now),
        paused: w.paused,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct QuoteVesting<'info> {
    #[account(
        seeds = [VESTING_WALLET_SEED, vesting_wallet.mint.as_ref(), &[vesting_wallet.wallet_id]],
        bump = vesting_wallet.bump
    )]
    pub vesting_wallet: Account<'info, VestingWallet>,
}

#[event]
pub struct VestingQuote {
    pub wallet: Pubkey,
    pub beneficiary: Pubkey,
    pub started: bool,
    pub releasable: u64,
    pub released: u64,
    pub vested_total: u64,
    pub daily_releasable: u64,
    pub paused: bool,
}
