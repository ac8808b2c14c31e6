use anchor_lang::prelude::*;

use crate::constants::VESTING_WALLET_SEED;
use crate::state::VestingWallet;

pub fn pause(ctx: Context<Pause>) -> Result<()> {
    let w = &mut ctx.accounts.vesting_wallet;
    w.ownership.require_owner(&ctx.accounts.owner.key())?;
    w.pause()?;
    emit!(VestingPaused {
        wallet: w.key(),
        owner: w.ownership.owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(
        mut,
        seeds = [VESTING_WALLET_SEED, vesting_wallet.mint.as_ref(), &[vesting_wallet.wallet_id]],
        bump = vesting_wallet.bump
    )]
    pub vesting_wallet: Account<'info, VestingWallet>,
    pub owner: Signer<'info>,
}

#[event]
pub struct VestingPaused {
    pub wallet: Pubkey,
    pub owner: Pubkey,
}
