use anchor_lang::prelude::*;

use crate::constants::VESTING_WALLET_SEED;
use crate::state::VestingWallet;

pub fn transfer_wallet_ownership(
    ctx: Context<TransferWalletOwnership>,
    candidate: Pubkey,
) -> Result<()> {
    let w = &mut ctx.accounts.vesting_wallet;
    w.ownership.propose(&ctx.accounts.owner.key(), candidate)?;
    emit!(WalletOwnershipProposed {
        wallet: w.key(),
        owner: w.ownership.owner,
        candidate,
    });
    Ok(())
}

pub fn accept_wallet_ownership(ctx: Context<AcceptWalletOwnership>) -> Result<()> {
    let w = &mut ctx.accounts.vesting_wallet;
    let previous = w.ownership.accept(&ctx.accounts.candidate.key())?;
    emit!(WalletOwnershipTransferred {
        wallet: w.key(),
        previous_owner: previous,
        new_owner: w.ownership.owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferWalletOwnership<'info> {
    #[account(
        mut,
        seeds = [VESTING_WALLET_SEED, vesting_wallet.mint.as_ref(), &[vesting_wallet.wallet_id]],
        bump = vesting_wallet.bump
    )]
    pub vesting_wallet: Account<'info, VestingWallet>,
    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct AcceptWalletOwnership<'info> {
    #[account(
        mut,
        seeds = [VESTING_WALLET_SEED, vesting_wallet.mint.as_ref(), &[vesting_wallet.wallet_id]],
        bump = vesting_wallet.bump
    )]
    pub vesting_wallet: Account<'info, VestingWallet>,
    pub candidate: Signer<'info>,
}

#[event]
pub struct WalletOwnershipProposed {
    pub wallet: Pubkey,
    pub owner: Pubkey,
    pub candidate: Pubkey,
}

#[event]
pub struct WalletOwnershipTransferred {
    pub wallet: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
