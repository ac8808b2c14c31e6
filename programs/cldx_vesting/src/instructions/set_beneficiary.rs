use anchor_lang::prelude::*;

use crate::constants::VESTING_WALLET_SEED;
use crate::error::CldxError;
use crate::state::VestingWallet;

pub fn set_beneficiary(ctx: Context<SetBeneficiary>, new_beneficiary: Pubkey) -> Result<()> {
    require!(new_beneficiary != Pubkey::default(), CldxError::ZeroAddress);

    let wallet_key = ctx.accounts.vesting_wallet.key();
    let w = &mut ctx.accounts.vesting_wallet;
    w.ownership.require_owner(&ctx.accounts.owner.key())?;

    let old = w.beneficiary;
    w.beneficiary = new_beneficiary;

    emit!(BeneficiarySet {
        wallet: wallet_key,
        old_beneficiary: old,
        new_beneficiary,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetBeneficiary<'info> {
    #[account(
        mut,
        seeds = [VESTING_WALLET_SEED, vesting_wallet.mint.as_ref(), &[vesting_wallet.wallet_id]],
        bump = vesting_wallet.bump
    )]
    pub vesting_wallet: Account<'info, VestingWallet>,

    pub owner: Signer<'info>,
}

#[event]
pub struct BeneficiarySet {
    pub wallet: Pubkey,
    pub old_beneficiary: Pubkey,
    pub new_beneficiary: Pubkey,
}
