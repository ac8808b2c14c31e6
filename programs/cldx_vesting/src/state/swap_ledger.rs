use anchor_lang::prelude::*;

use crate::constants::{ALLOWED_BURN_PERCENTAGES, BPS_DENOMINATOR, PERCENT_UNITS};
use crate::error::CldxError;
use crate::state::{Ownership, SwapAccount};

/// Treasury PDA bridging CLDX to the external ECO ledger.
#[account]
pub struct SwapLedger {
    pub ownership: Ownership,
    /// Attests to ECO-side events; distinct from the owner.
    pub oracle: Pubkey,
    /// Token mint.
    pub mint: Pubkey,
    /// Treasury token account (PDA, authority = this ledger).
    pub vault: Pubkey,
    /// Percent of each CLDX -> ECO swap that is burnt.
    pub burn_percentage: u8,
    /// Mint supply when the ledger was created.
    pub total_supply: u64,
    /// Upper bound on `total_burnt`.
    pub burn_cap: u64,
    pub total_burnt: u64,
    pub paused: bool,
    pub locked: bool,
    pub bump: u8,
    pub vault_bump: u8,
}

impl SwapLedger {
    pub const SIZE: usize =
        Ownership::SIZE + // ownership
        32 + // oracle
        32 + // mint
        32 + // vault
        1 +  // burn_percentage
        8 +  // total_supply
        8 +  // burn_cap
        8 +  // total_burnt
        1 +  // paused
        1 +  // locked
        1 +  // bump
        1;   // vault_bump
}

/// How a CLDX -> ECO swap amount divides between burn and lock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BurnSplit {
    pub burn: u64,
    pub lock: u64,
}

/// `burn = amount * pct / 100` (truncating), `lock = amount - burn`.
pub fn split_burn(amount: u64, burn_percentage: u8) -> std::result::Result<BurnSplit, CldxError> {
    let burn = (amount as u128)
        .checked_mul(burn_percentage as u128)
        .ok_or(CldxError::MathOverflow)?
        / PERCENT_UNITS as u128;
    let burn = u64::try_from(burn).map_err(|_| CldxError::MathOverflow)?;
    let lock = amount.checked_sub(burn).ok_or(CldxError::MathOverflow)?;
    Ok(BurnSplit { burn, lock })
}

/// Cap is fixed at ledger creation, so an unminted supply is refused.
pub fn burn_cap_for(total_supply: u64, max_burn_bps: u16) -> std::result::Result<u64, CldxError> {
    if total_supply == 0 {
        return Err(CldxError::ZeroTotalSupply);
    }
    if max_burn_bps as u64 > BPS_DENOMINATOR {
        return Err(CldxError::InvalidBurnCap);
    }
    let cap = (total_supply as u128)
        .checked_mul(max_burn_bps as u128)
        .ok_or(CldxError::MathOverflow)?
        / BPS_DENOMINATOR as u128;
    u64::try_from(cap).map_err(|_| CldxError::MathOverflow)
}

pub fn validate_burn_percentage(pct: u8) -> std::result::Result<(), CldxError> {
    if !ALLOWED_BURN_PERCENTAGES.contains(&pct) {
        return Err(CldxError::InvalidBurnPercentage);
    }
    Ok(())
}

impl SwapLedger {
    pub fn require_oracle(&self, signer: &Pubkey) -> std::result::Result<(), CldxError> {
        if *signer != self.oracle {
            return Err(CldxError::UnauthorizedOracle);
        }
        Ok(())
    }

    pub fn ensure_not_paused(&self) -> std::result::Result<(), CldxError> {
        if self.paused {
            return Err(CldxError::Paused);
        }
        Ok(())
    }

    /// Returns the previous percentage.
    pub fn set_burn_percentage(&mut self, pct: u8) -> std::result::Result<u8, CldxError> {
        validate_burn_percentage(pct)?;
        let old = self.burn_percentage;
        self.burn_percentage = pct;
        Ok(old)
    }

    /// Count `amount` against the burn cap.
    pub fn record_burn(&mut self, amount: u64) -> std::result::Result<(), CldxError> {
        let total = self
            .total_burnt
            .checked_add(amount)
            .ok_or(CldxError::MathOverflow)?;
        if total > self.burn_cap {
            return Err(CldxError::ExceededBurnAllocation);
        }
        self.total_burnt = total;
        Ok(())
    }

    /// Apply the burn tax to a CLDX -> ECO swap and credit the locked part
    /// to `account`. The caller moves the tokens.
    pub fn settle_cldx_to_eco(
        &mut self,
        account: &mut SwapAccount,
        amount: u64,
    ) -> std::result::Result<BurnSplit, CldxError> {
        let split = split_burn(amount, self.burn_percentage)?;
        if split.burn > 0 {
            self.record_burn(split.burn)?;
        }
        account.credit_eco(split.lock)?;
        Ok(split)
    }

    /// Direct CLDX -> ECO swap for `account`. Only a zero burn rate records
    /// the amount as a completed swap in the account's slot; any configured
    /// rate leaves the slot alone, even when the burn truncates to zero.
    pub fn swap_cldx_to_eco(
        &mut self,
        account: &mut SwapAccount,
        amount: u64,
    ) -> std::result::Result<BurnSplit, CldxError> {
        let split = self.settle_cldx_to_eco(account, amount)?;
        if self.burn_percentage == 0 {
            account.record_completed(amount);
        }
        Ok(split)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PendingSwap, SwapStatus};

    fn ledger(burn_percentage: u8, total_supply: u64, max_burn_bps: u16) -> SwapLedger {
        SwapLedger {
            ownership: Ownership::new(Pubkey::new_unique()),
            oracle: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            burn_percentage,
            total_supply,
            burn_cap: burn_cap_for(total_supply, max_burn_bps).unwrap(),
            total_burnt: 0,
            paused: false,
            locked: false,
            bump: 255,
            vault_bump: 254,
        }
    }

    #[test]
    fn split_truncates_burn() {
        assert_eq!(split_burn(1_000, 3).unwrap(), BurnSplit { burn: 30, lock: 970 });
        assert_eq!(split_burn(99, 5).unwrap(), BurnSplit { burn: 4, lock: 95 });
        assert_eq!(split_burn(19, 5).unwrap(), BurnSplit { burn: 0, lock: 19 });
        assert_eq!(split_burn(777, 0).unwrap(), BurnSplit { burn: 0, lock: 777 });
        assert_eq!(
            split_burn(u64::MAX, 5).unwrap().burn,
            ((u64::MAX as u128) * 5 / 100) as u64
        );
    }

    #[test]
    fn burn_percentage_is_enumerated() {
        let mut l = ledger(0, 1_000_000, 2_000);
        for pct in 0..=5u8 {
            l.set_burn_percentage(pct).unwrap();
        }
        assert_eq!(l.set_burn_percentage(2).unwrap(), 5);
        for pct in [6u8, 10, 100, 255] {
            assert!(matches!(
                l.set_burn_percentage(pct),
                Err(CldxError::InvalidBurnPercentage)
            ));
        }
        assert_eq!(l.burn_percentage, 2);
    }

    #[test]
    fn burn_cap_is_fraction_of_supply() {
        assert_eq!(burn_cap_for(1_000_000, crate::constants::DEFAULT_MAX_BURN_BPS).unwrap(), 200_000);
        assert_eq!(burn_cap_for(1_000_000, 10_000).unwrap(), 1_000_000);
        assert!(matches!(burn_cap_for(1, 10_001), Err(CldxError::InvalidBurnCap)));
        assert!(matches!(burn_cap_for(0, 2_000), Err(CldxError::ZeroTotalSupply)));
    }

    #[test]
    fn burns_stop_at_cap() {
        let mut l = ledger(0, 1_000_000, 2_000);
        l.record_burn(150_000).unwrap();
        assert!(matches!(
            l.record_burn(50_001),
            Err(CldxError::ExceededBurnAllocation)
        ));
        assert_eq!(l.total_burnt, 150_000);
        l.record_burn(50_000).unwrap();
        assert_eq!(l.total_burnt, 200_000);
    }

    #[test]
    fn settle_credits_locked_part_and_counts_burn() {
        let mut l = ledger(3, 1_000_000, 2_000);
        let mut acct = SwapAccount::default();

        let split = l.settle_cldx_to_eco(&mut acct, 1_000).unwrap();
        assert_eq!(split, BurnSplit { burn: 30, lock: 970 });
        assert_eq!(acct.swapped_for_eco, 970);
        assert_eq!(l.total_burnt, 30);

        l.set_burn_percentage(0).unwrap();
        let split = l.settle_cldx_to_eco(&mut acct, 500).unwrap();
        assert_eq!(split, BurnSplit { burn: 0, lock: 500 });
        assert_eq!(acct.swapped_for_eco, 1_470);
        assert_eq!(l.total_burnt, 30);
    }

    #[test]
    fn settle_over_cap_changes_nothing() {
        let mut l = ledger(5, 1_000, 100);
        let mut acct = SwapAccount::default();
        assert_eq!(l.burn_cap, 10);
        assert!(matches!(
            l.settle_cldx_to_eco(&mut acct, 1_000),
            Err(CldxError::ExceededBurnAllocation)
        ));
        assert_eq!(acct.swapped_for_eco, 0);
        assert_eq!(l.total_burnt, 0);
    }

    #[test]
    fn direct_swap_keeps_pending_slot_when_burn_rounds_to_zero() {
        let mut l = ledger(5, 1_000_000, 2_000);
        let mut acct = SwapAccount::default();
        acct.initiate(100);

        let split = l.swap_cldx_to_eco(&mut acct, 19).unwrap();
        assert_eq!(split, BurnSplit { burn: 0, lock: 19 });
        assert_eq!(
            acct.pending,
            PendingSwap {
                status: SwapStatus::Pending,
                amount: 100
            }
        );
        assert_eq!(acct.swapped_for_eco, 19);
        assert!(acct.pending_matches(100));
    }

    #[test]
    fn direct_swap_without_burn_records_completion() {
        let mut l = ledger(0, 1_000_000, 2_000);
        let mut acct = SwapAccount::default();
        acct.initiate(100);

        let split = l.swap_cldx_to_eco(&mut acct, 40).unwrap();
        assert_eq!(split, BurnSplit { burn: 0, lock: 40 });
        assert_eq!(
            acct.pending,
            PendingSwap {
                status: SwapStatus::Completed,
                amount: 40
            }
        );
        assert_eq!(acct.swapped_for_eco, 40);
    }

    #[test]
    fn direct_swap_with_burn_counts_it_and_keeps_slot() {
        let mut l = ledger(3, 1_000_000, 2_000);
        let mut acct = SwapAccount::default();

        let split = l.swap_cldx_to_eco(&mut acct, 1_000).unwrap();
        assert_eq!(split, BurnSplit { burn: 30, lock: 970 });
        assert_eq!(l.total_burnt, 30);
        assert_eq!(acct.pending, PendingSwap::default());
    }

    #[test]
    fn oracle_and_pause_checks() {
        let mut l = ledger(0, 1, 0);
        let oracle = l.oracle;
        l.require_oracle(&oracle).unwrap();
        assert!(matches!(
            l.require_oracle(&l.ownership.owner),
            Err(CldxError::UnauthorizedOracle)
        ));
        l.ensure_not_paused().unwrap();
        l.paused = true;
        assert!(matches!(l.ensure_not_paused(), Err(CldxError::Paused)));
    }
}
