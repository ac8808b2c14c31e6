use anchor_lang::prelude::*;

use crate::error::CldxError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwapStatus {
    #[default]
    NoPending,
    Pending,
    Completed,
}

/// The single in-flight swap intent of an account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingSwap {
    pub status: SwapStatus,
    pub amount: u64,
}

/// Per-account swap PDA under a ledger.
#[account]
#[derive(Default)]
pub struct SwapAccount {
    pub ledger: Pubkey,
    pub account: Pubkey,
    /// Cumulative CLDX locked for ECO (after burn).
    pub swapped_for_eco: u64,
    /// Cumulative CLDX paid out against ECO.
    pub swapped_for_cldx: u64,
    pub pending: PendingSwap,
    pub bump: u8,
}

impl SwapAccount {
    pub const SIZE: usize =
        32 + // ledger
        32 + // account
        8 +  // swapped_for_eco
        8 +  // swapped_for_cldx
        1 + 8 + // pending
        1;   // bump

    /// Bind a freshly created account to its seeds; no-op once bound.
    pub fn bind(&mut self, ledger: Pubkey, account: Pubkey, bump: u8) {
        if self.ledger == Pubkey::default() {
            self.ledger = ledger;
            self.account = account;
            self.bump = bump;
        }
    }

    /// Record a new intent, replacing whatever the slot held.
    /// Returns the replaced entry.
    pub fn initiate(&mut self, amount: u64) -> PendingSwap {
        core::mem::replace(
            &mut self.pending,
            PendingSwap {
                status: SwapStatus::Pending,
                amount,
            },
        )
    }

    /// Exact-amount match only; partial transfers never consummate.
    pub fn pending_matches(&self, amount: u64) -> bool {
        self.pending.status == SwapStatus::Pending && self.pending.amount == amount
    }

    pub fn complete_pending(&mut self) {
        self.pending.status = SwapStatus::Completed;
    }

    pub fn record_completed(&mut self, amount: u64) {
        self.pending = PendingSwap {
            status: SwapStatus::Completed,
            amount,
        };
    }

    pub fn credit_eco(&mut self, amount: u64) -> std::result::Result<(), CldxError> {
        self.swapped_for_eco = self
            .swapped_for_eco
            .checked_add(amount)
            .ok_or(CldxError::MathOverflow)?;
        Ok(())
    }

    pub fn credit_cldx(&mut self, amount: u64) -> std::result::Result<(), CldxError> {
        self.swapped_for_cldx = self
            .swapped_for_cldx
            .checked_add(amount)
            .ok_or(CldxError::MathOverflow)?;
        Ok(())
    }
}

/// Membership of one wallet in a ledger's approved set.
#[account]
#[derive(Default)]
pub struct ApprovedWallet {
    pub ledger: Pubkey,
    pub wallet: Pubkey,
    pub approved: bool,
    pub bump: u8,
}

impl ApprovedWallet {
    pub const SIZE: usize = 32 + 32 + 1 + 1;

    pub fn bind(&mut self, ledger: Pubkey, wallet: Pubkey, bump: u8) {
        if self.ledger == Pubkey::default() {
            self.ledger = ledger;
            self.wallet = wallet;
            self.bump = bump;
        }
    }

    pub fn approve(&mut self) -> std::result::Result<(), CldxError> {
        if self.approved {
            return Err(CldxError::AlreadyApproved);
        }
        self.approved = true;
        Ok(())
    }

    pub fn remove(&mut self) -> std::result::Result<(), CldxError> {
        if !self.approved {
            return Err(CldxError::NotApprovedWallet);
        }
        self.approved = false;
        Ok(())
    }
}

/// Approval check for an optional membership account.
pub fn require_approved(entry: Option<&ApprovedWallet>) -> std::result::Result<(), CldxError> {
    match entry {
        Some(w) if w.approved => Ok(()),
        _ => Err(CldxError::NotApprovedWallet),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_swap_requires_exact_amount() {
        let mut a = SwapAccount::default();
        assert!(!a.pending_matches(0));

        a.initiate(100);
        assert!(!a.pending_matches(99));
        assert!(!a.pending_matches(101));
        assert_eq!(a.pending.status, SwapStatus::Pending);
        assert_eq!(a.pending.amount, 100);

        assert!(a.pending_matches(100));
        a.complete_pending();
        assert_eq!(
            a.pending,
            PendingSwap {
                status: SwapStatus::Completed,
                amount: 100
            }
        );
        assert!(!a.pending_matches(100));
    }

    #[test]
    fn initiate_overwrites_previous_intent() {
        let mut a = SwapAccount::default();
        a.initiate(100);
        let replaced = a.initiate(250);
        assert_eq!(replaced.amount, 100);
        assert_eq!(replaced.status, SwapStatus::Pending);
        assert!(!a.pending_matches(100));
        assert!(a.pending_matches(250));

        // a completed slot is reusable
        a.complete_pending();
        a.initiate(10);
        assert!(a.pending_matches(10));
    }

    #[test]
    fn counters_accumulate() {
        let mut a = SwapAccount::default();
        a.credit_eco(5).unwrap();
        a.credit_eco(7).unwrap();
        a.credit_cldx(3).unwrap();
        assert_eq!(a.swapped_for_eco, 12);
        assert_eq!(a.swapped_for_cldx, 3);
        a.swapped_for_cldx = u64::MAX;
        assert!(matches!(a.credit_cldx(1), Err(CldxError::MathOverflow)));
    }

    #[test]
    fn bind_only_once() {
        let mut a = SwapAccount::default();
        let (ledger, owner) = (Pubkey::new_unique(), Pubkey::new_unique());
        a.bind(ledger, owner, 7);
        a.bind(Pubkey::new_unique(), Pubkey::new_unique(), 9);
        assert_eq!((a.ledger, a.account, a.bump), (ledger, owner, 7));
    }

    #[test]
    fn approval_is_idempotency_guarded() {
        let mut w = ApprovedWallet::default();
        assert!(matches!(require_approved(None), Err(CldxError::NotApprovedWallet)));
        assert!(matches!(require_approved(Some(&w)), Err(CldxError::NotApprovedWallet)));
        assert!(matches!(w.remove(), Err(CldxError::NotApprovedWallet)));

        w.approve().unwrap();
        require_approved(Some(&w)).unwrap();
        assert!(matches!(w.approve(), Err(CldxError::AlreadyApproved)));

        w.remove().unwrap();
        assert!(matches!(w.remove(), Err(CldxError::NotApprovedWallet)));
        w.approve().unwrap();
    }
}
