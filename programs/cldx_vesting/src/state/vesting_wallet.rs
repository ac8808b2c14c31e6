use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

use crate::constants::{DAYS_PER_PERIOD, MAX_SCHEDULE_PERIODS, PERIOD_SECONDS};
use crate::error::CldxError;
use crate::state::Ownership;
use crate::utils::schedule::{build_schedule, schedule_fingerprint, VestingDuration};
use crate::utils::time;

/// One period of a vesting schedule. Written once at initialization.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable,
)]
#[repr(C)]
pub struct VestingSchedule {
    pub total_amount: u64,
    pub start_time: i64,
    pub duration: i64,
}

impl VestingSchedule {
    pub const SIZE: usize = core::mem::size_of::<VestingSchedule>();
}

/// Vesting wallet PDA: one allocation unlocking to one beneficiary.
#[account]
pub struct VestingWallet {
    pub ownership: Ownership,
    /// Token mint.
    pub mint: Pubkey,
    /// Token account holding the allocation (PDA, authority = this wallet).
    pub vault: Pubkey,
    /// Receives every release.
    pub beneficiary: Pubkey,
    /// Distinguishes wallets sharing a mint (team, advisors, ecosystem, ...).
    pub wallet_id: u8,
    /// Number of 30-day periods; one of the supported durations.
    pub duration_months: u8,
    /// Delay between initialization and the first period.
    pub cliff_seconds: i64,
    pub vesting_allocation: u64,
    /// Vesting start timestamp (Unix seconds, UTC).
    pub start_ts: i64,
    /// Monotonic; never exceeds the scheduled total.
    pub released_amount: u64,
    /// Blocks releases; withdrawals require it.
    pub paused: bool,
    pub initialized: bool,
    pub locked: bool,
    pub schedule_hash: [u8; 32],
    pub bump: u8,
    pub vault_bump: u8,
    pub schedules: Vec<VestingSchedule>,
    pub prefix_totals: Vec<u64>,
}

impl VestingWallet {
    pub const SIZE: usize =
        Ownership::SIZE + // ownership
        32 + // mint
        32 + // vault
        32 + // beneficiary
        1 +  // wallet_id
        1 +  // duration_months
        8 +  // cliff_seconds
        8 +  // vesting_allocation
        8 +  // start_ts
        8 +  // released_amount
        1 +  // paused
        1 +  // initialized
        1 +  // locked
        32 + // schedule_hash
        1 +  // bump
        1 +  // vault_bump
        4 + MAX_SCHEDULE_PERIODS * VestingSchedule::SIZE + // schedules
        4 + (MAX_SCHEDULE_PERIODS + 1) * 8; // prefix_totals
}

/// Snapshot of the vesting position at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReleaseQuote {
    pub releasable: u64,
    pub released: u64,
    /// Cumulative amount vested so far.
    pub total: u64,
}

impl VestingWallet {
    /// Build the schedule, start the clock after the cliff and go active.
    /// Allowed once per wallet.
    pub fn initialize_schedule(&mut self, beneficiary: Pubkey, now_ts: i64) -> std::result::Result<(), CldxError> {
        if self.initialized {
            return Err(CldxError::AlreadyInitialized);
        }
        if beneficiary == Pubkey::default() {
            return Err(CldxError::ZeroAddress);
        }
        let duration = VestingDuration::try_from(self.duration_months)?;
        let start_ts = now_ts
            .checked_add(self.cliff_seconds)
            .ok_or(CldxError::MathOverflow)?;
        let table = build_schedule(self.vesting_allocation, duration, start_ts)?;

        self.schedule_hash = schedule_fingerprint(&table.schedules);
        self.schedules = table.schedules;
        self.prefix_totals = table.prefix_totals;
        self.start_ts = start_ts;
        self.beneficiary = beneficiary;
        self.released_amount = 0;
        self.initialized = true;
        self.paused = false;
        Ok(())
    }

    /// Number of scheduled periods, if the table matches the configured duration.
    fn configured_count(&self) -> std::result::Result<usize, CldxError> {
        let expected = self.duration_months as usize;
        if expected == 0
            || self.schedules.len() != expected
            || self.prefix_totals.len() != expected + 1
        {
            return Err(CldxError::ScheduleNotConfigured);
        }
        Ok(expected)
    }

    /// Everything the schedule will ever unlock.
    pub fn total_vesting(&self) -> u64 {
        self.prefix_totals.last().copied().unwrap_or(0)
    }

    pub fn compute_releasable(&self, now_ts: i64) -> std::result::Result<ReleaseQuote, CldxError> {
        let pos = time::period_position(now_ts, self.start_ts)?;
        let count = self.configured_count()?;

        let total = if pos.index >= count as u64 {
            self.prefix_totals[count]
        } else {
            let i = pos.index as usize;
            let partial = (self.schedules[i].total_amount as u128)
                .checked_mul(pos.remainder as u128)
                .ok_or(CldxError::MathOverflow)?
                / PERIOD_SECONDS as u128;
            let partial = u64::try_from(partial).map_err(|_| CldxError::MathOverflow)?;
            self.prefix_totals[i]
                .checked_add(partial)
                .ok_or(CldxError::MathOverflow)?
        };

        let releasable = total
            .checked_sub(self.released_amount)
            .ok_or(CldxError::MathOverflow)?;
        Ok(ReleaseQuote {
            releasable,
            released: self.released_amount,
            total,
        })
    }

    /// Estimate only: the current period's amount spread over its days.
    pub fn daily_releasable(&self, now_ts: i64) -> u64 {
        if !self.initialized {
            return 0;
        }
        match time::period_position(now_ts, self.start_ts) {
            Ok(pos) => self
                .schedules
                .get(pos.index as usize)
                .map(|s| s.total_amount / DAYS_PER_PERIOD)
                .unwrap_or(0),
            Err(_) => 0,
        }
    }

    pub fn record_release(&mut self, amount: u64) -> std::result::Result<(), CldxError> {
        let released = self
            .released_amount
            .checked_add(amount)
            .ok_or(CldxError::MathOverflow)?;
        if released > self.total_vesting() {
            return Err(CldxError::ReleaseExceedsVested);
        }
        self.released_amount = released;
        Ok(())
    }

    /// Funding bound: what already left through releases plus what the vault
    /// holds plus `amount` may not exceed the allocation.
    pub fn check_deposit(&self, vault_balance: u64, amount: u64) -> std::result::Result<(), CldxError> {
        let funded = (self.released_amount as u128)
            .checked_add(vault_balance as u128)
            .and_then(|v| v.checked_add(amount as u128))
            .ok_or(CldxError::MathOverflow)?;
        if funded > self.vesting_allocation as u128 {
            return Err(CldxError::OverDeposit);
        }
        Ok(())
    }

    pub fn ensure_active(&self) -> std::result::Result<(), CldxError> {
        if self.paused {
            return Err(CldxError::Paused);
        }
        Ok(())
    }

    pub fn ensure_paused(&self) -> std::result::Result<(), CldxError> {
        if !self.paused {
            return Err(CldxError::NotPaused);
        }
        Ok(())
    }

    pub fn pause(&mut self) -> std::result::Result<(), CldxError> {
        if self.paused {
            return Err(CldxError::AlreadyPaused);
        }
        self.paused = true;
        Ok(())
    }

    pub fn unpause(&mut self) -> std::result::Result<(), CldxError> {
        if !self.initialized {
            return Err(CldxError::NotInitialized);
        }
        self.ensure_paused()?;
        self.paused = false;
        Ok(())
    }

    /// Whole schedule elapsed and every scheduled token paid out.
    pub fn is_settled(&self, now_ts: i64) -> std::result::Result<bool, CldxError> {
        let count = self.configured_count()?;
        if !time::is_after_vesting_end(now_ts, self.start_ts, count)? {
            return Err(CldxError::SweepBeforeEnd);
        }
        Ok(self.released_amount == self.total_vesting())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_775_865_600;

    fn wallet(duration_months: u8, allocation: u64, cliff_seconds: i64) -> VestingWallet {
        VestingWallet {
            ownership: Ownership::new(Pubkey::new_unique()),
            mint: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            beneficiary: Pubkey::default(),
            wallet_id: 0,
            duration_months,
            cliff_seconds,
            vesting_allocation: allocation,
            start_ts: 0,
            released_amount: 0,
            paused: true,
            initialized: false,
            locked: false,
            schedule_hash: [0u8; 32],
            bump: 255,
            vault_bump: 254,
            schedules: Vec::new(),
            prefix_totals: Vec::new(),
        }
    }

    fn active(duration_months: u8, allocation: u64, cliff_seconds: i64) -> VestingWallet {
        let mut w = wallet(duration_months, allocation, cliff_seconds);
        w.initialize_schedule(Pubkey::new_unique(), NOW).unwrap();
        w
    }

    #[test]
    fn size_fits_longest_schedule() {
        assert_eq!(VestingSchedule::SIZE, 24);
        let w = active(84, 1_000_000, 0);
        let mut buf = Vec::new();
        w.try_serialize(&mut buf).unwrap();
        assert!(buf.len() <= 8 + VestingWallet::SIZE);
    }

    #[test]
    fn initialize_starts_after_cliff_and_unpauses() {
        let cliff = 90 * 86_400;
        let w = active(12, 1_000_000, cliff);
        assert_eq!(w.start_ts, NOW + cliff);
        assert!(w.initialized);
        assert!(!w.paused);
        assert_eq!(w.schedules.len(), 12);
        assert_eq!(w.total_vesting(), 1_000_000);
        assert_eq!(w.schedule_hash, schedule_fingerprint(&w.schedules));
    }

    #[test]
    fn initialize_is_one_shot() {
        let mut w = active(12, 1_000_000, 0);
        assert!(matches!(
            w.initialize_schedule(Pubkey::new_unique(), NOW + 1),
            Err(CldxError::AlreadyInitialized)
        ));
        assert_eq!(w.start_ts, NOW);
    }

    #[test]
    fn initialize_validates_inputs() {
        let mut w = wallet(12, 1_000_000, 0);
        assert!(matches!(
            w.initialize_schedule(Pubkey::default(), NOW),
            Err(CldxError::ZeroAddress)
        ));
        let mut w = wallet(18, 1_000_000, 0);
        assert!(matches!(
            w.initialize_schedule(Pubkey::new_unique(), NOW),
            Err(CldxError::InvalidMonthsValue)
        ));
        let mut w = wallet(12, 0, 0);
        assert!(matches!(
            w.initialize_schedule(Pubkey::new_unique(), NOW),
            Err(CldxError::VestingAllocationZero)
        ));
        assert!(!w.initialized);
        assert!(w.paused);
    }

    #[test]
    fn twelve_month_end_to_end() {
        let mut w = active(12, 1_000_000, 0);
        let start = w.start_ts;

        assert_eq!(w.compute_releasable(start).unwrap().releasable, 0);
        assert_eq!(
            w.compute_releasable(start + PERIOD_SECONDS / 2).unwrap().releasable,
            40_000
        );
        let full = w.compute_releasable(start + 12 * PERIOD_SECONDS).unwrap();
        assert_eq!(full.releasable, 1_000_000);
        assert_eq!(full.total, 1_000_000);

        w.record_release(250_000).unwrap();
        let after = w.compute_releasable(start + 12 * PERIOD_SECONDS).unwrap();
        assert_eq!(after.releasable, 750_000);
        assert_eq!(after.released, 250_000);
    }

    #[test]
    fn before_start_and_unconfigured_fail() {
        let w = active(12, 1_000_000, 3_600);
        assert!(matches!(
            w.compute_releasable(w.start_ts - 1),
            Err(CldxError::VestingNotStarted)
        ));

        let mut broken = active(12, 1_000_000, 0);
        broken.schedules.pop();
        assert!(matches!(
            broken.compute_releasable(broken.start_ts),
            Err(CldxError::ScheduleNotConfigured)
        ));

        let uninit = wallet(12, 1_000_000, 0);
        assert!(matches!(
            uninit.compute_releasable(NOW),
            Err(CldxError::ScheduleNotConfigured)
        ));
    }

    #[test]
    fn vested_total_is_monotonic_across_periods() {
        for months in [12u8, 48, 84] {
            let w = active(months, 987_654_321, 0);
            let mut last = 0u64;
            let step = PERIOD_SECONDS / 7;
            let mut t = w.start_ts;
            while t <= w.start_ts + (months as i64 + 1) * PERIOD_SECONDS {
                let q = w.compute_releasable(t).unwrap();
                assert!(q.total >= last);
                assert!(q.total <= w.total_vesting());
                last = q.total;
                t += step;
            }
            assert_eq!(last, w.total_vesting());
        }
    }

    #[test]
    fn period_boundaries_hit_prefix_totals() {
        let w = active(24, 5_000_000, 0);
        for i in 0..=24usize {
            let q = w.compute_releasable(w.start_ts + i as i64 * PERIOD_SECONDS).unwrap();
            assert_eq!(q.total, w.prefix_totals[i]);
        }
    }

    #[test]
    fn released_never_exceeds_schedule_total() {
        let mut w = active(12, 1_000_050, 0);
        assert_eq!(w.total_vesting(), 1_000_000);
        w.record_release(999_999).unwrap();
        assert!(matches!(w.record_release(2), Err(CldxError::ReleaseExceedsVested)));
        w.record_release(1).unwrap();
        assert_eq!(w.released_amount, w.total_vesting());
        let q = w.compute_releasable(w.start_ts + 100 * PERIOD_SECONDS).unwrap();
        assert_eq!(q.releasable, 0);
    }

    #[test]
    fn daily_estimate_follows_current_period() {
        let uninit = wallet(12, 1_000_000, 0);
        assert_eq!(uninit.daily_releasable(NOW), 0);

        let w = active(12, 1_000_000, 86_400);
        assert_eq!(w.daily_releasable(w.start_ts - 1), 0);
        assert_eq!(w.daily_releasable(w.start_ts), 80_000 / 30);
        assert_eq!(
            w.daily_releasable(w.start_ts + 11 * PERIOD_SECONDS),
            100_000 / 30
        );
        assert_eq!(w.daily_releasable(w.start_ts + 12 * PERIOD_SECONDS), 0);
    }

    #[test]
    fn pause_gates_release_and_withdraw_inversely() {
        let mut fresh = wallet(12, 1_000_000, 0);
        assert!(matches!(fresh.ensure_active(), Err(CldxError::Paused)));
        assert!(matches!(fresh.unpause(), Err(CldxError::NotInitialized)));

        let mut w = active(12, 1_000_000, 0);
        w.ensure_active().unwrap();
        assert!(matches!(w.ensure_paused(), Err(CldxError::NotPaused)));
        assert!(matches!(w.unpause(), Err(CldxError::NotPaused)));

        w.pause().unwrap();
        assert!(matches!(w.pause(), Err(CldxError::AlreadyPaused)));
        assert!(matches!(w.ensure_active(), Err(CldxError::Paused)));
        w.ensure_paused().unwrap();

        w.unpause().unwrap();
        w.ensure_active().unwrap();

        assert!(matches!(fresh.pause(), Err(CldxError::AlreadyPaused)));
    }

    #[test]
    fn deposits_count_released_tokens() {
        let mut w = active(12, 1_000_000, 0);
        w.check_deposit(0, 1_000_000).unwrap();
        assert!(matches!(w.check_deposit(600_000, 400_001), Err(CldxError::OverDeposit)));

        // Vault drained by releases; refilling it past the allocation is refused.
        w.record_release(400_000).unwrap();
        w.check_deposit(0, 600_000).unwrap();
        assert!(matches!(w.check_deposit(0, 600_001), Err(CldxError::OverDeposit)));
        assert!(matches!(w.check_deposit(600_000, 1), Err(CldxError::OverDeposit)));
    }

    #[test]
    fn settled_only_after_end_and_full_release() {
        let mut w = active(12, 1_000_000, 0);
        let end = w.start_ts + 12 * PERIOD_SECONDS;
        assert!(matches!(w.is_settled(end - 1), Err(CldxError::SweepBeforeEnd)));
        assert!(!w.is_settled(end).unwrap());
        w.record_release(1_000_000).unwrap();
        assert!(w.is_settled(end).unwrap());
    }
}
