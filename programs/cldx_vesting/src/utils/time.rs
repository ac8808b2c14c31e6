//! Fixed-length vesting period arithmetic (30-day periods, no calendar drift).
//! - period_index = floor((now - start) / PERIOD_SECONDS)
//! - remainder = seconds elapsed inside the current period
//! - boundary_k = start + k * PERIOD_SECONDS

use crate::constants::PERIOD_SECONDS;
use crate::error::CldxError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodPosition {
    pub index: u64,
    /// Seconds into period `index`, in [0, PERIOD_SECONDS).
    pub remainder: i64,
}

pub fn period_position(now_ts: i64, start_ts: i64) -> std::result::Result<PeriodPosition, CldxError> {
    if now_ts < start_ts {
        return Err(CldxError::VestingNotStarted);
    }
    let elapsed = now_ts
        .checked_sub(start_ts)
        .ok_or(CldxError::MathOverflow)?;
    let index = elapsed / PERIOD_SECONDS;
    let remainder = elapsed - index * PERIOD_SECONDS;
    Ok(PeriodPosition {
        index: index as u64,
        remainder,
    })
}

/// Timestamp at which period `index` opens.
pub fn period_start_ts(start_ts: i64, index: u64) -> std::result::Result<i64, CldxError> {
    let offset = i64::try_from(index)
        .map_err(|_| CldxError::MathOverflow)?
        .checked_mul(PERIOD_SECONDS)
        .ok_or(CldxError::MathOverflow)?;
    start_ts.checked_add(offset).ok_or(CldxError::MathOverflow)
}

/// True if now is at or after the close of the last of `periods` periods.
pub fn is_after_vesting_end(now_ts: i64, start_ts: i64, periods: usize) -> std::result::Result<bool, CldxError> {
    if now_ts < start_ts {
        return Ok(false);
    }
    let end = period_start_ts(start_ts, periods as u64)?;
    Ok(now_ts >= end)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_775_865_600; // 2026-04-11 00:00:00 UTC

    #[test]
    fn period_boundary_inclusive() {
        assert_eq!(
            period_position(START, START).unwrap(),
            PeriodPosition { index: 0, remainder: 0 }
        );

        let b1 = START + PERIOD_SECONDS;
        assert_eq!(period_position(b1, START).unwrap().index, 1);
        assert_eq!(period_position(b1, START).unwrap().remainder, 0);

        // one second before boundary_1 => still period 0
        let before = period_position(b1 - 1, START).unwrap();
        assert_eq!(before.index, 0);
        assert_eq!(before.remainder, PERIOD_SECONDS - 1);
    }

    #[test]
    fn before_start_is_rejected() {
        assert!(matches!(
            period_position(START - 1, START),
            Err(CldxError::VestingNotStarted)
        ));
        assert!(!is_after_vesting_end(START - 1, START, 12).unwrap());
    }

    #[test]
    fn vesting_end_after_last_period() {
        let end = period_start_ts(START, 12).unwrap();
        assert_eq!(end, START + 12 * PERIOD_SECONDS);
        assert!(!is_after_vesting_end(end - 1, START, 12).unwrap());
        assert!(is_after_vesting_end(end, START, 12).unwrap());
    }
}
