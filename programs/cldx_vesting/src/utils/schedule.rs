//! Release curve tables and the schedule builder.
//!
//! The allocation is cut into `PERCENT_UNITS` equal units (truncating) and
//! each period unlocks the number of units its curve entry names. Whatever the
//! truncation strands is never scheduled; see `sweep_dust_after_end`.

use crate::constants::{
    CURVE_12_MONTHS, CURVE_24_MONTHS, CURVE_36_MONTHS, CURVE_48_MONTHS, CURVE_60_MONTHS,
    CURVE_72_MONTHS, CURVE_84_MONTHS, PERCENT_UNITS, PERIOD_SECONDS,
};
use crate::error::CldxError;
use crate::state::VestingSchedule;
use crate::utils::time;

/// Supported vesting lengths, in 30-day periods.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum VestingDuration {
    Months12 = 12,
    Months24 = 24,
    Months36 = 36,
    Months48 = 48,
    Months60 = 60,
    Months72 = 72,
    Months84 = 84,
}

impl VestingDuration {
    pub const ALL: [VestingDuration; 7] = [
        VestingDuration::Months12,
        VestingDuration::Months24,
        VestingDuration::Months36,
        VestingDuration::Months48,
        VestingDuration::Months60,
        VestingDuration::Months72,
        VestingDuration::Months84,
    ];

    pub fn months(self) -> u8 {
        self as u8
    }

    pub fn curve(self) -> &'static [(u8, u8)] {
        match self {
            VestingDuration::Months12 => CURVE_12_MONTHS,
            VestingDuration::Months24 => CURVE_24_MONTHS,
            VestingDuration::Months36 => CURVE_36_MONTHS,
            VestingDuration::Months48 => CURVE_48_MONTHS,
            VestingDuration::Months60 => CURVE_60_MONTHS,
            VestingDuration::Months72 => CURVE_72_MONTHS,
            VestingDuration::Months84 => CURVE_84_MONTHS,
        }
    }

    /// Per-period percentages, one item per period.
    pub fn percentages(self) -> impl Iterator<Item = u8> {
        self.curve()
            .iter()
            .flat_map(|&(periods, pct)| core::iter::repeat(pct).take(periods as usize))
    }
}

impl TryFrom<u8> for VestingDuration {
    type Error = CldxError;

    fn try_from(months: u8) -> Result<Self, Self::Error> {
        VestingDuration::ALL
            .into_iter()
            .find(|d| d.months() == months)
            .ok_or(CldxError::InvalidMonthsValue)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleTable {
    pub schedules: Vec<VestingSchedule>,
    /// `prefix_totals[i]` = sum of `schedules[..i].total_amount`; one longer than `schedules`.
    pub prefix_totals: Vec<u64>,
}

impl ScheduleTable {
    pub fn total(&self) -> u64 {
        self.prefix_totals.last().copied().unwrap_or(0)
    }
}

pub fn build_schedule(
    allocation: u64,
    duration: VestingDuration,
    start_ts: i64,
) -> std::result::Result<ScheduleTable, CldxError> {
    if allocation == 0 {
        return Err(CldxError::VestingAllocationZero);
    }
    let unit = allocation / PERCENT_UNITS;
    let count = duration.months() as usize;

    let mut schedules = Vec::with_capacity(count);
    let mut prefix_totals = Vec::with_capacity(count + 1);
    let mut running: u64 = 0;
    prefix_totals.push(running);

    for (i, pct) in duration.percentages().enumerate() {
        let total_amount = unit
            .checked_mul(pct as u64)
            .ok_or(CldxError::MathOverflow)?;
        schedules.push(VestingSchedule {
            total_amount,
            start_time: time::period_start_ts(start_ts, i as u64)?,
            duration: PERIOD_SECONDS,
        });
        running = running
            .checked_add(total_amount)
            .ok_or(CldxError::MathOverflow)?;
        prefix_totals.push(running);
    }

    Ok(ScheduleTable {
        schedules,
        prefix_totals,
    })
}

/// BLAKE3 digest of the raw schedule entries.
pub fn schedule_fingerprint(schedules: &[VestingSchedule]) -> [u8; 32] {
    *blake3::hash(bytemuck::cast_slice(schedules)).as_bytes()
}
