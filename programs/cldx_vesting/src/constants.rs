//! Program-wide constants: PDA seeds, period length, release curves, burn policy.

pub const VESTING_WALLET_SEED: &[u8] = b"vesting_wallet";
pub const VESTING_VAULT_SEED: &[u8] = b"vesting_vault";
pub const SWAP_LEDGER_SEED: &[u8] = b"swap_ledger";
pub const TREASURY_VAULT_SEED: &[u8] = b"treasury_vault";
pub const APPROVED_WALLET_SEED: &[u8] = b"approved_wallet";
pub const SWAP_ACCOUNT_SEED: &[u8] = b"swap_account";

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Days in one vesting period.
pub const DAYS_PER_PERIOD: u64 = 30;

/// Length of one vesting period in seconds.
pub const PERIOD_SECONDS: i64 = DAYS_PER_PERIOD as i64 * SECONDS_PER_DAY;

/// The allocation is split into this many units before the curve is applied.
pub const PERCENT_UNITS: u64 = 100;

/// Longest supported schedule, sizes the wallet account.
pub const MAX_SCHEDULE_PERIODS: usize = 84;

/// Basis points denominator (10000 = 100%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Burn cap of the strict treasury: 20% of supply.
pub const DEFAULT_MAX_BURN_BPS: u16 = 2_000;

/// Burn percentages the owner may select.
pub const ALLOWED_BURN_PERCENTAGES: [u8; 6] = [0, 1, 2, 3, 4, 5];

// Release curves, run-length encoded as (periods, percent of allocation).
// Every curve covers exactly its month count and sums to 100.

pub const CURVE_12_MONTHS: &[(u8, u8)] = &[(10, 8), (2, 10)];
pub const CURVE_24_MONTHS: &[(u8, u8)] = &[(20, 4), (4, 5)];
pub const CURVE_36_MONTHS: &[(u8, u8)] = &[(8, 2), (28, 3)];
pub const CURVE_48_MONTHS: &[(u8, u8)] = &[(44, 2), (4, 3)];
pub const CURVE_60_MONTHS: &[(u8, u8)] = &[(20, 1), (40, 2)];
pub const CURVE_72_MONTHS: &[(u8, u8)] = &[(44, 1), (28, 2)];
pub const CURVE_84_MONTHS: &[(u8, u8)] = &[(68, 1), (16, 2)];
