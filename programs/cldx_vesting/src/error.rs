use anchor_lang::prelude::*;

/// Custom error codes for the CLDX vesting and swap treasury program.
#[error_code]
pub enum CldxError {
    #[msg("Vesting duration must be one of 12, 24, 36, 48, 60, 72 or 84 months")]
    InvalidMonthsValue,

    #[msg("Vesting allocation must be greater than zero")]
    VestingAllocationZero,

    #[msg("Vesting has not started yet")]
    VestingNotStarted,

    #[msg("Vesting schedule is not configured")]
    ScheduleNotConfigured,

    #[msg("Insufficient amount")]
    InsufficientAmount,

    #[msg("Insufficient tokens")]
    InsufficientTokens,

    #[msg("Burn would exceed the burn allocation")]
    ExceededBurnAllocation,

    #[msg("Wallet is not approved")]
    NotApprovedWallet,

    #[msg("Wallet is already approved")]
    AlreadyApproved,

    #[msg("Burn percentage must be between 0 and 5")]
    InvalidBurnPercentage,

    #[msg("Zero address")]
    ZeroAddress,

    #[msg("Unauthorized: owner signature required")]
    UnauthorizedOwner,

    #[msg("Unauthorized: oracle signature required")]
    UnauthorizedOracle,

    #[msg("No ownership transfer is pending")]
    NoPendingOwner,

    #[msg("Unauthorized: pending owner signature required")]
    UnauthorizedPendingOwner,

    #[msg("Release would exceed the scheduled total")]
    ReleaseExceedsVested,

    #[msg("Already initialized")]
    AlreadyInitialized,

    #[msg("Not initialized")]
    NotInitialized,

    #[msg("Paused")]
    Paused,

    #[msg("Not paused")]
    NotPaused,

    #[msg("Already paused")]
    AlreadyPaused,

    #[msg("Reentrant call")]
    ReentrantCall,

    #[msg("Cliff period cannot be negative")]
    InvalidCliff,

    #[msg("Burn cap must be between 0 and 10000 bps")]
    InvalidBurnCap,

    #[msg("Mint supply is zero; burn cap would be zero")]
    ZeroTotalSupply,

    #[msg("Deposit would exceed the vesting allocation")]
    OverDeposit,

    #[msg("Sweep not allowed before vesting end")]
    SweepBeforeEnd,

    #[msg("Sweep not allowed: vested tokens remain unreleased")]
    SweepNotAllowedOutstanding,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
