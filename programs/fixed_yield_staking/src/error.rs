//! Error types for the fixed-yield staking program.
//!
//! Error codes start at 6000 (Anchor's custom error offset) and are grouped
//! by kind: input validation, state, timing, math, authorization and
//! account validation.
//!
//! Custody failures (insufficient user balance, transfer rejection) come from
//! the SPL token program and are propagated unchanged.

use anchor_lang::prelude::*;

/// Custom error codes for the fixed-yield staking program.
#[error_code]
pub enum StakingError {
    // ========== Input Validation Errors ==========

    /// [6000] Stake amount is below the platform minimum.
    #[msg("Stake amount is below the platform minimum")]
    InsufficientAmount,

    /// [6001] Cannot stake or fund with zero amount.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// [6002] Reward percentage exceeds 100.
    #[msg("Reward percentage too high")]
    InvalidRewardPercentage,

    /// [6003] Stake period must be positive and at most 100 years.
    #[msg("Stake period out of range")]
    InvalidStakePeriod,

    /// [6004] Minimum stake must be greater than zero.
    #[msg("Minimum stake must be greater than zero")]
    InvalidMinStake,

    // ========== State/Balance Errors ==========

    /// [6005] Platform info has already been initialized.
    #[msg("Platform already initialized")]
    AlreadyInitialized,

    /// [6006] The stake position has been withdrawn and holds no principal.
    #[msg("Stake position is closed")]
    StakeClosed,

    /// [6007] The custody account cannot cover the payout.
    #[msg("Platform does not have enough tokens")]
    InsufficientPlatformFunds,

    /// [6008] The lock period is over and every unit of reward has been paid.
    #[msg("Reward already claimed")]
    AlreadyClaimed,

    // ========== Time/Lock Errors ==========

    /// [6009] Nothing has accrued since the last claim. Retry later.
    #[msg("No available reward")]
    NoAvailableReward,

    /// [6010] The lock period has not elapsed. Retry later.
    #[msg("Stake has not expired")]
    StakeNotExpired,

    // ========== Math/Overflow Errors ==========

    /// [6011] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    /// [6012] Arithmetic underflow occurred during calculation.
    #[msg("Arithmetic underflow occurred during calculation")]
    MathUnderflow,

    // ========== Authorization Errors ==========

    /// [6013] Signer does not own this stake position.
    #[msg("Unauthorized action")]
    Unauthorized,

    // ========== Account Validation Errors ==========

    /// [6014] The provided mint does not match the platform's mint.
    #[msg("Token mint mismatch - wrong token for this platform")]
    MintMismatch,

    /// [6015] The provided custody account does not match the platform's.
    #[msg("Platform token account mismatch")]
    PlatformAccountMismatch,
}

impl StakingError {
    /// Timing errors are expected outcomes: the caller may wait and resubmit.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            StakingError::NoAvailableReward | StakingError::StakeNotExpired
        )
    }
}

/// Anchor error code carried by `err`, for asserting on specific failures.
#[cfg(test)]
pub(crate) fn error_code(err: anchor_lang::error::Error) -> u32 {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        other => panic!("unexpected error: {other:?}"),
    }
}
