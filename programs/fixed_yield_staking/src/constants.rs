//! Program constants for the fixed-yield staking program.
//!
//! PDA seed tags, the percentage denominator used by the reward formula,
//! and parameter bounds enforced at initialization.

/// Seed for deriving the platform info PDA (singleton)
pub const PLATFORM_INFO_SEED: &[u8] = b"platforminfo";

/// Seed for deriving the token authority PDA that signs custody transfers
pub const TOKEN_AUTHORITY_SEED: &[u8] = b"tokenauthority";

/// Seed for deriving a user's stake counter PDA
pub const STAKE_COUNTER_SEED: &[u8] = b"stakecounter";

/// Seed for deriving a user's stake info PDA (followed by user and stake id)
pub const USER_STAKE_SEED: &[u8] = b"userstakeaccount";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Reward percentage denominator (100% = 100)
pub const PERCENTAGE_DENOMINATOR: u64 = 100;

/// Maximum allowed reward percentage over a full lock period
pub const MAX_REWARD_PERCENTAGE: u64 = 100;

/// Longest accepted lock period (100 years)
pub const MAX_STAKE_PERIOD: i64 = 100 * 365 * SECONDS_PER_DAY;
