//! Instruction handlers for the fixed-yield staking program.
//!
//! This module contains all instruction implementations.

pub mod claim_reward;
pub mod fund_platform;
pub mod initialize;
pub mod stake;
pub mod withdraw;

pub use claim_reward::*;
pub use fund_platform::*;
pub use initialize::*;
pub use stake::*;
pub use withdraw::*;
