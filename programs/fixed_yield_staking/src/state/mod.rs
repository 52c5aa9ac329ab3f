//! State structures for the fixed-yield staking program.
//!
//! This module defines all account structures used to store program state.

pub mod platform_info;
pub mod stake_counter;
pub mod stake_info;

pub use platform_info::*;
pub use stake_counter::*;
pub use stake_info::*;
