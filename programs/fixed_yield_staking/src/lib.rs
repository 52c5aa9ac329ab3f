//! # Fixed-Yield Staking Program
//!
//! A single-mint, fixed-term staking program. Users lock tokens in
//! numbered positions and earn a deterministic percentage over the lock
//! period, set once by the platform owner.
//!
//! ## Features
//! - One platform info singleton holding min stake, lock period and rate
//! - Per-user stake counter assigning gapless position ids from 0
//! - Linear reward accrual capped at the lock period
//! - Claim rewards without closing a position
//! - Withdraw principal plus unclaimed reward once the lock period ends
//! - Custody held by a PDA authority, never by a keypair
//! - Safe math with overflow protection

#![allow(ambiguous_glob_reexports)]

use anchor_lang::prelude::*;

declare_id!("3ycLKuh79RpM8WQ4pBJbMdHkME68mtBPtpo74T37QMNT");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod reward;
pub mod state;

use instructions::*;

#[program]
pub mod fixed_yield_staking {
    use super::*;

    /// Initializes the platform with the given parameters.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `min_stake` - Smallest amount accepted per stake
    /// * `stake_period` - Lock period in seconds
    /// * `reward_percentage` - Reward over a full lock period, in percent (0-100)
    ///
    /// # Errors
    /// Returns an error if:
    /// - The platform is already initialized
    /// - Any parameter is out of range
    pub fn initialize(
        ctx: Context<Initialize>,
        min_stake: u64,
        stake_period: i64,
        reward_percentage: u64,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, min_stake, stake_period, reward_percentage)
    }

    /// Stakes tokens as a new position.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for staking
    /// * `amount` - Amount of tokens to stake
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is below the platform minimum
    /// - Insufficient balance
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::handler(ctx, amount)
    }

    /// Claims the reward accrued on a position without closing it.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for claiming
    /// * `stake_id` - Id of the position
    ///
    /// # Errors
    /// Returns an error if:
    /// - No reward has accrued since the last claim
    /// - The position is closed
    /// - The platform has insufficient funds
    pub fn claim_reward(ctx: Context<ClaimReward>, stake_id: u64) -> Result<()> {
        instructions::claim_reward::handler(ctx, stake_id)
    }

    /// Withdraws principal plus unclaimed reward and closes the position.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for withdrawal
    /// * `stake_id` - Id of the position
    ///
    /// # Errors
    /// Returns an error if:
    /// - The lock period has not ended
    /// - The position is already closed
    /// - The platform has insufficient funds
    pub fn withdraw(ctx: Context<Withdraw>, stake_id: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, stake_id)
    }

    /// Deposits reward liquidity into the platform custody account.
    ///
    /// # Arguments
    /// * `ctx` - The context containing funding accounts
    /// * `amount` - Amount of tokens to deposit
    ///
    /// # Errors
    /// Returns an error if amount is zero or insufficient balance.
    pub fn fund_platform(ctx: Context<FundPlatform>, amount: u64) -> Result<()> {
        instructions::fund_platform::handler(ctx, amount)
    }
}
