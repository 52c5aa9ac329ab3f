use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;

#[account]
pub struct PlatformInfo {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub platform_token_account: Pubkey,

    pub min_stake: u64,
    pub stake_period: i64,
    pub reward_percentage: u64,

    pub total_staked: u64,
    pub total_withdrawn: u64,
    pub total_reward_claimed: u64,

    pub created_at: i64,

    pub authority_bump: u8,
    pub bump: u8,
}

impl PlatformInfo {
    pub const LEN: usize = 8
        + (32 * 3)
        + (8 * 3)
        + (8 * 3)
        + 8
        + 2;

    /// A freshly allocated record has a zeroed owner.
    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn validate_params(min_stake: u64, stake_period: i64, reward_percentage: u64) -> Result<()> {
        require!(min_stake > 0, StakingError::InvalidMinStake);
        require!(
            stake_period > 0 && stake_period <= MAX_STAKE_PERIOD,
            StakingError::InvalidStakePeriod
        );
        require!(
            reward_percentage <= MAX_REWARD_PERCENTAGE,
            StakingError::InvalidRewardPercentage
        );
        Ok(())
    }

    pub fn validate_stake(&self, amount: u64) -> Result<()> {
        require!(amount >= self.min_stake, StakingError::InsufficientAmount);
        Ok(())
    }

    /// Writes the owner-set parameters into a freshly allocated record.
    ///
    /// A record that already has an owner is left untouched.
    #[allow(clippy::too_many_arguments)]
    pub fn configure(
        &mut self,
        owner: Pubkey,
        mint: Pubkey,
        platform_token_account: Pubkey,
        min_stake: u64,
        stake_period: i64,
        reward_percentage: u64,
        now: i64,
    ) -> Result<()> {
        require!(!self.is_initialized(), StakingError::AlreadyInitialized);
        Self::validate_params(min_stake, stake_period, reward_percentage)?;

        self.owner = owner;
        self.mint = mint;
        self.platform_token_account = platform_token_account;
        self.min_stake = min_stake;
        self.stake_period = stake_period;
        self.reward_percentage = reward_percentage;
        self.total_staked = 0;
        self.total_withdrawn = 0;
        self.total_reward_claimed = 0;
        self.created_at = now;
        Ok(())
    }
}
