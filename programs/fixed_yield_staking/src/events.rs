//! Events emitted by the fixed-yield staking program.

use anchor_lang::prelude::*;

#[event]
pub struct PlatformInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub platform_token_account: Pubkey,
    pub min_stake: u64,
    pub stake_period: i64,
    pub reward_percentage: u64,
}

#[event]
pub struct PlatformFunded {
    pub funder: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct Staked {
    pub user: Pubkey,
    pub stake_id: u64,
    pub amount: u64,
    pub unlocks_at: i64,
}

#[event]
pub struct RewardClaimed {
    pub user: Pubkey,
    pub stake_id: u64,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct Withdrawn {
    pub user: Pubkey,
    pub stake_id: u64,
    pub principal: u64,
    pub reward: u64,
    pub timestamp: i64,
}
