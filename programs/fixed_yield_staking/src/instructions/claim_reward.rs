//! Claim reward instruction handler.
//!
//! Pays the reward accrued on one stake position without closing it.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardClaimed;
use crate::reward::settle_claim;
use crate::state::{PlatformInfo, StakeInfo};

/// Accounts required for claiming a reward.
#[derive(Accounts)]
#[instruction(stake_id: u64)]
pub struct ClaimReward<'info> {
    /// The user claiming the reward.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The platform info.
    #[account(
        mut,
        seeds = [PLATFORM_INFO_SEED],
        bump = platform_info.bump,
        has_one = mint @ StakingError::MintMismatch,
        has_one = platform_token_account @ StakingError::PlatformAccountMismatch
    )]
    pub platform_info: Account<'info, PlatformInfo>,

    /// The stake position, derived from the signer and `stake_id`.
    #[account(
        mut,
        seeds = [USER_STAKE_SEED, user.key().as_ref(), stake_id.to_le_bytes().as_ref()],
        bump = user_stake_info.bump,
        constraint = user_stake_info.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_stake_info: Account<'info, StakeInfo>,

    /// The staking token mint.
    pub mint: Account<'info, Mint>,

    /// CHECK: PDA authority that signs custody transfers.
    #[account(
        seeds = [TOKEN_AUTHORITY_SEED],
        bump = platform_info.authority_bump
    )]
    pub authority: UncheckedAccount<'info>,

    /// User's token account for receiving the reward.
    #[account(
        mut,
        constraint = user_token_account.mint == mint.key() @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Platform custody account.
    #[account(mut)]
    pub platform_token_account: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Claim the reward accrued on a stake position.
///
/// # Arguments
/// * `ctx` - ClaimReward accounts context
/// * `stake_id` - Id of the position to claim against
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<ClaimReward>, stake_id: u64) -> Result<()> {
    let clock = Clock::get()?;

    let reward = settle_claim(
        &mut ctx.accounts.user_stake_info,
        &ctx.accounts.platform_info,
        clock.unix_timestamp,
    )?;

    require!(
        ctx.accounts.platform_token_account.amount >= reward,
        StakingError::InsufficientPlatformFunds
    );

    let seeds = &[TOKEN_AUTHORITY_SEED, &[ctx.accounts.platform_info.authority_bump]];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.platform_token_account.to_account_info(),
        to: ctx.accounts.user_token_account.to_account_info(),
        authority: ctx.accounts.authority.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, reward)?;

    let platform_info = &mut ctx.accounts.platform_info;
    platform_info.total_reward_claimed = platform_info
        .total_reward_claimed
        .checked_add(reward)
        .ok_or(StakingError::MathOverflow)?;

    msg!("Claimed {} reward tokens on stake #{}", reward, stake_id);
    msg!(
        "Total claimed on this stake: {}",
        ctx.accounts.user_stake_info.reward_claimed
    );

    emit!(RewardClaimed {
        user: ctx.accounts.user.key(),
        stake_id,
        amount: reward,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
