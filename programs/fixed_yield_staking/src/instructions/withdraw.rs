//! Withdraw instruction handler.
//!
//! Closes an expired stake position, returning principal plus any reward
//! not yet claimed.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Withdrawn;
use crate::reward::settle_withdrawal;
use crate::state::{PlatformInfo, StakeInfo};

/// Accounts required for withdrawing.
#[derive(Accounts)]
#[instruction(stake_id: u64)]
pub struct Withdraw<'info> {
    /// The user withdrawing.
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

    /// User's token account for receiving principal and reward.
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

/// Withdraw an expired stake position.
///
/// # Arguments
/// * `ctx` - Withdraw accounts context
/// * `stake_id` - Id of the position to close
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Withdraw>, stake_id: u64) -> Result<()> {
    let clock = Clock::get()?;

    let withdrawal = settle_withdrawal(
        &mut ctx.accounts.user_stake_info,
        &ctx.accounts.platform_info,
        clock.unix_timestamp,
    )?;
    let total = withdrawal.total()?;

    require!(
        ctx.accounts.platform_token_account.amount >= total,
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
    token::transfer(cpi_ctx, total)?;

    let platform_info = &mut ctx.accounts.platform_info;
    platform_info.total_withdrawn = platform_info
        .total_withdrawn
        .checked_add(withdrawal.principal)
        .ok_or(StakingError::MathOverflow)?;
    platform_info.total_reward_claimed = platform_info
        .total_reward_claimed
        .checked_add(withdrawal.reward)
        .ok_or(StakingError::MathOverflow)?;

    msg!("Withdrew stake #{}: {} tokens", stake_id, total);
    msg!("Principal: {}, reward: {}", withdrawal.principal, withdrawal.reward);

    emit!(Withdrawn {
        user: ctx.accounts.user.key(),
        stake_id,
        principal: withdrawal.principal,
        reward: withdrawal.reward,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
