//! Stake instruction handler.
//!
//! Opens a new stake position under the next id from the user's counter and
//! moves the principal into platform custody.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Staked;
use crate::state::{PlatformInfo, StakeCounter, StakeInfo};

/// Accounts required for staking.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The user staking tokens.
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

    /// User's stake counter (created on first stake).
    #[account(
        init_if_needed,
        payer = user,
        space = StakeCounter::LEN,
        seeds = [STAKE_COUNTER_SEED, user.key().as_ref()],
        bump
    )]
    pub user_stake_counter: Account<'info, StakeCounter>,

    /// The new stake position, addressed by the counter's current value.
    /// `init` fails if the slot is already taken, so ids are single-use.
    #[account(
        init,
        payer = user,
        space = StakeInfo::LEN,
        seeds = [
            USER_STAKE_SEED,
            user.key().as_ref(),
            user_stake_counter.count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub user_stake_info: Account<'info, StakeInfo>,

    /// The staking token mint.
    pub mint: Account<'info, Mint>,

    /// User's token account for the staking token.
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

    /// System program.
    pub system_program: Program<'info, System>,
}

/// Stake tokens.
///
/// # Arguments
/// * `ctx` - Stake accounts context
/// * `amount` - Amount of tokens to stake
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Stake>, amount: u64) -> Result<()> {
    ctx.accounts.platform_info.validate_stake(amount)?;

    let clock = Clock::get()?;

    // Insufficient balance is reported by the token program.
    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.platform_token_account.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let user_key = ctx.accounts.user.key();
    let stake_period = ctx.accounts.platform_info.stake_period;

    let user_stake_counter = &mut ctx.accounts.user_stake_counter;
    user_stake_counter.bind(user_key, ctx.bumps.user_stake_counter);
    let stake_id = user_stake_counter.next_id()?;

    let user_stake_info = &mut ctx.accounts.user_stake_info;
    user_stake_info.owner = user_key;
    user_stake_info.stake_id = stake_id;
    user_stake_info.amount = amount;
    user_stake_info.reward_claimed = 0;
    user_stake_info.start_timestamp = clock.unix_timestamp;
    user_stake_info.last_claim_timestamp = clock.unix_timestamp;
    user_stake_info.bump = ctx.bumps.user_stake_info;
    let unlocks_at = user_stake_info.lock_end(stake_period)?;

    let platform_info = &mut ctx.accounts.platform_info;
    platform_info.total_staked = platform_info
        .total_staked
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;

    msg!("Staked {} tokens as stake #{}", amount, stake_id);
    msg!("Unlocks at: {}", unlocks_at);

    emit!(Staked {
        user: user_key,
        stake_id,
        amount,
        unlocks_at,
    });

    Ok(())
}
