/// Initialize instruction handler.
///
/// Creates the platform info singleton and binds the staking mint and the
/// custody token account to it.
///
/// ## Security Guarantees
/// - Platform info is a PDA with a fixed seed, so at most one exists
/// - Custody account authority is the token authority PDA, not a keypair
/// - Mint and custody account are locked to platform state permanently

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::events::PlatformInitialized;
use crate::state::PlatformInfo;

/// Accounts required for platform initialization.
///
/// ## Security Notes
/// - `platform_info` is allocated on first use; a populated record is rejected
///   by the handler so a second call cannot overwrite parameters
/// - `platform_token_account` must already exist with `authority` as owner
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The platform owner.
    /// SECURITY: Must sign; stored as the permanent owner.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The platform info account.
    #[account(
        init_if_needed,
        payer = owner,
        space = PlatformInfo::LEN,
        seeds = [PLATFORM_INFO_SEED],
        bump
    )]
    pub platform_info: Account<'info, PlatformInfo>,

    /// CHECK: PDA authority that signs custody transfers, never read or written.
    #[account(
        seeds = [TOKEN_AUTHORITY_SEED],
        bump
    )]
    pub authority: UncheckedAccount<'info>,

    /// The staking token mint.
    pub mint: Account<'info, Mint>,

    /// Custody account holding all staked principal and reward liquidity.
    #[account(
        token::mint = mint,
        token::authority = authority
    )]
    pub platform_token_account: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,
}

/// Initialize the platform.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
/// * `min_stake` - Smallest amount accepted per stake
/// * `stake_period` - Lock period in seconds
/// * `reward_percentage` - Reward over a full lock period, in percent
///
/// # Returns
/// Result indicating success or error
pub fn handler(
    ctx: Context<Initialize>,
    min_stake: u64,
    stake_period: i64,
    reward_percentage: u64,
) -> Result<()> {
    let platform_info = &mut ctx.accounts.platform_info;
    let clock = Clock::get()?;

    platform_info.configure(
        ctx.accounts.owner.key(),
        ctx.accounts.mint.key(),
        ctx.accounts.platform_token_account.key(),
        min_stake,
        stake_period,
        reward_percentage,
        clock.unix_timestamp,
    )?;
    platform_info.authority_bump = ctx.bumps.authority;
    platform_info.bump = ctx.bumps.platform_info;

    msg!("Staking platform initialized");
    msg!("Owner: {}", platform_info.owner);
    msg!("Mint: {}", platform_info.mint);
    msg!(
        "Min stake: {}, period: {}s, reward: {}%",
        min_stake,
        stake_period,
        reward_percentage
    );

    emit!(PlatformInitialized {
        owner: platform_info.owner,
        mint: platform_info.mint,
        platform_token_account: platform_info.platform_token_account,
        min_stake,
        stake_period,
        reward_percentage,
    });

    Ok(())
}
