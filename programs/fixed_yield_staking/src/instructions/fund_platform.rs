/// Fund platform instruction handler.
///
/// Deposits reward liquidity into the platform custody account.
///
/// ## Security Guarantees
/// - Custody account must be the one bound at initialization
/// - Mint validation prevents wrong token deposits
/// - Anyone can fund (no owner restriction)

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::PlatformFunded;
use crate::state::PlatformInfo;

/// Accounts required for funding the platform.
#[derive(Accounts)]
pub struct FundPlatform<'info> {
    /// The funder (anyone can fund).
    #[account(mut)]
    pub funder: Signer<'info>,

    /// The platform info.
    /// SECURITY: PDA + has_one validations.
    #[account(
        seeds = [PLATFORM_INFO_SEED],
        bump = platform_info.bump,
        has_one = mint @ StakingError::MintMismatch,
        has_one = platform_token_account @ StakingError::PlatformAccountMismatch
    )]
    pub platform_info: Account<'info, PlatformInfo>,

    /// The staking token mint.
    pub mint: Account<'info, Mint>,

    /// Funder's token account.
    #[account(
        mut,
        constraint = funder_token_account.mint == mint.key() @ StakingError::MintMismatch,
        constraint = funder_token_account.owner == funder.key() @ StakingError::Unauthorized
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    /// Platform custody account.
    #[account(mut)]
    pub platform_token_account: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Fund the platform with reward tokens.
///
/// # Arguments
/// * `ctx` - FundPlatform accounts context
/// * `amount` - Amount of tokens to deposit
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<FundPlatform>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::ZeroAmount);

    let cpi_accounts = Transfer {
        from: ctx.accounts.funder_token_account.to_account_info(),
        to: ctx.accounts.platform_token_account.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    // Reload to get the post-transfer balance
    ctx.accounts.platform_token_account.reload()?;
    let platform_balance = ctx.accounts.platform_token_account.amount;
    let clock = Clock::get()?;

    msg!("Platform funded with {} tokens", amount);
    msg!("New platform balance: {}", platform_balance);
    msg!("Funder: {}", ctx.accounts.funder.key());

    emit!(PlatformFunded {
        funder: ctx.accounts.funder.key(),
        amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
