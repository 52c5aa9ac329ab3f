//! Reward and withdrawal math.
//!
//! Pure functions over a [`StakeInfo`] and the [`PlatformInfo`] parameters.
//! Instruction handlers call these before moving any tokens, so every
//! state transition here is validated up front and the handler only has to
//! issue the transfer.
//!
//! Accrual is linear over the lock period and capped at it:
//!
//! ```text
//! accrued(t) = amount * reward_percentage * min(t - start, stake_period)
//!              / (100 * stake_period)
//! ```
//!
//! Each payout is `accrued(now) - reward_claimed`, so repeated claims never
//! pay the same window twice and flooring never accumulates across claims.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::state::{PlatformInfo, StakeInfo};

/// Tokens released by a successful withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Withdrawal {
    pub principal: u64,
    pub reward: u64,
}

impl Withdrawal {
    pub fn total(&self) -> Result<u64> {
        Ok(self
            .principal
            .checked_add(self.reward)
            .ok_or(StakingError::MathOverflow)?)
    }
}

/// Total reward earned by a position at `current_time`, including any part
/// already paid out.
pub fn calculate_accrued_reward(
    stake_info: &StakeInfo,
    platform_info: &PlatformInfo,
    current_time: i64,
) -> Result<u64> {
    require!(platform_info.stake_period > 0, StakingError::InvalidStakePeriod);

    let elapsed = current_time
        .saturating_sub(stake_info.start_timestamp)
        .clamp(0, platform_info.stake_period);

    if elapsed == 0 || stake_info.amount == 0 {
        return Ok(0);
    }

    let amount = stake_info.amount as u128;
    let percentage = platform_info.reward_percentage as u128;
    let window = elapsed as u128;
    let denominator = (PERCENTAGE_DENOMINATOR as u128)
        .checked_mul(platform_info.stake_period as u128)
        .ok_or(StakingError::MathOverflow)?;

    let reward = amount
        .checked_mul(percentage)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(window)
        .ok_or(StakingError::MathOverflow)?
        .checked_div(denominator)
        .ok_or(StakingError::MathOverflow)?;

    Ok(u64::try_from(reward).map_err(|_| StakingError::MathOverflow)?)
}

/// Reward accrued but not yet paid.
pub fn calculate_claimable_reward(
    stake_info: &StakeInfo,
    platform_info: &PlatformInfo,
    current_time: i64,
) -> Result<u64> {
    let accrued = calculate_accrued_reward(stake_info, platform_info, current_time)?;
    Ok(accrued
        .checked_sub(stake_info.reward_claimed)
        .ok_or(StakingError::MathUnderflow)?)
}

/// Settle a reward claim against an open position.
///
/// Leaves `amount` and `start_timestamp` untouched. Fails with
/// `NoAvailableReward` when nothing has accrued since the last payout yet
/// more will accrue, and with `AlreadyClaimed` once the lock period is over
/// and the full reward has been paid.
pub fn settle_claim(
    stake_info: &mut StakeInfo,
    platform_info: &PlatformInfo,
    current_time: i64,
) -> Result<u64> {
    require!(stake_info.is_active(), StakingError::StakeClosed);

    let reward = calculate_claimable_reward(stake_info, platform_info, current_time)?;
    if reward == 0 {
        if stake_info.is_lock_ended(current_time, platform_info.stake_period) {
            return err!(StakingError::AlreadyClaimed);
        }
        return err!(StakingError::NoAvailableReward);
    }

    stake_info.reward_claimed = stake_info
        .reward_claimed
        .checked_add(reward)
        .ok_or(StakingError::MathOverflow)?;
    stake_info.last_claim_timestamp = current_time;

    Ok(reward)
}

/// Close a position whose lock period has elapsed.
///
/// Pays out the principal plus whatever reward remains unclaimed and zeroes
/// `amount`, which is terminal for this stake id.
pub fn settle_withdrawal(
    stake_info: &mut StakeInfo,
    platform_info: &PlatformInfo,
    current_time: i64,
) -> Result<Withdrawal> {
    require!(stake_info.is_active(), StakingError::StakeClosed);
    require!(
        stake_info.is_lock_ended(current_time, platform_info.stake_period),
        StakingError::StakeNotExpired
    );

    let reward = calculate_claimable_reward(stake_info, platform_info, current_time)?;
    let withdrawal = Withdrawal {
        principal: stake_info.amount,
        reward,
    };
    withdrawal.total()?;

    stake_info.reward_claimed = stake_info
        .reward_claimed
        .checked_add(reward)
        .ok_or(StakingError::MathOverflow)?;
    stake_info.last_claim_timestamp = current_time;
    stake_info.amount = 0;

    Ok(withdrawal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::error_code;

    const MIN_STAKE: u64 = 10_000_000;
    const STAKE_PERIOD: i64 = 10 * SECONDS_PER_DAY;
    const START: i64 = 1_700_000_000;

    fn platform(reward_percentage: u64) -> PlatformInfo {
        PlatformInfo {
            owner: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            platform_token_account: Pubkey::new_unique(),
            min_stake: MIN_STAKE,
            stake_period: STAKE_PERIOD,
            reward_percentage,
            total_staked: 0,
            total_withdrawn: 0,
            total_reward_claimed: 0,
            created_at: START,
            authority_bump: 254,
            bump: 255,
        }
    }

    fn position(amount: u64) -> StakeInfo {
        StakeInfo {
            owner: Pubkey::new_unique(),
            stake_id: 0,
            amount,
            reward_claimed: 0,
            start_timestamp: START,
            last_claim_timestamp: START,
            bump: 253,
        }
    }

    fn expected(err: StakingError) -> u32 {
        u32::from(err)
    }

    #[test]
    fn nothing_accrues_at_stake_time() {
        let info = platform(1);
        let stake = position(20_000_000);

        assert_eq!(calculate_accrued_reward(&stake, &info, START).unwrap(), 0);
        assert_eq!(calculate_accrued_reward(&stake, &info, START - 60).unwrap(), 0);
    }

    #[test]
    fn accrual_is_linear_within_the_lock_period() {
        let info = platform(10);
        let stake = position(50_000_000);

        // 10% over 10 days, a quarter of the way in.
        let quarter = START + STAKE_PERIOD / 4;
        assert_eq!(calculate_accrued_reward(&stake, &info, quarter).unwrap(), 1_250_000);
    }

    #[test]
    fn accrual_floors_partial_units() {
        let info = platform(1);
        let stake = position(20_000_000);

        // 20_000_000 * 1 * 100 / (100 * 864_000) = 23.14
        assert_eq!(calculate_accrued_reward(&stake, &info, START + 100).unwrap(), 23);
    }

    #[test]
    fn accrual_is_capped_at_the_lock_period() {
        let info = platform(1);
        let stake = position(20_000_000);

        let at_end = calculate_accrued_reward(&stake, &info, START + STAKE_PERIOD).unwrap();
        let long_after = calculate_accrued_reward(&stake, &info, START + 10 * STAKE_PERIOD).unwrap();
        assert_eq!(at_end, 200_000);
        assert_eq!(long_after, at_end);
    }

    #[test]
    fn zero_percentage_never_accrues() {
        let info = platform(0);
        let stake = position(20_000_000);

        assert_eq!(calculate_accrued_reward(&stake, &info, START + STAKE_PERIOD).unwrap(), 0);
    }

    #[test]
    fn large_principal_does_not_overflow() {
        let info = platform(MAX_REWARD_PERCENTAGE);
        let stake = position(u64::MAX);

        assert_eq!(
            calculate_accrued_reward(&stake, &info, START + STAKE_PERIOD).unwrap(),
            u64::MAX
        );
    }

    #[test]
    fn immediate_claim_has_no_reward() {
        let info = platform(1);
        let mut stake = position(20_000_000);

        let err = settle_claim(&mut stake, &info, START).unwrap_err();
        assert_eq!(error_code(err), expected(StakingError::NoAvailableReward));
        assert_eq!(stake.amount, 20_000_000);
        assert_eq!(stake.reward_claimed, 0);
        assert_eq!(stake.last_claim_timestamp, START);
    }

    #[test]
    fn claim_pays_accrued_reward_and_keeps_position_open() {
        let info = platform(1);
        let mut stake = position(20_000_000);
        let now = START + 3 * SECONDS_PER_DAY;

        let reward = settle_claim(&mut stake, &info, now).unwrap();
        assert_eq!(reward, 20_000_000 * 3 / (100 * 10));
        assert_eq!(stake.amount, 20_000_000);
        assert_eq!(stake.start_timestamp, START);
        assert_eq!(stake.reward_claimed, reward);
        assert_eq!(stake.last_claim_timestamp, now);
    }

    #[test]
    fn repeated_claims_do_not_double_pay() {
        let info = platform(1);
        let mut stake = position(20_000_000);
        let now = START + 2 * SECONDS_PER_DAY;

        let first = settle_claim(&mut stake, &info, now).unwrap();
        let err = settle_claim(&mut stake, &info, now).unwrap_err();
        assert_eq!(error_code(err), expected(StakingError::NoAvailableReward));

        let later = START + 5 * SECONDS_PER_DAY;
        let second = settle_claim(&mut stake, &info, later).unwrap();
        assert_eq!(first + second, 20_000_000 * 5 / (100 * 10));
    }

    #[test]
    fn fully_paid_position_reports_already_claimed() {
        let info = platform(1);
        let mut stake = position(20_000_000);

        let reward = settle_claim(&mut stake, &info, START + STAKE_PERIOD).unwrap();
        assert_eq!(reward, 200_000);

        let err = settle_claim(&mut stake, &info, START + 5 * STAKE_PERIOD).unwrap_err();
        let code = error_code(err);
        assert_eq!(code, expected(StakingError::AlreadyClaimed));
        assert!(!StakingError::AlreadyClaimed.is_retryable());
        assert_eq!(stake.reward_claimed, 200_000);
        assert_eq!(stake.amount, 20_000_000);

        // The principal is still withdrawable, with nothing left on top.
        let withdrawal = settle_withdrawal(&mut stake, &info, START + 5 * STAKE_PERIOD).unwrap();
        assert_eq!(withdrawal.reward, 0);
        assert_eq!(withdrawal.total().unwrap(), 20_000_000);
    }

    #[test]
    fn empty_claim_before_lock_end_stays_retryable() {
        let info = platform(1);
        let mut stake = position(20_000_000);
        let now = START + 2 * SECONDS_PER_DAY;
        settle_claim(&mut stake, &info, now).unwrap();

        let err = settle_claim(&mut stake, &info, now).unwrap_err();
        assert_eq!(error_code(err), expected(StakingError::NoAvailableReward));
        assert!(StakingError::NoAvailableReward.is_retryable());
    }

    #[test]
    fn last_claim_timestamp_tracks_payouts() {
        let info = platform(1);
        let mut stake = position(20_000_000);

        let claimed_at = START + 3 * SECONDS_PER_DAY;
        settle_claim(&mut stake, &info, claimed_at).unwrap();
        assert_eq!(stake.last_claim_timestamp, claimed_at);

        let failed_at = claimed_at;
        settle_claim(&mut stake, &info, failed_at).unwrap_err();
        assert_eq!(stake.last_claim_timestamp, claimed_at);

        let withdrawn_at = START + STAKE_PERIOD + 1;
        settle_withdrawal(&mut stake, &info, withdrawn_at).unwrap();
        assert_eq!(stake.last_claim_timestamp, withdrawn_at);
    }

    #[test]
    fn split_claims_sum_to_the_full_period_reward() {
        let info = platform(3);
        let mut stake = position(12_345_679);

        let mut paid = 0;
        for step in 1..=7 {
            let now = START + step * (STAKE_PERIOD / 7) + 3;
            paid += settle_claim(&mut stake, &info, now).unwrap_or(0);
        }
        let withdrawal = settle_withdrawal(&mut stake, &info, START + STAKE_PERIOD).unwrap();
        paid += withdrawal.reward;

        assert_eq!(paid, 12_345_679 * 3 / 100);
    }

    #[test]
    fn early_withdrawal_is_rejected_without_side_effects() {
        let info = platform(1);
        let mut stake = position(20_000_000);

        for now in [START, START + STAKE_PERIOD - 1] {
            let err = settle_withdrawal(&mut stake, &info, now).unwrap_err();
            assert_eq!(error_code(err), expected(StakingError::StakeNotExpired));
        }
        assert_eq!(stake.amount, 20_000_000);
        assert_eq!(stake.reward_claimed, 0);
    }

    #[test]
    fn withdrawal_after_lock_pays_principal_and_reward() {
        let info = platform(1);
        let mut stake = position(20_000_000);

        let withdrawal = settle_withdrawal(&mut stake, &info, START + STAKE_PERIOD).unwrap();
        assert_eq!(withdrawal.principal, 20_000_000);
        assert_eq!(withdrawal.reward, 200_000);
        assert_eq!(withdrawal.total().unwrap(), 20_200_000);
        assert_eq!(stake.amount, 0);
        assert!(!stake.is_active());
    }

    #[test]
    fn withdrawal_after_claims_pays_only_the_remainder() {
        let info = platform(1);
        let mut stake = position(20_000_000);

        let claimed = settle_claim(&mut stake, &info, START + 4 * SECONDS_PER_DAY).unwrap();
        let withdrawal = settle_withdrawal(&mut stake, &info, START + 2 * STAKE_PERIOD).unwrap();
        assert_eq!(claimed + withdrawal.reward, 200_000);
        assert_eq!(withdrawal.principal, 20_000_000);
    }

    #[test]
    fn closed_position_rejects_further_operations() {
        let info = platform(1);
        let mut stake = position(20_000_000);
        let now = START + STAKE_PERIOD;
        settle_withdrawal(&mut stake, &info, now).unwrap();

        let err = settle_withdrawal(&mut stake, &info, now + 1).unwrap_err();
        assert_eq!(error_code(err), expected(StakingError::StakeClosed));

        let err = settle_claim(&mut stake, &info, now + 1).unwrap_err();
        assert_eq!(error_code(err), expected(StakingError::StakeClosed));
        assert_eq!(stake.amount, 0);
    }

    #[test]
    fn observed_lifecycle() {
        let info = platform(1);
        let mut stake = position(20_000_000);

        let err = settle_claim(&mut stake, &info, START).unwrap_err();
        assert_eq!(error_code(err), expected(StakingError::NoAvailableReward));

        let err = settle_withdrawal(&mut stake, &info, START).unwrap_err();
        assert_eq!(error_code(err), expected(StakingError::StakeNotExpired));

        let withdrawal = settle_withdrawal(&mut stake, &info, START + 864_000).unwrap();
        assert_eq!(withdrawal.total().unwrap(), 20_200_000);
        assert_eq!(stake.amount, 0);
    }
}
