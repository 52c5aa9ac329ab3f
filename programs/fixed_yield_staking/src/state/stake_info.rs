use anchor_lang::prelude::*;

use crate::error::StakingError;

#[account]
pub struct StakeInfo {
    pub owner: Pubkey,
    pub stake_id: u64,

    /// Principal still locked. Zero once withdrawn, and never reopened.
    pub amount: u64,
    pub reward_claimed: u64,

    pub start_timestamp: i64,
    /// Time of the last payout. Informational: accrual is driven by
    /// `reward_claimed`, which makes repeated claims exact.
    pub last_claim_timestamp: i64,

    pub bump: u8,
}

impl StakeInfo {
    pub const LEN: usize = 8 + 32 + 8 + 8 + 8 + 8 + 8 + 1;

    pub fn is_active(&self) -> bool {
        self.amount > 0
    }

    pub fn lock_end(&self, stake_period: i64) -> Result<i64> {
        self.start_timestamp
            .checked_add(stake_period)
            .ok_or_else(|| StakingError::MathOverflow.into())
    }

    pub fn is_lock_ended(&self, now: i64, stake_period: i64) -> bool {
        now.saturating_sub(self.start_timestamp) >= stake_period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(start_timestamp: i64) -> StakeInfo {
        StakeInfo {
            owner: Pubkey::new_unique(),
            stake_id: 7,
            amount: 20_000_000,
            reward_claimed: 0,
            start_timestamp,
            last_claim_timestamp: start_timestamp,
            bump: 255,
        }
    }

    #[test]
    fn lock_ends_exactly_at_period() {
        let stake = position(1_000);

        assert!(!stake.is_lock_ended(1_000, 500));
        assert!(!stake.is_lock_ended(1_499, 500));
        assert!(stake.is_lock_ended(1_500, 500));
        assert_eq!(stake.lock_end(500).unwrap(), 1_500);
    }

    #[test]
    fn lock_end_overflow_is_an_error() {
        let stake = position(i64::MAX - 10);
        assert!(stake.lock_end(11).is_err());
    }

    #[test]
    fn zero_amount_is_closed() {
        let mut stake = position(0);
        assert!(stake.is_active());

        stake.amount = 0;
        assert!(!stake.is_active());
    }
}
