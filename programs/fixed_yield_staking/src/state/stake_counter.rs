use anchor_lang::prelude::*;

use crate::error::StakingError;

#[account]
pub struct StakeCounter {
    pub owner: Pubkey,
    pub count: u64,
    pub bump: u8,
}

impl StakeCounter {
    pub const LEN: usize = 8 + 32 + 8 + 1;

    /// Binds a freshly allocated counter to its user. No-op once bound.
    pub fn bind(&mut self, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.bump = bump;
        }
    }

    /// Returns the id for the next stake and advances the counter.
    pub fn next_id(&mut self) -> Result<u64> {
        let id = self.count;
        self.count = self.count.checked_add(1).ok_or(StakingError::MathOverflow)?;
        Ok(id)
    }
}
