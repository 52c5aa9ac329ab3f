//! Program derived addresses.
//!
//! Every record the program owns lives at an address computed from a fixed
//! seed tag plus key material. These helpers mirror the `seeds` constraints
//! on the instruction accounts so clients can locate records off-chain.

use anchor_lang::prelude::*;

use crate::constants::*;

pub fn platform_info_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PLATFORM_INFO_SEED], program_id)
}

/// Signing-less authority that owns the platform token account.
pub fn token_authority_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOKEN_AUTHORITY_SEED], program_id)
}

pub fn stake_counter_address(user: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAKE_COUNTER_SEED, user.as_ref()], program_id)
}

pub fn stake_info_address(user: &Pubkey, stake_id: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[USER_STAKE_SEED, user.as_ref(), &stake_id.to_le_bytes()],
        program_id,
    )
}
