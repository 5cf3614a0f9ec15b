//! Program ID constants and cross-program PDA helpers.
//!
//! Program IDs are imported from the central `tidal-program-ids` crate, the
//! single source of truth for all program addresses. The correct addresses
//! are selected at compile-time based on the network feature.

use pinocchio::pubkey::Pubkey;

// =============================================================================
// Program IDs (imported from tidal-program-ids crate)
// =============================================================================

/// Staking program ID.
///
/// Controller for the receipt ledger, epoch rewards and venue batching.
pub const STAKING_PROGRAM_ID: Pubkey =
    five8_const::decode_32_const(tidal_program_ids::STAKING_PROGRAM_ID);

/// Liquidity reserve program ID.
///
/// Fee-bearing instant-exit buffer.
pub const RESERVE_PROGRAM_ID: Pubkey =
    five8_const::decode_32_const(tidal_program_ids::RESERVE_PROGRAM_ID);

// =============================================================================
// Cross-Program PDA Helpers
// =============================================================================
//
// Each program's own `#[pdas]` enum generates finders bound to `crate::ID`;
// the copies here let the *other* program (and off-chain code) derive the
// same addresses. The seed literals must match the owning program's pda.rs.

/// Staking config PDA seed (staking program).
pub const STAKING_CONFIG_SEED: &[u8] = b"staking_config";
/// Member account PDA seed (staking program).
pub const MEMBER_SEED: &[u8] = b"member";
/// Reserve config PDA seed (reserve program).
pub const RESERVE_CONFIG_SEED: &[u8] = b"reserve_config";

/// Derive the staking config PDA for a base mint.
/// Returns (address, bump).
pub fn find_staking_config_address(base_mint: &Pubkey) -> (Pubkey, u8) {
    pinocchio::pubkey::find_program_address(
        &[STAKING_CONFIG_SEED, base_mint.as_ref()],
        &STAKING_PROGRAM_ID,
    )
}

/// Derive a member account PDA for an owner under a staking config.
/// Returns (address, bump).
pub fn find_member_address(staking_config: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    pinocchio::pubkey::find_program_address(
        &[MEMBER_SEED, staking_config.as_ref(), owner.as_ref()],
        &STAKING_PROGRAM_ID,
    )
}

/// Derive the reserve config PDA for a base mint.
/// Returns (address, bump).
pub fn find_reserve_config_address(base_mint: &Pubkey) -> (Pubkey, u8) {
    pinocchio::pubkey::find_program_address(
        &[RESERVE_CONFIG_SEED, base_mint.as_ref()],
        &RESERVE_PROGRAM_ID,
    )
}

/// Validate that an account is the canonical staking config PDA for a mint.
pub fn validate_staking_config(staking_config: &Pubkey, base_mint: &Pubkey) -> bool {
    let (expected, _) = find_staking_config_address(base_mint);
    *staking_config == expected
}
