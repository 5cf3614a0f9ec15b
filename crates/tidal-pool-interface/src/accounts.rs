//! Cross-program zero-copy account readers.
//!
//! The reserve program values its absorbed receipt position by reading two
//! staking-program accounts directly: the staking config (for the current
//! total supply) and its own member account (for the gon balances). The
//! offsets here are pinned against the staking program's account layouts;
//! the staking program carries layout tests asserting they match.

use pinocchio::program_error::ProgramError;

use crate::ledger;

// ============================================================================
// Staking Config Layout (foreign-read prefix)
// ============================================================================

/// Offset of `total_supply` in the staking config account data.
///
/// The staking config deliberately leads with the ledger header so foreign
/// readers can stop after the first fields.
pub const STAKING_TOTAL_SUPPLY_OFFSET: usize = 8;
/// Offset of `epoch_number` in the staking config account data.
pub const STAKING_EPOCH_NUMBER_OFFSET: usize = 16;

/// Read the receipt ledger's total supply from staking config account data.
pub fn read_staking_total_supply(data: &[u8]) -> Result<u64, ProgramError> {
    let end = STAKING_TOTAL_SUPPLY_OFFSET + 8;
    if data.len() < end {
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(u64::from_le_bytes(
        data[STAKING_TOTAL_SUPPLY_OFFSET..end]
            .try_into()
            .map_err(|_| ProgramError::InvalidAccountData)?,
    ))
}

// ============================================================================
// Member Account Layout (gon balances)
// ============================================================================

/// Offset of `wallet_gons` in a member account's data.
pub const MEMBER_WALLET_GONS_OFFSET: usize = 72;
/// Offset of `warmup_gons` in a member account's data.
pub const MEMBER_WARMUP_GONS_OFFSET: usize = 88;
/// Offset of `cooldown_gons` in a member account's data.
pub const MEMBER_COOLDOWN_GONS_OFFSET: usize = 104;
/// Minimum member account data length covering the gon fields.
pub const MEMBER_GONS_MIN_LEN: usize = 120;

/// Gon balances of a staking member account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemberGonBalances {
    /// Freely transferable wallet gons
    pub wallet_gons: u128,
    /// Gons held in the warmup escrow for this member
    pub warmup_gons: u128,
    /// Gons held in the cooldown escrow for this member
    pub cooldown_gons: u128,
}

impl MemberGonBalances {
    /// Total gons the member can lay claim to across wallet and escrows.
    #[inline]
    pub fn total(&self) -> u128 {
        self.wallet_gons
            .saturating_add(self.warmup_gons)
            .saturating_add(self.cooldown_gons)
    }

    /// Value of the member's whole claim in receipt units at the given
    /// total supply.
    #[inline]
    pub fn receipt_value(&self, total_supply: u64) -> Option<u64> {
        ledger::balance_for_gons(self.total(), total_supply)
    }
}

/// Read a member account's gon balances from raw account data.
///
/// # Layout Dependency
/// Reads at offsets 72..120: `wallet_gons`, `warmup_gons`, `cooldown_gons`
/// (u128 each), preceded by the 8-byte discriminator and two pubkeys
/// (owner, staking config). The staking program's layout tests pin these.
pub fn read_member_gon_balances(data: &[u8]) -> Result<MemberGonBalances, ProgramError> {
    if data.len() < MEMBER_GONS_MIN_LEN {
        return Err(ProgramError::InvalidAccountData);
    }

    let read_u128 = |offset: usize| -> Result<u128, ProgramError> {
        Ok(u128::from_le_bytes(
            data[offset..offset + 16]
                .try_into()
                .map_err(|_| ProgramError::InvalidAccountData)?,
        ))
    };

    Ok(MemberGonBalances {
        wallet_gons: read_u128(MEMBER_WALLET_GONS_OFFSET)?,
        warmup_gons: read_u128(MEMBER_WARMUP_GONS_OFFSET)?,
        cooldown_gons: read_u128(MEMBER_COOLDOWN_GONS_OFFSET)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{INITIAL_FRAGMENT_SUPPLY, gons_for_balance};

    #[test]
    fn test_read_staking_total_supply() {
        let mut data = [0u8; 64];
        data[8..16].copy_from_slice(&12_345u64.to_le_bytes());
        assert_eq!(read_staking_total_supply(&data).unwrap(), 12_345);
        assert!(read_staking_total_supply(&data[..12]).is_err());
    }

    #[test]
    fn test_read_member_gon_balances() {
        let mut data = [0u8; 160];
        data[72..88].copy_from_slice(&10u128.to_le_bytes());
        data[88..104].copy_from_slice(&20u128.to_le_bytes());
        data[104..120].copy_from_slice(&30u128.to_le_bytes());

        let balances = read_member_gon_balances(&data).unwrap();
        assert_eq!(balances.wallet_gons, 10);
        assert_eq!(balances.warmup_gons, 20);
        assert_eq!(balances.cooldown_gons, 30);
        assert_eq!(balances.total(), 60);
    }

    #[test]
    fn test_receipt_value() {
        let balances = MemberGonBalances {
            wallet_gons: gons_for_balance(1_000, INITIAL_FRAGMENT_SUPPLY).unwrap(),
            warmup_gons: gons_for_balance(500, INITIAL_FRAGMENT_SUPPLY).unwrap(),
            cooldown_gons: 0,
        };
        assert_eq!(balances.receipt_value(INITIAL_FRAGMENT_SUPPLY), Some(1_500));
    }
}
