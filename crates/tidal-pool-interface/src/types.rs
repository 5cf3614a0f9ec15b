//! Basis-point fee math and the staking → reserve CPI wire types.

use bytemuck::{Pod, Zeroable};

/// Basis points precision (10000 = 100%)
pub const BASIS_POINTS: u64 = 10_000;

// ============================================================================
// Fee Calculation
// ============================================================================

/// Split an instant-unstake amount into the payout and the retained fee.
///
/// The fee is `amount × fee_bps / BASIS_POINTS`, truncated; the payout is the
/// remainder. The fee stays inside the reserve and accrues to the remaining
/// share holders.
///
/// # Example
/// ```
/// use tidal_pool_interface::calculate_instant_payout;
///
/// // 10000 receipt units at a 2% fee
/// let (payout, fee) = calculate_instant_payout(10_000, 200).unwrap();
/// assert_eq!(fee, 200);
/// assert_eq!(payout, 9_800);
/// ```
///
/// # Returns
/// `None` on arithmetic overflow.
#[inline]
pub fn calculate_instant_payout(amount: u64, fee_bps: u16) -> Option<(u64, u64)> {
    let fee = (amount as u128)
        .checked_mul(fee_bps as u128)?
        .checked_div(BASIS_POINTS as u128)? as u64;
    let payout = amount.checked_sub(fee)?;
    Some((payout, fee))
}

// ============================================================================
// Reserve CPI Instruction Discriminators
// ============================================================================

/// Reserve instruction discriminators the staking program invokes via CPI.
///
/// The reserve program's instruction enum must keep these values.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReservePoolInstruction {
    /// Pay out base asset for receipt balance already credited to the reserve
    /// Accounts: see [`instant_payout_accounts`]
    InstantPayout = 0,
}

impl ReservePoolInstruction {
    /// Convert to u8 discriminator
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

// ============================================================================
// Staking CPI Instruction Discriminators
// ============================================================================

/// Staking instruction discriminators the reserve invokes via CPI to cycle
/// its absorbed receipt back into base asset.
///
/// The staking program's instruction enum must keep these values.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StakingPoolInstruction {
    /// Move receipt into the staking cooldown escrow
    /// Accounts: see the staking program's `UnstakeAccounts`
    Unstake = 2,
    /// Settle a mature cooldown record for base asset
    /// Accounts: see the staking program's `ClaimWithdrawAccounts`
    ClaimWithdraw = 4,
}

impl StakingPoolInstruction {
    /// Convert to u8 discriminator
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Build instruction data for the staking Unstake CPI.
///
/// Layout: [discriminator: u8, amount: u64 LE, trigger_claim: u8, padding: 7]
/// matching the staking program's `UnstakeData`.
pub fn build_unstake_instruction_data(amount: u64, trigger_claim: bool) -> [u8; 17] {
    let mut data = [0u8; 17];
    data[0] = StakingPoolInstruction::Unstake.to_u8();
    data[1..9].copy_from_slice(&amount.to_le_bytes());
    data[9] = trigger_claim as u8;
    data
}

/// Build instruction data for the staking ClaimWithdraw CPI (no parameters).
pub fn build_claim_withdraw_instruction_data() -> [u8; 1] {
    [StakingPoolInstruction::ClaimWithdraw.to_u8()]
}

// ============================================================================
// CPI Parameters
// ============================================================================

/// Parameters for the `InstantPayout` CPI from staking to reserve.
///
/// # Token Flow
/// ```text
/// Staking: moves caller's receipt gons to the reserve's member wallet
/// Staking: CPIs to reserve { receipt_amount } with the config PDA signing
/// Reserve: validates the signing caller, computes fee
/// Reserve: vault ──(receipt_amount - fee)──► recipient
/// Reserve: returns { fee } via return data
/// ```
///
/// The receipt itself is credited *before* the CPI, so a failing payout
/// (paused reserve, drained vault) aborts the whole transaction and no
/// receipt is stranded.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct InstantPayoutParams {
    /// Receipt amount being redeemed (fee is taken out of this)
    pub receipt_amount: u64,
}

impl InstantPayoutParams {
    /// Size in bytes
    pub const SIZE: usize = 8;

    /// Serialize to bytes for CPI instruction data
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.receipt_amount.to_le_bytes()
    }

    /// Deserialize from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            receipt_amount: u64::from_le_bytes(bytes[0..8].try_into().ok()?),
        })
    }
}

/// Return data from the reserve payout.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct PayoutReturnData {
    /// Fee retained inside the reserve
    pub fee: u64,
}

impl PayoutReturnData {
    /// Size in bytes
    pub const SIZE: usize = 8;

    /// Serialize to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.fee.to_le_bytes()
    }

    /// Deserialize from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            fee: u64::from_le_bytes(bytes[0..8].try_into().ok()?),
        })
    }
}

// ============================================================================
// Instruction Data Builders
// ============================================================================

/// Build instruction data for the instant payout CPI.
///
/// Layout: [discriminator: u8, params: InstantPayoutParams (8 bytes)]
pub fn build_instant_payout_instruction_data(params: &InstantPayoutParams) -> [u8; 9] {
    let mut data = [0u8; 9];
    data[0] = ReservePoolInstruction::InstantPayout.to_u8();
    data[1..9].copy_from_slice(&params.to_bytes());
    data
}

/// Account indices for the instant payout CPI.
///
/// Account layout (6 accounts):
/// 0. reserve_config (mut) - Reserve state account
/// 1. vault (mut) - Reserve base-asset vault
/// 2. recipient_token (mut) - Recipient's base-asset token account
/// 3. staking_config (signer) - Staking config PDA proving the caller
/// 4. reserve_program - Reserve program (for self-CPI events)
/// 5. token_program - SPL Token program
pub mod instant_payout_accounts {
    /// Reserve config account (writable)
    pub const RESERVE_CONFIG: usize = 0;
    /// Reserve vault token account (writable)
    pub const VAULT: usize = 1;
    /// Recipient's base-asset token account (writable)
    pub const RECIPIENT_TOKEN: usize = 2;
    /// Staking config PDA (signer, validates the caller)
    pub const STAKING_CONFIG: usize = 3;
    /// Reserve program (for self-CPI events)
    pub const RESERVE_PROGRAM: usize = 4;
    /// Token program
    pub const TOKEN_PROGRAM: usize = 5;
    /// Total number of accounts
    pub const COUNT: usize = 6;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_payout_fee_split() {
        let (payout, fee) = calculate_instant_payout(10_000, 200).unwrap();
        assert_eq!((payout, fee), (9_800, 200));

        // Zero fee passes the full amount through
        let (payout, fee) = calculate_instant_payout(10_000, 0).unwrap();
        assert_eq!((payout, fee), (10_000, 0));

        // 100% fee is a valid configuration edge: payout is zero
        let (payout, fee) = calculate_instant_payout(100, BASIS_POINTS as u16).unwrap();
        assert_eq!((payout, fee), (0, 100));
    }

    #[test]
    fn test_instant_payout_truncates_fee() {
        // 0.25% of 999 truncates to 2
        let (payout, fee) = calculate_instant_payout(999, 25).unwrap();
        assert_eq!(fee, 2);
        assert_eq!(payout, 997);
    }

    #[test]
    fn test_instant_payout_instruction_data_layout() {
        let params = InstantPayoutParams { receipt_amount: 1_000 };
        let data = build_instant_payout_instruction_data(&params);
        assert_eq!(data[0], ReservePoolInstruction::InstantPayout.to_u8());
        assert_eq!(data.len(), 9);

        let parsed = InstantPayoutParams::from_bytes(&data[1..]).unwrap();
        assert_eq!(parsed.receipt_amount, 1_000);
    }

    #[test]
    fn test_payout_return_data_roundtrip() {
        let ret = PayoutReturnData { fee: 42 };
        assert_eq!(PayoutReturnData::from_bytes(&ret.to_bytes()).unwrap().fee, 42);
    }
}
