//! Liquidity reserve state accounts.

use panchor::prelude::*;
use pinocchio::pubkey::Pubkey;
use tidal_pool_interface::authority::HasAuthority;
use tidal_pool_interface::{BASIS_POINTS, calculate_instant_payout};

use crate::ReserveError;

/// Account discriminators for the liquidity reserve program.
///
/// Each discriminator uniquely identifies an account type. The discriminator
/// is stored as the first 8 bytes of account data.
///
/// # Ranges
/// - **0-15**: Core accounts (config singletons)
/// - **16-31**: User accounts
#[account_type]
pub enum ReserveAccount {
    /// Reserve configuration (per base mint)
    ReserveConfig = 0,
    // Reserved: 1-15
    /// Per-provider share position
    LpPosition = 16,
    // Reserved: 17-31
}

// ============================================================================
// ReserveConfig
// ============================================================================

/// Liquidity reserve configuration account.
///
/// Seeds: ["reserve_config", base_mint]
///
/// # Share Model
///
/// Providers deposit base asset and receive proportional shares against the
/// reserve's *net* value: the liquid base asset in the vault plus the value
/// of the receipt balance the reserve has absorbed from instant unstakes
/// (its member account in the staking program, which keeps rebasing like any
/// other wallet). `share_value = total_value / total_shares`.
///
/// Instant unstakes pay out `amount - fee` from the vault and leave the fee
/// inside; the retained fee is the only yield source of the reserve and
/// accrues to the remaining share holders.
///
/// The vault's liquid balance can be temporarily below the shares' total
/// claim after instant-unstake outflow; withdrawals beyond the liquid
/// balance are rejected until the absorbed receipt is cycled back into base
/// asset through the staking program's cooldown path.
#[account(ReserveAccount::ReserveConfig)]
#[repr(C)]
pub struct ReserveConfig {
    /// Authority that can update config and perform admin operations
    pub authority: Pubkey,
    /// Pending authority for two-step transfer.
    /// Set by `transfer_authority`, must call `accept_authority` to complete.
    pub pending_authority: Pubkey,
    /// Base asset mint
    pub base_mint: Pubkey,
    /// Base asset vault PDA ["reserve_vault", config]
    pub vault: Pubkey,
    /// Staking config this reserve serves; also the only pubkey allowed to
    /// sign an InstantPayout CPI
    pub staking_config: Pubkey,
    /// The reserve's member account in the staking program (absorbs the
    /// redeemed receipt)
    pub staking_member: Pubkey,

    /// Total shares outstanding
    pub total_shares: u128,

    // === Statistics ===
    /// Cumulative base asset deposited by providers
    pub total_liquidity_added: u128,
    /// Cumulative base asset withdrawn by providers
    pub total_liquidity_removed: u128,
    /// Cumulative fees retained from instant payouts
    pub total_fees_retained: u128,
    /// Cumulative receipt absorbed from instant payouts
    pub total_receipt_absorbed: u128,
    /// Number of instant payouts served
    pub instant_unstake_count: u64,

    /// Instant unstake fee in basis points
    pub fee_bps: u16,
    /// Whether the reserve is active (1 = active, 0 = paused)
    pub is_active: u8,
    /// PDA bump seed
    pub bump: u8,
    /// Padding for 16-byte struct alignment
    pub _padding: [u8; 4],
}

impl ReserveConfig {
    /// Account size
    pub const SIZE: usize = core::mem::size_of::<Self>();

    /// Highest settable instant unstake fee (100%).
    pub const MAX_FEE_BPS: u16 = BASIS_POINTS as u16;

    /// Floor for the first deposit: one whole token at 9 decimals.
    ///
    /// An empty reserve mints shares 1:1; without a floor the first
    /// depositor could seed a dust share and manipulate the share price for
    /// everyone after.
    pub const MIN_INITIAL_LIQUIDITY: u64 = 1_000_000_000;

    /// Calculate the PDA address for a reserve config
    /// Seeds: ["reserve_config", base_mint]
    ///
    /// Note: Ignores program_id parameter - uses crate::ID
    pub fn find_pda(_program_id: &Pubkey, base_mint: &Pubkey) -> (Pubkey, u8) {
        crate::find_reserve_config_pda(base_mint)
    }

    /// Check if the reserve is active
    pub fn is_active(&self) -> bool {
        self.is_active != 0
    }

    /// Check if reserve is active, returning error if paused.
    #[inline]
    pub fn require_active(&self) -> Result<(), ReserveError> {
        if !self.is_active() {
            return Err(ReserveError::ReservePaused);
        }
        Ok(())
    }

    /// Check if signer matches authority, returning error if unauthorized.
    #[inline]
    pub fn require_authority(&self, signer: &Pubkey) -> Result<(), ReserveError> {
        if self.authority != *signer {
            return Err(ReserveError::Unauthorized);
        }
        Ok(())
    }

    /// Validate a fee rate against the allowed range.
    #[inline]
    pub fn validate_fee(fee_bps: u16) -> Result<(), ReserveError> {
        if fee_bps > Self::MAX_FEE_BPS {
            return Err(ReserveError::FeeOutOfRange);
        }
        Ok(())
    }

    /// Net reserve value: liquid vault balance plus absorbed receipt value.
    #[inline]
    pub fn total_reserve_value(vault_balance: u64, receipt_value: u64) -> u128 {
        vault_balance as u128 + receipt_value as u128
    }

    /// Shares minted for a deposit of `amount` against the current value.
    ///
    /// 1:1 when the reserve is empty; proportional otherwise.
    pub fn shares_for_deposit(
        &self,
        amount: u64,
        total_value: u128,
    ) -> Result<u128, ReserveError> {
        if amount == 0 {
            return Err(ReserveError::InvalidAmount);
        }
        if self.total_shares == 0 {
            if amount < Self::MIN_INITIAL_LIQUIDITY {
                return Err(ReserveError::BelowMinimumLiquidity);
            }
            return Ok(amount as u128);
        }
        if total_value == 0 {
            return Err(ReserveError::ArithmeticOverflow);
        }
        (amount as u128)
            .checked_mul(self.total_shares)
            .ok_or(ReserveError::ArithmeticOverflow)?
            .checked_div(total_value)
            .ok_or(ReserveError::ArithmeticOverflow)
    }

    /// Base asset owed for burning `shares` against the current value.
    pub fn payout_for_shares(
        &self,
        shares: u128,
        total_value: u128,
    ) -> Result<u64, ReserveError> {
        if shares == 0 || self.total_shares == 0 {
            return Err(ReserveError::InvalidAmount);
        }
        let payout = shares
            .checked_mul(total_value)
            .ok_or(ReserveError::ArithmeticOverflow)?
            .checked_div(self.total_shares)
            .ok_or(ReserveError::ArithmeticOverflow)?;
        u64::try_from(payout).map_err(|_| ReserveError::ArithmeticOverflow)
    }

    /// Split an instant payout into (payout, fee) at the configured rate.
    #[inline]
    pub fn split_instant_payout(&self, receipt_amount: u64) -> Result<(u64, u64), ReserveError> {
        calculate_instant_payout(receipt_amount, self.fee_bps)
            .ok_or(ReserveError::ArithmeticOverflow)
    }

    /// Record a served instant payout.
    pub fn record_instant_payout(
        &mut self,
        receipt_amount: u64,
        fee: u64,
    ) -> Result<(), ReserveError> {
        self.total_receipt_absorbed = self
            .total_receipt_absorbed
            .checked_add(receipt_amount as u128)
            .ok_or(ReserveError::ArithmeticOverflow)?;
        self.total_fees_retained = self
            .total_fees_retained
            .checked_add(fee as u128)
            .ok_or(ReserveError::ArithmeticOverflow)?;
        self.instant_unstake_count = self
            .instant_unstake_count
            .checked_add(1)
            .ok_or(ReserveError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Record minted shares for a provider deposit.
    pub fn record_liquidity_added(
        &mut self,
        amount: u64,
        shares: u128,
    ) -> Result<(), ReserveError> {
        self.total_shares = self
            .total_shares
            .checked_add(shares)
            .ok_or(ReserveError::ArithmeticOverflow)?;
        self.total_liquidity_added = self
            .total_liquidity_added
            .checked_add(amount as u128)
            .ok_or(ReserveError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Record burned shares for a provider withdrawal.
    pub fn record_liquidity_removed(
        &mut self,
        amount: u64,
        shares: u128,
    ) -> Result<(), ReserveError> {
        self.total_shares = self
            .total_shares
            .checked_sub(shares)
            .ok_or(ReserveError::NotEnoughShares)?;
        self.total_liquidity_removed = self
            .total_liquidity_removed
            .checked_add(amount as u128)
            .ok_or(ReserveError::ArithmeticOverflow)?;
        Ok(())
    }
}

impl HasAuthority for ReserveConfig {
    fn authority(&self) -> &Pubkey {
        &self.authority
    }
    fn authority_mut(&mut self) -> &mut Pubkey {
        &mut self.authority
    }
    fn pending_authority(&self) -> &Pubkey {
        &self.pending_authority
    }
    fn pending_authority_mut(&mut self) -> &mut Pubkey {
        &mut self.pending_authority
    }
}

// ============================================================================
// LpPosition
// ============================================================================

/// Per-provider share position.
///
/// Seeds: ["lp_position", reserve_config, owner]
#[account(ReserveAccount::LpPosition)]
#[repr(C)]
pub struct LpPosition {
    /// Wallet that owns this position
    pub owner: Pubkey,
    /// Reserve config this position belongs to
    pub reserve_config: Pubkey,
    /// Shares held
    pub shares: u128,
    /// PDA bump seed
    pub bump: u8,
    /// Padding for 16-byte struct alignment
    pub _padding: [u8; 15],
}

impl LpPosition {
    /// Account size
    pub const SIZE: usize = core::mem::size_of::<Self>();

    /// Calculate the PDA address for a provider position
    /// Seeds: ["lp_position", reserve_config, owner]
    ///
    /// Note: Ignores program_id parameter - uses crate::ID
    pub fn find_pda(
        _program_id: &Pubkey,
        reserve_config: &Pubkey,
        owner: &Pubkey,
    ) -> (Pubkey, u8) {
        crate::find_lp_position_pda(reserve_config, owner)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_config() -> ReserveConfig {
        let mut config: ReserveConfig = bytemuck::Zeroable::zeroed();
        config.fee_bps = 200;
        config.is_active = 1;
        config
    }

    #[test]
    fn test_account_sizes() {
        assert_eq!(ReserveConfig::SIZE, 288);
        assert_eq!(LpPosition::SIZE, 96);
    }

    #[test]
    fn test_first_deposit_mints_one_to_one() {
        let config = fresh_config();
        let amount = ReserveConfig::MIN_INITIAL_LIQUIDITY;
        let shares = config.shares_for_deposit(amount, 0).unwrap();
        assert_eq!(shares, amount as u128);
    }

    #[test]
    fn test_first_deposit_floor() {
        let config = fresh_config();
        assert_eq!(
            config.shares_for_deposit(ReserveConfig::MIN_INITIAL_LIQUIDITY - 1, 0),
            Err(ReserveError::BelowMinimumLiquidity)
        );
    }

    #[test]
    fn test_fee_bounds() {
        assert!(ReserveConfig::validate_fee(0).is_ok());
        assert!(ReserveConfig::validate_fee(ReserveConfig::MAX_FEE_BPS).is_ok());
        assert_eq!(
            ReserveConfig::validate_fee(ReserveConfig::MAX_FEE_BPS + 1),
            Err(ReserveError::FeeOutOfRange)
        );
    }

    /// The instant-unstake fee stays in the reserve and raises the payout
    /// per share for everyone who remains.
    #[test]
    fn test_fee_accrues_to_remaining_shares() {
        let mut config = fresh_config();

        // One provider seeds the reserve with 100_000 liquid units
        let mut vault_balance: u64 = 100_000;
        let mut receipt_value: u64 = 0;
        let lp_shares = config
            .shares_for_deposit(vault_balance, 0)
            .unwrap();
        config.record_liquidity_added(vault_balance, lp_shares).unwrap();

        let value_before = ReserveConfig::total_reserve_value(vault_balance, receipt_value);
        let payout_before = config.payout_for_shares(lp_shares, value_before).unwrap();
        assert_eq!(payout_before, 100_000);

        // A staker instant-unstakes 10_000 receipt at 2%
        let (payout, fee) = config.split_instant_payout(10_000).unwrap();
        assert_eq!((payout, fee), (9_800, 200));
        vault_balance -= payout;
        receipt_value += 10_000;
        config.record_instant_payout(10_000, fee).unwrap();

        // Per-share claim is now strictly larger
        let value_after = ReserveConfig::total_reserve_value(vault_balance, receipt_value);
        let payout_after = config.payout_for_shares(lp_shares, value_after).unwrap();
        assert_eq!(payout_after, 100_200);
        assert!(payout_after > payout_before);
    }

    /// Share price > 1 after fee accrual means later deposits mint fewer
    /// shares for the same amount.
    #[test]
    fn test_later_deposit_mints_at_share_price() {
        let mut config = fresh_config();
        let shares = config.shares_for_deposit(100_000, 0).unwrap();
        config.record_liquidity_added(100_000, shares).unwrap();

        // Value grew to 100_200 while shares stayed at 100_000
        let minted = config.shares_for_deposit(10_000, 100_200).unwrap();
        assert_eq!(minted, 9_980);
        assert!(minted < 10_000);
    }

    #[test]
    fn test_payout_can_exceed_liquid_balance() {
        // The shares' claim counts absorbed receipt the vault cannot pay
        // yet; the handler rejects such withdrawals with NotEnoughFunds.
        let mut config = fresh_config();
        let shares = config.shares_for_deposit(100_000, 0).unwrap();
        config.record_liquidity_added(100_000, shares).unwrap();

        let (payout, _) = config.split_instant_payout(50_000).unwrap();
        let vault_balance = 100_000 - payout;
        let value = ReserveConfig::total_reserve_value(vault_balance, 50_000);

        let claim = config.payout_for_shares(shares, value).unwrap();
        assert!(claim > vault_balance);
    }

    #[test]
    fn test_remove_more_shares_than_outstanding_rejected() {
        let mut config = fresh_config();
        let shares = config.shares_for_deposit(ReserveConfig::MIN_INITIAL_LIQUIDITY, 0).unwrap();
        config
            .record_liquidity_added(ReserveConfig::MIN_INITIAL_LIQUIDITY, shares)
            .unwrap();

        assert_eq!(
            config.record_liquidity_removed(1, shares + 1),
            Err(ReserveError::NotEnoughShares)
        );
    }
}
