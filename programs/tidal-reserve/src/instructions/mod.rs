//! Liquidity reserve instruction handlers.
//!
//! Uses panchor's `#[instructions]` macro for automatic dispatch.

use panchor::prelude::*;

// Admin instructions (initialization, configuration, pausing)
pub mod admin;

// Provider operations
mod add_liquidity;
mod create_lp_position;
mod remove_liquidity;

// Staking-program CPI surface
mod instant_payout;

// Receipt replenishment keepers
mod claim_receipt_withdrawal;
mod unstake_receipt;

// Permissionless operations
mod log;

// Cross-program value helpers shared by several handlers
pub(crate) mod valuation;

// Re-export admin accounts, data, and handlers
pub use admin::*;

// Re-export provider operation accounts, data, and handlers
pub use add_liquidity::{AddLiquidityAccounts, AddLiquidityData, process_add_liquidity};
pub use create_lp_position::{CreateLpPositionAccounts, process_create_lp_position};
pub use remove_liquidity::{
    RemoveLiquidityAccounts, RemoveLiquidityData, process_remove_liquidity,
};

// Re-export CPI surface and keepers
pub use claim_receipt_withdrawal::{
    ClaimReceiptWithdrawalAccounts, process_claim_receipt_withdrawal,
};
pub use instant_payout::{InstantPayoutAccounts, process_instant_payout};
pub use log::{LogAccounts, process_log};
pub use unstake_receipt::{UnstakeReceiptAccounts, process_unstake_receipt};

/// Liquidity reserve instruction set.
///
/// # Discriminator Ranges
/// - **0-31**: Pool operations; `InstantPayout` is invoked via CPI from the
///   staking program and must keep the discriminator pinned in
///   `tidal_pool_interface::ReservePoolInstruction`
/// - **64-127**: Permissionless operations (replenishment keepers, logging)
/// - **192-255**: Admin operations
#[instructions]
pub enum ReserveInstruction {
    // =========================================================================
    // Pool Operations (0-31)
    // =========================================================================
    /// Pay out base asset for receipt already credited to the reserve's
    /// member account. Callable only by the staking config PDA via CPI.
    #[handler(raw_data, accounts = InstantPayoutAccounts)]
    InstantPayout = 0,

    /// Deposit base asset and mint proportional shares.
    #[handler(data)]
    AddLiquidity = 1,

    /// Burn shares and withdraw base asset from the liquid vault balance.
    #[handler(data)]
    RemoveLiquidity = 2,

    /// Create a provider position for any owner (permissionless,
    /// payer-funded).
    CreateLpPosition = 3,
    // Reserved: 4-31

    // =========================================================================
    // Permissionless Operations (64-127)
    // =========================================================================
    /// Cycle absorbed receipt into the staking cooldown pipeline.
    UnstakeReceipt = 64,

    /// Settle the reserve's mature cooldown back into the vault.
    ClaimReceiptWithdrawal = 65,

    /// Log an event via CPI (internal use only).
    #[handler(raw_data, accounts = LogAccounts)]
    Log = 66,
    // Reserved: 67-127

    // =========================================================================
    // Admin Operations (192-255)
    // =========================================================================
    /// Initialize the reserve config and vault for a base mint.
    #[handler(data)]
    InitReserve = 192,

    /// Set the instant unstake fee.
    #[handler(data)]
    SetFee = 193,

    /// Set the active state for the reserve.
    #[handler(data)]
    SetReserveActive = 194,

    /// Initiate two-step authority transfer by setting pending_authority.
    TransferAuthority = 195,

    /// Complete two-step authority transfer by accepting pending_authority
    /// role.
    AcceptAuthority = 196,
}
