//! Staking instruction handlers.
//!
//! Uses panchor's `#[instructions]` macro for automatic dispatch.

use panchor::prelude::*;

// Admin instructions (initialization, configuration, emergency exit)
pub mod admin;

// Member operations
mod claim;
mod claim_withdraw;
mod create_member;
mod instant_unstake;
mod stake;
mod toggle_withdraw_lock;
mod transfer_receipt;
mod unstake;

// Permissionless operations
mod add_rewards;
mod log;
mod rebase;
mod send_withdrawal_requests;

// Venue CPI helpers shared by several handlers
pub(crate) mod venue_cpi;

// Re-export admin accounts, data, and handlers
pub use admin::*;

// Re-export member operation accounts, data, and handlers
pub use claim::{ClaimAccounts, process_claim};
pub use claim_withdraw::{ClaimWithdrawAccounts, process_claim_withdraw};
pub use create_member::{CreateMemberAccounts, process_create_member};
pub use instant_unstake::{InstantUnstakeAccounts, InstantUnstakeData, process_instant_unstake};
pub use stake::{StakeAccounts, StakeData, process_stake};
pub use toggle_withdraw_lock::{ToggleWithdrawLockAccounts, process_toggle_withdraw_lock};
pub use transfer_receipt::{TransferReceiptAccounts, TransferReceiptData, process_transfer_receipt};
pub use unstake::{UnstakeAccounts, UnstakeData, process_unstake};

// Re-export permissionless operation accounts, data, and handlers
pub use add_rewards::{AddRewardsAccounts, AddRewardsData, process_add_rewards};
pub use log::{LogAccounts, process_log};
pub use rebase::{RebaseAccounts, process_rebase};
pub use send_withdrawal_requests::{
    SendWithdrawalRequestsAccounts, process_send_withdrawal_requests,
};

/// Staking instruction set.
///
/// # Discriminator Ranges
/// - **0-31**: Member operations
/// - **64-127**: Permissionless operations (epoch/batching keepers, logging)
/// - **192-255**: Admin operations
#[instructions]
pub enum StakingInstruction {
    // =========================================================================
    // Member Operations (0-31)
    // =========================================================================
    /// Stake base asset: deposit into the venue and credit receipt balance
    /// (through the warmup escrow unless the warmup period is zero).
    #[handler(data)]
    Stake = 0,

    /// Release a mature warmup record to a beneficiary wallet.
    ///
    /// Silent no-op before the record's expiry epoch.
    Claim = 1,

    /// Move receipt into the cooldown escrow, warmup funds first.
    #[handler(data)]
    Unstake = 2,

    /// Redeem receipt immediately through the liquidity reserve for a fee.
    #[handler(data)]
    InstantUnstake = 3,

    /// Settle a mature cooldown record for base asset.
    ///
    /// Silent no-op until the record is mature and the venue has released
    /// the matching batched request.
    ClaimWithdraw = 4,

    /// Transfer receipt balance between member wallets (gons move).
    #[handler(data)]
    TransferReceipt = 5,

    /// Create a member account for any owner (permissionless, payer-funded).
    CreateMember = 6,

    /// Flip the member's self-service withdrawal lock.
    ToggleWithdrawLock = 7,
    // Reserved: 8-31

    // =========================================================================
    // Permissionless Operations (64-127)
    // =========================================================================
    /// Roll the epoch over if due, applying the locked reward.
    Rebase = 64,

    /// Synchronize batched withdrawal requests with the venue cycle.
    SendWithdrawalRequests = 65,

    /// Fund and commit a reward for a future rollover (overwrites any
    /// earlier commit).
    #[handler(data)]
    AddRewards = 66,

    /// Log an event via CPI (internal use only).
    ///
    /// This instruction is invoked via CPI from within the program to emit
    /// events. It validates the caller is the program itself via PDA signer.
    #[handler(raw_data, accounts = LogAccounts)]
    Log = 67,
    // Reserved: 68-127

    // =========================================================================
    // Admin Operations (192-255)
    // =========================================================================
    /// Initialize the staking config and vault for a base mint.
    #[handler(data)]
    InitStaking = 192,

    /// Set the warmup period in epochs.
    #[handler(data)]
    SetWarmupPeriod = 193,

    /// Set the cooldown period in epochs.
    #[handler(data)]
    SetCooldownPeriod = 194,

    /// Set the epoch length in slots.
    #[handler(data)]
    SetEpochLength = 195,

    /// Set the venue request window in slots.
    #[handler(data)]
    SetRequestWindow = 196,

    /// Set the staking / unstaking / instant-unstake pause flags.
    #[handler(data)]
    SetPauses = 197,

    /// Emergency circuit breaker: request the entire venue position back
    /// and force-pause staking.
    UnstakeAllFromVenue = 198,

    /// Initiate two-step authority transfer by setting pending_authority.
    ///
    /// The new authority must call `accept_authority` to complete the transfer.
    TransferAuthority = 199,

    /// Complete two-step authority transfer by accepting pending_authority role.
    ///
    /// Must be called by the `pending_authority` address.
    AcceptAuthority = 200,
}
