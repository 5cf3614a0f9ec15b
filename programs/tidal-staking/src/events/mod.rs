//! Event definitions for the staking program.
//!
//! Events are emitted via self-invocation of the Log instruction,
//! which allows event data to be recorded in transaction logs without truncation.
//!
//! # Event Pattern
//!
//! All events use the panchor `#[event]` macro which:
//! - Implements `Discriminator` trait with the event type discriminator
//! - Implements `Event` trait for event metadata
//! - Derives `Pod` and `Zeroable` for zero-copy serialization

use alloc::vec::Vec;
use panchor::prelude::*;
use pinocchio::{
    ProgramResult,
    account_info::AccountInfo,
    cpi::invoke_signed,
    instruction::{AccountMeta, Instruction, Signer},
};

use crate::ID;
use crate::instructions::StakingInstruction;

/// Event type discriminators for identifying event types in logs.
///
/// Each event type has a unique u64 discriminator prepended to its serialized
/// data so indexers can identify and parse it.
///
/// # Ranges
/// - **1-15**: Core events (stake lifecycle, rewards, batching)
/// - **16-31**: Admin events
#[repr(u64)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
pub enum EventType {
    // =========================================================================
    // Core Events (1-15)
    // =========================================================================
    /// Base asset staked into the venue position
    Stake = 1,
    /// Warmup record released to a wallet
    WarmupClaimed = 2,
    /// Receipt moved into cooldown
    Unstake = 3,
    /// Receipt redeemed instantly through the reserve
    InstantUnstake = 4,
    /// Cooldown settled, base asset paid out
    WithdrawClaimed = 5,
    /// Epoch rolled over
    Rebase = 6,
    /// Reward committed for a future rollover
    RewardsCommitted = 7,
    /// Batched withdrawal request synchronized with the venue
    WithdrawalRequestsSent = 8,
    // Reserved: 9-15

    // =========================================================================
    // Admin Events (16-31)
    // =========================================================================
    /// Entire venue position requested back, staking force-paused
    EmergencyExit = 16,
}

/// Event emitted when base asset is staked.
#[event(EventType::Stake)]
#[repr(C)]
pub struct StakeEvent {
    /// Staker wallet
    pub owner: [u8; 32],
    /// Base asset staked
    pub amount: u64,
    /// Epoch at which the warmup record matures (0 = credited directly)
    pub warmup_expiry_epoch: u64,
    /// Slot when the stake occurred
    pub slot: u64,
    /// Padding for 16-byte alignment
    pub _padding: u64,
}

/// Event emitted when a warmup record is released.
#[event(EventType::WarmupClaimed)]
#[repr(C)]
pub struct WarmupClaimedEvent {
    /// Member whose record was released
    pub owner: [u8; 32],
    /// Wallet credited with the released balance
    pub beneficiary: [u8; 32],
    /// Receipt amount released (recomputed at release time)
    pub amount: u64,
    /// Slot when the claim occurred
    pub slot: u64,
}

/// Event emitted when receipt moves into cooldown.
#[event(EventType::Unstake)]
#[repr(C)]
pub struct UnstakeEvent {
    /// Member that unstaked
    pub owner: [u8; 32],
    /// Receipt amount moved into cooldown
    pub amount: u64,
    /// Epoch at which the cooldown record matures
    pub cooldown_expiry_epoch: u64,
    /// Slot when the unstake occurred
    pub slot: u64,
    /// Padding for 16-byte alignment
    pub _padding: u64,
}

/// Event emitted when receipt is redeemed through the reserve.
#[event(EventType::InstantUnstake)]
#[repr(C)]
pub struct InstantUnstakeEvent {
    /// Member that redeemed
    pub owner: [u8; 32],
    /// Receipt amount handed to the reserve
    pub receipt_amount: u64,
    /// Fee retained by the reserve
    pub fee: u64,
    /// Slot when the redemption occurred
    pub slot: u64,
    /// Padding for 16-byte alignment
    pub _padding: u64,
}

/// Event emitted when a cooldown record is settled.
#[event(EventType::WithdrawClaimed)]
#[repr(C)]
pub struct WithdrawClaimedEvent {
    /// Member whose cooldown settled
    pub owner: [u8; 32],
    /// Wallet paid the base asset
    pub beneficiary: [u8; 32],
    /// Base asset paid out
    pub amount: u64,
    /// Slot when the settlement occurred
    pub slot: u64,
}

/// Event emitted when the epoch rolls over.
#[event(EventType::Rebase)]
#[repr(C)]
pub struct RebaseEvent {
    /// Epoch number after the rollover
    pub epoch_number: u64,
    /// Profit applied to the ledger (0 when nothing was locked in)
    pub profit: u64,
    /// Receipt total supply after the rollover
    pub total_supply: u64,
    /// Rebase index after the rollover
    pub index: u64,
    /// Slot when the rollover occurred
    pub slot: u64,
    /// Padding for 16-byte alignment
    pub _padding: [u64; 3],
}

/// Event emitted when a reward is committed.
#[event(EventType::RewardsCommitted)]
#[repr(C)]
pub struct RewardsCommittedEvent {
    /// Funder wallet
    pub funder: [u8; 32],
    /// Committed reward (overwrites any earlier commit)
    pub amount: u64,
    /// Epoch during which the commit happened
    pub epoch_number: u64,
    /// Slot when the commit occurred
    pub slot: u64,
    /// Padding for 16-byte alignment
    pub _padding: u64,
}

/// Event emitted when a batched withdrawal request reaches the venue.
#[event(EventType::WithdrawalRequestsSent)]
#[repr(C)]
pub struct WithdrawalRequestsSentEvent {
    /// Amount claimed back from the previously matured request
    pub claimed: u64,
    /// Freshly requested amount
    pub requested: u64,
    /// Venue cycle the request was accepted in
    pub venue_cycle: u64,
    /// Slot when the synchronization occurred
    pub slot: u64,
}

/// Event emitted by the emergency venue exit.
#[event(EventType::EmergencyExit)]
#[repr(C)]
pub struct EmergencyExitEvent {
    /// Entire venue position requested back
    pub amount: u64,
    /// Venue cycle the request was accepted in
    pub venue_cycle: u64,
    /// Slot when the exit occurred
    pub slot: u64,
    /// Padding for 16-byte alignment
    pub _padding: u64,
}

/// Emit a panchor event via self-invocation of the Log instruction.
///
/// This function:
/// 1. Serializes the event using `EventBytes::to_event_bytes()` (Pod + discriminator)
/// 2. Builds an instruction to invoke the Log handler
/// 3. Invokes the Log instruction with the staking config PDA as signer
///
/// # Arguments
/// * `staking_config` - The staking config PDA account (used as signer)
/// * `staking_program` - The staking program account (required for self-CPI)
/// * `signer` - Signer seeds for the staking config PDA
/// * `event` - The event to emit (must implement EventBytes)
pub fn emit_event<T: EventBytes>(
    staking_config: &AccountInfo,
    staking_program: &AccountInfo,
    signer: Signer,
    event: &T,
) -> ProgramResult {
    // Serialize the event using Pod serialization with discriminator
    let event_data = event.to_event_bytes();

    // Build instruction data: [Log discriminator, length (4 bytes LE), data...]
    let log_discriminator = StakingInstruction::Log as u8;
    let len = event_data.len() as u32;
    let mut instruction_data = Vec::with_capacity(1 + 4 + event_data.len());
    instruction_data.push(log_discriminator);
    instruction_data.extend_from_slice(&len.to_le_bytes());
    instruction_data.extend_from_slice(&event_data);

    // Build instruction for self-CPI to Log
    let instruction = Instruction {
        program_id: &ID,
        accounts: &[AccountMeta::readonly_signer(staking_config.key())],
        data: &instruction_data,
    };

    // Invoke the Log instruction with the config PDA as signer.
    // staking_program is included so the runtime can find the program
    // executable for CPI.
    invoke_signed(&instruction, &[staking_config, staking_program], &[signer])?;

    Ok(())
}
