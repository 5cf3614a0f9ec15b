//! Event definitions for the liquidity reserve program.
//!
//! Events are emitted via self-invocation of the Log instruction,
//! which allows event data to be recorded in transaction logs without truncation.

use alloc::vec::Vec;
use panchor::prelude::*;
use pinocchio::{
    ProgramResult,
    account_info::AccountInfo,
    cpi::invoke_signed,
    instruction::{AccountMeta, Instruction, Signer},
};

use crate::ID;
use crate::instructions::ReserveInstruction;

/// Event type discriminators for identifying event types in logs.
///
/// # Ranges
/// - **1-15**: Core events (liquidity, payouts)
/// - **16-31**: Admin events
#[repr(u64)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
pub enum EventType {
    // =========================================================================
    // Core Events (1-15)
    // =========================================================================
    /// Provider deposited base asset for shares
    LiquidityAdded = 1,
    /// Provider burned shares for base asset
    LiquidityRemoved = 2,
    /// Instant payout served for the staking program
    InstantPayout = 3,
    // Reserved: 4-15

    // =========================================================================
    // Admin Events (16-31)
    // =========================================================================
    /// Instant unstake fee changed
    FeeUpdated = 16,
}

/// Event emitted when a provider adds liquidity.
#[event(EventType::LiquidityAdded)]
#[repr(C)]
pub struct LiquidityAddedEvent {
    /// Provider wallet
    pub owner: [u8; 32],
    /// Base asset deposited
    pub amount: u64,
    /// Padding for u128 alignment
    pub _padding: u64,
    /// Shares minted
    pub shares: u128,
    /// Slot when the deposit occurred
    pub slot: u64,
    /// Padding for 16-byte alignment
    pub _padding2: u64,
}

/// Event emitted when a provider removes liquidity.
#[event(EventType::LiquidityRemoved)]
#[repr(C)]
pub struct LiquidityRemovedEvent {
    /// Provider wallet
    pub owner: [u8; 32],
    /// Base asset paid out
    pub amount: u64,
    /// Padding for u128 alignment
    pub _padding: u64,
    /// Shares burned
    pub shares: u128,
    /// Slot when the withdrawal occurred
    pub slot: u64,
    /// Padding for 16-byte alignment
    pub _padding2: u64,
}

/// Event emitted when an instant payout is served.
#[event(EventType::InstantPayout)]
#[repr(C)]
pub struct InstantPayoutEvent {
    /// Receipt amount absorbed by the reserve
    pub receipt_amount: u64,
    /// Base asset paid out
    pub payout: u64,
    /// Fee retained in the reserve
    pub fee: u64,
    /// Slot when the payout occurred
    pub slot: u64,
}

/// Event emitted when the fee changes.
#[event(EventType::FeeUpdated)]
#[repr(C)]
pub struct FeeUpdatedEvent {
    /// Previous fee in basis points
    pub previous_fee_bps: u16,
    /// New fee in basis points
    pub fee_bps: u16,
    /// Padding for 8-byte alignment
    pub _padding: [u8; 4],
    /// Slot when the change occurred
    pub slot: u64,
}

/// Emit a panchor event via self-invocation of the Log instruction.
///
/// Serializes the event, then invokes the Log handler with the reserve
/// config PDA as signer so only this program's code paths can emit events.
pub fn emit_event<T: EventBytes>(
    reserve_config: &AccountInfo,
    reserve_program: &AccountInfo,
    signer: Signer,
    event: &T,
) -> ProgramResult {
    let event_data = event.to_event_bytes();

    // Build instruction data: [Log discriminator, length (4 bytes LE), data...]
    let log_discriminator = ReserveInstruction::Log as u8;
    let len = event_data.len() as u32;
    let mut instruction_data = Vec::with_capacity(1 + 4 + event_data.len());
    instruction_data.push(log_discriminator);
    instruction_data.extend_from_slice(&len.to_le_bytes());
    instruction_data.extend_from_slice(&event_data);

    let instruction = Instruction {
        program_id: &ID,
        accounts: &[AccountMeta::readonly_signer(reserve_config.key())],
        data: &instruction_data,
    };

    invoke_signed(&instruction, &[reserve_config, reserve_program], &[signer])?;

    Ok(())
}
