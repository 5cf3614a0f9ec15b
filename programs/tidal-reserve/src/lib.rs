//! Tidal Liquidity Reserve Program
//!
//! Fee-bearing buffer that redeems the staking program's receipt balance
//! for base asset without waiting for the external venue's batch cycle.
//!
//! # Architecture
//!
//! Providers deposit base asset into the reserve vault and hold
//! proportional shares against the reserve's net value. The staking program
//! invokes `InstantPayout` via CPI after crediting the redeemed receipt to
//! the reserve's member account; the reserve pays out `amount - fee` and
//! retains the fee, which is its only yield source. Two permissionless
//! keepers cycle the absorbed receipt back into base asset through the
//! staking cooldown pipeline.
//!
//! # Instructions
//!
//! - `InstantPayout`: CPI surface for the staking program
//! - `AddLiquidity` / `RemoveLiquidity`: provider share operations
//! - `UnstakeReceipt` / `ClaimReceiptWithdrawal`: replenishment keepers
//! - Admin: initialization, fee, pause and two-step authority transfer

#![cfg_attr(not(any(test, feature = "idl-build")), no_std)]

extern crate alloc;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

// Error and event types
pub use errors::ReserveError;
pub use events::{
    EventType, FeeUpdatedEvent, InstantPayoutEvent, LiquidityAddedEvent, LiquidityRemovedEvent,
    emit_event,
};

// Instruction enum for panchor dispatch
pub use instructions::ReserveInstruction;

// PDA derivation helpers
pub use pda::*;

// State types
// Note: PDA seeds (RESERVE_CONFIG_SEED, etc.) come from pda::* above
pub use state::{LpPosition, ReserveConfig};

// Use panchor's program! macro for instruction dispatch
// This generates: ID, check_id, id, process_instruction, default_allocator
//
// Program ID is imported from tidal-program-ids crate (single source of truth).
// The correct ID is selected at compile-time based on feature flags.

panchor::program! {
    id = tidal_program_ids::RESERVE_PROGRAM_ID,
    instructions = ReserveInstruction,
    accounts = state::ReserveAccount,
    pdas = pda::ReservePdas,
}
