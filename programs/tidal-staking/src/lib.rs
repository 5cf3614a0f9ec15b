//! Tidal Staking Program
//!
//! Controller for a cycle-batched yield position: holders deposit the base
//! asset, it is forwarded into an external pooled venue, and an
//! elastic-supply receipt balance grows as epoch rewards are applied.
//! Redemption runs either through the warmup/cooldown escrow synchronized
//! with the venue's batch cycle, or instantly through the fee-bearing
//! liquidity reserve program.
//!
//! # Architecture
//!
//! One `StakingConfig` account per base mint owns the shared state: the
//! receipt ledger totals, the epoch reward scheduler, the two escrow gon
//! pools and the venue synchronization watermark. Per-wallet balances and
//! the open warmup/cooldown records live in `MemberAccount` PDAs.
//!
//! # Instructions
//!
//! - `Stake` / `Claim` / `Unstake` / `ClaimWithdraw`: the escrowed path
//! - `InstantUnstake`: the fee-bearing shortcut via the reserve program
//! - `Rebase` / `SendWithdrawalRequests` / `AddRewards`: permissionless keepers
//! - Admin: initialization, periods, pauses, the emergency venue exit and
//!   two-step authority transfer

#![cfg_attr(not(any(test, feature = "idl-build")), no_std)]

extern crate alloc;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

// Error and event types
pub use errors::StakingError;
pub use events::{
    EmergencyExitEvent, EventType, InstantUnstakeEvent, RebaseEvent, RewardsCommittedEvent,
    StakeEvent, UnstakeEvent, WarmupClaimedEvent, WithdrawClaimedEvent,
    WithdrawalRequestsSentEvent, emit_event,
};

// Instruction enum for panchor dispatch
pub use instructions::StakingInstruction;

// PDA derivation helpers
pub use pda::*;

// State types
// Note: PDA seeds (STAKING_CONFIG_SEED, etc.) come from pda::* above
pub use state::{MemberAccount, StakingConfig};

// Use panchor's program! macro for instruction dispatch
// This generates: ID, check_id, id, process_instruction, default_allocator
//
// Program ID is imported from tidal-program-ids crate (single source of truth).
// The correct ID is selected at compile-time based on feature flags.

panchor::program! {
    id = tidal_program_ids::STAKING_PROGRAM_ID,
    instructions = StakingInstruction,
    accounts = state::StakingAccount,
    pdas = pda::StakingPdas,
}
