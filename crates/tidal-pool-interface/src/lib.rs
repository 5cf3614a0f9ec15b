//! Tidal Pool Interface
//!
//! Shared types for communication between the staking program and the
//! liquidity reserve, plus the wire interface of the external yield venue.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   tidal-staking (Controller)                 │
//! │  • Elastic receipt ledger (gon accounting)                   │
//! │  • Epoch reward scheduler                                    │
//! │  • Warmup / cooldown escrow                                  │
//! │  • Venue withdrawal batching                                 │
//! └─────────────────────────────────────────────────────────────┘
//!        │ InstantPayout CPI                │ Deposit / RequestWithdrawal /
//!        ▼                                  ▼ Withdraw CPI
//! ┌─────────────────────────┐   ┌─────────────────────────┐
//! │      tidal-reserve      │   │    external venue       │
//! │  • LP share ledger      │   │  • cycle-batched pool   │
//! │  • Instant exit + fee   │   │  • not controlled here  │
//! └─────────────────────────┘   └─────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`ledger`]: gon accounting math shared by both programs
//! - [`types`]: basis-point fee math and the reserve CPI wire types
//! - [`venue`]: external venue cycle state reader and CPI builders
//! - [`accounts`]: cross-program zero-copy account readers
//! - [`authority`]: two-step authority transfer helpers
//! - [`program_ids`]: program ID constants and cross-program PDA helpers

#![no_std]

mod accounts;
pub mod authority;
pub mod ledger;
mod program_ids;
mod types;
pub mod venue;

pub use accounts::*;
pub use program_ids::*;
pub use types::*;
