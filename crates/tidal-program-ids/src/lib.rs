//! Single source of truth for all Tidal protocol program IDs.
//!
//! This crate defines program IDs as `&'static str` constants that can be used
//! at compile time by the panchor `program!` macro and other crates.
//!
//! # Feature Flags
//!
//! - `devnet` - Use devnet program IDs
//! - `mainnet` - Use mainnet program IDs (default)
//! - `localnet` - Use localnet program IDs (same as mainnet)
//!
//! # Usage
//!
//! ```rust,ignore
//! // In program lib.rs
//! panchor::program! {
//!     id = tidal_program_ids::STAKING_PROGRAM_ID,
//!     instructions = MyInstruction,
//! }
//! ```

#![no_std]

// =============================================================================
// Staking Program ID
// =============================================================================

/// Staking program ID (devnet).
///
/// Controller for the elastic receipt ledger, epoch rewards and the
/// venue-synchronized withdrawal pipeline.
#[cfg(feature = "devnet")]
pub const STAKING_PROGRAM_ID: &str = "CRCWcp6rRhqFPF4PHe9jWVrFhP5ewcZEWzGnchRvqKRm";

/// Staking program ID (mainnet/localnet).
///
/// Controller for the elastic receipt ledger, epoch rewards and the
/// venue-synchronized withdrawal pipeline.
#[cfg(not(feature = "devnet"))]
pub const STAKING_PROGRAM_ID: &str = "DErAsS7jTUdx8AHn9jv2qWvsjb1Wo7qJmNw33eduQZf2";

// =============================================================================
// Liquidity Reserve Program ID
// =============================================================================

/// Liquidity reserve program ID (devnet).
///
/// Fee-bearing buffer that redeems receipt balances for the base asset
/// without waiting for the venue cycle.
#[cfg(feature = "devnet")]
pub const RESERVE_PROGRAM_ID: &str = "CBPiosMJgUH53vg1yJM51h3iqFLtE3mTkzAMiWn8ZWYD";

/// Liquidity reserve program ID (mainnet/localnet).
///
/// Fee-bearing buffer that redeems receipt balances for the base asset
/// without waiting for the venue cycle.
#[cfg(not(feature = "devnet"))]
pub const RESERVE_PROGRAM_ID: &str = "6UP1mWQxvnsJNsPjirQF6RiPYARPVz1ietdMSusGcZvz";
