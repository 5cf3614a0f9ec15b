//! Program Derived Address (PDA) helpers
//!
//! All PDAs are derived using standardized seeds for each account type.
//!
//! # Generated Functions
//!
//! The `#[pdas]` macro generates the following for each PDA variant:
//! - `X_SEED` - The seed constant as a byte string literal
//! - `find_x_pda(...)` - Derives the PDA address and bump
//! - `gen_x_seeds(...)` - Creates signer seeds for CPIs
//!
//! The seed literals for `StakingConfig` and `Member` are mirrored in
//! `tidal-pool-interface` so the reserve program can derive the same
//! addresses.

use panchor::pdas;
use pinocchio::pubkey::Pubkey;

/// PDA variants for the staking program
#[pdas]
pub enum StakingPdas {
    /// Staking config PDA - per base mint
    /// Seeds: ["staking_config", base_mint]
    #[seeds("staking_config")]
    StakingConfig {
        /// The base asset mint address
        base_mint: Pubkey,
    },

    /// Staking vault token account PDA - per config
    /// Seeds: ["staking_vault", staking_config]
    #[seeds("staking_vault")]
    StakingVault {
        /// The staking config PDA
        staking_config: Pubkey,
    },

    /// Member account PDA - per (config, owner)
    /// Seeds: ["member", staking_config, owner]
    #[seeds("member")]
    Member {
        /// The staking config PDA
        staking_config: Pubkey,
        /// The member's wallet address
        owner: Pubkey,
    },
}
