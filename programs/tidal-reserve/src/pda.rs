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
//! The `ReserveConfig` seed literal is mirrored in `tidal-pool-interface`
//! so the staking program can derive the same address.

use panchor::pdas;
use pinocchio::pubkey::Pubkey;

/// PDA variants for the liquidity reserve program
#[pdas]
pub enum ReservePdas {
    /// Reserve config PDA - per base mint
    /// Seeds: ["reserve_config", base_mint]
    #[seeds("reserve_config")]
    ReserveConfig {
        /// The base asset mint address
        base_mint: Pubkey,
    },

    /// Reserve vault token account PDA - per config
    /// Seeds: ["reserve_vault", reserve_config]
    #[seeds("reserve_vault")]
    ReserveVault {
        /// The reserve config PDA
        reserve_config: Pubkey,
    },

    /// Liquidity provider position PDA - per (config, owner)
    /// Seeds: ["lp_position", reserve_config, owner]
    #[seeds("lp_position")]
    LpPosition {
        /// The reserve config PDA
        reserve_config: Pubkey,
        /// The provider's wallet address
        owner: Pubkey,
    },
}
