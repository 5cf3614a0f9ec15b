//! `AcceptAuthority` instruction handler.
//!
//! Completes the two-step authority transfer by accepting the pending
//! authority role. Must be called by the `pending_authority` address.

use panchor::prelude::*;
use pinocchio::ProgramResult;
use pinocchio_log::log;
use tidal_pool_interface::authority::accept_authority_impl;

use crate::ReserveConfig;

/// Accounts for the `AcceptAuthority` instruction.
#[derive(Accounts)]
pub struct AcceptAuthorityAccounts<'info> {
    /// Reserve config PDA ["reserve_config", base_mint]
    #[account(mut, owner = crate::ID)]
    pub reserve_config: AccountLoader<'info, ReserveConfig>,
    /// Pending authority (must be signer, must match
    /// reserve_config.pending_authority)
    pub signer: Signer<'info>,
}

/// Process accept authority instruction.
pub fn process_accept_authority(ctx: Context<AcceptAuthorityAccounts>) -> ProgramResult {
    let AcceptAuthorityAccounts {
        reserve_config,
        signer,
    } = ctx.accounts;

    reserve_config.try_inspect_mut(|config| {
        accept_authority_impl(config, signer.key())?;
        log!("accept_authority: authority transferred");
        Ok(())
    })
}
