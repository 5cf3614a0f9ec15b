//! Emergency venue exit.
//!
//! Requests the entire venue position back in one batched request,
//! regardless of per-account cooldown state, and force-pauses staking while
//! the exit is outstanding. This is the circuit breaker against a
//! misbehaving venue; the admin re-opens staking via `set_pauses` once the
//! situation is resolved.

use crate::{
    StakingConfig, StakingError, emit_event, events::EmergencyExitEvent,
    gen_staking_config_seeds,
};
use panchor::prelude::*;
use pinocchio::{
    ProgramResult, account_info::AccountInfo, instruction::Signer as PinocchioSigner,
    sysvars::{Sysvar, clock::Clock},
};
use pinocchio_log::log;
use tidal_pool_interface::venue::read_venue_cycle;

use super::super::venue_cpi::venue_request_withdrawal_cpi;

/// Accounts for the UnstakeAllFromVenue instruction.
#[derive(Accounts)]
pub struct UnstakeAllFromVenueAccounts<'info> {
    /// Staking config (writable for the pause flag and request bookkeeping)
    #[account(mut, owner = crate::ID)]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Venue cycle/position state account (must match config.venue_state)
    #[account(mut)]
    pub venue_state: &'info AccountInfo,

    /// Venue program (must match config.venue_program)
    pub venue_program: &'info AccountInfo,

    /// Must match staking_config.authority
    pub authority: Signer<'info>,

    /// Staking program account (required for self-CPI event emission)
    #[account(address = crate::ID)]
    pub staking_program: &'info AccountInfo,
}

/// Process the emergency venue exit.
///
/// Overwrites any outstanding batched request with the full position and
/// ignores the request window - the circuit breaker does not wait for the
/// tail of a cycle.
pub fn process_unstake_all_from_venue(
    ctx: Context<UnstakeAllFromVenueAccounts>,
) -> ProgramResult {
    let UnstakeAllFromVenueAccounts {
        staking_config,
        venue_state,
        venue_program,
        authority,
        staking_program,
    } = ctx.accounts;

    // Read phase: authorization and the full position (borrow released after)
    let (amount, base_mint, bump) = staking_config.try_map(|config| {
        config.require_authority(authority.key())?;
        if *venue_state.key() != config.venue_state {
            return Err(StakingError::InvalidVenueState.into());
        }
        if *venue_program.key() != config.venue_program {
            return Err(StakingError::InvalidVenueProgram.into());
        }
        Ok((config.venue_balance, config.base_mint, config.bump))
    })?;

    let venue = read_venue_cycle(&venue_state.try_borrow_data()?)?;
    let bump_bytes = [bump];

    if amount > 0 {
        let seeds = gen_staking_config_seeds(&base_mint, &bump_bytes);
        venue_request_withdrawal_cpi(
            venue_program,
            venue_state,
            staking_config.account_info(),
            amount,
            PinocchioSigner::from(&seeds),
        )?;
    }

    staking_config.inspect_mut(|config| {
        if amount > 0 {
            config.record_venue_request(amount, venue.current_cycle);
        }
        config.staking_paused = 1;
    })?;

    log!("unstake_all_from_venue: {} requested, staking paused", amount);

    let seeds = gen_staking_config_seeds(&base_mint, &bump_bytes);
    emit_event(
        staking_config.account_info(),
        staking_program,
        PinocchioSigner::from(&seeds),
        &EmergencyExitEvent {
            amount,
            venue_cycle: venue.current_cycle,
            slot: Clock::get()?.slot,
            _padding: 0,
        },
    )?;

    Ok(())
}
