//! SendWithdrawalRequests instruction handler.
//!
//! Permissionless batching keeper. The venue accepts one outstanding
//! withdrawal request per caller per cycle and re-submitting overwrites, so
//! individual unstakes only grow the cooldown escrow; this instruction
//! periodically submits the whole pending amount in one request.
//!
//! Outside the batching conditions the call is a deliberate no-op, never a
//! failure - the caller retries after the next venue rollover and nothing
//! pending is ever dropped.

use crate::{
    StakingConfig, StakingError, emit_event, events::WithdrawalRequestsSentEvent,
    gen_staking_config_seeds,
};
use panchor::prelude::*;
use pinocchio::{
    ProgramResult, account_info::AccountInfo, instruction::Signer as PinocchioSigner,
    pubkey::Pubkey,
    sysvars::{Sysvar, clock::Clock},
};
use pinocchio_log::log;
use tidal_pool_interface::venue::read_venue_cycle;

use super::venue_cpi::{venue_request_withdrawal_cpi, venue_withdraw_cpi};

/// Accounts for the SendWithdrawalRequests instruction.
#[derive(Accounts)]
pub struct SendWithdrawalRequestsAccounts<'info> {
    /// Staking config (writable for the batching watermark)
    #[account(mut, owner = crate::ID)]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Staking vault PDA ["staking_vault", config] (receives claimed funds)
    #[account(mut, pda = StakingVault, pda::staking_config = staking_config.key())]
    pub staking_vault: &'info AccountInfo,

    /// Venue cycle/position state account (must match config.venue_state)
    #[account(mut)]
    pub venue_state: &'info AccountInfo,

    /// Venue vault token account (must match config.venue_vault)
    #[account(mut)]
    pub venue_vault: &'info AccountInfo,

    /// Venue program (must match config.venue_program)
    pub venue_program: &'info AccountInfo,

    /// SPL Token program (required for the venue's Transfer CPI)
    #[account(address = pinocchio_token::ID)]
    pub token_program: &'info AccountInfo,

    /// Staking program account (required for self-CPI event emission)
    #[account(address = crate::ID)]
    pub staking_program: &'info AccountInfo,
}

/// Process a send-withdrawal-requests instruction.
///
/// 1. No-op unless the venue rolled over since the last synchronized cycle
///    and the slot is inside the request window
/// 2. Claims the previously matured request back into the vault
/// 3. Submits the not-yet-covered cooldown total as a fresh request
pub fn process_send_withdrawal_requests(
    ctx: Context<SendWithdrawalRequestsAccounts>,
) -> ProgramResult {
    let SendWithdrawalRequestsAccounts {
        staking_config,
        staking_vault,
        venue_state,
        venue_vault,
        venue_program,
        token_program,
        staking_program,
    } = ctx.accounts;

    let current_slot = Clock::get()?.slot;

    // Read phase: batching decision (borrow released after)
    let (venue, matured, base_mint, bump): (_, Option<u64>, Pubkey, u8) =
        staking_config.try_map(|config| {
            if *venue_state.key() != config.venue_state
                || *venue_vault.key() != config.venue_vault
            {
                return Err(StakingError::InvalidVenueState.into());
            }
            if *venue_program.key() != config.venue_program {
                return Err(StakingError::InvalidVenueProgram.into());
            }

            let venue = read_venue_cycle(&venue_state.try_borrow_data()?)?;
            if !config.can_batch_requests(&venue, current_slot) {
                return Ok((venue, None, config.base_mint, config.bump));
            }

            Ok((venue, Some(config.matured_request(&venue).unwrap_or(0)), config.base_mint, config.bump))
        })?;

    let Some(matured) = matured else {
        log!("send_withdrawal_requests: outside the batching window");
        return Ok(());
    };

    let bump_bytes = [bump];

    // Claim the previously matured batch back first
    if matured > 0 {
        let seeds = gen_staking_config_seeds(&base_mint, &bump_bytes);
        venue_withdraw_cpi(
            venue_program,
            venue_state,
            venue_vault,
            staking_vault,
            staking_config.account_info(),
            token_program,
            matured,
            PinocchioSigner::from(&seeds),
        )?;
        staking_config.try_inspect_mut(|config| {
            config.record_venue_claim(matured)?;
            Ok(())
        })?;
    }

    // Submit the remaining pending cooldown total
    let pending = staking_config.try_map(|config| Ok(config.pending_request_amount()?))?;
    if pending > 0 {
        let seeds = gen_staking_config_seeds(&base_mint, &bump_bytes);
        venue_request_withdrawal_cpi(
            venue_program,
            venue_state,
            staking_config.account_info(),
            pending,
            PinocchioSigner::from(&seeds),
        )?;
        staking_config.inspect_mut(|config| {
            config.record_venue_request(pending, venue.current_cycle);
        })?;
    }

    if matured == 0 && pending == 0 {
        log!("send_withdrawal_requests: nothing pending");
        return Ok(());
    }

    log!("send_withdrawal_requests: claimed {}, requested {}", matured, pending);

    let seeds = gen_staking_config_seeds(&base_mint, &bump_bytes);
    emit_event(
        staking_config.account_info(),
        staking_program,
        PinocchioSigner::from(&seeds),
        &WithdrawalRequestsSentEvent {
            claimed: matured,
            requested: pending,
            venue_cycle: venue.current_cycle,
            slot: current_slot,
        },
    )?;

    Ok(())
}
