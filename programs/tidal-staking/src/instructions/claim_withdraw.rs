//! ClaimWithdraw instruction handler.
//!
//! Settles a mature cooldown record for base asset. The payout is gated on
//! the venue having released the matching batched request; when a keeper has
//! not pulled the matured batch yet, the handler claims it inline. Anything
//! not yet eligible is a silent no-op so callers can poll after every venue
//! rollover.

use crate::{
    MemberAccount, StakingConfig, StakingError, emit_event, events::WithdrawClaimedEvent,
    gen_staking_config_seeds,
};
use panchor::prelude::*;
use pinocchio::{
    ProgramResult, account_info::AccountInfo, instruction::Signer as PinocchioSigner,
    sysvars::{Sysvar, clock::Clock},
};
use pinocchio_log::log;
use pinocchio_token::instructions::Transfer;
use tidal_pool_interface::venue::read_venue_cycle;

use super::venue_cpi::venue_withdraw_cpi;

/// Accounts for the ClaimWithdraw instruction.
#[derive(Accounts)]
pub struct ClaimWithdrawAccounts<'info> {
    /// Staking config (writable for escrow and venue bookkeeping)
    #[account(mut, owner = crate::ID)]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Member whose cooldown record is settled
    pub staker: Signer<'info>,

    /// Staker's member account
    #[account(mut, pda = Member, pda::staking_config = staking_config.key(), pda::owner = staker.key())]
    pub member: AccountLoader<'info, MemberAccount>,

    /// Base asset token account paid out (may belong to anyone the staker
    /// designates)
    #[account(mut)]
    pub beneficiary_base_token: &'info AccountInfo,

    /// Staking vault PDA ["staking_vault", config]
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

    /// SPL Token program (required for Transfer CPI)
    #[account(address = pinocchio_token::ID)]
    pub token_program: &'info AccountInfo,

    /// Staking program account (required for self-CPI event emission)
    #[account(address = crate::ID)]
    pub staking_program: &'info AccountInfo,
}

/// Process a claim-withdraw instruction.
///
/// 1. Settles a due epoch rollover
/// 2. Claims the matured venue batch inline when the vault is short
/// 3. Settles the cooldown record and pays the recomputed amount
pub fn process_claim_withdraw(ctx: Context<ClaimWithdrawAccounts>) -> ProgramResult {
    let ClaimWithdrawAccounts {
        staking_config,
        staker,
        member,
        beneficiary_base_token,
        staking_vault,
        venue_state,
        venue_vault,
        venue_program,
        token_program,
        staking_program,
    } = ctx.accounts;

    let current_slot = Clock::get()?.slot;

    staking_config.try_inspect_mut(|config| {
        config.rebase_if_due(current_slot)?;
        Ok(())
    })?;

    // Read phase: eligibility and venue inputs (borrow released after)
    let (needs_claim, base_mint, bump) = staking_config.try_map(|config| {
        if *venue_state.key() != config.venue_state || *venue_vault.key() != config.venue_vault {
            return Err(StakingError::InvalidVenueState.into());
        }
        if *venue_program.key() != config.venue_program {
            return Err(StakingError::InvalidVenueProgram.into());
        }

        let payout = member.try_map(|m| {
            m.require_withdrawals_unlocked()?;
            if !m.cooldown_open() || config.epoch_number < m.cooldown_expiry_epoch {
                return Ok(0u64);
            }
            Ok(config.balance_for_gons(m.cooldown_gons)?)
        })?;

        if payout == 0 {
            return Ok((None, config.base_mint, config.bump));
        }

        // Vault short: see whether a matured venue batch can cover it
        let needs_claim = if payout > config.claimable_reserve {
            let venue = read_venue_cycle(&venue_state.try_borrow_data()?)?;
            config.matured_request(&venue)
        } else {
            None
        };

        Ok((needs_claim, config.base_mint, config.bump))
    })?;

    let bump_bytes = [bump];

    // Pull the matured batch back from the venue
    if let Some(matured) = needs_claim {
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

    // Settle; still-short funds leave everything untouched for a later retry
    let mut settled_payout: u64 = 0;
    staking_config.try_inspect_mut(|config| {
        member.try_inspect_mut(|m| {
            m.require_withdrawals_unlocked()?;
            if let Some(settlement) = config.settle_cooldown(m)? {
                settled_payout = settlement.payout;
            }
            Ok(())
        })
    })?;

    if settled_payout == 0 {
        log!("claim_withdraw: not yet eligible, nothing settled");
        return Ok(());
    }

    let seeds = gen_staking_config_seeds(&base_mint, &bump_bytes);
    let signer = [PinocchioSigner::from(&seeds)];
    Transfer {
        from: staking_vault,
        to: beneficiary_base_token,
        authority: staking_config.account_info(),
        amount: settled_payout,
    }
    .invoke_signed(&signer)?;

    let seeds = gen_staking_config_seeds(&base_mint, &bump_bytes);
    emit_event(
        staking_config.account_info(),
        staking_program,
        PinocchioSigner::from(&seeds),
        &WithdrawClaimedEvent {
            owner: *staker.key(),
            beneficiary: *beneficiary_base_token.key(),
            amount: settled_payout,
            slot: current_slot,
        },
    )?;

    Ok(())
}
