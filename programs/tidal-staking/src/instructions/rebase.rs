//! Rebase instruction handler.
//!
//! Permissionless epoch keeper: rolls the epoch over when it is due,
//! applying the reward locked in by the previous rollover. Calling while
//! the epoch is still accumulating changes nothing.

use crate::{StakingConfig, emit_event, events::RebaseEvent, gen_staking_config_seeds};
use panchor::prelude::*;
use pinocchio::{
    ProgramResult, account_info::AccountInfo, instruction::Signer as PinocchioSigner,
    sysvars::{Sysvar, clock::Clock},
};
use pinocchio_log::log;

/// Accounts for the Rebase instruction.
#[derive(Accounts)]
pub struct RebaseAccounts<'info> {
    /// Staking config to roll over
    #[account(mut, owner = crate::ID)]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Staking program account (required for self-CPI event emission)
    #[account(address = crate::ID)]
    pub staking_program: &'info AccountInfo,
}

/// Process a rebase instruction.
///
/// Anyone can call this; the epoch schedule, not the caller, decides
/// whether anything happens.
pub fn process_rebase(ctx: Context<RebaseAccounts>) -> ProgramResult {
    let RebaseAccounts {
        staking_config,
        staking_program,
    } = ctx.accounts;

    let current_slot = Clock::get()?.slot;

    let applied = staking_config.try_map_mut(|config| Ok(config.rebase_if_due(current_slot)?))?;

    let Some(profit) = applied else {
        log!("rebase: epoch still accumulating");
        return Ok(());
    };

    let (epoch_number, total_supply, index, base_mint, bump) =
        staking_config.try_map(|config| {
            Ok((
                config.epoch_number,
                config.total_supply,
                config.get_index()?,
                config.base_mint,
                config.bump,
            ))
        })?;

    let bump_bytes = [bump];
    let seeds = gen_staking_config_seeds(&base_mint, &bump_bytes);
    emit_event(
        staking_config.account_info(),
        staking_program,
        PinocchioSigner::from(&seeds),
        &RebaseEvent {
            epoch_number,
            profit,
            total_supply,
            index,
            slot: current_slot,
            _padding: [0u64; 3],
        },
    )?;

    Ok(())
}
