//! AddRewards instruction handler.
//!
//! Funds a reward and commits it for distribution. The committed amount
//! overwrites any earlier commit, so the most recent one is the only reward
//! in flight; it is locked in by the next rollover and applied by the one
//! after that.

use crate::{StakingConfig, emit_event, events::RewardsCommittedEvent, gen_staking_config_seeds};
use panchor::prelude::*;
use pinocchio::{
    ProgramResult, account_info::AccountInfo, instruction::Signer as PinocchioSigner,
    sysvars::{Sysvar, clock::Clock},
};
use pinocchio_log::log;
use pinocchio_token::{instructions::Transfer, state::TokenAccount};

/// Instruction data for AddRewards.
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable, InstructionArgs, IdlType)]
pub struct AddRewardsData {
    /// Base asset amount to fund and commit
    pub amount: u64,
}

/// Accounts for the AddRewards instruction.
#[derive(Accounts)]
pub struct AddRewardsAccounts<'info> {
    /// Staking config (writable for the epoch scheduler)
    #[account(mut, owner = crate::ID)]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Staking vault PDA ["staking_vault", config] (receives the reward)
    #[account(mut, pda = StakingVault, pda::staking_config = staking_config.key())]
    pub staking_vault: &'info AccountInfo,

    /// Funder's base asset token account (source)
    #[account(mut)]
    pub funder_token: LazyAccount<'info, TokenAccount>,

    /// Funder authority (signer for the transfer)
    pub funder: Signer<'info>,

    /// SPL Token program (required for Transfer CPI)
    #[account(address = pinocchio_token::ID)]
    pub token_program: &'info AccountInfo,

    /// Staking program account (required for self-CPI event emission)
    #[account(address = crate::ID)]
    pub staking_program: &'info AccountInfo,
}

/// Process an add-rewards instruction.
///
/// Permissionless - anyone with base asset can fund rewards for stakers.
pub fn process_add_rewards(ctx: Context<AddRewardsAccounts>, data: AddRewardsData) -> ProgramResult {
    let AddRewardsAccounts {
        staking_config,
        staking_vault,
        funder_token,
        funder,
        token_program: _,
        staking_program,
    } = ctx.accounts;

    let current_slot = Clock::get()?.slot;

    // Settle a due rollover first so the commit lands in the right epoch
    staking_config.try_inspect_mut(|config| {
        config.rebase_if_due(current_slot)?;
        Ok(())
    })?;

    // Pull the reward into the vault
    Transfer {
        from: funder_token.info(),
        to: staking_vault,
        authority: funder.account_info(),
        amount: data.amount,
    }
    .invoke()?;

    // Commit (overwrite, not additive)
    let epoch_number = staking_config.try_map_mut(|config| {
        config.commit_rewards(data.amount)?;
        Ok(config.epoch_number)
    })?;

    log!("add_rewards: {} committed", data.amount);

    let (base_mint, bump) = staking_config.map(|config| (config.base_mint, config.bump))?;
    let bump_bytes = [bump];
    let seeds = gen_staking_config_seeds(&base_mint, &bump_bytes);
    emit_event(
        staking_config.account_info(),
        staking_program,
        PinocchioSigner::from(&seeds),
        &RewardsCommittedEvent {
            funder: *funder.key(),
            amount: data.amount,
            epoch_number,
            slot: current_slot,
            _padding: 0,
        },
    )?;

    Ok(())
}
