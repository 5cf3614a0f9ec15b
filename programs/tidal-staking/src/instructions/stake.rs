//! Stake instruction handler.
//!
//! Pulls base asset from the staker, forwards it into the venue position
//! (1:1 receipt) and credits the gon equivalent - through the warmup escrow
//! unless the warmup period is zero.

use crate::{
    MemberAccount, StakingConfig, StakingError, emit_event, events::StakeEvent,
    gen_staking_config_seeds,
};
use panchor::prelude::*;
use pinocchio::{
    ProgramResult, account_info::AccountInfo, instruction::Signer as PinocchioSigner,
    pubkey::Pubkey,
    sysvars::{Sysvar, clock::Clock},
};
use pinocchio_log::log;
use pinocchio_token::instructions::Transfer;

use super::venue_cpi::venue_deposit_cpi;

/// Instruction data for Stake.
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable, InstructionArgs, IdlType)]
pub struct StakeData {
    /// Base asset amount to stake
    pub amount: u64,
}

/// Accounts for the Stake instruction.
#[derive(Accounts)]
pub struct StakeAccounts<'info> {
    /// Staking config (writable for ledger and epoch updates)
    #[account(mut, owner = crate::ID)]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Staker wallet (signer for the base asset transfer)
    pub staker: Signer<'info>,

    /// Staker's member account
    #[account(mut, pda = Member, pda::staking_config = staking_config.key(), pda::owner = staker.key())]
    pub member: AccountLoader<'info, MemberAccount>,

    /// Staker's base asset token account (source)
    #[account(mut)]
    pub staker_base_token: &'info AccountInfo,

    /// Staking vault PDA ["staking_vault", config] (transit for the venue deposit)
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

/// Process a stake instruction.
///
/// 1. Settles a due epoch rollover
/// 2. Validates the venue accounts against the config
/// 3. Transfers base asset: staker -> staking vault -> venue (CPI)
/// 4. Credits gons to the warmup escrow or directly to the wallet
pub fn process_stake(ctx: Context<StakeAccounts>, data: StakeData) -> ProgramResult {
    let StakeAccounts {
        staking_config,
        staker,
        member,
        staker_base_token,
        staking_vault,
        venue_state,
        venue_vault,
        venue_program,
        token_program,
        staking_program,
    } = ctx.accounts;

    let current_slot = Clock::get()?.slot;

    // Settle a due rollover before converting at the current rate
    staking_config.try_inspect_mut(|config| {
        config.rebase_if_due(current_slot)?;
        Ok(())
    })?;

    // Validate preconditions and capture CPI inputs (borrow released after)
    let (base_mint, bump): (Pubkey, u8) = staking_config.try_map(|config| {
        config.require_staking_open()?;
        if data.amount == 0 {
            return Err(StakingError::InvalidAmount.into());
        }
        if *venue_state.key() != config.venue_state || *venue_vault.key() != config.venue_vault {
            return Err(StakingError::InvalidVenueState.into());
        }
        if *venue_program.key() != config.venue_program {
            return Err(StakingError::InvalidVenueProgram.into());
        }
        Ok((config.base_mint, config.bump))
    })?;

    // Pull the base asset from the staker into the vault
    Transfer {
        from: staker_base_token,
        to: staking_vault,
        authority: staker.account_info(),
        amount: data.amount,
    }
    .invoke()?;

    // Forward it into the venue position, config PDA signing as owner
    let bump_bytes = [bump];
    let seeds = gen_staking_config_seeds(&base_mint, &bump_bytes);
    venue_deposit_cpi(
        venue_program,
        venue_state,
        venue_vault,
        staking_vault,
        staking_config.account_info(),
        token_program,
        data.amount,
        PinocchioSigner::from(&seeds),
    )?;

    // Credit the receipt
    let mut warmup_expiry_epoch = 0u64;
    staking_config.try_inspect_mut(|config| {
        member.try_inspect_mut(|m| {
            let outcome = config.apply_stake(m, data.amount)?;
            if outcome.escrowed {
                warmup_expiry_epoch = m.warmup_expiry_epoch;
            }
            Ok(())
        })
    })?;

    log!("stake: {} staked", data.amount);

    let seeds = gen_staking_config_seeds(&base_mint, &bump_bytes);
    emit_event(
        staking_config.account_info(),
        staking_program,
        PinocchioSigner::from(&seeds),
        &StakeEvent {
            owner: *staker.key(),
            amount: data.amount,
            warmup_expiry_epoch,
            slot: current_slot,
            _padding: 0,
        },
    )?;

    Ok(())
}
