//! Unstake instruction handler.
//!
//! Moves receipt balance into the cooldown escrow where it waits for the
//! venue's batch cycle. Draws from the unclaimed warmup record first, then
//! from the wallet. A mature cooldown from an earlier cycle is auto-settled
//! to the caller before the new window opens, so stale redeemable value is
//! never stranded behind a refreshed expiry.

use crate::{
    MemberAccount, StakingConfig, StakingError, emit_event,
    events::{UnstakeEvent, WithdrawClaimedEvent},
    gen_staking_config_seeds,
};
use panchor::prelude::*;
use pinocchio::{
    ProgramResult, account_info::AccountInfo, instruction::Signer as PinocchioSigner,
    sysvars::{Sysvar, clock::Clock},
};
use pinocchio_log::log;
use pinocchio_token::instructions::Transfer;

/// Instruction data for Unstake.
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable, InstructionArgs, IdlType)]
pub struct UnstakeData {
    /// Receipt amount to move into cooldown
    pub amount: u64,
    /// Claim a mature warmup record into the wallet first (1 = yes)
    pub trigger_claim: u8,
    /// Padding for 8-byte alignment
    pub _padding: [u8; 7],
}

/// Accounts for the Unstake instruction.
#[derive(Accounts)]
pub struct UnstakeAccounts<'info> {
    /// Staking config (writable for escrow and epoch updates)
    #[account(mut, owner = crate::ID)]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Member that unstakes
    pub staker: Signer<'info>,

    /// Staker's member account
    #[account(mut, pda = Member, pda::staking_config = staking_config.key(), pda::owner = staker.key())]
    pub member: AccountLoader<'info, MemberAccount>,

    /// Staker's base asset token account (payout target for an auto-settled
    /// mature cooldown)
    #[account(mut)]
    pub staker_base_token: &'info AccountInfo,

    /// Staking vault PDA ["staking_vault", config]
    #[account(mut, pda = StakingVault, pda::staking_config = staking_config.key())]
    pub staking_vault: &'info AccountInfo,

    /// SPL Token program (required for Transfer CPI)
    #[account(address = pinocchio_token::ID)]
    pub token_program: &'info AccountInfo,

    /// Staking program account (required for self-CPI event emission)
    #[account(address = crate::ID)]
    pub staking_program: &'info AccountInfo,
}

/// Process an unstake instruction.
///
/// 1. Settles a due epoch rollover
/// 2. Optionally claims a mature warmup record into the wallet
/// 3. Auto-settles a mature cooldown whose base asset is already available
/// 4. Moves the requested amount into the cooldown escrow
pub fn process_unstake(ctx: Context<UnstakeAccounts>, data: UnstakeData) -> ProgramResult {
    let UnstakeAccounts {
        staking_config,
        staker,
        member,
        staker_base_token,
        staking_vault,
        token_program: _,
        staking_program,
    } = ctx.accounts;

    let current_slot = Clock::get()?.slot;

    let mut settled_payout: u64 = 0;
    let mut cooldown_expiry_epoch: u64 = 0;

    staking_config.try_inspect_mut(|config| {
        config.rebase_if_due(current_slot)?;

        member.try_inspect_mut(|m| {
            if data.trigger_claim != 0 {
                if let Some(gons) = config.claim_warmup(m)? {
                    m.wallet_gons = m
                        .wallet_gons
                        .checked_add(gons)
                        .ok_or(StakingError::ArithmeticOverflow)?;
                }
            }

            // A mature cooldown with released funds settles before the new
            // window opens; otherwise it merges and waits with the rest.
            if m.withdrawals_locked == 0 {
                if let Some(settlement) = config.settle_cooldown(m)? {
                    settled_payout = settlement.payout;
                }
            }

            config.apply_unstake(m, data.amount)?;
            cooldown_expiry_epoch = m.cooldown_expiry_epoch;
            Ok(())
        })
    })?;

    // Pay out the auto-settled cooldown (borrows released above)
    if settled_payout > 0 {
        let (base_mint, bump) = staking_config.map(|config| (config.base_mint, config.bump))?;
        let bump_bytes = [bump];
        let seeds = gen_staking_config_seeds(&base_mint, &bump_bytes);
        let signer = [PinocchioSigner::from(&seeds)];

        Transfer {
            from: staking_vault,
            to: staker_base_token,
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
                beneficiary: *staker.key(),
                amount: settled_payout,
                slot: current_slot,
            },
        )?;
    }

    log!("unstake: {} moved into cooldown", data.amount);

    let (base_mint, bump) = staking_config.map(|config| (config.base_mint, config.bump))?;
    let bump_bytes = [bump];
    let seeds = gen_staking_config_seeds(&base_mint, &bump_bytes);
    emit_event(
        staking_config.account_info(),
        staking_program,
        PinocchioSigner::from(&seeds),
        &UnstakeEvent {
            owner: *staker.key(),
            amount: data.amount,
            cooldown_expiry_epoch,
            slot: current_slot,
            _padding: 0,
        },
    )?;

    Ok(())
}
