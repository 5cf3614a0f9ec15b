//! Claim instruction handler.
//!
//! Releases a mature warmup record from escrow into a beneficiary wallet.
//! Before the record's expiry epoch this is a silent no-op so callers can
//! poll without special-casing.

use crate::{
    MemberAccount, StakingConfig, StakingError, emit_event, events::WarmupClaimedEvent,
    gen_staking_config_seeds,
};
use panchor::prelude::*;
use pinocchio::{
    ProgramResult, account_info::AccountInfo, instruction::Signer as PinocchioSigner,
    sysvars::{Sysvar, clock::Clock},
};
use pinocchio_log::log;

/// Accounts for the Claim instruction.
#[derive(Accounts)]
pub struct ClaimAccounts<'info> {
    /// Staking config (writable for the escrow pool)
    #[account(mut, owner = crate::ID)]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Member whose warmup record is claimed
    pub staker: Signer<'info>,

    /// Staker's member account
    #[account(mut, pda = Member, pda::staking_config = staking_config.key(), pda::owner = staker.key())]
    pub member: AccountLoader<'info, MemberAccount>,

    /// Member account credited with the released balance (may be the
    /// staker's own)
    #[account(mut, owner = crate::ID)]
    pub beneficiary_member: &'info AccountInfo,

    /// Staking program account (required for self-CPI event emission)
    #[account(address = crate::ID)]
    pub staking_program: &'info AccountInfo,
}

/// Process a claim instruction.
///
/// No-op (not a failure) unless the warmup record has reached its expiry
/// epoch; on success releases the full record and deletes it.
pub fn process_claim(ctx: Context<ClaimAccounts>) -> ProgramResult {
    let ClaimAccounts {
        staking_config,
        staker,
        member,
        beneficiary_member,
        staking_program,
    } = ctx.accounts;

    let config_key = *staking_config.key();
    let self_claim = beneficiary_member.key() == member.key();

    // Validate the beneficiary belongs to this config before any mutation
    if !self_claim {
        let beneficiary = beneficiary_member.load::<MemberAccount>()?;
        beneficiary.try_inspect(|b| {
            if b.staking_config != config_key {
                return Err(StakingError::InvalidMember.into());
            }
            Ok(())
        })?;
    }

    let mut released_gons: u128 = 0;
    staking_config.try_inspect_mut(|config| {
        member.try_inspect_mut(|m| {
            if let Some(gons) = config.claim_warmup(m)? {
                released_gons = gons;
                if self_claim {
                    m.wallet_gons = m
                        .wallet_gons
                        .checked_add(gons)
                        .ok_or(StakingError::ArithmeticOverflow)?;
                }
            }
            Ok(())
        })
    })?;

    if released_gons == 0 {
        log!("claim: warmup not mature, nothing released");
        return Ok(());
    }

    if !self_claim {
        beneficiary_member.load::<MemberAccount>()?.try_inspect_mut(|b| {
            b.wallet_gons = b
                .wallet_gons
                .checked_add(released_gons)
                .ok_or(StakingError::ArithmeticOverflow)?;
            Ok(())
        })?;
    }

    let (amount, base_mint, bump) = staking_config.try_map(|config| {
        Ok((config.balance_for_gons(released_gons)?, config.base_mint, config.bump))
    })?;

    let bump_bytes = [bump];
    let seeds = gen_staking_config_seeds(&base_mint, &bump_bytes);
    emit_event(
        staking_config.account_info(),
        staking_program,
        PinocchioSigner::from(&seeds),
        &WarmupClaimedEvent {
            owner: *staker.key(),
            beneficiary: *beneficiary_member.key(),
            amount,
            slot: Clock::get()?.slot,
        },
    )?;

    Ok(())
}
