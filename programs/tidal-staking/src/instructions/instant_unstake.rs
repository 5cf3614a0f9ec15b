//! InstantUnstake instruction handler.
//!
//! Bypasses the cooldown entirely: the caller's receipt moves to the
//! liquidity reserve's member wallet and the reserve pays out base asset
//! minus its fee in the same transaction. A drained or paused reserve fails
//! the whole instruction, so no receipt is ever stranded mid-swap.

use crate::{
    MemberAccount, StakingConfig, StakingError, emit_event, events::InstantUnstakeEvent,
    gen_staking_config_seeds,
};
use panchor::prelude::*;
use pinocchio::{
    ProgramResult,
    account_info::AccountInfo,
    cpi::invoke_signed,
    instruction::{AccountMeta, Instruction, Signer as PinocchioSigner},
    sysvars::{Sysvar, clock::Clock},
};
use pinocchio_log::log;
use tidal_pool_interface::{
    InstantPayoutParams, PayoutReturnData, RESERVE_PROGRAM_ID,
    build_instant_payout_instruction_data,
};

/// Instruction data for InstantUnstake.
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable, InstructionArgs, IdlType)]
pub struct InstantUnstakeData {
    /// Receipt amount to redeem (0 = full source balance)
    pub amount: u64,
    /// Draw from the open warmup record instead of the wallet (1 = yes)
    pub use_warmup: u8,
    /// Padding for 8-byte alignment
    pub _padding: [u8; 7],
}

/// Accounts for the InstantUnstake instruction.
#[derive(Accounts)]
pub struct InstantUnstakeAccounts<'info> {
    /// Staking config (writable for ledger updates, PDA signer for the CPI)
    #[account(mut, owner = crate::ID)]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Member that redeems
    pub staker: Signer<'info>,

    /// Staker's member account
    #[account(mut, pda = Member, pda::staking_config = staking_config.key(), pda::owner = staker.key())]
    pub member: AccountLoader<'info, MemberAccount>,

    /// Reserve config (must match config.reserve_config; owned by the
    /// reserve program)
    #[account(mut)]
    pub reserve_config: &'info AccountInfo,

    /// The reserve's member account, which absorbs the redeemed receipt
    #[account(mut, pda = Member, pda::staking_config = staking_config.key(), pda::owner = reserve_config.key())]
    pub reserve_member: AccountLoader<'info, MemberAccount>,

    /// Reserve base-asset vault (pays the caller)
    #[account(mut)]
    pub reserve_vault: &'info AccountInfo,

    /// Staker's base asset token account (payout target)
    #[account(mut)]
    pub staker_base_token: &'info AccountInfo,

    /// Liquidity reserve program
    #[account(address = RESERVE_PROGRAM_ID)]
    pub reserve_program: &'info AccountInfo,

    /// SPL Token program (required for the reserve's Transfer CPI)
    #[account(address = pinocchio_token::ID)]
    pub token_program: &'info AccountInfo,

    /// Staking program account (required for self-CPI event emission)
    #[account(address = crate::ID)]
    pub staking_program: &'info AccountInfo,
}

/// Process an instant unstake instruction.
///
/// 1. Settles a due epoch rollover
/// 2. Moves the redeemed gons to the reserve's member wallet
/// 3. CPIs the reserve's InstantPayout with the config PDA signing
/// 4. Reads the fee back from return data for the event
pub fn process_instant_unstake(
    ctx: Context<InstantUnstakeAccounts>,
    data: InstantUnstakeData,
) -> ProgramResult {
    let InstantUnstakeAccounts {
        staking_config,
        staker,
        member,
        reserve_member,
        reserve_config,
        reserve_vault,
        staker_base_token,
        reserve_program,
        token_program,
        staking_program,
    } = ctx.accounts;

    let current_slot = Clock::get()?.slot;

    staking_config.try_inspect_mut(|config| {
        config.rebase_if_due(current_slot)?;
        if *reserve_config.key() != config.reserve_config {
            return Err(StakingError::InvalidReserve.into());
        }
        Ok(())
    })?;

    // Detach the gons from the caller and credit the reserve's wallet
    let mut receipt_amount: u64 = 0;
    staking_config.try_inspect_mut(|config| {
        member.try_inspect_mut(|m| {
            let outcome =
                config.apply_instant_unstake(m, data.amount, data.use_warmup != 0)?;
            receipt_amount = outcome.receipt_amount;
            reserve_member.try_inspect_mut(|r| {
                r.wallet_gons = r
                    .wallet_gons
                    .checked_add(outcome.gons)
                    .ok_or(StakingError::ArithmeticOverflow)?;
                Ok(())
            })
        })
    })?;

    // Invoke the reserve payout with the config PDA proving the caller
    let (base_mint, bump) = staking_config.map(|config| (config.base_mint, config.bump))?;
    let bump_bytes = [bump];
    let seeds = gen_staking_config_seeds(&base_mint, &bump_bytes);
    let signer = PinocchioSigner::from(&seeds);

    let params = InstantPayoutParams { receipt_amount };
    let instruction_data = build_instant_payout_instruction_data(&params);
    let instruction = Instruction {
        program_id: reserve_program.key(),
        accounts: &[
            AccountMeta::writable(reserve_config.key()),
            AccountMeta::writable(reserve_vault.key()),
            AccountMeta::writable(staker_base_token.key()),
            AccountMeta::readonly_signer(staking_config.key()),
            AccountMeta::readonly(reserve_program.key()),
            AccountMeta::readonly(token_program.key()),
        ],
        data: &instruction_data,
    };
    invoke_signed(
        &instruction,
        &[
            *reserve_config,
            *reserve_vault,
            *staker_base_token,
            staking_config.account_info(),
            *reserve_program,
            *token_program,
        ],
        &[signer],
    )?;

    // The reserve reports the retained fee via return data
    let fee = pinocchio::program::get_return_data()
        .and_then(|ret| PayoutReturnData::from_bytes(ret.as_slice()))
        .ok_or(StakingError::InvalidPayoutReturnData)?
        .fee;

    log!("instant_unstake: {} redeemed, fee {}", receipt_amount, fee);

    let seeds = gen_staking_config_seeds(&base_mint, &bump_bytes);
    emit_event(
        staking_config.account_info(),
        staking_program,
        PinocchioSigner::from(&seeds),
        &InstantUnstakeEvent {
            owner: *staker.key(),
            receipt_amount,
            fee,
            slot: current_slot,
            _padding: 0,
        },
    )?;

    Ok(())
}
