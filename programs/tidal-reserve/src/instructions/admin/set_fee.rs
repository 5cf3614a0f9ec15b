//! Set the instant unstake fee.

use crate::{ReserveConfig, emit_event, events::FeeUpdatedEvent, gen_reserve_config_seeds};
use bytemuck::{Pod, Zeroable};
use panchor::prelude::*;
use pinocchio::{
    ProgramResult, account_info::AccountInfo, instruction::Signer as PinocchioSigner,
    sysvars::{Sysvar, clock::Clock},
};
use pinocchio_log::log;

/// Instruction data for SetFee.
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable, InstructionArgs, IdlType)]
pub struct SetFeeData {
    /// New instant unstake fee in basis points (max 10000)
    pub fee_bps: u16,
    /// Padding for 8-byte alignment
    pub _padding: [u8; 6],
}

/// Accounts for the SetFee instruction.
#[derive(Accounts)]
pub struct SetFeeAccounts<'info> {
    /// Reserve config to update
    #[account(mut, owner = crate::ID)]
    pub reserve_config: AccountLoader<'info, ReserveConfig>,

    /// Must match reserve_config.authority
    pub authority: Signer<'info>,

    /// Reserve program account (required for self-CPI event emission)
    #[account(address = crate::ID)]
    pub reserve_program: &'info AccountInfo,
}

/// Update the instant unstake fee.
///
/// Fee rates are in basis points (100 = 1%); values outside the allowed
/// range are rejected.
pub fn process_set_fee(ctx: Context<SetFeeAccounts>, data: SetFeeData) -> ProgramResult {
    let SetFeeAccounts {
        reserve_config,
        authority,
        reserve_program,
    } = ctx.accounts;

    let (previous_fee_bps, base_mint, bump) = reserve_config.try_map_mut(|config| {
        config.require_authority(authority.key())?;
        ReserveConfig::validate_fee(data.fee_bps)?;
        let previous = config.fee_bps;
        config.fee_bps = data.fee_bps;
        Ok((previous, config.base_mint, config.bump))
    })?;

    log!("set_fee: success");

    let bump_bytes = [bump];
    let seeds = gen_reserve_config_seeds(&base_mint, &bump_bytes);
    emit_event(
        reserve_config.account_info(),
        reserve_program,
        PinocchioSigner::from(&seeds),
        &FeeUpdatedEvent {
            previous_fee_bps,
            fee_bps: data.fee_bps,
            _padding: [0u8; 4],
            slot: Clock::get()?.slot,
        },
    )?;

    Ok(())
}
