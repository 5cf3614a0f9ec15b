//! Set reserve active state.

use crate::ReserveConfig;
use bytemuck::{Pod, Zeroable};
use panchor::prelude::*;
use pinocchio::ProgramResult;
use pinocchio_log::log;

/// Instruction data for SetReserveActive.
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable, InstructionArgs, IdlType)]
pub struct SetReserveActiveData {
    /// New active state (1 = active/enabled, 0 = inactive/disabled)
    pub is_active: u8,
    /// Padding for 8-byte alignment
    pub _padding: [u8; 7],
}

/// Accounts for the SetReserveActive instruction.
#[derive(Accounts)]
pub struct SetReserveActiveAccounts<'info> {
    /// Reserve config to update
    #[account(mut, owner = crate::ID)]
    pub reserve_config: AccountLoader<'info, ReserveConfig>,

    /// Must match reserve_config.authority
    pub authority: Signer<'info>,
}

/// Set the active state for the reserve.
///
/// When inactive, deposits and instant payouts are blocked; withdrawals by
/// existing providers stay open.
pub fn process_set_reserve_active(
    ctx: Context<SetReserveActiveAccounts>,
    data: SetReserveActiveData,
) -> ProgramResult {
    let SetReserveActiveAccounts {
        reserve_config,
        authority,
    } = ctx.accounts;

    reserve_config.try_inspect_mut(|config| {
        config.require_authority(authority.key())?;
        config.is_active = data.is_active;
        log!("set_reserve_active: success");
        Ok(())
    })
}
