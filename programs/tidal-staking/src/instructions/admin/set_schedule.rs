//! Set the epoch length and the venue request window.

use crate::{StakingConfig, StakingError};
use bytemuck::{Pod, Zeroable};
use panchor::prelude::*;
use pinocchio::ProgramResult;
use pinocchio_log::log;

/// Instruction data for SetEpochLength.
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable, InstructionArgs, IdlType)]
pub struct SetEpochLengthData {
    /// New epoch length in slots (must be non-zero)
    pub epoch_length_slots: u64,
}

/// Accounts for the SetEpochLength instruction.
#[derive(Accounts)]
pub struct SetEpochLengthAccounts<'info> {
    /// Staking config to update
    #[account(mut, owner = crate::ID)]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Must match staking_config.authority
    pub authority: Signer<'info>,
}

/// Update the epoch length.
///
/// Takes effect from the next rollover; the current epoch's end slot is
/// left where it is.
pub fn process_set_epoch_length(
    ctx: Context<SetEpochLengthAccounts>,
    data: SetEpochLengthData,
) -> ProgramResult {
    let SetEpochLengthAccounts {
        staking_config,
        authority,
    } = ctx.accounts;

    staking_config.try_inspect_mut(|config| {
        config.require_authority(authority.key())?;
        if data.epoch_length_slots == 0 {
            return Err(StakingError::InvalidEpochLength.into());
        }
        config.epoch_length_slots = data.epoch_length_slots;
        log!("set_epoch_length: success");
        Ok(())
    })
}

/// Instruction data for SetRequestWindow.
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable, InstructionArgs, IdlType)]
pub struct SetRequestWindowData {
    /// New venue request window in slots
    pub window_slots: u64,
}

/// Accounts for the SetRequestWindow instruction.
#[derive(Accounts)]
pub struct SetRequestWindowAccounts<'info> {
    /// Staking config to update
    #[account(mut, owner = crate::ID)]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Must match staking_config.authority
    pub authority: Signer<'info>,
}

/// Update the venue request window.
pub fn process_set_request_window(
    ctx: Context<SetRequestWindowAccounts>,
    data: SetRequestWindowData,
) -> ProgramResult {
    let SetRequestWindowAccounts {
        staking_config,
        authority,
    } = ctx.accounts;

    staking_config.try_inspect_mut(|config| {
        config.require_authority(authority.key())?;
        config.request_window_slots = data.window_slots;
        log!("set_request_window: success");
        Ok(())
    })
}
