//! Set the pause flags.

use crate::StakingConfig;
use bytemuck::{Pod, Zeroable};
use panchor::prelude::*;
use pinocchio::ProgramResult;
use pinocchio_log::log;

/// Instruction data for SetPauses.
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable, InstructionArgs, IdlType)]
pub struct SetPausesData {
    /// Pause staking (1 = paused)
    pub staking_paused: u8,
    /// Pause unstaking, including instant unstake (1 = paused)
    pub unstaking_paused: u8,
    /// Pause instant unstake only (1 = paused)
    pub instant_unstake_paused: u8,
    /// Padding for 8-byte alignment
    pub _padding: [u8; 5],
}

/// Accounts for the SetPauses instruction.
#[derive(Accounts)]
pub struct SetPausesAccounts<'info> {
    /// Staking config to update
    #[account(mut, owner = crate::ID)]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Must match staking_config.authority
    pub authority: Signer<'info>,
}

/// Update the three pause flags in one call.
///
/// Also the path for re-opening staking after the emergency venue exit.
pub fn process_set_pauses(ctx: Context<SetPausesAccounts>, data: SetPausesData) -> ProgramResult {
    let SetPausesAccounts {
        staking_config,
        authority,
    } = ctx.accounts;

    staking_config.try_inspect_mut(|config| {
        config.require_authority(authority.key())?;
        config.staking_paused = data.staking_paused;
        config.unstaking_paused = data.unstaking_paused;
        config.instant_unstake_paused = data.instant_unstake_paused;
        log!("set_pauses: success");
        Ok(())
    })
}
