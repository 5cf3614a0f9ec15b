//! Set warmup and cooldown periods.
//!
//! Period changes only affect records opened afterwards; open records keep
//! the expiry they were merged with.

use crate::StakingConfig;
use bytemuck::{Pod, Zeroable};
use panchor::prelude::*;
use pinocchio::ProgramResult;
use pinocchio_log::log;

/// Instruction data for SetWarmupPeriod.
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable, InstructionArgs, IdlType)]
pub struct SetWarmupPeriodData {
    /// New warmup period in epochs (0 = stake credits the wallet directly)
    pub period: u64,
}

/// Accounts for the SetWarmupPeriod instruction.
#[derive(Accounts)]
pub struct SetWarmupPeriodAccounts<'info> {
    /// Staking config to update
    #[account(mut, owner = crate::ID)]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Must match staking_config.authority
    pub authority: Signer<'info>,
}

/// Update the warmup period.
pub fn process_set_warmup_period(
    ctx: Context<SetWarmupPeriodAccounts>,
    data: SetWarmupPeriodData,
) -> ProgramResult {
    let SetWarmupPeriodAccounts {
        staking_config,
        authority,
    } = ctx.accounts;

    staking_config.try_inspect_mut(|config| {
        config.require_authority(authority.key())?;
        config.warmup_period = data.period;
        log!("set_warmup_period: success");
        Ok(())
    })
}

/// Instruction data for SetCooldownPeriod.
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable, InstructionArgs, IdlType)]
pub struct SetCooldownPeriodData {
    /// New cooldown period in epochs
    pub period: u64,
}

/// Accounts for the SetCooldownPeriod instruction.
#[derive(Accounts)]
pub struct SetCooldownPeriodAccounts<'info> {
    /// Staking config to update
    #[account(mut, owner = crate::ID)]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Must match staking_config.authority
    pub authority: Signer<'info>,
}

/// Update the cooldown period.
pub fn process_set_cooldown_period(
    ctx: Context<SetCooldownPeriodAccounts>,
    data: SetCooldownPeriodData,
) -> ProgramResult {
    let SetCooldownPeriodAccounts {
        staking_config,
        authority,
    } = ctx.accounts;

    staking_config.try_inspect_mut(|config| {
        config.require_authority(authority.key())?;
        config.cooldown_period = data.period;
        log!("set_cooldown_period: success");
        Ok(())
    })
}
