//! ToggleWithdrawLock instruction handler.
//!
//! A self-service safety latch: while locked, the member's unstake and
//! claim-withdraw paths reject. Useful for wallets held by contracts that
//! want to freeze exits during their own maintenance.

use crate::{MemberAccount, StakingConfig};
use panchor::prelude::*;
use pinocchio::ProgramResult;
use pinocchio_log::log;

/// Accounts for the ToggleWithdrawLock instruction.
#[derive(Accounts)]
pub struct ToggleWithdrawLockAccounts<'info> {
    /// Staking config the member belongs to
    #[account(owner = crate::ID)]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Member toggling their lock
    pub staker: Signer<'info>,

    /// Staker's member account
    #[account(mut, pda = Member, pda::staking_config = staking_config.key(), pda::owner = staker.key())]
    pub member: AccountLoader<'info, MemberAccount>,
}

/// Process a withdraw-lock toggle.
pub fn process_toggle_withdraw_lock(ctx: Context<ToggleWithdrawLockAccounts>) -> ProgramResult {
    let ToggleWithdrawLockAccounts {
        staking_config: _,
        staker: _,
        member,
    } = ctx.accounts;

    member.inspect_mut(|m| {
        m.withdrawals_locked ^= 1;
    })?;

    log!("toggle_withdraw_lock: lock flipped");

    Ok(())
}
