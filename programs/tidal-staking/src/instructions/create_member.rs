//! CreateMember instruction handler.
//!
//! Member accounts are created ahead of the first stake. Creation is
//! permissionless and payer-funded so integrators (including the liquidity
//! reserve's own receipt account) can be set up by anyone.

use crate::{MemberAccount, StakingConfig, find_member_pda};
use panchor::prelude::*;
use pinocchio::{ProgramResult, account_info::AccountInfo};
use pinocchio_log::log;

/// Accounts for the CreateMember instruction.
#[derive(Accounts)]
pub struct CreateMemberAccounts<'info> {
    /// Staking config the member belongs to
    #[account(owner = crate::ID)]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Wallet the member account is created for (not required to sign)
    pub owner: &'info AccountInfo,

    /// Member PDA ["member", staking_config, owner] to create
    #[account(init, payer = payer, pda = Member, pda::staking_config = staking_config.key(), pda::owner = owner.key())]
    pub member: AccountLoader<'info, MemberAccount>,

    /// Rent payer
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Process a create-member instruction.
pub fn process_create_member(ctx: Context<CreateMemberAccounts>) -> ProgramResult {
    let CreateMemberAccounts {
        staking_config,
        owner,
        member,
        payer: _,
        system_program: _,
    } = ctx.accounts;

    let config_key = *staking_config.key();
    let (_, bump) = find_member_pda(&config_key, owner.key());

    member.inspect_mut(|m| {
        m.owner = *owner.key();
        m.staking_config = config_key;
        m.wallet_gons = 0;
        m.warmup_gons = 0;
        m.cooldown_gons = 0;
        m.warmup_amount_at_entry = 0;
        m.warmup_expiry_epoch = 0;
        m.cooldown_amount_at_entry = 0;
        m.cooldown_expiry_epoch = 0;
        m.withdrawals_locked = 0;
        m.bump = bump;
        m._padding = [0u8; 14];
    })?;

    log!("create_member: member account initialized");

    Ok(())
}
