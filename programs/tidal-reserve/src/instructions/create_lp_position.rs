//! CreateLpPosition instruction handler.
//!
//! Positions are created ahead of the first deposit; creation is
//! permissionless and payer-funded.

use crate::{LpPosition, ReserveConfig, find_lp_position_pda};
use panchor::prelude::*;
use pinocchio::{ProgramResult, account_info::AccountInfo};
use pinocchio_log::log;

/// Accounts for the CreateLpPosition instruction.
#[derive(Accounts)]
pub struct CreateLpPositionAccounts<'info> {
    /// Reserve config the position belongs to
    #[account(owner = crate::ID)]
    pub reserve_config: AccountLoader<'info, ReserveConfig>,

    /// Wallet the position is created for (not required to sign)
    pub owner: &'info AccountInfo,

    /// Position PDA ["lp_position", reserve_config, owner] to create
    #[account(init, payer = payer, pda = LpPosition, pda::reserve_config = reserve_config.key(), pda::owner = owner.key())]
    pub lp_position: AccountLoader<'info, LpPosition>,

    /// Rent payer
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Process a create-lp-position instruction.
pub fn process_create_lp_position(ctx: Context<CreateLpPositionAccounts>) -> ProgramResult {
    let CreateLpPositionAccounts {
        reserve_config,
        owner,
        lp_position,
        payer: _,
        system_program: _,
    } = ctx.accounts;

    let config_key = *reserve_config.key();
    let (_, bump) = find_lp_position_pda(&config_key, owner.key());

    lp_position.inspect_mut(|position| {
        position.owner = *owner.key();
        position.reserve_config = config_key;
        position.shares = 0;
        position.bump = bump;
        position._padding = [0u8; 15];
    })?;

    log!("create_lp_position: position initialized");

    Ok(())
}
