//! AddLiquidity instruction handler.
//!
//! Mints shares against the reserve's net value - the liquid vault balance
//! plus the absorbed receipt priced at the staking ledger's current supply -
//! so providers entering after fee accrual pay the grown share price.

use crate::{
    LpPosition, ReserveConfig, ReserveError, emit_event, events::LiquidityAddedEvent,
    gen_reserve_config_seeds,
};
use panchor::prelude::*;
use pinocchio::{
    ProgramResult, account_info::AccountInfo, instruction::Signer as PinocchioSigner,
    sysvars::{Sysvar, clock::Clock},
};
use pinocchio_log::log;
use pinocchio_token::{instructions::Transfer, state::TokenAccount};

use super::valuation::{absorbed_receipt_value, validate_staking_accounts};

/// Instruction data for AddLiquidity.
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable, InstructionArgs, IdlType)]
pub struct AddLiquidityData {
    /// Base asset amount to deposit
    pub amount: u64,
}

/// Accounts for the AddLiquidity instruction.
#[derive(Accounts)]
pub struct AddLiquidityAccounts<'info> {
    /// Reserve configuration account (writable for the share ledger)
    #[account(mut, owner = crate::ID)]
    pub reserve_config: AccountLoader<'info, ReserveConfig>,

    /// Provider wallet (signer for the base asset transfer)
    pub provider: Signer<'info>,

    /// Provider's position
    #[account(mut, pda = LpPosition, pda::reserve_config = reserve_config.key(), pda::owner = provider.key())]
    pub lp_position: AccountLoader<'info, LpPosition>,

    /// Provider's base asset token account (source)
    #[account(mut)]
    pub provider_token: &'info AccountInfo,

    /// Reserve vault token account (receives the deposit)
    #[account(mut, pda = ReserveVault, pda::reserve_config = reserve_config.key())]
    pub vault: LazyAccount<'info, TokenAccount>,

    /// Staking config (read for the receipt conversion rate)
    pub staking_config: &'info AccountInfo,

    /// The reserve's member account in the staking program (read for the
    /// absorbed receipt)
    pub staking_member: &'info AccountInfo,

    /// SPL Token program (required for Transfer CPI)
    #[account(address = pinocchio_token::ID)]
    pub token_program: &'info AccountInfo,

    /// Reserve program account (required for self-CPI event emission)
    #[account(address = crate::ID)]
    pub reserve_program: &'info AccountInfo,
}

/// Process an add-liquidity instruction.
pub fn process_add_liquidity(
    ctx: Context<AddLiquidityAccounts>,
    data: AddLiquidityData,
) -> ProgramResult {
    let AddLiquidityAccounts {
        reserve_config,
        provider,
        lp_position,
        provider_token,
        vault,
        staking_config,
        staking_member,
        token_program: _,
        reserve_program,
    } = ctx.accounts;

    // Value the reserve before the deposit arrives
    let vault_balance = vault.load()?.amount();

    let (shares, base_mint, bump) = reserve_config.try_map(|config| {
        config.require_active()?;
        validate_staking_accounts(config, staking_config, staking_member)?;

        let receipt_value = absorbed_receipt_value(staking_config, staking_member)?;
        let total_value = ReserveConfig::total_reserve_value(vault_balance, receipt_value);
        let shares = config.shares_for_deposit(data.amount, total_value)?;
        Ok((shares, config.base_mint, config.bump))
    })?;

    // Pull the deposit into the vault
    Transfer {
        from: provider_token,
        to: vault.info(),
        authority: provider.account_info(),
        amount: data.amount,
    }
    .invoke()?;

    // Mint the shares
    reserve_config.try_inspect_mut(|config| {
        config.record_liquidity_added(data.amount, shares)?;
        Ok(())
    })?;
    lp_position.try_inspect_mut(|position| {
        position.shares = position
            .shares
            .checked_add(shares)
            .ok_or(ReserveError::ArithmeticOverflow)?;
        Ok(())
    })?;

    log!("add_liquidity: {} deposited", data.amount);

    let bump_bytes = [bump];
    let seeds = gen_reserve_config_seeds(&base_mint, &bump_bytes);
    emit_event(
        reserve_config.account_info(),
        reserve_program,
        PinocchioSigner::from(&seeds),
        &LiquidityAddedEvent {
            owner: *provider.key(),
            amount: data.amount,
            _padding: 0,
            shares,
            slot: Clock::get()?.slot,
            _padding2: 0,
        },
    )?;

    Ok(())
}
