//! RemoveLiquidity instruction handler.
//!
//! Burns shares for base asset at the current share value. The payout is
//! bounded by the vault's liquid balance: after heavy instant-unstake
//! outflow the shares' claim can temporarily exceed what is liquid, and
//! such withdrawals reject until the absorbed receipt has been cycled back
//! through the staking cooldown.

use crate::{
    LpPosition, ReserveConfig, ReserveError, emit_event, events::LiquidityRemovedEvent,
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

/// Instruction data for RemoveLiquidity.
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable, InstructionArgs, IdlType)]
pub struct RemoveLiquidityData {
    /// Shares to burn
    pub shares: u64,
}

/// Accounts for the RemoveLiquidity instruction.
#[derive(Accounts)]
pub struct RemoveLiquidityAccounts<'info> {
    /// Reserve configuration account (writable for the share ledger, PDA
    /// signer for the vault transfer)
    #[account(mut, owner = crate::ID)]
    pub reserve_config: AccountLoader<'info, ReserveConfig>,

    /// Provider wallet
    pub provider: Signer<'info>,

    /// Provider's position
    #[account(mut, pda = LpPosition, pda::reserve_config = reserve_config.key(), pda::owner = provider.key())]
    pub lp_position: AccountLoader<'info, LpPosition>,

    /// Provider's base asset token account (destination)
    #[account(mut)]
    pub provider_token: &'info AccountInfo,

    /// Reserve vault token account (source)
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

/// Process a remove-liquidity instruction.
pub fn process_remove_liquidity(
    ctx: Context<RemoveLiquidityAccounts>,
    data: RemoveLiquidityData,
) -> ProgramResult {
    let RemoveLiquidityAccounts {
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

    let shares = data.shares as u128;

    // The provider must actually hold the shares
    lp_position.try_inspect(|position| {
        if shares == 0 || shares > position.shares {
            return Err(ReserveError::NotEnoughShares.into());
        }
        Ok(())
    })?;

    let vault_balance = vault.load()?.amount();

    let (payout, base_mint, bump) = reserve_config.try_map(|config| {
        validate_staking_accounts(config, staking_config, staking_member)?;

        let receipt_value = absorbed_receipt_value(staking_config, staking_member)?;
        let total_value = ReserveConfig::total_reserve_value(vault_balance, receipt_value);
        let payout = config.payout_for_shares(shares, total_value)?;
        if payout > vault_balance {
            return Err(ReserveError::NotEnoughFunds.into());
        }
        Ok((payout, config.base_mint, config.bump))
    })?;

    // Burn the shares before the transfer leaves the program
    reserve_config.try_inspect_mut(|config| {
        config.record_liquidity_removed(payout, shares)?;
        Ok(())
    })?;
    lp_position.try_inspect_mut(|position| {
        position.shares = position
            .shares
            .checked_sub(shares)
            .ok_or(ReserveError::NotEnoughShares)?;
        Ok(())
    })?;

    let bump_bytes = [bump];
    let seeds = gen_reserve_config_seeds(&base_mint, &bump_bytes);
    let signer = [PinocchioSigner::from(&seeds)];
    Transfer {
        from: vault.info(),
        to: provider_token,
        authority: reserve_config.account_info(),
        amount: payout,
    }
    .invoke_signed(&signer)?;

    log!("remove_liquidity: {} paid out", payout);

    let seeds = gen_reserve_config_seeds(&base_mint, &bump_bytes);
    emit_event(
        reserve_config.account_info(),
        reserve_program,
        PinocchioSigner::from(&seeds),
        &LiquidityRemovedEvent {
            owner: *provider.key(),
            amount: payout,
            _padding: 0,
            shares,
            slot: Clock::get()?.slot,
            _padding2: 0,
        },
    )?;

    Ok(())
}
