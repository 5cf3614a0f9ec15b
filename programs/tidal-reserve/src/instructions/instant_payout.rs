//! InstantPayout instruction handler.
//!
//! The staking program has already moved the redeemed receipt into the
//! reserve's member wallet when this CPI arrives; the reserve's side is to
//! prove the caller, take its fee and pay the remainder out of the vault.
//! A vault that cannot cover the payout fails the whole transaction - the
//! staker keeps their receipt and nothing is partially swapped.

use crate::{
    ReserveConfig, ReserveError, emit_event, events::InstantPayoutEvent,
    gen_reserve_config_seeds,
};
use panchor::prelude::*;
use pinocchio::{
    ProgramResult, account_info::AccountInfo, instruction::Signer as PinocchioSigner,
    program::set_return_data,
    sysvars::{Sysvar, clock::Clock},
};
use pinocchio_log::log;
use pinocchio_token::{instructions::Transfer, state::TokenAccount};
use tidal_pool_interface::{InstantPayoutParams, PayoutReturnData};

/// Accounts for the InstantPayout instruction.
///
/// Account order must match tidal-pool-interface::instant_payout_accounts:
/// 0. reserve_config (mut)
/// 1. vault (mut)
/// 2. recipient_token (mut)
/// 3. staking_config (signer)
/// 4. reserve_program
/// 5. token_program
#[derive(Accounts)]
pub struct InstantPayoutAccounts<'info> {
    /// Reserve configuration account (writable for stats, PDA signer for
    /// the vault transfer)
    #[account(mut, owner = crate::ID)]
    pub reserve_config: AccountLoader<'info, ReserveConfig>,

    /// Reserve vault token account (pays the recipient)
    #[account(mut, pda = ReserveVault, pda::reserve_config = reserve_config.key())]
    pub vault: LazyAccount<'info, TokenAccount>,

    /// Recipient's base asset token account
    #[account(mut)]
    pub recipient_token: &'info AccountInfo,

    /// Staking config PDA. Must sign: only the staking program can sign for
    /// its own config PDA, which proves the receipt was credited first.
    pub staking_config: Signer<'info>,

    /// Reserve program account (required for self-CPI event emission)
    #[account(address = crate::ID)]
    pub reserve_program: &'info AccountInfo,

    /// SPL Token program (required for Transfer CPI)
    #[account(address = pinocchio_token::ID)]
    pub token_program: &'info AccountInfo,
}

/// Process an instant payout CPI from the staking program.
///
/// 1. Validates the signing caller is the configured staking config PDA
/// 2. Splits the amount into payout and retained fee
/// 3. Rejects when the liquid vault balance cannot cover the payout
/// 4. Transfers the payout and returns { fee } via return data
pub fn process_instant_payout(
    ctx: Context<InstantPayoutAccounts>,
    instruction_data: &[u8],
) -> ProgramResult {
    let InstantPayoutAccounts {
        reserve_config,
        vault,
        recipient_token,
        staking_config,
        reserve_program,
        token_program: _,
    } = ctx.accounts;

    // Parse instruction data (panchor strips the discriminator)
    let params = InstantPayoutParams::from_bytes(instruction_data)
        .ok_or(ReserveError::InvalidInstructionData)?;

    let vault_balance = vault.load()?.amount();

    // Validate the caller and compute the split (borrow released after)
    let (payout, fee, base_mint, bump) = reserve_config.try_map(|config| {
        config.require_active()?;
        if *staking_config.key() != config.staking_config {
            return Err(ReserveError::InvalidStakingCaller.into());
        }
        if params.receipt_amount == 0 {
            return Err(ReserveError::InvalidAmount.into());
        }

        let (payout, fee) = config.split_instant_payout(params.receipt_amount)?;
        if payout > vault_balance {
            return Err(ReserveError::NotEnoughFunds.into());
        }

        Ok((payout, fee, config.base_mint, config.bump))
    })?;

    // Pay out, reserve config PDA signing for its vault
    let bump_bytes = [bump];
    let seeds = gen_reserve_config_seeds(&base_mint, &bump_bytes);
    let signer = [PinocchioSigner::from(&seeds)];
    Transfer {
        from: vault.info(),
        to: recipient_token,
        authority: reserve_config.account_info(),
        amount: payout,
    }
    .invoke_signed(&signer)?;

    reserve_config.try_inspect_mut(|config| {
        config.record_instant_payout(params.receipt_amount, fee)?;
        Ok(())
    })?;

    log!("instant_payout: {} paid, {} retained", payout, fee);

    // Emit event FIRST (the self-CPI clears return data)
    let seeds = gen_reserve_config_seeds(&base_mint, &bump_bytes);
    emit_event(
        reserve_config.account_info(),
        reserve_program,
        PinocchioSigner::from(&seeds),
        &InstantPayoutEvent {
            receipt_amount: params.receipt_amount,
            payout,
            fee,
            slot: Clock::get()?.slot,
        },
    )?;

    // Return the fee via set_return_data (AFTER emit_event)
    let return_data = PayoutReturnData { fee };
    set_return_data(bytemuck::bytes_of(&return_data));

    Ok(())
}
