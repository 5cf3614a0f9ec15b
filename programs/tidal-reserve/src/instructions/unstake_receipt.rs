//! UnstakeReceipt instruction handler.
//!
//! Permissionless replenishment keeper. Instant payouts leave the reserve
//! holding receipt instead of base asset; this instruction pushes the whole
//! absorbed wallet balance into the staking cooldown pipeline, from where
//! `claim_receipt_withdrawal` settles it back into the vault once the venue
//! releases the batch.

use crate::{ReserveConfig, ReserveError, gen_reserve_config_seeds};
use panchor::prelude::*;
use pinocchio::{
    ProgramResult,
    account_info::AccountInfo,
    cpi::invoke_signed,
    instruction::{AccountMeta, Instruction, Signer as PinocchioSigner},
};
use pinocchio_log::log;
use tidal_pool_interface::{
    STAKING_PROGRAM_ID, build_unstake_instruction_data, ledger, read_member_gon_balances,
    read_staking_total_supply,
};

use super::valuation::validate_staking_accounts;

/// Accounts for the UnstakeReceipt instruction.
#[derive(Accounts)]
pub struct UnstakeReceiptAccounts<'info> {
    /// Reserve configuration account (PDA signer for the staking CPI)
    #[account(owner = crate::ID)]
    pub reserve_config: AccountLoader<'info, ReserveConfig>,

    /// Staking config (writable inside the CPI)
    #[account(mut)]
    pub staking_config: &'info AccountInfo,

    /// The reserve's member account in the staking program
    #[account(mut)]
    pub staking_member: &'info AccountInfo,

    /// Reserve vault token account (payout target for an auto-settled
    /// mature cooldown inside the CPI)
    #[account(mut, pda = ReserveVault, pda::reserve_config = reserve_config.key())]
    pub vault: &'info AccountInfo,

    /// Staking vault token account (required by the staking unstake path)
    #[account(mut)]
    pub staking_vault: &'info AccountInfo,

    /// SPL Token program
    #[account(address = pinocchio_token::ID)]
    pub token_program: &'info AccountInfo,

    /// Staking program to invoke
    #[account(address = STAKING_PROGRAM_ID)]
    pub staking_program: &'info AccountInfo,
}

/// Process an unstake-receipt instruction.
///
/// Moves the reserve's whole absorbed wallet balance into the staking
/// cooldown. Nothing absorbed is a silent no-op.
pub fn process_unstake_receipt(ctx: Context<UnstakeReceiptAccounts>) -> ProgramResult {
    let UnstakeReceiptAccounts {
        reserve_config,
        staking_config,
        staking_member,
        vault,
        staking_vault,
        token_program,
        staking_program,
    } = ctx.accounts;

    let (base_mint, bump) = reserve_config.try_map(|config| {
        validate_staking_accounts(config, staking_config, staking_member)?;
        Ok((config.base_mint, config.bump))
    })?;

    // The reserve's freely unstakeable balance is its member wallet
    let total_supply = read_staking_total_supply(&staking_config.try_borrow_data()?)?;
    let wallet_gons = read_member_gon_balances(&staking_member.try_borrow_data()?)?.wallet_gons;
    let amount = ledger::balance_for_gons(wallet_gons, total_supply)
        .ok_or(ReserveError::ArithmeticOverflow)?;

    if amount == 0 {
        log!("unstake_receipt: nothing absorbed to unstake");
        return Ok(());
    }

    // Account order must match the staking program's UnstakeAccounts
    let data = build_unstake_instruction_data(amount, false);
    let instruction = Instruction {
        program_id: staking_program.key(),
        accounts: &[
            AccountMeta::writable(staking_config.key()),
            AccountMeta::readonly_signer(reserve_config.key()),
            AccountMeta::writable(staking_member.key()),
            AccountMeta::writable(vault.key()),
            AccountMeta::writable(staking_vault.key()),
            AccountMeta::readonly(token_program.key()),
            AccountMeta::readonly(staking_program.key()),
        ],
        data: &data,
    };

    let bump_bytes = [bump];
    let seeds = gen_reserve_config_seeds(&base_mint, &bump_bytes);
    invoke_signed(
        &instruction,
        &[
            *staking_config,
            reserve_config.account_info(),
            *staking_member,
            *vault,
            *staking_vault,
            *token_program,
            *staking_program,
        ],
        &[PinocchioSigner::from(&seeds)],
    )?;

    log!("unstake_receipt: {} moved into staking cooldown", amount);

    Ok(())
}
