//! ClaimReceiptWithdrawal instruction handler.
//!
//! Second half of the replenishment loop: once the venue has released the
//! batch containing the reserve's cooldown, this settles it with the
//! reserve vault as beneficiary. The staking side treats anything not yet
//! eligible as a silent no-op, so this keeper is safe to call every cycle.

use crate::{ReserveConfig, gen_reserve_config_seeds};
use panchor::prelude::*;
use pinocchio::{
    ProgramResult,
    account_info::AccountInfo,
    cpi::invoke_signed,
    instruction::{AccountMeta, Instruction, Signer as PinocchioSigner},
};
use pinocchio_log::log;
use tidal_pool_interface::{STAKING_PROGRAM_ID, build_claim_withdraw_instruction_data};

use super::valuation::validate_staking_accounts;

/// Accounts for the ClaimReceiptWithdrawal instruction.
#[derive(Accounts)]
pub struct ClaimReceiptWithdrawalAccounts<'info> {
    /// Reserve configuration account (PDA signer for the staking CPI)
    #[account(owner = crate::ID)]
    pub reserve_config: AccountLoader<'info, ReserveConfig>,

    /// Staking config (writable inside the CPI)
    #[account(mut)]
    pub staking_config: &'info AccountInfo,

    /// The reserve's member account in the staking program
    #[account(mut)]
    pub staking_member: &'info AccountInfo,

    /// Reserve vault token account (beneficiary of the settlement)
    #[account(mut, pda = ReserveVault, pda::reserve_config = reserve_config.key())]
    pub vault: &'info AccountInfo,

    /// Staking vault token account
    #[account(mut)]
    pub staking_vault: &'info AccountInfo,

    /// Venue cycle/position state account
    #[account(mut)]
    pub venue_state: &'info AccountInfo,

    /// Venue vault token account
    #[account(mut)]
    pub venue_vault: &'info AccountInfo,

    /// Venue program
    pub venue_program: &'info AccountInfo,

    /// SPL Token program
    #[account(address = pinocchio_token::ID)]
    pub token_program: &'info AccountInfo,

    /// Staking program to invoke
    #[account(address = STAKING_PROGRAM_ID)]
    pub staking_program: &'info AccountInfo,
}

/// Process a claim-receipt-withdrawal instruction.
pub fn process_claim_receipt_withdrawal(
    ctx: Context<ClaimReceiptWithdrawalAccounts>,
) -> ProgramResult {
    let ClaimReceiptWithdrawalAccounts {
        reserve_config,
        staking_config,
        staking_member,
        vault,
        staking_vault,
        venue_state,
        venue_vault,
        venue_program,
        token_program,
        staking_program,
    } = ctx.accounts;

    let (base_mint, bump) = reserve_config.try_map(|config| {
        validate_staking_accounts(config, staking_config, staking_member)?;
        Ok((config.base_mint, config.bump))
    })?;

    // Account order must match the staking program's ClaimWithdrawAccounts
    let data = build_claim_withdraw_instruction_data();
    let instruction = Instruction {
        program_id: staking_program.key(),
        accounts: &[
            AccountMeta::writable(staking_config.key()),
            AccountMeta::readonly_signer(reserve_config.key()),
            AccountMeta::writable(staking_member.key()),
            AccountMeta::writable(vault.key()),
            AccountMeta::writable(staking_vault.key()),
            AccountMeta::writable(venue_state.key()),
            AccountMeta::writable(venue_vault.key()),
            AccountMeta::readonly(venue_program.key()),
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
            *venue_state,
            *venue_vault,
            *venue_program,
            *token_program,
            *staking_program,
        ],
        &[PinocchioSigner::from(&seeds)],
    )?;

    log!("claim_receipt_withdrawal: settlement attempted");

    Ok(())
}
