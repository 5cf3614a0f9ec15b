//! Initialize the reserve configuration and vault.

use crate::{
    RESERVE_VAULT_SEED, ReserveConfig, ReserveError, find_reserve_config_pda,
    find_reserve_vault_pda,
};
use bytemuck::{Pod, Zeroable};
use panchor::prelude::*;
use pinocchio::{
    ProgramResult, account_info::AccountInfo, instruction::Seed, pubkey::Pubkey,
};
use pinocchio_log::log;
use pinocchio_token::instructions::InitializeAccount3;
use tidal_pool_interface::{find_member_address, find_staking_config_address};

/// SPL Token account size
const TOKEN_ACCOUNT_SIZE: usize = 165;

/// Instruction data for InitReserve.
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable, InstructionArgs, IdlType)]
pub struct InitReserveData {
    /// Instant unstake fee in basis points
    pub fee_bps: u16,
    /// Padding for 8-byte alignment
    pub _padding: [u8; 6],
}

/// Accounts for the InitReserve instruction.
#[derive(Accounts)]
pub struct InitReserveAccounts<'info> {
    /// Base asset mint
    pub base_mint: &'info AccountInfo,

    /// Reserve config PDA ["reserve_config", base_mint] to create
    #[account(init, payer = authority, pda = ReserveConfig, pda::base_mint = base_mint.key())]
    pub reserve_config: AccountLoader<'info, ReserveConfig>,

    /// Reserve vault PDA ["reserve_vault", reserve_config] to create
    /// Note: Manually created as token account (owned by token program, not
    /// this program)
    #[account(mut)]
    pub vault: &'info AccountInfo,

    /// Authority for this reserve (pays for account creation)
    #[account(mut)]
    pub authority: Signer<'info>,

    /// SPL Token program (required for vault initialization)
    #[account(address = pinocchio_token::ID)]
    pub token_program: &'info AccountInfo,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Initialize a new liquidity reserve.
///
/// Creates the ReserveConfig PDA and the vault token account, and wires in
/// the deterministic addresses of the staking instance it serves.
pub fn process_init_reserve(
    ctx: Context<InitReserveAccounts>,
    data: InitReserveData,
) -> ProgramResult {
    let InitReserveAccounts {
        base_mint,
        reserve_config,
        vault,
        authority,
        token_program,
        system_program,
    } = ctx.accounts;

    if *system_program.key() != pinocchio_contrib::constants::SYSTEM_PROGRAM_ID {
        log!("init_reserve: invalid system program");
        return Err(ReserveError::InvalidSystemProgram.into());
    }

    // Validate mint is owned by the token program
    if base_mint.owner() != token_program.key() {
        log!("init_reserve: mint not owned by token program");
        return Err(ReserveError::InvalidMint.into());
    }

    ReserveConfig::validate_fee(data.fee_bps)?;

    // Get PDA bumps for account creation
    // Note: config PDA is created by panchor via init constraint
    let (expected_config_pda, config_bump) = find_reserve_config_pda(base_mint.key());
    let (expected_vault_pda, vault_bump) = find_reserve_vault_pda(&expected_config_pda);

    if *vault.key() != expected_vault_pda {
        log!("init_reserve: invalid vault PDA");
        return Err(ReserveError::InvalidVaultPda.into());
    }

    // Create the vault token account PDA (owned by the token program)
    let vault_bump_bytes = [vault_bump];
    let vault_seeds = [
        Seed::from(RESERVE_VAULT_SEED),
        Seed::from(expected_config_pda.as_ref()),
        Seed::from(&vault_bump_bytes),
    ];

    vault.create_pda_account_with_space(
        authority,
        &vault_seeds,
        system_program.account_info(),
        TOKEN_ACCOUNT_SIZE,
        token_program.key(),
    )?;

    InitializeAccount3 {
        account: vault,
        mint: base_mint,
        owner: &expected_config_pda,
    }
    .invoke()?;

    // The staking instance and the reserve's member account both live at
    // deterministic addresses derived from the same base mint
    let (staking_config, _) = find_staking_config_address(base_mint.key());
    let (staking_member, _) = find_member_address(&staking_config, &expected_config_pda);

    reserve_config.inspect_mut(|config| {
        config.authority = *authority.key();
        config.pending_authority = Pubkey::default();
        config.base_mint = *base_mint.key();
        config.vault = expected_vault_pda;
        config.staking_config = staking_config;
        config.staking_member = staking_member;
        config.total_shares = 0;
        config.total_liquidity_added = 0;
        config.total_liquidity_removed = 0;
        config.total_fees_retained = 0;
        config.total_receipt_absorbed = 0;
        config.instant_unstake_count = 0;
        config.fee_bps = data.fee_bps;
        config.is_active = 1;
        config.bump = config_bump;
        config._padding = [0u8; 4];
    })?;

    log!("init_reserve: reserve initialized");

    Ok(())
}
