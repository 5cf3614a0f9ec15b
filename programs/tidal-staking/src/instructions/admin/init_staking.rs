//! Initialize the staking configuration and vault.

use crate::{
    STAKING_VAULT_SEED, StakingConfig, StakingError, find_staking_config_pda,
    find_staking_vault_pda,
};
use bytemuck::{Pod, Zeroable};
use panchor::prelude::*;
use pinocchio::{
    ProgramResult, account_info::AccountInfo, instruction::Seed, pubkey::Pubkey,
    sysvars::{Sysvar, clock::Clock},
};
use pinocchio_log::log;
use pinocchio_token::{instructions::InitializeAccount3, state::Mint};
use tidal_pool_interface::{find_reserve_config_address, ledger};

/// SPL Token account size
const TOKEN_ACCOUNT_SIZE: usize = 165;

/// Instruction data for InitStaking.
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable, InstructionArgs, IdlType)]
pub struct InitStakingData {
    /// Epoch length in slots (must be non-zero)
    pub epoch_length_slots: u64,
    /// Warmup period in epochs (0 = stake credits the wallet directly)
    pub warmup_period: u64,
    /// Cooldown period in epochs
    pub cooldown_period: u64,
    /// Venue request window in slots
    pub request_window_slots: u64,
}

/// Accounts for the InitStaking instruction.
#[derive(Accounts)]
pub struct InitStakingAccounts<'info> {
    /// Base asset mint
    pub base_mint: &'info AccountInfo,

    /// Staking config PDA ["staking_config", base_mint] to create
    #[account(init, payer = authority, pda = StakingConfig, pda::base_mint = base_mint.key())]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Staking vault PDA ["staking_vault", staking_config] to create
    /// Note: Manually created as token account (owned by token program, not
    /// this program)
    #[account(mut)]
    pub staking_vault: &'info AccountInfo,

    /// Venue program the position lives at
    pub venue_program: &'info AccountInfo,

    /// Venue cycle/position state account (owned by the venue program)
    pub venue_state: &'info AccountInfo,

    /// Venue vault token account for deposits and claims
    pub venue_vault: &'info AccountInfo,

    /// Authority for this staking instance (pays for account creation)
    #[account(mut)]
    pub authority: Signer<'info>,

    /// SPL Token program (required for vault initialization)
    #[account(address = pinocchio_token::ID)]
    pub token_program: &'info AccountInfo,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Initialize a new staking instance.
///
/// Creates the StakingConfig PDA and the vault token account, assigns the
/// whole fragment treasury and freezes the index baseline.
pub fn process_init_staking(
    ctx: Context<InitStakingAccounts>,
    data: InitStakingData,
) -> ProgramResult {
    let InitStakingAccounts {
        base_mint,
        staking_config,
        staking_vault,
        venue_program,
        venue_state,
        venue_vault,
        authority,
        token_program,
        system_program,
    } = ctx.accounts;

    if *system_program.key() != pinocchio_contrib::constants::SYSTEM_PROGRAM_ID {
        log!("init_staking: invalid system program");
        return Err(StakingError::InvalidSystemProgram.into());
    }

    // Validate mint is owned by the token program
    if base_mint.owner() != token_program.key() {
        log!("init_staking: mint not owned by token program");
        return Err(StakingError::InvalidMint.into());
    }
    let decimals = Mint::from_account_info(base_mint)
        .map_err(|_| StakingError::InvalidMint)?
        .decimals();

    if data.epoch_length_slots == 0 {
        log!("init_staking: epoch length must be non-zero");
        return Err(StakingError::InvalidEpochLength.into());
    }

    // The venue must be an executable program and its state account must
    // actually belong to it
    if !venue_program.executable() {
        log!("init_staking: venue program is not executable");
        return Err(StakingError::InvalidVenueProgram.into());
    }
    if venue_state.owner() != venue_program.key() {
        log!("init_staking: venue state not owned by venue program");
        return Err(StakingError::InvalidVenueState.into());
    }

    // Get PDA bumps for account creation
    // Note: config PDA is created by panchor via init constraint
    let (expected_config_pda, config_bump) = find_staking_config_pda(base_mint.key());
    let (expected_vault_pda, vault_bump) = find_staking_vault_pda(&expected_config_pda);

    if *staking_vault.key() != expected_vault_pda {
        log!("init_staking: invalid vault PDA");
        return Err(StakingError::InvalidVaultPda.into());
    }

    // Create the vault token account PDA (owned by the token program)
    let vault_bump_bytes = [vault_bump];
    let vault_seeds = [
        Seed::from(STAKING_VAULT_SEED),
        Seed::from(expected_config_pda.as_ref()),
        Seed::from(&vault_bump_bytes),
    ];

    staking_vault.create_pda_account_with_space(
        authority,
        &vault_seeds,
        system_program.account_info(),
        TOKEN_ACCOUNT_SIZE,
        token_program.key(),
    )?;

    InitializeAccount3 {
        account: staking_vault,
        mint: base_mint,
        owner: &expected_config_pda,
    }
    .invoke()?;

    // The liquidity reserve for this mint lives at a deterministic address
    let (reserve_config, _) = find_reserve_config_address(base_mint.key());

    let current_slot = Clock::get()?.slot;
    let initial_supply = ledger::INITIAL_FRAGMENT_SUPPLY;
    let index_gons = ledger::gons_for_balance(ledger::INDEX_BASE, initial_supply)
        .ok_or(StakingError::ArithmeticOverflow)?;

    // Initialize config data
    // Note: Account and discriminator already created by panchor's init
    // constraint
    staking_config.inspect_mut(|config| {
        config.total_supply = initial_supply;
        config.epoch_number = 1;
        config.index_gons = index_gons;
        config.circulating_gons = 0;
        config.warmup_escrow_gons = 0;
        config.cooldown_escrow_gons = 0;
        config.authority = *authority.key();
        config.pending_authority = Pubkey::default();
        config.base_mint = *base_mint.key();
        config.staking_vault = expected_vault_pda;
        config.venue_program = *venue_program.key();
        config.venue_state = *venue_state.key();
        config.venue_vault = *venue_vault.key();
        config.reserve_config = reserve_config;
        config.epoch_length_slots = data.epoch_length_slots;
        config.epoch_end_slot = current_slot + data.epoch_length_slots;
        config.distribute = 0;
        config.locked_distribute = 0;
        config.last_venue_cycle = 0;
        config.requested_withdrawal_amount = 0;
        config.requested_min_cycle = 0;
        config.claimable_reserve = 0;
        config.request_window_slots = data.request_window_slots;
        config.warmup_period = data.warmup_period;
        config.cooldown_period = data.cooldown_period;
        config.venue_balance = 0;
        config.total_staked = 0;
        config.total_unstaked = 0;
        config.total_instant_unstaked = 0;
        config.total_rewards_distributed = 0;
        config.stake_count = 0;
        config.unstake_count = 0;
        config.rebase_count = 0;
        config.staking_paused = 0;
        config.unstaking_paused = 0;
        config.instant_unstake_paused = 0;
        config.decimals = decimals;
        config.bump = config_bump;
        config._padding = [0u8; 19];
    })?;

    log!("init_staking: staking instance initialized");

    Ok(())
}
