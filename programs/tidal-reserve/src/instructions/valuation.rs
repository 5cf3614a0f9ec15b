//! Cross-program valuation of the reserve's absorbed receipt.
//!
//! The reserve's net value is its liquid vault balance plus whatever its
//! member account in the staking program is worth. Both staking accounts are
//! read zero-copy through the offset readers in `tidal-pool-interface`; the
//! staking program carries layout tests pinning those offsets.

use pinocchio::{ProgramResult, account_info::AccountInfo, program_error::ProgramError};
use pinocchio_log::log;
use tidal_pool_interface::{
    STAKING_PROGRAM_ID, read_member_gon_balances, read_staking_total_supply,
};

use crate::{ReserveConfig, ReserveError};

/// Validate that the passed staking accounts are the ones this reserve was
/// wired to and are owned by the staking program.
pub fn validate_staking_accounts(
    config: &ReserveConfig,
    staking_config: &AccountInfo,
    staking_member: &AccountInfo,
) -> ProgramResult {
    if *staking_config.key() != config.staking_config
        || *staking_member.key() != config.staking_member
    {
        log!("reserve: staking accounts do not match config");
        return Err(ReserveError::InvalidStakingAccounts.into());
    }
    if staking_config.owner() != &STAKING_PROGRAM_ID
        || staking_member.owner() != &STAKING_PROGRAM_ID
    {
        log!("reserve: staking accounts not owned by staking program");
        return Err(ReserveError::InvalidStakingAccounts.into());
    }
    Ok(())
}

/// Value of the reserve's absorbed receipt in base units.
///
/// Reads the member's whole gon claim (wallet plus both escrows - receipt
/// sitting in the staking cooldown still belongs to the reserve) and prices
/// it at the staking ledger's current supply.
pub fn absorbed_receipt_value(
    staking_config: &AccountInfo,
    staking_member: &AccountInfo,
) -> Result<u64, ProgramError> {
    let total_supply = read_staking_total_supply(&staking_config.try_borrow_data()?)?;
    let balances = read_member_gon_balances(&staking_member.try_borrow_data()?)?;
    balances
        .receipt_value(total_supply)
        .ok_or_else(|| ReserveError::ArithmeticOverflow.into())
}
