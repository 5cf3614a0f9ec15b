//! Liquidity reserve errors.

use pinocchio::program_error::ProgramError;

/// Reserve error codes.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReserveError {
    /// Reserve is paused
    ReservePaused = 0,
    /// Invalid amount (zero or out of range)
    InvalidAmount = 1,
    /// Caller holds fewer shares than requested
    NotEnoughShares = 2,
    /// Payout exceeds the liquid base-asset balance of the vault
    NotEnoughFunds = 3,
    /// Fee rate outside the allowed range
    FeeOutOfRange = 4,
    /// Arithmetic overflow
    ArithmeticOverflow = 5,
    /// Unauthorized - caller is not the authority
    Unauthorized = 6,
    /// Payout caller is not the configured staking program PDA
    InvalidStakingCaller = 7,
    /// Invalid instruction data
    InvalidInstructionData = 8,
    /// Invalid mint account
    InvalidMint = 9,
    /// Invalid system program
    InvalidSystemProgram = 10,
    /// Invalid token program
    InvalidTokenProgram = 11,
    /// Invalid reserve config PDA address
    InvalidReserveConfigPda = 12,
    /// Invalid vault PDA address
    InvalidVaultPda = 13,
    /// Staking accounts do not match the configured staking instance
    InvalidStakingAccounts = 14,
    /// LP position does not belong to this reserve
    InvalidLpPosition = 15,
    /// First deposit below the minimum initial liquidity
    BelowMinimumLiquidity = 16,
}

impl From<ReserveError> for ProgramError {
    fn from(e: ReserveError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
