//! Staking program errors.

use pinocchio::program_error::ProgramError;

/// Staking error codes.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StakingError {
    /// Staking is paused
    StakingPaused = 0,
    /// Unstaking is paused
    UnstakingPaused = 1,
    /// Instant unstaking is paused
    InstantUnstakePaused = 2,
    /// Invalid amount (zero or out of range)
    InvalidAmount = 3,
    /// Amount exceeds wallet plus unclaimed warmup balance
    InsufficientBalance = 4,
    /// Treasury cannot cover the new circulating balance
    TreasuryExhausted = 5,
    /// Arithmetic overflow
    ArithmeticOverflow = 6,
    /// Escrow pool does not hold the released gons
    EscrowUnderflow = 7,
    /// Unauthorized - caller is not the authority
    Unauthorized = 8,
    /// Withdrawals for this account are locked
    WithdrawalsLocked = 9,
    /// Invalid instruction data
    InvalidInstructionData = 10,
    /// Invalid mint account
    InvalidMint = 11,
    /// Invalid system program
    InvalidSystemProgram = 12,
    /// Invalid token program
    InvalidTokenProgram = 13,
    /// Invalid staking config PDA address
    InvalidConfigPda = 14,
    /// Invalid vault PDA address
    InvalidVaultPda = 15,
    /// Invalid member account for this config or owner
    InvalidMember = 16,
    /// Venue state account does not match the configured venue
    InvalidVenueState = 17,
    /// Venue program account does not match the configured venue
    InvalidVenueProgram = 18,
    /// Reserve accounts do not match the configured liquidity reserve
    InvalidReserve = 19,
    /// Epoch length must be non-zero
    InvalidEpochLength = 20,
    /// Reserve payout CPI returned malformed data
    InvalidPayoutReturnData = 21,
}

impl From<StakingError> for ProgramError {
    fn from(e: StakingError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
