//! Wire interface of the external cycle-batched yield venue.
//!
//! The venue is an uncontrolled collaborator: it advances a monotonically
//! increasing cycle counter on its own schedule, accepts at most one
//! outstanding withdrawal request per caller per cycle (re-submitting
//! overwrites), and releases requested funds only after the cycle in which
//! the request was accepted has completed.
//!
//! This module pins down the two touchpoints the staking program has with it:
//! the zero-copy read of the venue's cycle state account, and the raw CPI
//! instructions (1-byte discriminator + little-endian params).

use pinocchio::program_error::ProgramError;

// ============================================================================
// Cycle State Account Layout
// ============================================================================

/// Offset of `current_cycle` in the venue cycle state account.
pub const VENUE_CURRENT_CYCLE_OFFSET: usize = 8;
/// Offset of `cycle_start_slot` in the venue cycle state account.
pub const VENUE_CYCLE_START_OFFSET: usize = 16;
/// Offset of `cycle_duration_slots` in the venue cycle state account.
pub const VENUE_CYCLE_DURATION_OFFSET: usize = 24;
/// Minimum length of the venue cycle state account.
pub const VENUE_STATE_MIN_LEN: usize = 32;

/// Snapshot of the venue's cycle clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VenueCycleView {
    /// Monotonically increasing cycle index
    pub current_cycle: u64,
    /// Slot at which the current cycle started
    pub cycle_start_slot: u64,
    /// Length of a cycle in slots
    pub cycle_duration_slots: u64,
}

impl VenueCycleView {
    /// Slot at which the venue is expected to roll the current cycle over.
    #[inline]
    pub fn next_rollover_slot(&self) -> u64 {
        self.cycle_start_slot.saturating_add(self.cycle_duration_slots)
    }

    /// Whether `current_slot` falls inside the request window: the last
    /// `window_slots` slots of the current cycle, and anything after the
    /// expected rollover slot while the venue operator is late.
    #[inline]
    pub fn in_request_window(&self, current_slot: u64, window_slots: u64) -> bool {
        current_slot.saturating_add(window_slots) >= self.next_rollover_slot()
    }
}

/// Read the venue cycle state from raw account data.
///
/// # Layout Dependency
/// This function reads data at offsets 8-32 which corresponds to:
/// - [8..16]:  current_cycle (u64)
/// - [16..24]: cycle_start_slot (u64)
/// - [24..32]: cycle_duration_slots (u64)
///
/// The first 8 bytes are the venue's own account discriminator and are not
/// interpreted here. If the venue program's layout changes, this function
/// must be updated.
pub fn read_venue_cycle(data: &[u8]) -> Result<VenueCycleView, ProgramError> {
    if data.len() < VENUE_STATE_MIN_LEN {
        return Err(ProgramError::InvalidAccountData);
    }

    let current_cycle = u64::from_le_bytes(
        data[VENUE_CURRENT_CYCLE_OFFSET..VENUE_CYCLE_START_OFFSET]
            .try_into()
            .map_err(|_| ProgramError::InvalidAccountData)?,
    );
    let cycle_start_slot = u64::from_le_bytes(
        data[VENUE_CYCLE_START_OFFSET..VENUE_CYCLE_DURATION_OFFSET]
            .try_into()
            .map_err(|_| ProgramError::InvalidAccountData)?,
    );
    let cycle_duration_slots = u64::from_le_bytes(
        data[VENUE_CYCLE_DURATION_OFFSET..VENUE_STATE_MIN_LEN]
            .try_into()
            .map_err(|_| ProgramError::InvalidAccountData)?,
    );

    Ok(VenueCycleView {
        current_cycle,
        cycle_start_slot,
        cycle_duration_slots,
    })
}

// ============================================================================
// CPI Instructions
// ============================================================================

/// Venue instruction discriminators.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VenueInstruction {
    /// Deposit base asset into the pooled position (1:1 receipt)
    Deposit = 0,
    /// Register or overwrite the caller's withdrawal request for this cycle
    RequestWithdrawal = 1,
    /// Release a matured request back to the caller's token account
    Withdraw = 2,
}

impl VenueInstruction {
    /// Convert to u8 discriminator
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Build instruction data for a venue CPI.
///
/// Layout: [discriminator: u8, amount: u64 LE]
pub fn build_venue_instruction_data(instruction: VenueInstruction, amount: u64) -> [u8; 9] {
    let mut data = [0u8; 9];
    data[0] = instruction.to_u8();
    data[1..9].copy_from_slice(&amount.to_le_bytes());
    data
}

/// Account indices for the venue deposit CPI.
///
/// Account layout (5 accounts):
/// 0. venue_state (mut) - Venue cycle/position state
/// 1. venue_vault (mut) - Venue's base-asset vault
/// 2. source_token (mut) - Depositor's token account (the staking vault)
/// 3. authority (signer) - Owner of the source token account
/// 4. token_program - SPL Token program
pub mod venue_deposit_accounts {
    /// Venue state account (writable)
    pub const VENUE_STATE: usize = 0;
    /// Venue vault token account (writable)
    pub const VENUE_VAULT: usize = 1;
    /// Source token account (writable)
    pub const SOURCE_TOKEN: usize = 2;
    /// Source authority (signer)
    pub const AUTHORITY: usize = 3;
    /// Token program
    pub const TOKEN_PROGRAM: usize = 4;
    /// Total number of accounts
    pub const COUNT: usize = 5;
}

/// Account indices for the venue withdrawal request CPI.
///
/// Account layout (2 accounts):
/// 0. venue_state (mut) - Venue cycle/position state
/// 1. authority (signer) - Position owner registering the request
pub mod venue_request_accounts {
    /// Venue state account (writable)
    pub const VENUE_STATE: usize = 0;
    /// Position owner (signer)
    pub const AUTHORITY: usize = 1;
    /// Total number of accounts
    pub const COUNT: usize = 2;
}

/// Account indices for the venue withdraw (claim) CPI.
///
/// Account layout (5 accounts):
/// 0. venue_state (mut) - Venue cycle/position state
/// 1. venue_vault (mut) - Venue's base-asset vault
/// 2. destination_token (mut) - Recipient token account (the staking vault)
/// 3. authority (signer) - Position owner claiming the matured request
/// 4. token_program - SPL Token program
pub mod venue_withdraw_accounts {
    /// Venue state account (writable)
    pub const VENUE_STATE: usize = 0;
    /// Venue vault token account (writable)
    pub const VENUE_VAULT: usize = 1;
    /// Destination token account (writable)
    pub const DESTINATION_TOKEN: usize = 2;
    /// Position owner (signer)
    pub const AUTHORITY: usize = 3;
    /// Token program
    pub const TOKEN_PROGRAM: usize = 4;
    /// Total number of accounts
    pub const COUNT: usize = 5;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn venue_account(cycle: u64, start: u64, duration: u64) -> [u8; 32] {
        let mut data = [0u8; 32];
        data[8..16].copy_from_slice(&cycle.to_le_bytes());
        data[16..24].copy_from_slice(&start.to_le_bytes());
        data[24..32].copy_from_slice(&duration.to_le_bytes());
        data
    }

    #[test]
    fn test_read_venue_cycle() {
        let data = venue_account(7, 1_000, 250);
        let view = read_venue_cycle(&data).unwrap();
        assert_eq!(view.current_cycle, 7);
        assert_eq!(view.cycle_start_slot, 1_000);
        assert_eq!(view.cycle_duration_slots, 250);
        assert_eq!(view.next_rollover_slot(), 1_250);
    }

    #[test]
    fn test_read_venue_cycle_too_short() {
        assert!(read_venue_cycle(&[0u8; 31]).is_err());
    }

    #[test]
    fn test_request_window() {
        let view = read_venue_cycle(&venue_account(3, 1_000, 200)).unwrap();

        // Mid-cycle: too early to batch
        assert!(!view.in_request_window(1_100, 50));
        // Inside the tail window
        assert!(view.in_request_window(1_150, 50));
        assert!(view.in_request_window(1_199, 50));
        // Past the expected rollover (operator is late): still requestable
        assert!(view.in_request_window(1_300, 50));
    }

    #[test]
    fn test_venue_instruction_data_layout() {
        let data = build_venue_instruction_data(VenueInstruction::RequestWithdrawal, 5_000);
        assert_eq!(data[0], 1);
        assert_eq!(u64::from_le_bytes(data[1..9].try_into().unwrap()), 5_000);
    }
}
