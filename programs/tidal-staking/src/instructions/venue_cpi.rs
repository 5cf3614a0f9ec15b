//! CPI helpers for the external venue program.
//!
//! The venue is an uncontrolled collaborator; these helpers only build the
//! raw instructions defined in `tidal_pool_interface::venue` and sign them
//! with the staking config PDA, which owns the venue position.
//!
//! Every call here happens with all config borrows released - the config
//! account is referenced by the CPI as the position authority.

use pinocchio::{
    ProgramResult,
    account_info::AccountInfo,
    cpi::invoke_signed,
    instruction::{AccountMeta, Instruction, Signer as PinocchioSigner},
};
use tidal_pool_interface::venue::{VenueInstruction, build_venue_instruction_data};

/// Deposit base asset from the staking vault into the venue position.
pub fn venue_deposit_cpi<'a>(
    venue_program: &'a AccountInfo,
    venue_state: &'a AccountInfo,
    venue_vault: &'a AccountInfo,
    source_token: &'a AccountInfo,
    authority: &'a AccountInfo,
    token_program: &'a AccountInfo,
    amount: u64,
    signer: PinocchioSigner,
) -> ProgramResult {
    let data = build_venue_instruction_data(VenueInstruction::Deposit, amount);
    let instruction = Instruction {
        program_id: venue_program.key(),
        accounts: &[
            AccountMeta::writable(venue_state.key()),
            AccountMeta::writable(venue_vault.key()),
            AccountMeta::writable(source_token.key()),
            AccountMeta::readonly_signer(authority.key()),
            AccountMeta::readonly(token_program.key()),
        ],
        data: &data,
    };
    invoke_signed(
        &instruction,
        &[venue_state, venue_vault, source_token, authority, token_program, venue_program],
        &[signer],
    )
}

/// Register (or overwrite) the batched withdrawal request for this cycle.
pub fn venue_request_withdrawal_cpi<'a>(
    venue_program: &'a AccountInfo,
    venue_state: &'a AccountInfo,
    authority: &'a AccountInfo,
    amount: u64,
    signer: PinocchioSigner,
) -> ProgramResult {
    let data = build_venue_instruction_data(VenueInstruction::RequestWithdrawal, amount);
    let instruction = Instruction {
        program_id: venue_program.key(),
        accounts: &[
            AccountMeta::writable(venue_state.key()),
            AccountMeta::readonly_signer(authority.key()),
        ],
        data: &data,
    };
    invoke_signed(&instruction, &[venue_state, authority, venue_program], &[signer])
}

/// Claim a matured withdrawal request back into the staking vault.
pub fn venue_withdraw_cpi<'a>(
    venue_program: &'a AccountInfo,
    venue_state: &'a AccountInfo,
    venue_vault: &'a AccountInfo,
    destination_token: &'a AccountInfo,
    authority: &'a AccountInfo,
    token_program: &'a AccountInfo,
    amount: u64,
    signer: PinocchioSigner,
) -> ProgramResult {
    let data = build_venue_instruction_data(VenueInstruction::Withdraw, amount);
    let instruction = Instruction {
        program_id: venue_program.key(),
        accounts: &[
            AccountMeta::writable(venue_state.key()),
            AccountMeta::writable(venue_vault.key()),
            AccountMeta::writable(destination_token.key()),
            AccountMeta::readonly_signer(authority.key()),
            AccountMeta::readonly(token_program.key()),
        ],
        data: &data,
    };
    invoke_signed(
        &instruction,
        &[venue_state, venue_vault, destination_token, authority, token_program, venue_program],
        &[signer],
    )
}
