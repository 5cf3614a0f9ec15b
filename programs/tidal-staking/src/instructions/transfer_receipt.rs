//! TransferReceipt instruction handler.
//!
//! Moves receipt balance between member wallets. The public amount is
//! converted to gons once and the gons move, so repeated transfers never
//! accumulate rounding drift.

use crate::{MemberAccount, StakingConfig, StakingError};
use panchor::prelude::*;
use pinocchio::{ProgramResult, account_info::AccountInfo};
use pinocchio_log::log;

/// Instruction data for TransferReceipt.
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable, InstructionArgs, IdlType)]
pub struct TransferReceiptData {
    /// Receipt amount to transfer
    pub amount: u64,
}

/// Accounts for the TransferReceipt instruction.
#[derive(Accounts)]
pub struct TransferReceiptAccounts<'info> {
    /// Staking config (read-only; provides the conversion rate)
    #[account(owner = crate::ID)]
    pub staking_config: AccountLoader<'info, StakingConfig>,

    /// Owner of the source member account
    pub staker: Signer<'info>,

    /// Source member account
    #[account(mut, pda = Member, pda::staking_config = staking_config.key(), pda::owner = staker.key())]
    pub from_member: AccountLoader<'info, MemberAccount>,

    /// Destination member account (any member of the same config)
    #[account(mut, owner = crate::ID)]
    pub to_member: &'info AccountInfo,
}

/// Process a receipt transfer between member wallets.
pub fn process_transfer_receipt(
    ctx: Context<TransferReceiptAccounts>,
    data: TransferReceiptData,
) -> ProgramResult {
    let TransferReceiptAccounts {
        staking_config,
        staker: _,
        from_member,
        to_member,
    } = ctx.accounts;

    if data.amount == 0 {
        return Err(StakingError::InvalidAmount.into());
    }

    let config_key = *staking_config.key();
    let gons = staking_config.try_map(|config| Ok(config.gons_for_balance(data.amount)?))?;

    // A self-transfer only needs the balance check
    if to_member.key() == from_member.key() {
        return from_member.try_inspect(|m| {
            if gons > m.wallet_gons {
                return Err(StakingError::InsufficientBalance.into());
            }
            Ok(())
        });
    }

    from_member.try_inspect_mut(|m| {
        m.wallet_gons = m
            .wallet_gons
            .checked_sub(gons)
            .ok_or(StakingError::InsufficientBalance)?;
        Ok(())
    })?;

    to_member.load::<MemberAccount>()?.try_inspect_mut(|m| {
        if m.staking_config != config_key {
            return Err(StakingError::InvalidMember.into());
        }
        m.wallet_gons = m
            .wallet_gons
            .checked_add(gons)
            .ok_or(StakingError::ArithmeticOverflow)?;
        Ok(())
    })?;

    log!("transfer_receipt: {} moved", data.amount);

    Ok(())
}
