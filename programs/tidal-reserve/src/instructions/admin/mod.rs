//! Admin instruction handlers: initialization, fee and pause configuration,
//! and two-step authority transfer.

mod accept_authority;
mod init_reserve;
mod set_fee;
mod set_reserve_active;
mod transfer_authority;

pub use accept_authority::{AcceptAuthorityAccounts, process_accept_authority};
pub use init_reserve::{InitReserveAccounts, InitReserveData, process_init_reserve};
pub use set_fee::{SetFeeAccounts, SetFeeData, process_set_fee};
pub use set_reserve_active::{
    SetReserveActiveAccounts, SetReserveActiveData, process_set_reserve_active,
};
pub use transfer_authority::{TransferAuthorityAccounts, process_transfer_authority};
