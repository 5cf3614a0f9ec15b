//! Admin instruction handlers: initialization, configuration, the emergency
//! venue exit, and two-step authority transfer.

mod accept_authority;
mod init_staking;
mod set_pauses;
mod set_periods;
mod set_schedule;
mod transfer_authority;
mod unstake_all_from_venue;

pub use accept_authority::{AcceptAuthorityAccounts, process_accept_authority};
pub use init_staking::{InitStakingAccounts, InitStakingData, process_init_staking};
pub use set_pauses::{SetPausesAccounts, SetPausesData, process_set_pauses};
pub use set_periods::{
    SetCooldownPeriodAccounts, SetCooldownPeriodData, SetWarmupPeriodAccounts,
    SetWarmupPeriodData, process_set_cooldown_period, process_set_warmup_period,
};
pub use set_schedule::{
    SetEpochLengthAccounts, SetEpochLengthData, SetRequestWindowAccounts, SetRequestWindowData,
    process_set_epoch_length, process_set_request_window,
};
pub use transfer_authority::{TransferAuthorityAccounts, process_transfer_authority};
pub use unstake_all_from_venue::{UnstakeAllFromVenueAccounts, process_unstake_all_from_venue};
