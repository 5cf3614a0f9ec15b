//! Staking program state accounts.
//!
//! All value accounting is done in gons (the fixed internal unit of the
//! elastic receipt ledger, see `tidal_pool_interface::ledger`). Public
//! amounts are converted exactly once at the boundary of each operation so
//! rounding behavior stays auditable.

use panchor::prelude::*;
use pinocchio::pubkey::Pubkey;
use tidal_pool_interface::authority::HasAuthority;
use tidal_pool_interface::ledger;
use tidal_pool_interface::venue::VenueCycleView;

use crate::StakingError;

/// Account discriminators for the staking program.
///
/// Each discriminator uniquely identifies an account type. The discriminator
/// is stored as the first 8 bytes of account data.
///
/// # Ranges
/// - **0-15**: Core accounts (config singletons)
/// - **16-31**: User accounts
#[account_type]
pub enum StakingAccount {
    /// Staking configuration and ledger state (per base mint)
    StakingConfig = 0,
    // Reserved: 1-15
    /// Per-wallet receipt balance and open warmup/cooldown records
    MemberAccount = 16,
    // Reserved: 17-31
}

// ============================================================================
// StakingConfig
// ============================================================================

/// Staking configuration account.
///
/// Seeds: ["staking_config", base_mint]
///
/// Owns every piece of shared mutable state in the system: the elastic
/// receipt ledger totals, the epoch reward scheduler, the two escrow gon
/// pools, and the synchronization watermark against the external venue.
///
/// # Ledger Model
///
/// A fixed pool of [`ledger::TOTAL_GONS`] gons exists from initialization.
/// Gons held by member wallets and the two escrows are counted in
/// `circulating_gons`; the remainder is the treasury that backs future
/// stakes (a stake hands out fragments 1:1 from it). Rebases grow
/// `total_supply` so that circulating holders gain exactly the distributed
/// profit while no gon count changes anywhere.
///
/// # Foreign-Read Prefix
///
/// `total_supply` and `epoch_number` are deliberately the first fields after
/// the discriminator: the reserve program reads them zero-copy through
/// `tidal_pool_interface::read_staking_total_supply` without linking this
/// crate. Do not reorder them; the layout tests below pin the offsets.
///
/// # Reward Scheduling (one-epoch lag)
///
/// `distribute` holds the most recently committed reward; `locked_distribute`
/// holds the reward locked in by the previous rollover. A rollover applies
/// `locked_distribute` to the ledger, then promotes `distribute` into
/// `locked_distribute`. A reward committed during epoch N therefore lands at
/// the rollover that ends epoch N+1, so entering just before a scheduled
/// distribution cannot capture it.
#[account(StakingAccount::StakingConfig)]
#[repr(C)]
pub struct StakingConfig {
    // === Ledger header (foreign-read prefix, fixed offsets) ===
    /// Receipt total supply. Strictly non-decreasing; grows only via rebase.
    pub total_supply: u64,
    /// Current epoch number. Starts at 1; incremented by each rollover.
    pub epoch_number: u64,
    /// Gon equivalent of [`ledger::INDEX_BASE`] frozen at initialization.
    /// `balance_for_gons(index_gons)` reports cumulative rebase growth.
    pub index_gons: u128,

    // === Gon pools ===
    /// Gons held outside the treasury: member wallets plus both escrows.
    /// The treasury remainder is `TOTAL_GONS - circulating_gons`.
    pub circulating_gons: u128,
    /// Gons escrowed for value entering a staked position (warmup).
    pub warmup_escrow_gons: u128,
    /// Gons escrowed for value exiting a staked position (cooldown).
    pub cooldown_escrow_gons: u128,

    // === Identity ===
    /// Authority that can update config and perform admin operations
    pub authority: Pubkey,
    /// Pending authority for two-step transfer.
    /// Set by `transfer_authority`, must call `accept_authority` to complete.
    pub pending_authority: Pubkey,
    /// Base asset mint
    pub base_mint: Pubkey,
    /// Base asset vault PDA ["staking_vault", config]. Holds committed
    /// rewards and base asset claimed back from the venue.
    pub staking_vault: Pubkey,
    /// External venue program invoked for deposit/request/withdraw
    pub venue_program: Pubkey,
    /// Venue cycle state account (owned by the venue program)
    pub venue_state: Pubkey,
    /// Venue vault token account receiving deposits and paying claims
    pub venue_vault: Pubkey,
    /// Liquidity reserve config served by this staking instance
    pub reserve_config: Pubkey,

    // === Epoch scheduler ===
    /// Epoch length in slots
    pub epoch_length_slots: u64,
    /// Slot at which the current epoch ends (rollover becomes due)
    pub epoch_end_slot: u64,
    /// Most recently committed reward; overwritten by `add_rewards`
    pub distribute: u64,
    /// Reward locked by the previous rollover; applied at the next one
    pub locked_distribute: u64,

    // === Venue synchronization ===
    /// Last venue cycle for which a withdrawal request was synchronized
    pub last_venue_cycle: u64,
    /// Outstanding batched withdrawal request at the venue (0 = none)
    pub requested_withdrawal_amount: u64,
    /// Venue cycle after which the outstanding request is claimable
    pub requested_min_cycle: u64,
    /// Base asset already claimed back from the venue, earmarked for
    /// cooldown claims (never spent on anything else)
    pub claimable_reserve: u64,
    /// Length of the request window at the end of a venue cycle, in slots
    pub request_window_slots: u64,

    // === Periods ===
    /// Warmup period in epochs (0 = stake credits the wallet directly)
    pub warmup_period: u64,
    /// Cooldown period in epochs
    pub cooldown_period: u64,
    /// Base asset currently deposited at the venue (position counter)
    pub venue_balance: u64,

    // === Statistics ===
    /// Cumulative base asset staked (in base units)
    pub total_staked: u128,
    /// Cumulative receipt moved into cooldown (in receipt units at entry)
    pub total_unstaked: u128,
    /// Cumulative receipt redeemed through the reserve
    pub total_instant_unstaked: u128,
    /// Cumulative rewards applied by rebases
    pub total_rewards_distributed: u128,
    /// Number of stake operations
    pub stake_count: u64,
    /// Number of unstake operations
    pub unstake_count: u64,
    /// Number of applied rollovers
    pub rebase_count: u64,

    // === Status ===
    /// Staking paused (1 = paused). Forced on by the emergency venue exit.
    pub staking_paused: u8,
    /// Unstaking paused (1 = paused); also blocks instant unstake
    pub unstaking_paused: u8,
    /// Instant unstake paused (1 = paused)
    pub instant_unstake_paused: u8,
    /// Base asset decimals
    pub decimals: u8,
    /// PDA bump seed
    pub bump: u8,
    /// Padding for 16-byte struct alignment
    pub _padding: [u8; 19],
}

/// Outcome of stake accounting, consumed by the handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakeOutcome {
    /// Gons credited for the staked amount
    pub gons: u128,
    /// Whether the gons went through the warmup escrow (false = direct credit)
    pub escrowed: bool,
}

/// Outcome of settling a mature cooldown record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CooldownSettlement {
    /// Base asset to pay out (recomputed via `balance_for_gons`)
    pub payout: u64,
    /// Gons released from the cooldown escrow back to the treasury
    pub gons: u128,
}

/// Gon release from a wallet or warmup source for an instant unstake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstantUnstakeOutcome {
    /// Receipt amount handed to the reserve
    pub receipt_amount: u64,
    /// Gon equivalent moved to the reserve's member wallet
    pub gons: u128,
}

/// Release `gons` from an escrow pool.
///
/// The escrow component has no scheduling logic of its own; eligibility is
/// decided by the caller. Releasing more than the pool holds is a hard
/// error, never a partial release.
fn escrow_release(pool: &mut u128, gons: u128) -> Result<(), StakingError> {
    *pool = pool.checked_sub(gons).ok_or(StakingError::EscrowUnderflow)?;
    Ok(())
}

/// Deposit `gons` into an escrow pool.
fn escrow_deposit(pool: &mut u128, gons: u128) -> Result<(), StakingError> {
    *pool = pool.checked_add(gons).ok_or(StakingError::ArithmeticOverflow)?;
    Ok(())
}

impl StakingConfig {
    /// Account size
    pub const SIZE: usize = core::mem::size_of::<Self>();

    /// Calculate the PDA address for a staking config
    /// Seeds: ["staking_config", base_mint]
    ///
    /// Note: Ignores program_id parameter - uses crate::ID
    pub fn find_pda(_program_id: &Pubkey, base_mint: &Pubkey) -> (Pubkey, u8) {
        crate::find_staking_config_pda(base_mint)
    }

    /// Validate config key matches the canonical PDA for its mint.
    #[inline]
    pub fn validate_pda(config_key: &Pubkey, base_mint: &Pubkey) -> Result<(), StakingError> {
        let (expected_pda, _) = crate::find_staking_config_pda(base_mint);
        if *config_key != expected_pda {
            return Err(StakingError::InvalidConfigPda);
        }
        Ok(())
    }

    /// Check if signer matches authority, returning error if unauthorized.
    #[inline]
    pub fn require_authority(&self, signer: &Pubkey) -> Result<(), StakingError> {
        if self.authority != *signer {
            return Err(StakingError::Unauthorized);
        }
        Ok(())
    }

    /// Reject when staking is paused.
    #[inline]
    pub fn require_staking_open(&self) -> Result<(), StakingError> {
        if self.staking_paused != 0 {
            return Err(StakingError::StakingPaused);
        }
        Ok(())
    }

    /// Reject when unstaking is paused.
    #[inline]
    pub fn require_unstaking_open(&self) -> Result<(), StakingError> {
        if self.unstaking_paused != 0 {
            return Err(StakingError::UnstakingPaused);
        }
        Ok(())
    }

    /// Reject when instant unstaking is paused (the plain unstaking pause
    /// covers it too).
    #[inline]
    pub fn require_instant_unstake_open(&self) -> Result<(), StakingError> {
        self.require_unstaking_open()?;
        if self.instant_unstake_paused != 0 {
            return Err(StakingError::InstantUnstakePaused);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Ledger conversions
    // ------------------------------------------------------------------

    /// Convert a public amount to gons at the current supply.
    #[inline]
    pub fn gons_for_balance(&self, amount: u64) -> Result<u128, StakingError> {
        ledger::gons_for_balance(amount, self.total_supply)
            .ok_or(StakingError::ArithmeticOverflow)
    }

    /// Convert gons to a public amount at the current supply.
    #[inline]
    pub fn balance_for_gons(&self, gons: u128) -> Result<u64, StakingError> {
        ledger::balance_for_gons(gons, self.total_supply)
            .ok_or(StakingError::ArithmeticOverflow)
    }

    /// Receipt balance held outside the treasury.
    #[inline]
    pub fn circulating_supply(&self) -> Result<u64, StakingError> {
        self.balance_for_gons(self.circulating_gons)
    }

    /// Cumulative rebase growth since initialization, in base units of
    /// [`ledger::INDEX_BASE`].
    #[inline]
    pub fn get_index(&self) -> Result<u64, StakingError> {
        self.balance_for_gons(self.index_gons)
    }

    // ------------------------------------------------------------------
    // Epoch scheduler
    // ------------------------------------------------------------------

    /// Whether the current epoch is due for a rollover.
    #[inline]
    pub fn epoch_due(&self, current_slot: u64) -> bool {
        current_slot >= self.epoch_end_slot
    }

    /// Overwrite the committed reward for the next lock-in.
    ///
    /// The most recently committed reward is the only one in flight; a
    /// second commit before the rollover replaces the first.
    pub fn commit_rewards(&mut self, amount: u64) -> Result<(), StakingError> {
        if amount == 0 {
            return Err(StakingError::InvalidAmount);
        }
        self.distribute = amount;
        Ok(())
    }

    /// Roll the epoch over if it is due.
    ///
    /// Applies the reward locked by the *previous* rollover to the ledger,
    /// advances the epoch window, then locks in the currently committed
    /// reward for the next rollover. Calling while the epoch is still
    /// accumulating returns `Ok(None)` and changes nothing.
    ///
    /// Returns the profit applied when a rollover happened.
    pub fn rebase_if_due(&mut self, current_slot: u64) -> Result<Option<u64>, StakingError> {
        if !self.epoch_due(current_slot) {
            return Ok(None);
        }

        let profit = self.locked_distribute;
        let circulating = self.circulating_supply()?;

        // A zero profit or an empty ledger still advances the epoch; only
        // the supply change is skipped.
        let new_supply = ledger::apply_rebase(self.total_supply, circulating, profit)
            .ok_or(StakingError::ArithmeticOverflow)?;

        let applied = if new_supply != self.total_supply { profit } else { 0 };
        self.total_supply = new_supply;

        if applied > 0 {
            self.total_rewards_distributed = self
                .total_rewards_distributed
                .checked_add(applied as u128)
                .ok_or(StakingError::ArithmeticOverflow)?;
        }

        self.epoch_end_slot = self
            .epoch_end_slot
            .checked_add(self.epoch_length_slots)
            .ok_or(StakingError::ArithmeticOverflow)?;
        self.epoch_number = self
            .epoch_number
            .checked_add(1)
            .ok_or(StakingError::ArithmeticOverflow)?;
        self.rebase_count = self
            .rebase_count
            .checked_add(1)
            .ok_or(StakingError::ArithmeticOverflow)?;

        // An empty ledger preserves the locked reward for a later rollover
        // instead of consuming it in a no-op
        if circulating > 0 || self.locked_distribute == 0 {
            self.locked_distribute = self.distribute;
            self.distribute = 0;
        }

        Ok(Some(applied))
    }

    // ------------------------------------------------------------------
    // Stake / claim / unstake accounting
    // ------------------------------------------------------------------

    /// Account for a stake of `amount` base units into `member`.
    ///
    /// Converts at the current rate, draws the fragments from the treasury
    /// and either escrows them into the open warmup record (refreshing its
    /// expiry) or credits the wallet directly when the warmup period is
    /// zero.
    pub fn apply_stake(
        &mut self,
        member: &mut MemberAccount,
        amount: u64,
    ) -> Result<StakeOutcome, StakingError> {
        self.require_staking_open()?;
        if amount == 0 {
            return Err(StakingError::InvalidAmount);
        }

        let gons = self.gons_for_balance(amount)?;
        let circulating = self
            .circulating_gons
            .checked_add(gons)
            .ok_or(StakingError::ArithmeticOverflow)?;
        if circulating > ledger::TOTAL_GONS {
            return Err(StakingError::TreasuryExhausted);
        }
        self.circulating_gons = circulating;

        self.total_staked = self
            .total_staked
            .checked_add(amount as u128)
            .ok_or(StakingError::ArithmeticOverflow)?;
        self.stake_count = self
            .stake_count
            .checked_add(1)
            .ok_or(StakingError::ArithmeticOverflow)?;
        self.venue_balance = self
            .venue_balance
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;

        if self.warmup_period == 0 {
            member.wallet_gons = member
                .wallet_gons
                .checked_add(gons)
                .ok_or(StakingError::ArithmeticOverflow)?;
            return Ok(StakeOutcome { gons, escrowed: false });
        }

        escrow_deposit(&mut self.warmup_escrow_gons, gons)?;
        let expiry = self
            .epoch_number
            .checked_add(self.warmup_period)
            .ok_or(StakingError::ArithmeticOverflow)?;
        member.merge_warmup(gons, amount, expiry)?;

        Ok(StakeOutcome { gons, escrowed: true })
    }

    /// Release a mature warmup record from escrow.
    ///
    /// Returns the released gons for the handler to credit to the
    /// beneficiary's wallet, or `None` when there is nothing to claim yet
    /// (no open record, or the expiry epoch has not been reached) - a
    /// silent no-op so callers can poll.
    pub fn claim_warmup(
        &mut self,
        member: &mut MemberAccount,
    ) -> Result<Option<u128>, StakingError> {
        if !member.warmup_open() || self.epoch_number < member.warmup_expiry_epoch {
            return Ok(None);
        }

        let gons = member.warmup_gons;
        escrow_release(&mut self.warmup_escrow_gons, gons)?;
        member.clear_warmup();

        Ok(Some(gons))
    }

    /// Settle a mature cooldown record if its base asset is available.
    ///
    /// Eligibility: an open record, the cooldown expiry reached, and the
    /// earmarked `claimable_reserve` covering the recomputed payout (the
    /// venue must have released the matching batch). Anything short of that
    /// returns `Ok(None)` - retrying after the next venue rollover is the
    /// intended recovery path.
    pub fn settle_cooldown(
        &mut self,
        member: &mut MemberAccount,
    ) -> Result<Option<CooldownSettlement>, StakingError> {
        if !member.cooldown_open() || self.epoch_number < member.cooldown_expiry_epoch {
            return Ok(None);
        }

        let gons = member.cooldown_gons;
        let payout = self.balance_for_gons(gons)?;
        if payout > self.claimable_reserve {
            return Ok(None);
        }

        escrow_release(&mut self.cooldown_escrow_gons, gons)?;
        self.claimable_reserve -= payout;
        self.circulating_gons = self
            .circulating_gons
            .checked_sub(gons)
            .ok_or(StakingError::ArithmeticOverflow)?;
        member.clear_cooldown();

        Ok(Some(CooldownSettlement { payout, gons }))
    }

    /// Account for an unstake of `amount` receipt units from `member`.
    ///
    /// Draws from the unclaimed warmup record first (its expiry is kept),
    /// then from the wallet; the consumed gons move into the cooldown
    /// escrow and merge into the open cooldown record with a refreshed
    /// expiry. Rejects - without touching any balance - when `amount`
    /// exceeds wallet plus warmup.
    pub fn apply_unstake(
        &mut self,
        member: &mut MemberAccount,
        amount: u64,
    ) -> Result<u128, StakingError> {
        self.require_unstaking_open()?;
        member.require_withdrawals_unlocked()?;
        if amount == 0 {
            return Err(StakingError::InvalidAmount);
        }

        let needed_gons = self.gons_for_balance(amount)?;
        let available = member
            .wallet_gons
            .checked_add(member.warmup_gons)
            .ok_or(StakingError::ArithmeticOverflow)?;
        if needed_gons > available {
            return Err(StakingError::InsufficientBalance);
        }

        let from_warmup = core::cmp::min(member.warmup_gons, needed_gons);
        if from_warmup > 0 {
            escrow_release(&mut self.warmup_escrow_gons, from_warmup)?;
            member.consume_warmup(from_warmup)?;
        }
        let from_wallet = needed_gons - from_warmup;
        member.wallet_gons = member
            .wallet_gons
            .checked_sub(from_wallet)
            .ok_or(StakingError::InsufficientBalance)?;

        escrow_deposit(&mut self.cooldown_escrow_gons, needed_gons)?;
        let expiry = self
            .epoch_number
            .checked_add(self.cooldown_period)
            .ok_or(StakingError::ArithmeticOverflow)?;
        member.merge_cooldown(needed_gons, amount, expiry)?;

        self.total_unstaked = self
            .total_unstaked
            .checked_add(amount as u128)
            .ok_or(StakingError::ArithmeticOverflow)?;
        self.unstake_count = self
            .unstake_count
            .checked_add(1)
            .ok_or(StakingError::ArithmeticOverflow)?;

        Ok(needed_gons)
    }

    /// Detach gons for an instant unstake from the wallet or the warmup
    /// record. An `amount` of zero means the full source balance.
    ///
    /// The gons stay circulating - the handler credits them to the
    /// reserve's member wallet before invoking the payout CPI.
    pub fn apply_instant_unstake(
        &mut self,
        member: &mut MemberAccount,
        amount: u64,
        use_warmup: bool,
    ) -> Result<InstantUnstakeOutcome, StakingError> {
        self.require_instant_unstake_open()?;

        let source_gons = if use_warmup { member.warmup_gons } else { member.wallet_gons };
        let source_balance = self.balance_for_gons(source_gons)?;
        let receipt_amount = if amount == 0 { source_balance } else { amount };
        if receipt_amount == 0 {
            return Err(StakingError::InvalidAmount);
        }
        if receipt_amount > source_balance {
            return Err(StakingError::InsufficientBalance);
        }

        let gons = self.gons_for_balance(receipt_amount)?;
        if use_warmup {
            escrow_release(&mut self.warmup_escrow_gons, gons)?;
            member.consume_warmup(gons)?;
        } else {
            member.wallet_gons = member
                .wallet_gons
                .checked_sub(gons)
                .ok_or(StakingError::InsufficientBalance)?;
        }

        self.total_instant_unstaked = self
            .total_instant_unstaked
            .checked_add(receipt_amount as u128)
            .ok_or(StakingError::ArithmeticOverflow)?;

        Ok(InstantUnstakeOutcome { receipt_amount, gons })
    }

    // ------------------------------------------------------------------
    // Venue synchronization
    // ------------------------------------------------------------------

    /// Whether a batched withdrawal request may be sent now: the venue has
    /// rolled over since the last synchronized cycle *and* the current slot
    /// is inside the request window at the end of the venue cycle.
    #[inline]
    pub fn can_batch_requests(&self, venue: &VenueCycleView, current_slot: u64) -> bool {
        venue.current_cycle > self.last_venue_cycle
            && venue.in_request_window(current_slot, self.request_window_slots)
    }

    /// Amount of the outstanding venue request that has matured and can be
    /// claimed back, if any.
    #[inline]
    pub fn matured_request(&self, venue: &VenueCycleView) -> Option<u64> {
        if self.requested_withdrawal_amount > 0 && venue.current_cycle >= self.requested_min_cycle
        {
            Some(self.requested_withdrawal_amount)
        } else {
            None
        }
    }

    /// Record a successful venue claim: the base asset now sits in the
    /// staking vault, earmarked for cooldown settlements.
    pub fn record_venue_claim(&mut self, amount: u64) -> Result<(), StakingError> {
        self.claimable_reserve = self
            .claimable_reserve
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;
        self.venue_balance = self.venue_balance.saturating_sub(amount);
        self.requested_withdrawal_amount = 0;
        Ok(())
    }

    /// Cooldown value not yet covered by claimed-back base asset; the size
    /// of the next batched request. Recomputed every cycle, so growth from
    /// rebases during cooldown is topped up by later batches.
    pub fn pending_request_amount(&self) -> Result<u64, StakingError> {
        let cooldown_total = self.balance_for_gons(self.cooldown_escrow_gons)?;
        Ok(cooldown_total.saturating_sub(self.claimable_reserve))
    }

    /// Record a successfully submitted withdrawal request and advance the
    /// cycle watermark. The venue releases the amount only after completing
    /// the cycle in which it accepted the request.
    pub fn record_venue_request(&mut self, amount: u64, venue_cycle: u64) {
        self.requested_withdrawal_amount = amount;
        self.requested_min_cycle = venue_cycle.saturating_add(1);
        self.last_venue_cycle = venue_cycle;
    }
}

impl HasAuthority for StakingConfig {
    fn authority(&self) -> &Pubkey {
        &self.authority
    }
    fn authority_mut(&mut self) -> &mut Pubkey {
        &mut self.authority
    }
    fn pending_authority(&self) -> &Pubkey {
        &self.pending_authority
    }
    fn pending_authority_mut(&mut self) -> &mut Pubkey {
        &mut self.pending_authority
    }
}

// ============================================================================
// MemberAccount
// ============================================================================

/// Per-wallet receipt state.
///
/// Seeds: ["member", staking_config, owner]
///
/// Holds the freely transferable wallet gons plus at most one open warmup
/// record and one open cooldown record (repeat stakes and unstakes merge
/// into the open record, they do not queue). The `*_amount_at_entry` fields
/// are informational; redeemable value is always recomputed from gons so
/// escrowed positions keep growing with rebases.
///
/// The gon fields sit at fixed offsets behind the owner/config keys; the
/// reserve program reads them through
/// `tidal_pool_interface::read_member_gon_balances`.
#[account(StakingAccount::MemberAccount)]
#[repr(C)]
pub struct MemberAccount {
    /// Wallet that owns this member account
    pub owner: Pubkey,
    /// Staking config this member belongs to
    pub staking_config: Pubkey,
    /// Freely transferable receipt balance, in gons
    pub wallet_gons: u128,
    /// Gons of the open warmup record (0 = no open record)
    pub warmup_gons: u128,
    /// Gons of the open cooldown record (0 = no open record)
    pub cooldown_gons: u128,
    /// Receipt amount when the warmup record was last merged (informational)
    pub warmup_amount_at_entry: u64,
    /// Epoch at which the warmup record becomes claimable
    pub warmup_expiry_epoch: u64,
    /// Receipt amount when the cooldown record was last merged (informational)
    pub cooldown_amount_at_entry: u64,
    /// Epoch at which the cooldown record becomes settleable
    pub cooldown_expiry_epoch: u64,
    /// Self-service lock blocking unstake and claim-withdraw (1 = locked)
    pub withdrawals_locked: u8,
    /// PDA bump seed
    pub bump: u8,
    /// Padding for 16-byte struct alignment
    pub _padding: [u8; 14],
}

impl MemberAccount {
    /// Account size
    pub const SIZE: usize = core::mem::size_of::<Self>();

    /// Calculate the PDA address for a member account
    /// Seeds: ["member", staking_config, owner]
    ///
    /// Note: Ignores program_id parameter - uses crate::ID
    pub fn find_pda(
        _program_id: &Pubkey,
        staking_config: &Pubkey,
        owner: &Pubkey,
    ) -> (Pubkey, u8) {
        crate::find_member_pda(staking_config, owner)
    }

    /// Whether a warmup record is open.
    #[inline]
    pub fn warmup_open(&self) -> bool {
        self.warmup_gons > 0
    }

    /// Whether a cooldown record is open.
    #[inline]
    pub fn cooldown_open(&self) -> bool {
        self.cooldown_gons > 0
    }

    /// Reject when the member locked withdrawals.
    #[inline]
    pub fn require_withdrawals_unlocked(&self) -> Result<(), StakingError> {
        if self.withdrawals_locked != 0 {
            return Err(StakingError::WithdrawalsLocked);
        }
        Ok(())
    }

    /// Merge gons into the open warmup record, refreshing its expiry.
    pub fn merge_warmup(
        &mut self,
        gons: u128,
        amount: u64,
        expiry_epoch: u64,
    ) -> Result<(), StakingError> {
        self.warmup_gons = self
            .warmup_gons
            .checked_add(gons)
            .ok_or(StakingError::ArithmeticOverflow)?;
        self.warmup_amount_at_entry = self
            .warmup_amount_at_entry
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;
        self.warmup_expiry_epoch = expiry_epoch;
        Ok(())
    }

    /// Consume gons from the warmup record without touching its expiry.
    /// Clears the record when it reaches zero.
    pub fn consume_warmup(&mut self, gons: u128) -> Result<(), StakingError> {
        self.warmup_gons = self
            .warmup_gons
            .checked_sub(gons)
            .ok_or(StakingError::InsufficientBalance)?;
        if self.warmup_gons == 0 {
            self.clear_warmup();
        }
        Ok(())
    }

    /// Delete the warmup record.
    pub fn clear_warmup(&mut self) {
        self.warmup_gons = 0;
        self.warmup_amount_at_entry = 0;
        self.warmup_expiry_epoch = 0;
    }

    /// Merge gons into the open cooldown record, refreshing its expiry.
    pub fn merge_cooldown(
        &mut self,
        gons: u128,
        amount: u64,
        expiry_epoch: u64,
    ) -> Result<(), StakingError> {
        self.cooldown_gons = self
            .cooldown_gons
            .checked_add(gons)
            .ok_or(StakingError::ArithmeticOverflow)?;
        self.cooldown_amount_at_entry = self
            .cooldown_amount_at_entry
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;
        self.cooldown_expiry_epoch = expiry_epoch;
        Ok(())
    }

    /// Delete the cooldown record.
    pub fn clear_cooldown(&mut self) {
        self.cooldown_gons = 0;
        self.cooldown_amount_at_entry = 0;
        self.cooldown_expiry_epoch = 0;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tidal_pool_interface::venue::VenueCycleView;

    const EPOCH_LENGTH: u64 = 100;

    fn fresh_config() -> StakingConfig {
        let mut config: StakingConfig = bytemuck::Zeroable::zeroed();
        config.total_supply = ledger::INITIAL_FRAGMENT_SUPPLY;
        config.epoch_number = 1;
        config.epoch_length_slots = EPOCH_LENGTH;
        config.epoch_end_slot = EPOCH_LENGTH;
        config.index_gons =
            ledger::gons_for_balance(ledger::INDEX_BASE, config.total_supply).unwrap();
        config.request_window_slots = 50;
        config
    }

    fn fresh_member() -> MemberAccount {
        bytemuck::Zeroable::zeroed()
    }

    fn venue(cycle: u64, start: u64, duration: u64) -> VenueCycleView {
        VenueCycleView {
            current_cycle: cycle,
            cycle_start_slot: start,
            cycle_duration_slots: duration,
        }
    }

    /// Total gons across treasury, wallets and escrows must always equal
    /// TOTAL_GONS. `circulating_gons` counts everything outside the
    /// treasury, so conservation reduces to: circulating equals the sum of
    /// member wallets plus both escrow pools.
    fn assert_gon_conservation(config: &StakingConfig, members: &[&MemberAccount]) {
        let member_wallets: u128 = members.iter().map(|m| m.wallet_gons).sum();
        let member_warmup: u128 = members.iter().map(|m| m.warmup_gons).sum();
        let member_cooldown: u128 = members.iter().map(|m| m.cooldown_gons).sum();

        assert_eq!(config.warmup_escrow_gons, member_warmup);
        assert_eq!(config.cooldown_escrow_gons, member_cooldown);
        assert_eq!(
            config.circulating_gons,
            member_wallets + member_warmup + member_cooldown
        );
        assert!(config.circulating_gons <= ledger::TOTAL_GONS);
    }

    // ------------------------------------------------------------------
    // Layout pins for the foreign readers in tidal-pool-interface
    // ------------------------------------------------------------------

    #[test]
    fn test_account_sizes() {
        assert_eq!(StakingConfig::SIZE, 544);
        assert_eq!(MemberAccount::SIZE, 160);
    }

    #[test]
    fn test_foreign_read_offsets() {
        use core::mem::offset_of;
        use tidal_pool_interface as iface;

        // Account data = 8-byte discriminator + struct
        assert_eq!(8 + offset_of!(StakingConfig, total_supply), iface::STAKING_TOTAL_SUPPLY_OFFSET);
        assert_eq!(8 + offset_of!(StakingConfig, epoch_number), iface::STAKING_EPOCH_NUMBER_OFFSET);
        assert_eq!(8 + offset_of!(MemberAccount, wallet_gons), iface::MEMBER_WALLET_GONS_OFFSET);
        assert_eq!(8 + offset_of!(MemberAccount, warmup_gons), iface::MEMBER_WARMUP_GONS_OFFSET);
        assert_eq!(
            8 + offset_of!(MemberAccount, cooldown_gons),
            iface::MEMBER_COOLDOWN_GONS_OFFSET
        );
    }

    // ------------------------------------------------------------------
    // Stake / warmup
    // ------------------------------------------------------------------

    #[test]
    fn test_stake_with_zero_warmup_credits_wallet() {
        let mut config = fresh_config();
        let mut member = fresh_member();

        let outcome = config.apply_stake(&mut member, 10_000).unwrap();
        assert!(!outcome.escrowed);
        assert_eq!(config.balance_for_gons(member.wallet_gons).unwrap(), 10_000);
        assert!(!member.warmup_open());
        assert_eq!(config.warmup_escrow_gons, 0);
        assert_gon_conservation(&config, &[&member]);
    }

    #[test]
    fn test_stake_with_warmup_escrows_and_merges() {
        let mut config = fresh_config();
        config.warmup_period = 1;
        let mut member = fresh_member();

        config.apply_stake(&mut member, 4_000).unwrap();
        config.apply_stake(&mut member, 6_000).unwrap();

        // Repeat stakes accumulate into one record; its value is the sum
        assert_eq!(config.balance_for_gons(member.warmup_gons).unwrap(), 10_000);
        assert_eq!(member.warmup_amount_at_entry, 10_000);
        assert_eq!(member.warmup_expiry_epoch, 2);
        assert_eq!(member.wallet_gons, 0);
        assert_gon_conservation(&config, &[&member]);
    }

    #[test]
    fn test_claim_before_expiry_is_noop_and_deletes_once() {
        let mut config = fresh_config();
        config.warmup_period = 1;
        let mut member = fresh_member();
        config.apply_stake(&mut member, 10_000).unwrap();

        // Not yet mature: silent no-op
        assert_eq!(config.claim_warmup(&mut member).unwrap(), None);

        // Roll the epoch; claim releases the full record exactly once
        config.rebase_if_due(EPOCH_LENGTH).unwrap();
        let gons = config.claim_warmup(&mut member).unwrap().unwrap();
        member.wallet_gons += gons;
        assert_eq!(config.balance_for_gons(member.wallet_gons).unwrap(), 10_000);
        assert!(!member.warmup_open());

        assert_eq!(config.claim_warmup(&mut member).unwrap(), None);
        assert_gon_conservation(&config, &[&member]);
    }

    #[test]
    fn test_stake_rejects_zero_and_paused() {
        let mut config = fresh_config();
        let mut member = fresh_member();

        assert_eq!(
            config.apply_stake(&mut member, 0),
            Err(StakingError::InvalidAmount)
        );
        config.staking_paused = 1;
        assert_eq!(
            config.apply_stake(&mut member, 1),
            Err(StakingError::StakingPaused)
        );
    }

    #[test]
    fn test_stake_beyond_treasury_rejected() {
        let mut config = fresh_config();
        let mut member = fresh_member();

        config.apply_stake(&mut member, ledger::INITIAL_FRAGMENT_SUPPLY).unwrap();
        assert_eq!(
            config.apply_stake(&mut member, 1),
            Err(StakingError::TreasuryExhausted)
        );
    }

    // ------------------------------------------------------------------
    // Rebase: proportional distribution and one-epoch lag
    // ------------------------------------------------------------------

    #[test]
    fn test_rebase_distributes_proportionally() {
        let mut config = fresh_config();
        let mut alice = fresh_member();
        let mut bob = fresh_member();

        config.apply_stake(&mut alice, 10_000).unwrap();
        config.apply_stake(&mut bob, 1_000).unwrap();

        config.commit_rewards(1_000).unwrap();
        // First rollover locks the reward in, balances unchanged
        config.rebase_if_due(EPOCH_LENGTH).unwrap();
        assert_eq!(config.balance_for_gons(alice.wallet_gons).unwrap(), 10_000);
        assert_eq!(config.balance_for_gons(bob.wallet_gons).unwrap(), 1_000);

        // Second rollover applies it, truncated per integer division
        config.rebase_if_due(2 * EPOCH_LENGTH).unwrap();
        assert_eq!(config.balance_for_gons(alice.wallet_gons).unwrap(), 10_909);
        assert_eq!(config.balance_for_gons(bob.wallet_gons).unwrap(), 1_090);
        assert_gon_conservation(&config, &[&alice, &bob]);
    }

    #[test]
    fn test_rebase_one_epoch_lag() {
        let mut config = fresh_config();
        let mut member = fresh_member();
        config.apply_stake(&mut member, 1_000).unwrap();

        config.commit_rewards(500).unwrap();
        assert_eq!(config.epoch_number, 1);

        // Accumulating: no-op, epoch unchanged
        assert_eq!(config.rebase_if_due(EPOCH_LENGTH - 1).unwrap(), None);
        assert_eq!(config.epoch_number, 1);

        // Due: locks in, applies nothing yet
        assert_eq!(config.rebase_if_due(EPOCH_LENGTH).unwrap(), Some(0));
        assert_eq!(config.epoch_number, 2);
        assert_eq!(config.balance_for_gons(member.wallet_gons).unwrap(), 1_000);

        // Next rollover applies the locked reward
        assert_eq!(config.rebase_if_due(2 * EPOCH_LENGTH).unwrap(), Some(500));
        assert_eq!(config.balance_for_gons(member.wallet_gons).unwrap(), 1_500);
    }

    #[test]
    fn test_commit_overwrites_not_accumulates() {
        let mut config = fresh_config();
        let mut member = fresh_member();
        config.apply_stake(&mut member, 1_000).unwrap();

        config.commit_rewards(300).unwrap();
        config.commit_rewards(500).unwrap();
        config.rebase_if_due(EPOCH_LENGTH).unwrap();
        config.rebase_if_due(2 * EPOCH_LENGTH).unwrap();
        assert_eq!(config.balance_for_gons(member.wallet_gons).unwrap(), 1_500);
    }

    #[test]
    fn test_escrowed_value_grows_with_rebases() {
        let mut config = fresh_config();
        config.warmup_period = 10;
        let mut member = fresh_member();
        config.apply_stake(&mut member, 1_000).unwrap();

        config.commit_rewards(1_000).unwrap();
        config.rebase_if_due(EPOCH_LENGTH).unwrap();
        config.rebase_if_due(2 * EPOCH_LENGTH).unwrap();

        // The warmup record doubled along with the rest of the ledger
        assert_eq!(config.balance_for_gons(member.warmup_gons).unwrap(), 2_000);
    }

    // ------------------------------------------------------------------
    // Unstake / cooldown
    // ------------------------------------------------------------------

    #[test]
    fn test_unstake_insufficient_balance_changes_nothing() {
        let mut config = fresh_config();
        config.warmup_period = 1;
        let mut member = fresh_member();
        config.apply_stake(&mut member, 5_000).unwrap();

        let before_member = member;
        let before_circulating = config.circulating_gons;
        assert_eq!(
            config.apply_unstake(&mut member, 5_001),
            Err(StakingError::InsufficientBalance)
        );
        assert_eq!(member.wallet_gons, before_member.wallet_gons);
        assert_eq!(member.warmup_gons, before_member.warmup_gons);
        assert_eq!(config.circulating_gons, before_circulating);
    }

    #[test]
    fn test_unstake_consumes_warmup_first_keeping_expiry() {
        let mut config = fresh_config();
        config.warmup_period = 2;
        let mut member = fresh_member();

        // 5000 in warmup (expiry epoch 3), 5000 in the wallet
        config.apply_stake(&mut member, 5_000).unwrap();
        member.wallet_gons = config.gons_for_balance(5_000).unwrap();
        config.circulating_gons += member.wallet_gons;

        config.apply_unstake(&mut member, 2_500).unwrap();

        // Warmup halved, expiry untouched, wallet untouched
        assert_eq!(config.balance_for_gons(member.warmup_gons).unwrap(), 2_500);
        assert_eq!(member.warmup_expiry_epoch, 3);
        assert_eq!(config.balance_for_gons(member.wallet_gons).unwrap(), 5_000);
        assert_eq!(config.balance_for_gons(member.cooldown_gons).unwrap(), 2_500);
        assert_gon_conservation(&config, &[&member]);
    }

    #[test]
    fn test_unstake_spans_warmup_and_wallet() {
        let mut config = fresh_config();
        config.warmup_period = 1;
        config.cooldown_period = 1;
        let mut member = fresh_member();

        config.apply_stake(&mut member, 5_000).unwrap();
        member.wallet_gons = config.gons_for_balance(5_000).unwrap();
        config.circulating_gons += member.wallet_gons;

        config.apply_unstake(&mut member, 10_000).unwrap();

        assert!(!member.warmup_open());
        assert_eq!(member.wallet_gons, 0);
        assert_eq!(config.balance_for_gons(member.cooldown_gons).unwrap(), 10_000);
        assert_eq!(member.cooldown_expiry_epoch, 2);
        assert_gon_conservation(&config, &[&member]);
    }

    #[test]
    fn test_unstake_respects_lock_and_pause() {
        let mut config = fresh_config();
        let mut member = fresh_member();
        config.apply_stake(&mut member, 1_000).unwrap();

        member.withdrawals_locked = 1;
        assert_eq!(
            config.apply_unstake(&mut member, 1_000),
            Err(StakingError::WithdrawalsLocked)
        );
        member.withdrawals_locked = 0;

        config.unstaking_paused = 1;
        assert_eq!(
            config.apply_unstake(&mut member, 1_000),
            Err(StakingError::UnstakingPaused)
        );
    }

    #[test]
    fn test_settle_cooldown_requires_maturity_and_funds() {
        let mut config = fresh_config();
        config.cooldown_period = 1;
        let mut member = fresh_member();
        config.apply_stake(&mut member, 10_000).unwrap();
        config.apply_unstake(&mut member, 10_000).unwrap();

        // Not mature yet
        assert_eq!(config.settle_cooldown(&mut member).unwrap(), None);

        config.rebase_if_due(EPOCH_LENGTH).unwrap();

        // Mature but the venue has not released the batch
        assert_eq!(config.settle_cooldown(&mut member).unwrap(), None);

        // Base asset arrives from the venue
        config.record_venue_claim(10_000).unwrap();
        let settlement = config.settle_cooldown(&mut member).unwrap().unwrap();
        assert_eq!(settlement.payout, 10_000);
        assert_eq!(config.claimable_reserve, 0);
        assert!(!member.cooldown_open());
        assert_gon_conservation(&config, &[&member]);

        // Settling again is a no-op
        assert_eq!(config.settle_cooldown(&mut member).unwrap(), None);
    }

    // ------------------------------------------------------------------
    // Instant unstake
    // ------------------------------------------------------------------

    #[test]
    fn test_instant_unstake_moves_full_wallet() {
        let mut config = fresh_config();
        let mut member = fresh_member();
        let mut reserve_member = fresh_member();
        config.apply_stake(&mut member, 10_000).unwrap();

        let outcome = config.apply_instant_unstake(&mut member, 0, false).unwrap();
        reserve_member.wallet_gons += outcome.gons;

        assert_eq!(outcome.receipt_amount, 10_000);
        assert_eq!(member.wallet_gons, 0);
        assert_eq!(
            config.balance_for_gons(reserve_member.wallet_gons).unwrap(),
            10_000
        );
        // The receipt stays circulating; only its holder changed
        assert_gon_conservation(&config, &[&member, &reserve_member]);
    }

    #[test]
    fn test_instant_unstake_from_warmup() {
        let mut config = fresh_config();
        config.warmup_period = 5;
        let mut member = fresh_member();
        config.apply_stake(&mut member, 10_000).unwrap();

        let outcome = config.apply_instant_unstake(&mut member, 4_000, true).unwrap();
        assert_eq!(outcome.receipt_amount, 4_000);
        assert_eq!(config.balance_for_gons(member.warmup_gons).unwrap(), 6_000);

        // Overdrawing the source is rejected
        assert_eq!(
            config.apply_instant_unstake(&mut member, 7_000, true),
            Err(StakingError::InsufficientBalance)
        );
    }

    // ------------------------------------------------------------------
    // Withdrawal batching (spec property 7)
    // ------------------------------------------------------------------

    #[test]
    fn test_batching_window_gating() {
        let mut config = fresh_config();
        let mut member = fresh_member();
        config.apply_stake(&mut member, 5_000).unwrap();
        config.apply_unstake(&mut member, 5_000).unwrap();

        // Cycle 0 is the cycle the config was synchronized at
        let v = venue(0, 0, 200);
        assert!(!config.can_batch_requests(&v, 199));

        // Rollover to cycle 1, but mid-cycle: still gated by the window
        let v = venue(1, 200, 200);
        assert!(!config.can_batch_requests(&v, 250));
        // Tail window of cycle 1
        assert!(config.can_batch_requests(&v, 360));

        config.record_venue_request(config.pending_request_amount().unwrap(), 1);
        assert_eq!(config.requested_withdrawal_amount, 5_000);
        assert_eq!(config.requested_min_cycle, 2);

        // Same cycle again: watermark blocks a double submission
        assert!(!config.can_batch_requests(&v, 399));
    }

    #[test]
    fn test_missed_window_recovers_next_cycle() {
        let mut config = fresh_config();
        let mut member = fresh_member();
        config.apply_stake(&mut member, 2_500).unwrap();
        config.apply_unstake(&mut member, 2_500).unwrap();

        // First batch in cycle 1
        config.record_venue_request(config.pending_request_amount().unwrap(), 1);

        // More cooldown arrives; the same cycle cannot take a second batch
        let mut other = fresh_member();
        config.apply_stake(&mut other, 5_000).unwrap();
        config.apply_unstake(&mut other, 5_000).unwrap();
        let v = venue(1, 200, 200);
        assert!(!config.can_batch_requests(&v, 399));

        // Cycle 2: the earlier request matured; claim it, then submit the
        // remaining pending amount exactly once
        let v = venue(2, 400, 200);
        assert!(config.can_batch_requests(&v, 560));
        let matured = config.matured_request(&v).unwrap();
        assert_eq!(matured, 2_500);
        config.record_venue_claim(matured).unwrap();

        let pending = config.pending_request_amount().unwrap();
        assert_eq!(pending, 5_000);
        config.record_venue_request(pending, 2);

        // Requested never exceeds the true cooldown total
        let cooldown_total = config.balance_for_gons(config.cooldown_escrow_gons).unwrap();
        assert!(config.requested_withdrawal_amount + config.claimable_reserve <= cooldown_total);
    }

    // ------------------------------------------------------------------
    // End-to-end scenario (spec property 8)
    // ------------------------------------------------------------------

    #[test]
    fn test_zero_period_stake_unstake_claim_roundtrip() {
        let mut config = fresh_config();
        let mut member = fresh_member();

        // warmup = 0: wallet credited immediately, nothing escrowed
        config.apply_stake(&mut member, 10_000).unwrap();
        assert_eq!(config.balance_for_gons(member.wallet_gons).unwrap(), 10_000);
        assert_eq!(config.warmup_escrow_gons, 0);

        // cooldown = 0: the record is immediately mature
        config.apply_unstake(&mut member, 10_000).unwrap();
        assert_eq!(
            config.balance_for_gons(config.cooldown_escrow_gons).unwrap(),
            10_000
        );

        // Batch, venue rolls over, claim releases exactly the staked amount
        let v = venue(1, 200, 200);
        assert!(config.can_batch_requests(&v, 399));
        config.record_venue_request(config.pending_request_amount().unwrap(), 1);

        let v = venue(2, 400, 200);
        let matured = config.matured_request(&v).unwrap();
        config.record_venue_claim(matured).unwrap();

        let settlement = config.settle_cooldown(&mut member).unwrap().unwrap();
        assert_eq!(settlement.payout, 10_000);
        assert_eq!(member.wallet_gons, 0);
        assert!(!member.cooldown_open());
        assert_eq!(config.circulating_gons, 0);
        assert_gon_conservation(&config, &[&member]);
    }
}
