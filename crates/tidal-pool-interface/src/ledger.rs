//! Gon accounting math for the elastic receipt ledger.
//!
//! The receipt balance is elastic: every account holds a fixed internal
//! quantity of "gons" and the public balance is derived from the current
//! total supply. A rebase grows the total supply without touching any gon
//! count, so every holder's balance scales by the same factor and relative
//! ownership is preserved exactly (up to integer truncation).
//!
//! All functions here are pure and overflow-checked; both programs use them
//! so the two sides of a cross-program read can never disagree on a
//! conversion.

/// Initial fragment supply assigned to the staking treasury at
/// initialization: 5,000,000 tokens in 9-decimal base units.
///
/// Stakes hand out fragments from this treasury 1:1; the treasury bounds the
/// total stakeable amount.
pub const INITIAL_FRAGMENT_SUPPLY: u64 = 5_000_000_000_000_000;

/// Fixed total gon count, chosen as the largest `u128` evenly divisible by
/// [`INITIAL_FRAGMENT_SUPPLY`] so the initial conversion has no remainder
/// loss.
///
/// The sum of gons over all holders (treasury, member wallets and both
/// escrows) is always exactly this constant.
pub const TOTAL_GONS: u128 = u128::MAX - (u128::MAX % (INITIAL_FRAGMENT_SUPPLY as u128));

/// Baseline amount for the rebase index: 1.0 token in 9-decimal base units.
///
/// The gon equivalent is frozen at initialization; converting it back at any
/// later point yields the cumulative growth factor since launch.
pub const INDEX_BASE: u64 = 1_000_000_000;

/// Gons per fragment at the given total supply.
///
/// Returns `None` when the supply is zero.
#[inline]
pub fn gons_per_fragment(total_supply: u64) -> Option<u128> {
    if total_supply == 0 {
        return None;
    }
    Some(TOTAL_GONS / total_supply as u128)
}

/// Convert a public balance to gons at the given total supply.
///
/// # Example
/// ```
/// use tidal_pool_interface::ledger::{INITIAL_FRAGMENT_SUPPLY, gons_for_balance, balance_for_gons};
///
/// let gons = gons_for_balance(10_000, INITIAL_FRAGMENT_SUPPLY).unwrap();
/// assert_eq!(balance_for_gons(gons, INITIAL_FRAGMENT_SUPPLY), Some(10_000));
/// ```
#[inline]
pub fn gons_for_balance(amount: u64, total_supply: u64) -> Option<u128> {
    (amount as u128).checked_mul(gons_per_fragment(total_supply)?)
}

/// Convert gons back to a public balance at the given total supply.
///
/// Truncates toward zero; `gons_for_balance` followed by `balance_for_gons`
/// returns the original amount exactly.
#[inline]
pub fn balance_for_gons(gons: u128, total_supply: u64) -> Option<u64> {
    let fragments = gons.checked_div(gons_per_fragment(total_supply)?)?;
    u64::try_from(fragments).ok()
}

/// Supply growth that credits `profit` to the circulating holders.
///
/// The growth is normalized by the circulating share so that holders outside
/// the treasury gain exactly `profit * balance / circulating` each (truncated)
/// while the treasury's unused fragments scale along without capturing the
/// reward.
///
/// Returns `None` when `circulating` is zero or the math overflows.
#[inline]
pub fn rebase_amount(profit: u64, total_supply: u64, circulating: u64) -> Option<u64> {
    if circulating == 0 {
        return None;
    }
    let scaled = (profit as u128)
        .checked_mul(total_supply as u128)?
        .checked_div(circulating as u128)?;
    u64::try_from(scaled).ok()
}

/// Total supply after applying a rebase of `profit` over `circulating`.
///
/// `profit == 0` or `circulating == 0` leaves the supply unchanged (a no-op
/// rebase, not an error). `None` means the new supply is not representable
/// and the rebase must be rejected.
#[inline]
pub fn apply_rebase(total_supply: u64, circulating: u64, profit: u64) -> Option<u64> {
    if profit == 0 || circulating == 0 {
        return Some(total_supply);
    }
    let growth = rebase_amount(profit, total_supply, circulating)?;
    total_supply.checked_add(growth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_gons_divisible_by_initial_supply() {
        assert_eq!(TOTAL_GONS % (INITIAL_FRAGMENT_SUPPLY as u128), 0);
    }

    #[test]
    fn test_conversion_roundtrip_at_initial_supply() {
        for amount in [1u64, 999, 10_000, 123_456_789, INITIAL_FRAGMENT_SUPPLY] {
            let gons = gons_for_balance(amount, INITIAL_FRAGMENT_SUPPLY).unwrap();
            assert_eq!(balance_for_gons(gons, INITIAL_FRAGMENT_SUPPLY), Some(amount));
        }
    }

    #[test]
    fn test_zero_supply_has_no_rate() {
        assert_eq!(gons_per_fragment(0), None);
        assert_eq!(gons_for_balance(1, 0), None);
        assert_eq!(balance_for_gons(1, 0), None);
    }

    #[test]
    fn test_rebase_scales_balances_proportionally() {
        // Two holders of 10000 and 1000, reward of 1000 over their combined
        // circulating balance: +909 and +90 after truncation.
        let supply = INITIAL_FRAGMENT_SUPPLY;
        let g1 = gons_for_balance(10_000, supply).unwrap();
        let g2 = gons_for_balance(1_000, supply).unwrap();

        let new_supply = apply_rebase(supply, 11_000, 1_000).unwrap();
        assert_eq!(balance_for_gons(g1, new_supply), Some(10_909));
        assert_eq!(balance_for_gons(g2, new_supply), Some(1_090));
    }

    #[test]
    fn test_rebase_single_holder_gets_full_profit() {
        let supply = INITIAL_FRAGMENT_SUPPLY;
        let gons = gons_for_balance(1_000_000, supply).unwrap();

        let new_supply = apply_rebase(supply, 1_000_000, 1_000).unwrap();
        assert_eq!(balance_for_gons(gons, new_supply), Some(1_001_000));
    }

    #[test]
    fn test_rebase_noop_cases() {
        assert_eq!(apply_rebase(100, 50, 0), Some(100));
        assert_eq!(apply_rebase(100, 0, 10), Some(100));
    }

    #[test]
    fn test_rebase_overflow_rejected() {
        // A profit that would push the supply past u64::MAX is rejected
        // rather than wrapped.
        assert_eq!(apply_rebase(u64::MAX - 10, u64::MAX - 10, 100), None);
    }

    #[test]
    fn test_index_doubles_when_supply_doubles() {
        let supply = INITIAL_FRAGMENT_SUPPLY;
        let index_gons = gons_for_balance(INDEX_BASE, supply).unwrap();

        // Single staker owns the whole circulating supply; a reward equal to
        // the circulating balance doubles every balance, and the index.
        let new_supply = apply_rebase(supply, 1_000, 1_000).unwrap();
        assert_eq!(balance_for_gons(index_gons, new_supply), Some(2 * INDEX_BASE));
    }
}
