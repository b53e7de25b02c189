//! Monetary rounding for the charge ledger
//!
//! Every amount the store persists is normalized to 2 decimal places (cents).
//! The rounding rule is fixed: half-away-from-zero, so `10.005` becomes
//! `10.01` and `-10.005` becomes `-10.01`. Derived outstanding balances are
//! rounded with the same rule.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary value to 2 decimal places
///
/// Uses half-away-from-zero at the cent boundary. Applied on every create
/// and update before an amount is stored, and when deriving outstanding
/// balances.
///
/// # Arguments
///
/// * `amount` - The value to normalize
///
/// # Returns
///
/// The value rounded to 2 decimal places
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
