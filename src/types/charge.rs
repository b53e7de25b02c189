//! Charge record types for the charge ledger
//!
//! This module defines the stored `Charge` record, its derived payment
//! classification, and the value objects used to create and partially
//! update records through the store.

use crate::money::round_currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived payment-completion classification of a charge
///
/// Never stored on the record; recomputed from the current amounts on every
/// call. The variant order is meaningful: it is the fixed rank used when
/// sorting by status (`Paid` < `Partial` < `Unpaid`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeStatus {
    /// Outstanding balance is zero or negative
    Paid,

    /// Something has been paid but a balance remains
    Partial,

    /// Nothing has been paid and a balance remains
    Unpaid,
}

impl ChargeStatus {
    /// Lowercase label as exposed to the presentation layer
    pub fn as_str(&self) -> &'static str {
        match self {
            ChargeStatus::Paid => "paid",
            ChargeStatus::Partial => "partial",
            ChargeStatus::Unpaid => "unpaid",
        }
    }
}

/// A billing record tying a student to an amount owed and amount paid
///
/// Monetary fields are always stored rounded to 2 decimal places; the store
/// applies the rounding on every create and update. `date_charged` is an
/// ISO `YYYY-MM-DD` date kept as text, so lexicographic comparison equals
/// chronological comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Unique stable identifier, format `chg_NNNN` (4-digit zero-padded)
    pub charge_id: String,

    /// Denormalized student reference
    pub student_id: String,

    /// Redundant copy of the student's name, supplied at creation time
    ///
    /// No referential integrity is enforced against a student table.
    pub student_name: String,

    /// Amount owed, 2 decimal places, positive for a valid record
    pub charge_amount: Decimal,

    /// Amount paid so far, 2 decimal places
    ///
    /// `0 <= paid_amount <= charge_amount` for a valid record; validated at
    /// the input boundary, not enforced by the store.
    pub paid_amount: Decimal,

    /// Calendar date of the charge, ISO `YYYY-MM-DD`, no time component
    pub date_charged: String,
}

impl Charge {
    /// Outstanding balance: `charge_amount - paid_amount`, rounded to cents
    ///
    /// Recomputed from the current amounts on every call, never cached.
    pub fn outstanding(&self) -> Decimal {
        round_currency(self.charge_amount - self.paid_amount)
    }

    /// Derived payment status of this charge
    ///
    /// `Paid` if the outstanding balance is zero or negative, `Partial` if
    /// a balance remains and something has been paid, `Unpaid` otherwise.
    pub fn status(&self) -> ChargeStatus {
        if self.outstanding() <= Decimal::ZERO {
            ChargeStatus::Paid
        } else if self.paid_amount > Decimal::ZERO {
            ChargeStatus::Partial
        } else {
            ChargeStatus::Unpaid
        }
    }
}

/// A student reference extracted from the charge collection
///
/// Produced by [`unique_students`](crate::query::unique_students) for
/// populating the student filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Student identifier
    pub id: String,
    /// Student display name
    pub name: String,
}

/// Input for creating a charge: every field except the generated id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeDraft {
    /// Denormalized student reference
    pub student_id: String,
    /// Student display name
    pub student_name: String,
    /// Amount owed; rounded to 2 decimal places by the store
    pub charge_amount: Decimal,
    /// Amount paid; rounded to 2 decimal places by the store
    pub paid_amount: Decimal,
    /// Calendar date of the charge, ISO `YYYY-MM-DD`
    pub date_charged: String,
}

/// Partial update of a charge: absent fields are left untouched
///
/// Each mutable field is wrapped in `Option` so "absent" is distinguishable
/// from "set to default". `charge_id` is deliberately not a field; the id
/// of an existing record can never be changed through an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargeUpdate {
    /// New student id, if changing
    pub student_id: Option<String>,
    /// New student name, if changing
    pub student_name: Option<String>,
    /// New charge amount, if changing; rounded to 2 decimal places
    pub charge_amount: Option<Decimal>,
    /// New paid amount, if changing; rounded to 2 decimal places
    pub paid_amount: Option<Decimal>,
    /// New charge date, if changing
    pub date_charged: Option<String>,
}
