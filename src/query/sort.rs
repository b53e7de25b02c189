//! Charge ordering
//!
//! Produces a freshly ordered copy of the collection without mutating the
//! input. The underlying sort is `slice::sort_by`, which is stable, so rows
//! with equal keys keep their relative input order.

use crate::types::{Charge, SortColumn, SortDirection, SortState};
use std::cmp::Ordering;

/// Compare two charges on a single column, ascending
fn compare(a: &Charge, b: &Charge, column: SortColumn) -> Ordering {
    match column {
        SortColumn::ChargeId => a.charge_id.cmp(&b.charge_id),
        SortColumn::DateCharged => a.date_charged.cmp(&b.date_charged),
        SortColumn::StudentId => a.student_id.cmp(&b.student_id),
        SortColumn::StudentName => a.student_name.cmp(&b.student_name),
        SortColumn::ChargeAmount => a.charge_amount.cmp(&b.charge_amount),
        SortColumn::PaidAmount => a.paid_amount.cmp(&b.paid_amount),
        SortColumn::Outstanding => a.outstanding().cmp(&b.outstanding()),
        SortColumn::Status => a.status().cmp(&b.status()),
    }
}

/// Sort a charge collection by the given column and direction
///
/// String columns compare lexicographically (for ISO dates that equals
/// chronological order), amount columns compare numerically, the
/// outstanding column compares the rounded outstanding values, and the
/// status column compares the fixed rank paid < partial < unpaid. `Desc`
/// reverses the comparator; ties retain input order.
///
/// # Arguments
///
/// * `charges` - The collection to order
/// * `sort` - Column and direction
///
/// # Returns
///
/// A new ordered vector; the input is left untouched
pub fn sort_charges(charges: &[Charge], sort: SortState) -> Vec<Charge> {
    let mut result = charges.to_vec();
    result.sort_by(|a, b| {
        let ordering = compare(a, b, sort.column);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    result
}
