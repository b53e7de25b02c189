//! Multi-field charge filtering
//!
//! A charge is included iff it satisfies every specified criterion (logical
//! AND across fields). Unset fields place no constraint, so the default
//! filter returns the whole collection. The function is pure and total:
//! malformed amount bounds degrade to "no constraint" rather than failing.

use crate::types::{Charge, ChargeFilter};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a textual amount bound, ignoring anything unparseable
///
/// Empty or non-numeric text means the bound is unconstrained, not zero.
fn parse_bound(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// Whether a single charge satisfies every specified criterion
fn matches(charge: &Charge, filter: &ChargeFilter) -> bool {
    let search = filter.search.trim().to_lowercase();
    if !search.is_empty() {
        let matches_search = charge.charge_id.to_lowercase().contains(&search)
            || charge.student_name.to_lowercase().contains(&search)
            || charge.student_id.to_lowercase().contains(&search);
        if !matches_search {
            return false;
        }
    }

    if let Some(status) = filter.status {
        if charge.status() != status {
            return false;
        }
    }

    if !filter.student_id.is_empty() && charge.student_id != filter.student_id {
        return false;
    }

    // ISO dates: lexicographic order equals chronological order
    if !filter.date_from.is_empty() && charge.date_charged < filter.date_from {
        return false;
    }
    if !filter.date_to.is_empty() && charge.date_charged > filter.date_to {
        return false;
    }

    if let Some(min) = parse_bound(&filter.amount_min) {
        if charge.charge_amount < min {
            return false;
        }
    }
    if let Some(max) = parse_bound(&filter.amount_max) {
        if charge.charge_amount > max {
            return false;
        }
    }

    true
}

/// Filter a charge collection against the given criteria
///
/// Returns a new collection containing the charges that satisfy every
/// specified criterion, in their input order. Never mutates the input and
/// is idempotent: filtering an already-filtered collection with the same
/// criteria returns it unchanged.
///
/// # Arguments
///
/// * `charges` - The collection to filter
/// * `filter` - The criteria to apply
///
/// # Returns
///
/// The matching subset as a new vector
pub fn filter_charges(charges: &[Charge], filter: &ChargeFilter) -> Vec<Charge> {
    charges
        .iter()
        .filter(|charge| matches(charge, filter))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChargeStatus;
    use rstest::rstest;

    fn charge(id: &str, student_id: &str, name: &str, amount: i64, paid: i64, date: &str) -> Charge {
        Charge {
            charge_id: id.to_string(),
            student_id: student_id.to_string(),
            student_name: name.to_string(),
            charge_amount: Decimal::new(amount, 0),
            paid_amount: Decimal::new(paid, 0),
            date_charged: date.to_string(),
        }
    }

    fn sample() -> Vec<Charge> {
        vec![
            charge("chg_0001", "stu_101", "Jason Schuller", 100, 100, "2025-01-01"),
            charge("chg_0002", "stu_102", "Eva Calvert", 100, 40, "2025-01-02"),
            charge("chg_0003", "stu_103", "Citrus Lee", 100, 0, "2025-01-03"),
            charge("chg_0004", "stu_104", "Samantha Lee", 250, 0, "2025-01-04"),
        ]
    }

    fn ids(charges: &[Charge]) -> Vec<&str> {
        charges.iter().map(|c| c.charge_id.as_str()).collect()
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let charges = sample();
        let result = filter_charges(&charges, &ChargeFilter::default());
        assert_eq!(result, charges);
    }

    #[rstest]
    #[case::by_charge_id("chg_0002", vec!["chg_0002"])]
    #[case::by_student_name("eva", vec!["chg_0002"])]
    #[case::by_student_id("stu_103", vec!["chg_0003"])]
    #[case::substring_across_fields("lee", vec!["chg_0003", "chg_0004"])]
    #[case::case_insensitive("JASON", vec!["chg_0001"])]
    #[case::whitespace_trimmed("  eva  ", vec!["chg_0002"])]
    #[case::no_match("zzz", vec![])]
    #[case::empty_matches_all("", vec!["chg_0001", "chg_0002", "chg_0003", "chg_0004"])]
    fn test_search(#[case] search: &str, #[case] expected: Vec<&str>) {
        let filter = ChargeFilter {
            search: search.to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_charges(&sample(), &filter)), expected);
    }

    #[rstest]
    #[case::paid(ChargeStatus::Paid, vec!["chg_0001"])]
    #[case::partial(ChargeStatus::Partial, vec!["chg_0002"])]
    #[case::unpaid(ChargeStatus::Unpaid, vec!["chg_0003", "chg_0004"])]
    fn test_status_filter(#[case] status: ChargeStatus, #[case] expected: Vec<&str>) {
        let filter = ChargeFilter {
            status: Some(status),
            ..Default::default()
        };
        assert_eq!(ids(&filter_charges(&sample(), &filter)), expected);
    }

    #[test]
    fn test_student_filter_is_exact_match() {
        let filter = ChargeFilter {
            student_id: "stu_10".to_string(),
            ..Default::default()
        };
        // "stu_10" is a prefix of every id but equals none of them
        assert!(filter_charges(&sample(), &filter).is_empty());
    }

    #[rstest]
    #[case::from_only("2025-01-02", "", vec!["chg_0002", "chg_0003", "chg_0004"])]
    #[case::to_only("", "2025-01-02", vec!["chg_0001", "chg_0002"])]
    #[case::both_inclusive("2025-01-02", "2025-01-03", vec!["chg_0002", "chg_0003"])]
    #[case::single_day("2025-01-03", "2025-01-03", vec!["chg_0003"])]
    #[case::empty_range("2025-02-01", "2025-01-01", vec![])]
    fn test_date_range(#[case] from: &str, #[case] to: &str, #[case] expected: Vec<&str>) {
        let filter = ChargeFilter {
            date_from: from.to_string(),
            date_to: to.to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_charges(&sample(), &filter)), expected);
    }

    #[rstest]
    #[case::min_inclusive("250", "", vec!["chg_0004"])]
    #[case::max_inclusive("", "100", vec!["chg_0001", "chg_0002", "chg_0003"])]
    #[case::band("100", "200", vec!["chg_0001", "chg_0002", "chg_0003"])]
    #[case::unparseable_min_ignored("abc", "", vec!["chg_0001", "chg_0002", "chg_0003", "chg_0004"])]
    #[case::unparseable_max_ignored("", "12x", vec!["chg_0001", "chg_0002", "chg_0003", "chg_0004"])]
    #[case::whitespace_bound_trimmed(" 250 ", "", vec!["chg_0004"])]
    fn test_amount_range(#[case] min: &str, #[case] max: &str, #[case] expected: Vec<&str>) {
        let filter = ChargeFilter {
            amount_min: min.to_string(),
            amount_max: max.to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_charges(&sample(), &filter)), expected);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let filter = ChargeFilter {
            search: "lee".to_string(),
            status: Some(ChargeStatus::Unpaid),
            amount_min: "200".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_charges(&sample(), &filter)), vec!["chg_0004"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = ChargeFilter {
            status: Some(ChargeStatus::Unpaid),
            ..Default::default()
        };
        let once = filter_charges(&sample(), &filter);
        let twice = filter_charges(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let charges = sample();
        let before = charges.clone();
        let _ = filter_charges(&charges, &ChargeFilter {
            search: "eva".to_string(),
            ..Default::default()
        });
        assert_eq!(charges, before);
    }
}
