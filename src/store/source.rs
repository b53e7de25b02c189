//! Charge data sources
//!
//! The store populates itself from a `ChargeSource` during its initial
//! load. The trait is the seam where a production implementation (a real
//! fetch) replaces the mock while preserving the store's loading contract.

use crate::money::round_currency;
use crate::types::Charge;
use rust_decimal::Decimal;

/// A source of charge records for the store's initial load
pub trait ChargeSource {
    /// Produce the full charge collection
    fn fetch(&self) -> Vec<Charge>;
}

/// Student roster backing the generated data
const STUDENTS: &[(&str, &str)] = &[
    ("stu_101", "Jason Schuller"),
    ("stu_102", "Eva Calvert"),
    ("stu_103", "Citrus Lee"),
    ("stu_104", "Samantha Lee"),
    ("stu_105", "Michael Chen"),
    ("stu_106", "Sarah Williams"),
    ("stu_107", "David Park"),
    ("stu_108", "Emma Thompson"),
    ("stu_109", "James Wilson"),
    ("stu_110", "Olivia Martinez"),
    ("stu_111", "Daniel Brown"),
    ("stu_112", "Sophia Davis"),
    ("stu_113", "Alexander Kim"),
    ("stu_114", "Isabella Garcia"),
    ("stu_115", "Benjamin Taylor"),
];

/// Base amounts the generated charges cycle through
const AMOUNTS: &[i64] = &[49, 79, 99, 120, 150, 199, 200, 250, 299, 350, 399, 450, 500];

/// Deterministic mock charge generator
///
/// Stands in for a backend during development and tests. Generation is a
/// pure function of the requested count: ids descend from `chg_2200`,
/// students and base amounts cycle through fixed tables, dates walk
/// backwards through mid-2025, and paid amounts rotate through unpaid,
/// partial, and fully paid so every status is represented. The result is
/// ordered by date descending, newest first.
#[derive(Debug, Clone)]
pub struct MockChargeSource {
    /// Number of charges to generate
    count: usize,
}

impl MockChargeSource {
    /// Create a source generating `count` charges
    pub fn new(count: usize) -> Self {
        MockChargeSource { count }
    }
}

impl Default for MockChargeSource {
    /// The dataset size the admin table ships with
    fn default() -> Self {
        MockChargeSource::new(50)
    }
}

impl ChargeSource for MockChargeSource {
    fn fetch(&self) -> Vec<Charge> {
        let mut charges: Vec<Charge> = (0..self.count)
            .map(|i| {
                let (student_id, student_name) = STUDENTS[i % STUDENTS.len()];
                let charge_amount = Decimal::new(AMOUNTS[i % AMOUNTS.len()], 0)
                    + Decimal::new((i % 100) as i64, 2);

                // Rotate through unpaid / partial / paid
                let paid_amount = match i % 3 {
                    0 => Decimal::ZERO,
                    1 => round_currency(charge_amount / Decimal::new(2, 0)),
                    _ => charge_amount,
                };

                // Walk backwards one day at a time from 2025-10-15,
                // wrapping inside June..October 2025
                let day_index = i % 137;
                let (month, day) = date_offset(day_index);

                Charge {
                    charge_id: format!("chg_{:04}", 2200 - i),
                    student_id: student_id.to_string(),
                    student_name: student_name.to_string(),
                    charge_amount: round_currency(charge_amount),
                    paid_amount,
                    date_charged: format!("2025-{:02}-{:02}", month, day),
                }
            })
            .collect();

        charges.sort_by(|a, b| b.date_charged.cmp(&a.date_charged));
        charges
    }
}

/// Map an offset in days before 2025-10-15 to a (month, day) pair
///
/// Covers the 137-day window 2025-06-01 through 2025-10-15.
fn date_offset(days_back: usize) -> (u32, u32) {
    // Days remaining per month counting backwards: Oct 15, Sep 30, Aug 31, Jul 31, Jun 30
    let months: [(u32, u32); 5] = [(10, 15), (9, 30), (8, 31), (7, 31), (6, 30)];
    let mut remaining = days_back as u32;
    for (month, days_in_span) in months {
        if remaining < days_in_span {
            return (month, days_in_span - remaining);
        }
        remaining -= days_in_span;
    }
    (6, 1)
}
