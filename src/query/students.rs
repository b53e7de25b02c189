//! Unique-student extraction
//!
//! The student filter dropdown is populated from the charge collection
//! itself rather than a separate student table.

use crate::types::{Charge, Student};
use std::collections::HashSet;

/// Deduplicate the students referenced by a charge collection
///
/// Dedupes by `student_id`; if names ever diverge for the same id, the
/// first occurrence's name wins (the denormalized copies are not
/// validated). The result is sorted by name.
///
/// # Arguments
///
/// * `charges` - The collection to scan
///
/// # Returns
///
/// One `Student` per distinct `student_id`, ordered by name
pub fn unique_students(charges: &[Charge]) -> Vec<Student> {
    let mut seen = HashSet::new();
    let mut students: Vec<Student> = charges
        .iter()
        .filter(|c| seen.insert(c.student_id.clone()))
        .map(|c| Student {
            id: c.student_id.clone(),
            name: c.student_name.clone(),
        })
        .collect();
    students.sort_by(|a, b| a.name.cmp(&b.name));
    students
}
