//! Filter, sort, and page criteria value objects
//!
//! These are the value objects the presentation layer hands to the query
//! engine on every input change. None of them are persisted. Enum criteria
//! implement `FromStr` for the boundary that turns user-facing text (query
//! params, dropdown values) into typed criteria.

use crate::types::error::ChargeError;
use crate::types::ChargeStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Multi-field filter criteria, combined with logical AND
///
/// An empty string (or `None` for status) means the field places no
/// constraint; the default value matches every charge. The amount bounds
/// are kept as text because they arrive from a free-form input; a bound
/// that does not parse as a number is ignored, not treated as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargeFilter {
    /// Case-insensitive substring match against charge id, student name,
    /// or student id; surrounding whitespace is ignored
    pub search: String,

    /// Exact match against the derived payment status
    pub status: Option<ChargeStatus>,

    /// Exact match against the student id
    pub student_id: String,

    /// Inclusive lower bound on `date_charged`, ISO `YYYY-MM-DD`
    pub date_from: String,

    /// Inclusive upper bound on `date_charged`, ISO `YYYY-MM-DD`
    pub date_to: String,

    /// Inclusive lower bound on `charge_amount`, as entered
    pub amount_min: String,

    /// Inclusive upper bound on `charge_amount`, as entered
    pub amount_max: String,
}

/// Sortable columns of the charge table
///
/// `Outstanding` and `Status` are derived columns: they sort on the rounded
/// outstanding balance and on the fixed status rank respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    ChargeId,
    DateCharged,
    StudentId,
    StudentName,
    ChargeAmount,
    PaidAmount,
    Outstanding,
    Status,
}

impl FromStr for SortColumn {
    type Err = ChargeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "charge_id" => Ok(SortColumn::ChargeId),
            "date_charged" => Ok(SortColumn::DateCharged),
            "student_id" => Ok(SortColumn::StudentId),
            "student_name" => Ok(SortColumn::StudentName),
            "charge_amount" => Ok(SortColumn::ChargeAmount),
            "paid_amount" => Ok(SortColumn::PaidAmount),
            "outstanding" => Ok(SortColumn::Outstanding),
            "status" => Ok(SortColumn::Status),
            _ => Err(ChargeError::invalid_sort_column(s)),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ChargeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(ChargeError::invalid_sort_direction(s)),
        }
    }
}

impl FromStr for ChargeStatus {
    type Err = ChargeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(ChargeStatus::Paid),
            "partial" => Ok(ChargeStatus::Partial),
            "unpaid" => Ok(ChargeStatus::Unpaid),
            _ => Err(ChargeError::invalid_status(s)),
        }
    }
}

/// A column selector plus a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Column to order by
    pub column: SortColumn,
    /// Ascending or descending
    pub direction: SortDirection,
}

impl SortState {
    /// Convenience constructor
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        SortState { column, direction }
    }
}

/// A 1-indexed page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number, starting at 1
    pub page: usize,
    /// Rows per page
    pub page_size: usize,
}

impl PageRequest {
    /// Convenience constructor
    pub fn new(page: usize, page_size: usize) -> Self {
        PageRequest { page, page_size }
    }
}
