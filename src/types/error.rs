//! Error types for the charge ledger
//!
//! The query engine and store are total over their documented inputs:
//! filtering, sorting, pagination, and the CRUD operations never fail, and
//! update/delete on an unknown id are silent no-ops. The only fallible
//! surface is the textual criteria boundary, where presentation-layer text
//! (query params, dropdown values) is turned into typed criteria.

use thiserror::Error;

/// Errors produced when parsing criteria text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChargeError {
    /// The text does not name a payment status
    #[error("Invalid charge status '{value}' (expected paid, partial, or unpaid)")]
    InvalidStatus {
        /// The unrecognized input
        value: String,
    },

    /// The text does not name a sortable column
    #[error("Invalid sort column '{value}'")]
    InvalidSortColumn {
        /// The unrecognized input
        value: String,
    },

    /// The text does not name a sort direction
    #[error("Invalid sort direction '{value}' (expected asc or desc)")]
    InvalidSortDirection {
        /// The unrecognized input
        value: String,
    },
}

impl ChargeError {
    /// Create an InvalidStatus error
    pub fn invalid_status(value: &str) -> Self {
        ChargeError::InvalidStatus {
            value: value.to_string(),
        }
    }

    /// Create an InvalidSortColumn error
    pub fn invalid_sort_column(value: &str) -> Self {
        ChargeError::InvalidSortColumn {
            value: value.to_string(),
        }
    }

    /// Create an InvalidSortDirection error
    pub fn invalid_sort_direction(value: &str) -> Self {
        ChargeError::InvalidSortDirection {
            value: value.to_string(),
        }
    }
}
