//! Types module
//!
//! Contains core data structures used throughout the crate:
//! - `charge`: the stored charge record, derived status, and the
//!   create/update value objects
//! - `criteria`: filter, sort, and page criteria value objects
//! - `error`: error type for the textual criteria boundary

pub mod charge;
pub mod criteria;
pub mod error;

pub use charge::{Charge, ChargeDraft, ChargeStatus, ChargeUpdate, Student};
pub use criteria::{ChargeFilter, PageRequest, SortColumn, SortDirection, SortState};
pub use error::ChargeError;
