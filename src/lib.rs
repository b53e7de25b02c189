//! Charge Ledger Library
//! # Overview
//!
//! This library provides the data and query core of a student-charge
//! administration table: an in-memory charge store with CRUD operations
//! and a pure query engine for filtering, sorting, and paginating the
//! collection.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Charge, status, criteria value objects)
//! - [`money`] - The 2-decimal monetary rounding rule
//! - [`store`] - The mutable charge collection:
//!   - [`store::charge_store`] - Ownership, id generation, CRUD, and the
//!     simulated initial load
//!   - [`store::source`] - The data-source seam and mock dataset
//! - [`query`] - Pure query functions over a store snapshot:
//!   - [`query::filter`] - Multi-field AND filtering
//!   - [`query::sort`] - Stable per-column ordering
//!   - [`query::paginate`] - 1-indexed page slicing
//!   - [`query::pipeline`] - The composed filter -> sort -> paginate run
//!
//! # Data Flow
//!
//! Reads flow one way: store snapshot -> filter -> sort -> paginate ->
//! presentation. Mutations flow the other way: edit and delete actions hit
//! the store, and the next query recomputes the visible page from scratch,
//! which is correct at the modeled data volumes.
//!
//! # Derived Values
//!
//! A charge's payment status (paid / partial / unpaid) and outstanding
//! balance are never stored; they are recomputed from the current amounts
//! on every read.

pub mod money;
pub mod query;
pub mod store;
pub mod types;

pub use money::round_currency;
pub use query::{
    filter_charges, paginate, run_query, sort_charges, total_pages, unique_students, ChargePage,
};
pub use store::{ChargeSource, ChargeStore, MockChargeSource};
pub use types::{
    Charge, ChargeDraft, ChargeError, ChargeFilter, ChargeStatus, ChargeUpdate, PageRequest,
    SortColumn, SortDirection, SortState, Student,
};
