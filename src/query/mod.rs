//! Query engine: pure functions over a charge snapshot
//!
//! All functions here are stateless, deterministic, and total — no input
//! produces an error, and nothing is mutated. The store hands out a
//! snapshot; the presentation layer drives these functions with its current
//! criteria whenever an input changes:
//! - `filter` - multi-field AND filtering
//! - `sort` - stable per-column ordering
//! - `paginate` - 1-indexed page slicing
//! - `students` - unique-student extraction for the filter dropdown
//! - `pipeline` - the composed filter -> sort -> paginate run

pub mod filter;
pub mod paginate;
pub mod pipeline;
pub mod sort;
pub mod students;

pub use filter::filter_charges;
pub use paginate::{paginate, total_pages};
pub use pipeline::{run_query, ChargePage};
pub use sort::sort_charges;
pub use students::unique_students;
