//! Charge store module
//!
//! - `charge_store` - the owned, mutable charge collection and its
//!   create/update/delete operations
//! - `source` - the data-source seam and the deterministic mock dataset

pub mod charge_store;
pub mod source;

pub use charge_store::ChargeStore;
pub use source::{ChargeSource, MockChargeSource};
