//! The charge store
//!
//! Owns the authoritative in-memory charge collection and its lifecycle:
//! the store starts empty and loading, is populated once (after a simulated
//! fetch delay), and is then mutated in place by create/update/delete over
//! the session. Mutations are synchronous and visible to the next read.
//!
//! The store trusts pre-validated input: business rules (positive amount,
//! paid not exceeding charge) are a form-layer concern. The store's own
//! responsibilities are id uniqueness and monetary normalization — both
//! amounts are rounded to 2 decimal places on every create and update.

use crate::money::round_currency;
use crate::store::source::ChargeSource;
use crate::types::{Charge, ChargeDraft, ChargeUpdate};
use std::time::Duration;

/// Owner of the in-memory charge collection
///
/// An explicitly owned state container: callers hold the store, mutate it
/// through its methods, and pass `charges()` snapshots to the pure query
/// functions. There is no interior mutability and no global instance.
#[derive(Debug, Clone)]
pub struct ChargeStore {
    /// The live collection; order is not meaningful, consumers re-sort
    charges: Vec<Charge>,

    /// True until the collection is first populated
    loading: bool,
}

impl ChargeStore {
    /// Create an empty store in the loading state
    pub fn new() -> Self {
        ChargeStore {
            charges: Vec::new(),
            loading: true,
        }
    }

    /// Snapshot of the current collection
    pub fn charges(&self) -> &[Charge] {
        &self.charges
    }

    /// Whether the initial load has not yet completed
    ///
    /// True from construction until the first `populate` (or completed
    /// `load`), then false for the remainder of the session.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of charges in the collection
    pub fn len(&self) -> usize {
        self.charges.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }

    /// Look up a charge by id
    pub fn get(&self, charge_id: &str) -> Option<&Charge> {
        self.charges.iter().find(|c| c.charge_id == charge_id)
    }

    /// Replace the collection and clear the loading flag
    ///
    /// The synchronous inner step of [`load`](Self::load); also the entry
    /// point for callers that already have data in hand (tests, a real
    /// fetch layer).
    pub fn populate(&mut self, charges: Vec<Charge>) {
        self.charges = charges;
        self.loading = false;
    }

    /// Populate from a source after a simulated fetch delay
    ///
    /// Models the latency contract of a real fetch without performing I/O:
    /// the store stays in the loading state for `delay`, then takes the
    /// source's collection. If the returned future is dropped before the
    /// delay elapses — the consumer was torn down — the population never
    /// happens and the store is left untouched.
    ///
    /// # Arguments
    ///
    /// * `source` - Where the collection comes from
    /// * `delay` - Simulated fetch latency
    pub async fn load<S: ChargeSource>(&mut self, source: &S, delay: Duration) {
        tokio::time::sleep(delay).await;
        self.populate(source.fetch());
    }

    /// Create a charge from a draft, assigning a fresh id
    ///
    /// The new id is one greater than the maximum numeric suffix among the
    /// current ids (non-digits stripped; an unparseable id or an empty
    /// collection counts as 0), zero-padded to 4 digits. Both amounts are
    /// rounded to 2 decimal places before storing. No business validation
    /// is applied.
    ///
    /// # Arguments
    ///
    /// * `draft` - Every charge field except the id
    ///
    /// # Returns
    ///
    /// The generated `charge_id`
    pub fn create(&mut self, draft: ChargeDraft) -> String {
        let charge_id = self.next_charge_id();
        self.charges.push(Charge {
            charge_id: charge_id.clone(),
            student_id: draft.student_id,
            student_name: draft.student_name,
            charge_amount: round_currency(draft.charge_amount),
            paid_amount: round_currency(draft.paid_amount),
            date_charged: draft.date_charged,
        });
        charge_id
    }

    /// Merge a partial update into the charge matching `charge_id`
    ///
    /// Absent fields are left untouched; amount fields present in the
    /// update are rounded to 2 decimal places first. Silent no-op when no
    /// record matches. The id itself is not part of `ChargeUpdate` and can
    /// never change.
    ///
    /// # Arguments
    ///
    /// * `charge_id` - Id of the record to update
    /// * `update` - The fields to merge
    pub fn update(&mut self, charge_id: &str, update: ChargeUpdate) {
        let Some(charge) = self.charges.iter_mut().find(|c| c.charge_id == charge_id) else {
            return;
        };

        if let Some(student_id) = update.student_id {
            charge.student_id = student_id;
        }
        if let Some(student_name) = update.student_name {
            charge.student_name = student_name;
        }
        if let Some(charge_amount) = update.charge_amount {
            charge.charge_amount = round_currency(charge_amount);
        }
        if let Some(paid_amount) = update.paid_amount {
            charge.paid_amount = round_currency(paid_amount);
        }
        if let Some(date_charged) = update.date_charged {
            charge.date_charged = date_charged;
        }
    }

    /// Remove the charge matching `charge_id`
    ///
    /// Silent no-op when no record matches; no cascading effects.
    pub fn delete(&mut self, charge_id: &str) {
        self.charges.retain(|c| c.charge_id != charge_id);
    }

    /// Next id in the `chg_NNNN` sequence
    fn next_charge_id(&self) -> String {
        let max = self
            .charges
            .iter()
            .map(|c| {
                c.charge_id
                    .chars()
                    .filter(char::is_ascii_digit)
                    .collect::<String>()
                    .parse::<u64>()
                    .unwrap_or(0)
            })
            .max()
            .unwrap_or(0);
        format!("chg_{:04}", max + 1)
    }
}

impl Default for ChargeStore {
    fn default() -> Self {
        Self::new()
    }
}
