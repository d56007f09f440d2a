//! Huntington–Hill priority values, memoized by (state, current seats).
//!
//! Contract:
//! - `priority(state, n) = population(state) / sqrt(n * (n + 1))` where `n`
//!   is the number of seats the state holds before the next award.
//! - First computation per key is cached forever; repeated calls return the
//!   cached value bit-identically without recomputation.
//! - Key equality is structural (name string + seat count), never identity.
//! - The dataset is a read-only borrow per call; this function holds no
//!   reference back to its owner.

use std::collections::BTreeMap;

use hh_core::{ApportionmentDataset, Disposable, Lifecycle, StateName};

use crate::AlgoError;

/// Composite memoization key with derived structural equality and ordering.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PriorityKey {
    pub state: StateName,
    pub seats: u32,
}

/// Memoizing priority-value function.
#[derive(Debug, Default)]
pub struct PriorityValues {
    cache: BTreeMap<PriorityKey, f64>,
    lifecycle: Lifecycle,
}

impl PriorityValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Priority value for awarding `state` its next seat when it currently
    /// holds `seats`. Fails on a disposed function or an unknown state.
    pub fn priority(
        &mut self,
        dataset: &ApportionmentDataset,
        state: &StateName,
        seats: u32,
    ) -> Result<f64, AlgoError> {
        self.lifecycle.verify_active()?;

        let key = PriorityKey {
            state: state.clone(),
            seats,
        };
        if let Some(&cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let population = dataset.population(state)? as f64;
        let n = seats as f64;
        let value = population / (n * (n + 1.0)).sqrt();
        self.cache.insert(key, value);
        Ok(value)
    }

    /// Number of memoized entries. Test hook for memoization idempotence.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

impl Disposable for PriorityValues {
    fn dispose(&mut self) {
        if self.lifecycle.dispose() {
            self.cache.clear();
        }
    }

    fn is_disposed(&self) -> bool {
        self.lifecycle.is_disposed()
    }
}
