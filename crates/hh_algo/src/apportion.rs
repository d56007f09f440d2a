//! Seat-by-seat apportionment (method of equal proportions).
//!
//! Contract:
//! - Base case `size == T`: every state gets exactly one seat (the
//!   constitutional minimum).
//! - Each subsequent size awards one seat to the state with the strictly
//!   greatest priority value over its current seat count; ties go to the
//!   first maximum encountered in lexicographic state order. All other
//!   counts carry over unchanged.
//! - Memoized by house size. The chain is evaluated upward from the largest
//!   already-memoized size, so any previously computed size (or anything
//!   below it) returns from cache; cold cost is O(T * (size - T)).
//! - Every computed allocation must sum to its size exactly; a mismatch is
//!   an internal-consistency failure, not an input error.
//! - Returned maps are defensive copies; callers may mutate them freely.

use std::collections::BTreeMap;

use hh_core::{ApportionmentDataset, Disposable, Lifecycle, StateName};

use crate::{priority::PriorityValues, AlgoError};

/// Seats per state for one house size.
pub type SeatMap = BTreeMap<StateName, u32>;

/// Memoizing seat-allocation engine.
#[derive(Debug, Default)]
pub struct SeatApportionment {
    cache: BTreeMap<u32, SeatMap>,
    lifecycle: Lifecycle,
}

impl SeatApportionment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full state-to-seats map for `size`. `priority` supplies (and caches)
    /// the per-state priority values; `dataset` defines the state set.
    pub fn allocate(
        &mut self,
        dataset: &ApportionmentDataset,
        priority: &mut PriorityValues,
        size: u32,
    ) -> Result<SeatMap, AlgoError> {
        self.lifecycle.verify_active()?;

        let total_states = dataset.len() as u32;
        if size < total_states {
            return Err(AlgoError::HouseTooSmall {
                size,
                min: total_states,
            });
        }

        if let Some(cached) = self.cache.get(&size) {
            return Ok(cached.clone());
        }

        // Resume from the largest memoized size at or below the request,
        // falling back to the one-seat-per-state base case.
        let resume = self
            .cache
            .range(..=size)
            .next_back()
            .map(|(&s, map)| (s, map.clone()));
        let (mut current_size, mut seats) = match resume {
            Some(found) => found,
            None => {
                let base: SeatMap = dataset.state_names().map(|n| (n.clone(), 1)).collect();
                self.check_sum(total_states, &base)?;
                self.cache.insert(total_states, base.clone());
                (total_states, base)
            }
        };

        debug_assert_eq!(
            seats.len() as u32,
            total_states,
            "memoized allocations must cover the dataset's state set"
        );

        while current_size < size {
            let winner = next_award(dataset, priority, &seats)?;
            *seats
                .get_mut(&winner)
                .expect("winner is drawn from the allocation map") += 1;
            current_size += 1;

            self.check_sum(current_size, &seats)?;
            self.cache.insert(current_size, seats.clone());
        }

        Ok(seats)
    }

    /// Number of memoized house sizes.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Invariant checked on every computed allocation: seats sum to size.
    fn check_sum(&self, size: u32, seats: &SeatMap) -> Result<(), AlgoError> {
        let total: u64 = seats.values().map(|&s| s as u64).sum();
        if total != size as u64 {
            return Err(AlgoError::SeatSumMismatch { size, total });
        }
        Ok(())
    }
}

impl Disposable for SeatApportionment {
    fn dispose(&mut self) {
        if self.lifecycle.dispose() {
            self.cache.clear();
        }
    }

    fn is_disposed(&self) -> bool {
        self.lifecycle.is_disposed()
    }
}

/// Argmax of the priority value over current seat counts. Scans in
/// lexicographic state order; a later state must be *strictly* greater to
/// displace the current best, so exact ties resolve to the first state.
fn next_award(
    dataset: &ApportionmentDataset,
    priority: &mut PriorityValues,
    seats: &SeatMap,
) -> Result<StateName, AlgoError> {
    debug_assert!(!seats.is_empty(), "allocation map must cover the state set");

    let mut best: Option<(StateName, f64)> = None;

    for (state, &n) in seats {
        let value = priority.priority(dataset, state, n)?;
        match &best {
            Some((_, best_value)) if value <= *best_value => {}
            _ => best = Some((state.clone(), value)),
        }
    }

    let (state, _) = best.expect("non-empty allocation map yields a maximum");
    Ok(state)
}
