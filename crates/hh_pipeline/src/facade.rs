//! Apportionment facade: owns the dataset and both engines.
//!
//! Ownership is strictly top-down. The engines take the dataset as a
//! borrowed argument per call instead of holding a back-reference, so
//! disposal ordering needs no coordination: disposing the facade cascades
//! to both engines and every later accessor fails with `Disposed`.

use std::path::Path;

use hh_algo::{PriorityValues, SeatApportionment, SeatMap};
use hh_core::{ApportionmentDataset, Disposable, Lifecycle, StateName};
use hh_io::{builtin_table, load_table, ParsedTable};

use crate::PipelineError;

/// One representative per thirty thousand persons, at most
/// (U.S. Const. art. I, § 2).
const PERSONS_PER_REP_FLOOR: u128 = 30_000;

/// 2020 statutory house size used for the load-time validation round-trip.
const REFERENCE_HOUSE_SIZE: u32 = 435;

pub struct HouseApportionment {
    dataset: ApportionmentDataset,
    priority: PriorityValues,
    apportionment: SeatApportionment,
    lifecycle: Lifecycle,
}

impl HouseApportionment {
    /// Build over an already-validated dataset (no reference column check).
    pub fn new(dataset: ApportionmentDataset) -> Result<Self, PipelineError> {
        if dataset.is_empty() {
            return Err(PipelineError::Invalid("dataset has no states".into()));
        }
        Ok(Self {
            dataset,
            priority: PriorityValues::new(),
            apportionment: SeatApportionment::new(),
            lifecycle: Lifecycle::Active,
        })
    }

    /// Build from a parsed table and validate: the computed allocation at
    /// the reference size must exactly equal the published 2020 column.
    /// On failure the partially-built facade is disposed before the error
    /// propagates, so no live caches leak out of a failed construction.
    pub fn from_table(table: ParsedTable) -> Result<Self, PipelineError> {
        let ParsedTable { dataset, reps_2020 } = table;
        let mut facade = Self::new(dataset)?;

        let reference_total: u64 = reps_2020.values().map(|&r| r as u64).sum();
        if reference_total != REFERENCE_HOUSE_SIZE as u64 {
            facade.dispose();
            return Err(PipelineError::Consistency(format!(
                "validation column sums to {reference_total}, expected {REFERENCE_HOUSE_SIZE}"
            )));
        }

        let computed = match facade.allocate(REFERENCE_HOUSE_SIZE) {
            Ok(map) => map,
            Err(e) => {
                facade.dispose();
                return Err(e);
            }
        };
        if computed != reps_2020 {
            facade.dispose();
            return Err(PipelineError::Consistency(
                "computed allocation at the reference size does not match the \
                 published column"
                    .into(),
            ));
        }

        Ok(facade)
    }

    /// Load the bundled 2020 census table.
    pub fn load_builtin() -> Result<Self, PipelineError> {
        Self::from_table(builtin_table()?)
    }

    /// Load a table file from disk.
    pub fn load_from_path(path: &Path) -> Result<Self, PipelineError> {
        Self::from_table(load_table(path)?)
    }

    /// Number of states in the dataset (the one-seat-per-state floor).
    pub fn total_states(&self) -> Result<u32, PipelineError> {
        self.lifecycle.verify_active().map_err(|_| PipelineError::Disposed)?;
        Ok(self.dataset.len() as u32)
    }

    /// Constitutional ceiling: floor(total population / 30,000).
    pub fn max_num_reps(&self) -> Result<u32, PipelineError> {
        self.lifecycle.verify_active().map_err(|_| PipelineError::Disposed)?;
        Ok((self.dataset.total_population() / PERSONS_PER_REP_FLOOR) as u32)
    }

    /// Full seat map for `size` (defensive copy; memoized underneath).
    pub fn allocate(&mut self, size: u32) -> Result<SeatMap, PipelineError> {
        self.lifecycle.verify_active().map_err(|_| PipelineError::Disposed)?;
        Ok(self
            .apportionment
            .allocate(&self.dataset, &mut self.priority, size)?)
    }

    /// Disparity metric for `size`: max over min of the per-state
    /// population-to-seats ratios.
    pub fn ratio_quotient(&mut self, size: u32) -> Result<f64, PipelineError> {
        let seats = self.allocate(size)?;

        let mut min_ratio = f64::INFINITY;
        let mut max_ratio = f64::NEG_INFINITY;
        for (state, &count) in &seats {
            let population = self
                .dataset
                .population(state)
                .map_err(|e| PipelineError::Invalid(e.to_string()))? as f64;
            let ratio = population / count as f64;
            min_ratio = min_ratio.min(ratio);
            max_ratio = max_ratio.max(ratio);
        }
        Ok(max_ratio / min_ratio)
    }

    /// Population of one state.
    pub fn state_population(&self, state: &StateName) -> Result<u64, PipelineError> {
        self.lifecycle.verify_active().map_err(|_| PipelineError::Disposed)?;
        self.dataset
            .population(state)
            .map_err(|e| PipelineError::Invalid(e.to_string()))
    }
}

impl Disposable for HouseApportionment {
    fn dispose(&mut self) {
        if self.lifecycle.dispose() {
            self.priority.dispose();
            self.apportionment.dispose();
        }
    }

    fn is_disposed(&self) -> bool {
        self.lifecycle.is_disposed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn toy_dataset() -> ApportionmentDataset {
        let mut pops: BTreeMap<StateName, u64> = BTreeMap::new();
        pops.insert("A".parse().unwrap(), 100);
        pops.insert("B".parse().unwrap(), 100);
        pops.insert("C".parse().unwrap(), 50);
        ApportionmentDataset::new(pops).unwrap()
    }

    #[test]
    fn allocate_below_floor_is_invalid() {
        let mut facade = HouseApportionment::new(toy_dataset()).unwrap();
        assert!(matches!(
            facade.allocate(2),
            Err(PipelineError::Invalid(_))
        ));
    }

    #[test]
    fn max_num_reps_floors_the_population_quotient() {
        let facade = HouseApportionment::new(toy_dataset()).unwrap();
        // total population 250 -> 250 / 30_000 floors to 0
        assert_eq!(facade.max_num_reps().unwrap(), 0);
    }

    #[test]
    fn toy_quotient_matches_hand_computation() {
        // Size 4: three minimum seats plus one extra. A and B tie on the
        // priority value; A (first lexicographically) takes the seat, so the
        // ratios are [50, 100, 50] and the quotient is 2.0.
        let mut facade = HouseApportionment::new(toy_dataset()).unwrap();
        let seats = facade.allocate(4).unwrap();
        assert_eq!(seats[&"A".parse().unwrap()], 2);
        assert_eq!(seats[&"B".parse().unwrap()], 1);
        assert_eq!(seats[&"C".parse().unwrap()], 1);
        assert_eq!(facade.ratio_quotient(4).unwrap(), 2.0);
    }

    #[test]
    fn disposal_cascades_and_blocks_access() {
        let mut facade = HouseApportionment::new(toy_dataset()).unwrap();
        facade.allocate(5).unwrap();

        facade.dispose();
        facade.dispose(); // idempotent
        assert!(facade.is_disposed());
        assert!(matches!(facade.allocate(5), Err(PipelineError::Disposed)));
        assert!(matches!(
            facade.max_num_reps(),
            Err(PipelineError::Disposed)
        ));
        assert!(matches!(
            facade.state_population(&"A".parse().unwrap()),
            Err(PipelineError::Disposed)
        ));
    }

    #[test]
    fn from_table_rejects_a_corrupt_validation_column() {
        let table = hh_io::builtin_table().unwrap();
        let mut corrupted = table.clone();
        // Move one seat between two states; the sum still holds but the
        // round-trip comparison must fail.
        let wyoming: StateName = "Wyoming".parse().unwrap();
        let california: StateName = "California".parse().unwrap();
        *corrupted.reps_2020.get_mut(&wyoming).unwrap() += 1;
        *corrupted.reps_2020.get_mut(&california).unwrap() -= 1;

        assert!(matches!(
            HouseApportionment::from_table(corrupted),
            Err(PipelineError::Consistency(_))
        ));
    }
}
