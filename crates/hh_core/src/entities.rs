//! Core entities: the `StateName` token and the immutable dataset.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// State name token. Lexicographic `Ord` over the inner string is the
/// canonical iteration order everywhere in the engine, which makes it the
/// tie-break order when two states carry equal priority values.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct StateName(String);

impl StateName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StateName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidToken);
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Immutable per-state apportionment populations. Constructed once by the
/// loader and handed to the engines as a read-only borrow; the engines never
/// hold a reference back to their owner.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApportionmentDataset {
    populations: BTreeMap<StateName, u64>,
}

impl ApportionmentDataset {
    /// Build from a populated map. An empty map is rejected: every query on
    /// an empty dataset would be degenerate.
    pub fn new(populations: BTreeMap<StateName, u64>) -> Result<Self, CoreError> {
        if populations.is_empty() {
            return Err(CoreError::EmptyDataset);
        }
        Ok(Self { populations })
    }

    /// Population of one state; `UnknownState` if absent.
    pub fn population(&self, state: &StateName) -> Result<u64, CoreError> {
        self.populations
            .get(state)
            .copied()
            .ok_or_else(|| CoreError::UnknownState(state.as_str().to_string()))
    }

    /// State names in lexicographic (canonical) order.
    pub fn state_names(&self) -> impl Iterator<Item = &StateName> {
        self.populations.keys()
    }

    pub fn len(&self) -> usize {
        self.populations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.populations.is_empty()
    }

    /// Sum of all populations. `u128` keeps the sum exact well past any
    /// realistic census total.
    pub fn total_population(&self) -> u128 {
        self.populations.values().map(|&p| p as u128).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> StateName {
        s.parse().unwrap()
    }

    #[test]
    fn state_name_rejects_blank() {
        assert!("".parse::<StateName>().is_err());
        assert!("   ".parse::<StateName>().is_err());
        assert_eq!(name("  Ohio ").as_str(), "Ohio");
    }

    #[test]
    fn dataset_rejects_empty() {
        assert_eq!(
            ApportionmentDataset::new(BTreeMap::new()),
            Err(CoreError::EmptyDataset)
        );
    }

    #[test]
    fn dataset_lookup_and_totals() {
        let mut pops = BTreeMap::new();
        pops.insert(name("B"), 200u64);
        pops.insert(name("A"), 100u64);
        let ds = ApportionmentDataset::new(pops).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.population(&name("A")).unwrap(), 100);
        assert_eq!(ds.total_population(), 300);
        assert!(matches!(
            ds.population(&name("Z")),
            Err(CoreError::UnknownState(_))
        ));

        // canonical order is lexicographic
        let order: Vec<&str> = ds.state_names().map(StateName::as_str).collect();
        assert_eq!(order, ["A", "B"]);
    }
}
