//! Ideal-size scan: sweep the disparity metric across candidate house sizes.
//!
//! For every size from the one-seat-per-state floor up to the constitutional
//! ceiling (exclusive), compute the max/min population-per-seat quotient and
//! report the size that minimizes it (smallest size on ties). The underlying
//! allocations are memoized, so the sweep costs one seat award per size.

use serde::Serialize;

use crate::{HouseApportionment, PipelineError};

/// One scanned candidate size.
#[derive(Clone, Debug, Serialize)]
pub struct ScanRow {
    pub size: u32,
    pub quotient: f64,
}

/// Scan output, serializable as a JSON report.
#[derive(Clone, Debug, Serialize)]
pub struct ScanReport {
    pub rows: Vec<ScanRow>,
    pub ideal_size: u32,
    pub ideal_quotient: f64,
}

/// Sweep sizes `T .. min(max_size, max_num_reps())` (exclusive upper bound).
/// `max_size` caps the range for bounded runs; the scan must cover at least
/// one size.
pub fn run_scan(
    facade: &mut HouseApportionment,
    max_size: Option<u32>,
) -> Result<ScanReport, PipelineError> {
    let floor = facade.total_states()?;
    let ceiling = facade.max_num_reps()?;
    let upper = match max_size {
        Some(cap) => cap.min(ceiling),
        None => ceiling,
    };
    if upper <= floor {
        return Err(PipelineError::Invalid(format!(
            "scan range is empty: floor {floor}, upper bound {upper}"
        )));
    }

    let mut rows = Vec::with_capacity((upper - floor) as usize);
    let mut ideal: Option<(u32, f64)> = None;

    for size in floor..upper {
        let quotient = facade.ratio_quotient(size)?;
        match ideal {
            Some((_, best)) if quotient >= best => {}
            _ => ideal = Some((size, quotient)),
        }
        rows.push(ScanRow { size, quotient });
    }

    // range verified non-empty above
    let (ideal_size, ideal_quotient) = ideal.expect("non-empty scan yields a minimum");
    Ok(ScanReport {
        rows,
        ideal_size,
        ideal_quotient,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hh_core::ApportionmentDataset;
    use std::collections::BTreeMap;

    fn facade(scale: u64) -> HouseApportionment {
        let mut pops: BTreeMap<hh_core::StateName, u64> = BTreeMap::new();
        pops.insert("A".parse().unwrap(), 100 * scale);
        pops.insert("B".parse().unwrap(), 100 * scale);
        pops.insert("C".parse().unwrap(), 50 * scale);
        HouseApportionment::new(ApportionmentDataset::new(pops).unwrap()).unwrap()
    }

    #[test]
    fn scan_covers_the_full_range_and_finds_the_minimum() {
        // total population 250_000 -> ceiling 8, floor 3: sizes 3..8.
        // Size 5 allocates (2, 2, 1), ratios all 50_000, quotient exactly 1.
        let mut f = facade(1_000);
        let report = run_scan(&mut f, None).unwrap();

        assert_eq!(report.rows.len(), 5);
        assert_eq!(report.rows[0].size, 3);
        assert_eq!(report.rows[4].size, 7);
        assert_eq!(report.ideal_size, 5);
        assert_eq!(report.ideal_quotient, 1.0);
    }

    #[test]
    fn max_size_caps_the_range() {
        let mut f = facade(1_000);
        let report = run_scan(&mut f, Some(5)).unwrap();
        assert_eq!(report.rows.len(), 2); // sizes 3 and 4
        assert_eq!(report.rows.last().unwrap().size, 4);
    }

    #[test]
    fn empty_range_is_invalid() {
        // ceiling is 250/30_000 = 0, below the 3-state floor
        let mut f = facade(1);
        assert!(matches!(
            run_scan(&mut f, None),
            Err(PipelineError::Invalid(_))
        ));
    }
}
