//! Allocation formulas: exact values, clamp bounds, and the fact that
//! totals are left un-normalized.

use advisor_core::allocation_engine::{allocate, AllocationResult};

#[test]
fn allocation_for_7_2_is_pinned() {
    assert_eq!(
        allocate(7.2),
        AllocationResult {
            us_stocks: 53,
            intl_stocks: 27,
            bonds: 27,
            alternatives: 8,
            cash: 8,
        }
    );
    assert_eq!(allocate(7.2).total(), 123, "totals are not renormalized");
}

#[test]
fn allocation_for_1_is_pinned() {
    assert_eq!(
        allocate(1.0),
        AllocationResult {
            us_stocks: 16,
            intl_stocks: 8,
            bonds: 64,
            alternatives: 0,
            cash: 14,
        }
    );
}

#[test]
fn components_stay_within_clamp_bounds() {
    for step in 0..=900 {
        let score = 1.0 + step as f64 * 0.01;
        let a = allocate(score);
        assert!((0..=65).contains(&a.us_stocks), "us_stocks {} at {score}", a.us_stocks);
        assert!((0..=40).contains(&a.intl_stocks), "intl_stocks {} at {score}", a.intl_stocks);
        assert!((5..=70).contains(&a.bonds), "bonds {} at {score}", a.bonds);
        assert!((0..=15).contains(&a.alternatives), "alternatives {} at {score}", a.alternatives);
        assert!((2..=15).contains(&a.cash), "cash {} at {score}", a.cash);
    }
}

#[test]
fn totals_drift_away_from_100() {
    let drifted = (1..=10)
        .map(|s| allocate(s as f64).total())
        .filter(|total| *total != 100)
        .count();
    assert!(drifted > 0, "expected at least one whole score with a total other than 100");
}

#[test]
fn same_score_same_allocation() {
    for score in [1.0, 3.3, 4.0, 5.5, 7.2, 9.9] {
        assert_eq!(allocate(score), allocate(score));
    }
}

#[test]
fn scores_below_range_extrapolate() {
    // 70 - 0 * 6 = 70, (0 - 3) * 2 clamps to 0, 15 - 0 = 15
    let a = allocate(0.0);
    assert_eq!(a.us_stocks, 10);
    assert_eq!(a.bonds, 70);
    assert_eq!(a.alternatives, 0);
    assert_eq!(a.cash, 15);

    // Below zero the stock buckets go negative rather than saturating.
    assert_eq!(allocate(-5.0).us_stocks, -20);
}
