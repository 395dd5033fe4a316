//! Integration tests: equilibrium distribution properties
//!
//! Exercises the model through its public API the way a diagram renderer
//! would — per-state queries across whole pH ranges — and checks the
//! invariants the distribution formula guarantees: conservation, limiting
//! behaviour, range validity and concentration scaling.

mod common;

use common::{acetic_acid, phosphate_like, relative_error};
use sillen_rs::chemistry::{EquilibriumError, EquilibriumModel, Speciation};

// =============================================================================
// Conservation and range
// =============================================================================

#[test]
fn test_fractions_sum_to_one_across_the_diagram_range() {
    let acid = phosphate_like();
    let mut ph = -2.0;
    while ph <= 16.0 {
        let sum: f64 = (0..acid.num_states())
            .map(|i| acid.fraction(i, ph).unwrap())
            .sum();
        assert!(
            relative_error(sum, 1.0) < 1e-9,
            "Σα = {sum} at pH {ph}"
        );
        ph += 0.25;
    }
}

#[test]
fn test_fractions_within_unit_interval() {
    let acid = phosphate_like();
    let mut ph = -2.0;
    while ph <= 16.0 {
        for i in 0..acid.num_states() {
            let alpha = acid.fraction(i, ph).unwrap();
            assert!((0.0..=1.0).contains(&alpha), "α({i}, {ph}) = {alpha}");
        }
        ph += 0.5;
    }
}

#[test]
fn test_concentrations_conserve_total_everywhere() {
    let acid = phosphate_like();
    for ph in [0.0, 3.13, 7.0, 11.5, 14.0] {
        let total: f64 = (0..acid.num_states())
            .map(|i| acid.concentration(i, ph).unwrap())
            .sum();
        assert!(relative_error(total, acid.total_concentration()) < 1e-9);
    }
}

#[test]
fn test_concentration_is_exactly_total_times_fraction() {
    let acid = acetic_acid();
    for ph in [1.0, 4.76, 9.0] {
        for i in 0..acid.num_states() {
            let expected = acid.total_concentration() * acid.fraction(i, ph).unwrap();
            // Same floating-point value, modulo nothing: one multiplication
            assert_eq!(acid.concentration(i, ph).unwrap(), expected);
        }
    }
}

// =============================================================================
// Limiting behaviour
// =============================================================================

#[test]
fn test_strongly_acidic_limit_is_fully_protonated() {
    let acid = phosphate_like();
    assert!(acid.fraction(0, -8.0).unwrap() > 1.0 - 1e-9);
    for i in 1..acid.num_states() {
        assert!(acid.fraction(i, -8.0).unwrap() < 1e-9);
    }
}

#[test]
fn test_strongly_basic_limit_is_fully_deprotonated() {
    let acid = phosphate_like();
    let n = acid.num_states() - 1;
    assert!(acid.fraction(n, 22.0).unwrap() > 1.0 - 1e-9);
    for i in 0..n {
        assert!(acid.fraction(i, 22.0).unwrap() < 1e-9);
    }
}

// =============================================================================
// Degenerate acid
// =============================================================================

#[test]
fn test_zero_step_acid_has_one_full_state() {
    let acid = EquilibriumModel::new(vec![], 0.3).unwrap();
    assert_eq!(acid.num_states(), 1);
    for ph in [0.0, 7.0, 14.0] {
        assert_eq!(acid.fraction(0, ph).unwrap(), 1.0);
        assert_eq!(acid.concentration(0, ph).unwrap(), 0.3);
    }
}

// =============================================================================
// Error surface
// =============================================================================

#[test]
fn test_out_of_range_state_is_rejected_by_every_query() {
    let acid = phosphate_like();
    let bad = acid.num_states(); // first invalid index (n + 1)

    for result in [
        acid.fraction(bad, 7.0),
        acid.concentration(bad, 7.0),
        acid.log_concentration(bad, 7.0),
    ] {
        assert_eq!(
            result.unwrap_err(),
            EquilibriumError::IndexOutOfRange { index: bad, num_states: 4 }
        );
    }
    assert!(acid.label(bad).is_err());
    assert!(acid.fraction_series(bad, &[7.0]).is_err());
    assert!(acid.log_concentration_series(bad, &[7.0]).is_err());
}

#[test]
fn test_construction_failures() {
    assert!(EquilibriumModel::new(vec![4.76], 0.0).is_err());
    assert!(EquilibriumModel::new(vec![4.76], -1.0).is_err());
    assert!(EquilibriumModel::new(vec![f64::NAN], 0.1).is_err());
    assert!(EquilibriumModel::new(vec![4.76, f64::NEG_INFINITY], 0.1).is_err());
}

// =============================================================================
// Concrete triprotic scenario: pKa [3.13, 4.76, 6.4], C = 0.1
// =============================================================================

#[test]
fn test_fully_protonated_dominates_at_ph_one() {
    // pH 1 sits two units below pKa1 = 3.13
    let acid = phosphate_like();
    assert!(acid.fraction(0, 1.0).unwrap() > 0.99);
}

#[test]
fn test_fully_deprotonated_dominates_at_neutral_ph() {
    // pH 7 is above every pKa, but only 0.6 above pKa3 = 6.4: direct
    // evaluation gives α3 = 1/(1 + 10^-0.6 + 10^-2.84 + 10^-6.71) ≈ 0.798.
    // Dominant, though still sharing visibly with HPO4-like state 2.
    let acid = phosphate_like();
    let a3 = acid.fraction(3, 7.0).unwrap();
    for i in 0..3 {
        assert!(a3 > acid.fraction(i, 7.0).unwrap());
    }
    assert!(relative_error(a3, 0.798) < 0.01);

    // One unit further up the tail closes: α3(8) = 1/(1 + 10^-1.6 + ...)
    assert!(acid.fraction(3, 8.0).unwrap() > 0.9);
}

#[test]
fn test_first_crossing_at_ph_equal_pka1() {
    // At pH = pKa1 the H^n and H^(n-1)·Ka1 terms are equal by definition:
    // α0 and α1 cross exactly, each holding a comparable share of the pool.
    let acid = phosphate_like();
    let a0 = acid.fraction(0, 3.13).unwrap();
    let a1 = acid.fraction(1, 3.13).unwrap();

    assert!(relative_error(a0, a1) < 1e-9, "α0 = {a0}, α1 = {a1}");
    // Substantial, not just nonzero: together they carry nearly everything
    assert!(a0 > 0.45 && a0 < 0.5);
}

#[test]
fn test_scenario_log_concentrations_match_hand_evaluation() {
    // log c(0, 1.0) ≈ log10(0.1 · 0.9926) — state terms at pH 1:
    // t = [-3, -5.13, -8.89, -14.29]
    let acid = phosphate_like();
    let logc = acid.log_concentration(0, 1.0).unwrap();
    let alpha = acid.fraction(0, 1.0).unwrap();
    assert!(relative_error(logc, (0.1 * alpha).log10()) < 1e-9);
}

// =============================================================================
// Trait object usage (renderer's view of the model)
// =============================================================================

#[test]
fn test_model_usable_through_speciation_trait() {
    let acid = phosphate_like();
    let speciation: &dyn Speciation = &acid;

    assert_eq!(speciation.num_states(), 4);
    let sum: f64 = (0..speciation.num_states())
        .map(|i| speciation.fraction(i, 5.0).unwrap())
        .sum();
    assert!(relative_error(sum, 1.0) < 1e-9);
    assert_eq!(speciation.label(3).unwrap(), "PO4^3-");
}

#[test]
fn test_model_shared_across_threads() {
    // Queries are pure; a shared reference must be usable concurrently.
    let acid = std::sync::Arc::new(phosphate_like());

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let acid = acid.clone();
            std::thread::spawn(move || {
                let ph = 2.0 + t as f64 * 3.0;
                let sum: f64 = (0..acid.num_states())
                    .map(|i| acid.fraction(i, ph).unwrap())
                    .sum();
                assert!((sum - 1.0).abs() < 1e-9);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
