//! Helper functions for integration tests

use sillen_rs::chemistry::EquilibriumModel;

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// The triprotic scenario acid: pKa [3.13, 4.76, 6.4], C = 0.1 mol/L
pub fn phosphate_like() -> EquilibriumModel {
    EquilibriumModel::new(vec![3.13, 4.76, 6.4], 0.1)
        .unwrap()
        .with_name("PO4")
        .with_charge(-3)
}

/// Monoprotic acetic acid: pKa 4.76, C = 0.01 mol/L
pub fn acetic_acid() -> EquilibriumModel {
    EquilibriumModel::new(vec![4.76], 0.01)
        .unwrap()
        .with_name("Ac")
        .with_charge(-1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
