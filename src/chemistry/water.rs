//! Water autoprotolysis
//!
//! Every Sillén diagram carries two thin reference lines for the solvent
//! itself, fixed by the ion product of water `Kw = [H⁺][OH⁻] = 1e-14`
//! (25 °C):
//!
//! ```text
//! log10 [H⁺]  = -pH
//! log10 [OH⁻] = pH - pKw
//! ```
//!
//! These are exact identities, not equilibrium computations, so they live
//! here as free functions rather than on a model type.

/// Ion product of water at 25 °C.
pub const KW: f64 = 1e-14;

/// `-log10(Kw)` at 25 °C.
pub const PKW: f64 = 14.0;

/// Hydronium concentration `[H⁺] = 10^-pH` [mol/L].
pub fn hydronium(ph: f64) -> f64 {
    10f64.powf(-ph)
}

/// Hydroxide concentration `[OH⁻] = Kw / [H⁺] = 10^(pH - pKw)` [mol/L].
pub fn hydroxide(ph: f64) -> f64 {
    10f64.powf(ph - PKW)
}

/// `log10 [H⁺]`, the descending diagonal of a Sillén diagram.
pub fn log_hydronium(ph: f64) -> f64 {
    -ph
}

/// `log10 [OH⁻]`, the ascending diagonal of a Sillén diagram.
pub fn log_hydroxide(ph: f64) -> f64 {
    ph - PKW
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_neutral_point() {
        // At pH 7, [H⁺] = [OH⁻] = 1e-7
        assert_relative_eq!(hydronium(7.0), 1e-7, epsilon = 1e-21);
        assert_relative_eq!(hydroxide(7.0), 1e-7, epsilon = 1e-21);
    }

    #[test]
    fn test_ion_product_holds_everywhere() {
        for ph in [0.0, 2.5, 7.0, 11.3, 14.0] {
            assert_relative_eq!(hydronium(ph) * hydroxide(ph), KW, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_log_forms_are_exact() {
        assert_eq!(log_hydronium(3.2), -3.2);
        assert_eq!(log_hydroxide(3.2), 3.2 - PKW);
    }
}
