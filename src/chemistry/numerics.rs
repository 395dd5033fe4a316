//! Log-space numerical helpers
//!
//! # Why log space?
//!
//! The speciation formula is a ratio of products of powers of the proton
//! activity `H = 10^-pH` and the dissociation constants `Ka[j] = 10^-pKa[j]`.
//! Over a diagram's pH range those terms span many orders of magnitude
//! (pH 0..14 alone puts `H` between 1 and 1e-14), and for acids with several
//! steps or a wide pKa spread the raw products underflow `f64` long before
//! the *ratio* becomes meaningless.
//!
//! All core evaluation therefore works on the base-10 logarithms of the
//! terms and only exponentiates the final, well-scaled difference. The sum
//! in the denominator becomes a logsumexp:
//!
//! ```text
//! log10(Σ 10^tₖ) = m + log10(Σ 10^(tₖ - m)),   m = max tₖ
//! ```
//!
//! Shifting by the maximum keeps every exponent ≤ 0, so nothing overflows
//! and the dominant term survives at full precision.

/// Base-10 logsumexp over a slice of log10-scale terms.
///
/// Returns `log10(Σₖ 10^(terms[k]))` without leaving log space for any
/// poorly scaled intermediate.
///
/// # Edge cases
///
/// - Empty slice: returns `f64::NEG_INFINITY` (the log of an empty sum)
/// - All terms `-inf`: returns `-inf`
///
/// # Example
///
/// ```rust
/// use sillen_rs::chemistry::numerics::log_sum_pow10;
///
/// // 10^0 + 10^0 = 2  →  log10(2)
/// let lse = log_sum_pow10(&[0.0, 0.0]);
/// assert!((lse - 2.0_f64.log10()).abs() < 1e-14);
/// ```
pub fn log_sum_pow10(terms: &[f64]) -> f64 {
    let m = terms.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if m == f64::NEG_INFINITY {
        // Empty input or all terms are -inf
        return f64::NEG_INFINITY;
    }

    let sum: f64 = terms.iter().map(|&t| 10f64.powf(t - m)).sum();
    m + sum.log10()
}

/// Streaming variant of [`log_sum_pow10`] for iterators.
///
/// Used where the terms are produced on the fly (one per protonation state)
/// and materializing a slice per call would mean a heap allocation in the
/// hot loop. Takes two passes over the iterator, so it must be `Clone`.
pub fn log_sum_pow10_iter<I>(terms: I) -> f64
where
    I: Iterator<Item = f64> + Clone,
{
    let m = terms.clone().fold(f64::NEG_INFINITY, f64::max);

    if m == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }

    let sum: f64 = terms.map(|t| 10f64.powf(t - m)).sum();
    m + sum.log10()
}

/// Accumulate one log10-scale term into a running logsumexp.
///
/// `acc` and `term` are both log10 values; the result is
/// `log10(10^acc + 10^term)`. Start the accumulator at `f64::NEG_INFINITY`
/// (the log of zero).
pub fn log_add_pow10(acc: f64, term: f64) -> f64 {
    if acc == f64::NEG_INFINITY {
        return term;
    }
    if term == f64::NEG_INFINITY {
        return acc;
    }

    let (hi, lo) = if acc >= term { (acc, term) } else { (term, acc) };
    hi + (1.0 + 10f64.powf(lo - hi)).log10()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_term_is_identity() {
        assert_relative_eq!(log_sum_pow10(&[-3.5]), -3.5, epsilon = 1e-14);
    }

    #[test]
    fn test_two_equal_terms() {
        // 10^-2 + 10^-2 = 2e-2
        assert_relative_eq!(
            log_sum_pow10(&[-2.0, -2.0]),
            (2e-2_f64).log10(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_matches_direct_sum_when_well_scaled() {
        let terms = [-1.0, -2.0, -3.0];
        let direct: f64 = terms.iter().map(|&t| 10f64.powf(t)).sum();
        assert_relative_eq!(log_sum_pow10(&terms), direct.log10(), epsilon = 1e-12);
    }

    #[test]
    fn test_survives_extreme_spread() {
        // Direct summation of 10^-400 underflows to zero; in log space the
        // dominant term must come through exactly.
        let lse = log_sum_pow10(&[-400.0, -3.0]);
        assert_relative_eq!(lse, -3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_is_neg_infinity() {
        assert_eq!(log_sum_pow10(&[]), f64::NEG_INFINITY);
    }

    #[test]
    fn test_all_neg_infinity() {
        assert_eq!(log_sum_pow10(&[f64::NEG_INFINITY; 3]), f64::NEG_INFINITY);
    }

    #[test]
    fn test_iter_variant_matches_slice_variant() {
        let terms = [-14.0, -7.2, -0.5, -21.0];
        assert_relative_eq!(
            log_sum_pow10_iter(terms.iter().cloned()),
            log_sum_pow10(&terms),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_log_add_accumulates() {
        let mut acc = f64::NEG_INFINITY;
        for t in [-2.0, -4.0, -1.0] {
            acc = log_add_pow10(acc, t);
        }
        assert_relative_eq!(acc, log_sum_pow10(&[-2.0, -4.0, -1.0]), epsilon = 1e-13);
    }

    #[test]
    fn test_log_add_neutral_element() {
        assert_eq!(log_add_pow10(f64::NEG_INFINITY, -3.0), -3.0);
        assert_eq!(log_add_pow10(-3.0, f64::NEG_INFINITY), -3.0);
    }
}
