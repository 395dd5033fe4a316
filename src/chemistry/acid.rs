//! Polyprotic acid equilibrium model
//!
//! # Mathematical Background
//!
//! ## Stepwise dissociation
//!
//! An acid `HₙA` with `n` dissociable protons loses them in `n` successive
//! equilibria, each with its own dissociation constant:
//!
//! ```text
//! Hₙ₋ⱼ₊₁A  ⇌  H⁺ + Hₙ₋ⱼA,      Ka[j-1] = 10^(-pKa[j-1]),   j = 1..n
//! ```
//!
//! This distinguishes `n + 1` **protonation states**, indexed by the number
//! of protons lost: state `i = 0` is the fully protonated parent acid,
//! state `i = n` the fully deprotonated base.
//!
//! ## Distribution of species
//!
//! With proton activity `H = 10^-pH`, the fraction of the total analytical
//! concentration present as state `i` is the standard polynomial ratio
//! (Gambi & Toniolo, ChemTexts 2, 9 (2016)):
//!
//! ```text
//!               H^(n-i) · Π_{j=1..i} Ka[j-1]
//! α(i, pH) = ─────────────────────────────────────
//!            Σ_{k=0..n} H^(n-k) · Π_{j=1..k} Ka[j-1]
//! ```
//!
//! The `k = 0` term of the denominator is the bare `H^n` (empty product).
//! By construction `Σᵢ α(i, pH) = 1` and `α ∈ [0, 1]` for every pH.
//!
//! ## Log-space evaluation
//!
//! Each term of the ratio is a power of 10:
//!
//! ```text
//! log10(H^(n-k) · Π_{j≤k} Ka[j-1]) = -( (n-k)·pH + Σ_{j<k} pKa[j] ) =: tₖ
//! ```
//!
//! so the whole formula collapses to `α(i) = 10^(tᵢ - logsumexp₁₀(t₀..tₙ))`.
//! The raw products underflow `f64` for large `n` or widely spread pKa
//! values; the log-space form never leaves a well-scaled range. This is an
//! accuracy requirement of the model, not an optimization (see
//! [`crate::chemistry::numerics`]).
//!
//! The cumulative pKa sums `Σ_{j<k} pKa[j]` are precomputed once at
//! construction, so every query is a single O(n) pass with no allocation.
//!
//! # Indexing invariant
//!
//! Every per-state operation validates `i ≤ n` and returns
//! [`EquilibriumError::IndexOutOfRange`] otherwise. Indices are `usize`, so
//! negative states are unrepresentable.

use nalgebra::DVector;

use crate::chemistry::error::EquilibriumError;
use crate::chemistry::numerics::log_sum_pow10_iter;
use crate::chemistry::traits::Speciation;

// =================================================================================================
// Equilibrium Model
// =================================================================================================

/// One polyprotic acid: ordered pKa values and a total analytical
/// concentration, with pure per-state queries over pH.
///
/// Immutable value object: nothing is created, destroyed or cached after
/// construction, every query reads only the frozen fields, and the type is
/// `Send + Sync` — safe to share across threads in tight sampling loops.
///
/// # Example
///
/// ```rust
/// use sillen_rs::chemistry::EquilibriumModel;
///
/// # fn main() -> Result<(), sillen_rs::chemistry::EquilibriumError> {
/// let carbonic = EquilibriumModel::new(vec![6.35, 10.33], 1e-3)?
///     .with_name("CO3")
///     .with_charge(-2);
///
/// assert_eq!(carbonic.num_states(), 3);
/// assert_eq!(carbonic.label(0)?, "H2CO3");
/// assert_eq!(carbonic.label(2)?, "CO3^2-");
///
/// // At pH well below pKa1 the parent acid dominates
/// assert!(carbonic.fraction(0, 4.0)? > 0.99);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EquilibriumModel {
    /// Ordered pKa values, one per dissociation step (may be empty)
    pkas: Vec<f64>,

    /// Dissociation constants `Ka[j] = 10^-pKa[j]` — derived once
    ka: Vec<f64>,

    /// Total analytical concentration **[mol/L]** — conserved across states
    total_concentration: f64,

    /// `log10(total_concentration)` — precomputed
    log_total: f64,

    /// `cumulative_pka[k] = Σ_{j<k} pKa[j]`, length `n + 1` — precomputed
    ///
    /// `cumulative_pka[0] = 0` is the empty product of the fully
    /// protonated state.
    cumulative_pka: Vec<f64>,

    /// Net charge of the fully deprotonated species (labels only)
    charge: i32,

    /// Display label for the conjugate-base skeleton (labels only)
    name: String,
}

impl EquilibriumModel {
    /// Creates an equilibrium model from pKa values and a total
    /// concentration.
    ///
    /// `charge` defaults to 0 and `name` to `"A"`; set them with
    /// [`with_charge`](Self::with_charge) / [`with_name`](Self::with_name).
    ///
    /// # Arguments
    ///
    /// * `pkas`                — ordered pKa values, first dissociation step
    ///   first; an empty list is the degenerate acid with a single state
    /// * `total_concentration` — analytical concentration, `> 0` **[mol/L]**
    ///
    /// # Errors
    ///
    /// Returns [`EquilibriumError::InvalidParameter`] if
    /// `total_concentration` is not strictly positive and finite, or any
    /// pKa is not finite. Fail-fast: no partially constructed model.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sillen_rs::chemistry::EquilibriumModel;
    ///
    /// assert!(EquilibriumModel::new(vec![4.76], 0.01).is_ok());
    /// assert!(EquilibriumModel::new(vec![4.76], 0.0).is_err());
    /// assert!(EquilibriumModel::new(vec![f64::NAN], 0.01).is_err());
    /// ```
    pub fn new(pkas: Vec<f64>, total_concentration: f64) -> Result<Self, EquilibriumError> {
        if !(total_concentration > 0.0) || !total_concentration.is_finite() {
            return Err(EquilibriumError::InvalidParameter(format!(
                "total concentration must be strictly positive and finite, got {total_concentration}"
            )));
        }

        for (j, pka) in pkas.iter().enumerate() {
            if !pka.is_finite() {
                return Err(EquilibriumError::InvalidParameter(format!(
                    "pKa[{j}] must be finite, got {pka}"
                )));
            }
        }

        let ka: Vec<f64> = pkas.iter().map(|pka| 10f64.powf(-pka)).collect();

        let mut cumulative_pka = Vec::with_capacity(pkas.len() + 1);
        let mut running = 0.0;
        cumulative_pka.push(running);
        for pka in &pkas {
            running += pka;
            cumulative_pka.push(running);
        }

        Ok(Self {
            pkas,
            ka,
            total_concentration,
            log_total: total_concentration.log10(),
            cumulative_pka,
            charge: 0,
            name: "A".to_string(),
        })
    }

    /// Builder pattern: set the conjugate-base skeleton name (e.g. `"PO4"`).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder pattern: set the net charge of the fully deprotonated
    /// species.
    ///
    /// The charge is explicit and never inferred from the proton count; it
    /// feeds the labels only, never the numerics.
    pub fn with_charge(mut self, charge: i32) -> Self {
        self.charge = charge;
        self
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// Number of dissociation steps `n`.
    pub fn num_steps(&self) -> usize {
        self.pkas.len()
    }

    /// Ordered pKa values.
    pub fn pkas(&self) -> &[f64] {
        &self.pkas
    }

    /// Dissociation constants `Ka[j] = 10^-pKa[j]`, same order as
    /// [`pkas`](Self::pkas).
    pub fn ka(&self) -> &[f64] {
        &self.ka
    }

    /// Net charge of the fully deprotonated species.
    pub fn charge(&self) -> i32 {
        self.charge
    }

    /// Display name of the conjugate-base skeleton.
    pub fn name(&self) -> &str {
        &self.name
    }

    // ── Core evaluation ──────────────────────────────────────────────────────

    /// Validates a protonation state index.
    fn check_state(&self, i: usize) -> Result<(), EquilibriumError> {
        if i >= self.num_states() {
            return Err(EquilibriumError::IndexOutOfRange {
                index: i,
                num_states: self.num_states(),
            });
        }
        Ok(())
    }

    /// log10 of the unnormalized state term:
    /// `tₖ = -( (n-k)·pH + Σ_{j<k} pKa[j] )`.
    fn log_term(&self, k: usize, ph: f64) -> f64 {
        let n = self.num_steps();
        -(((n - k) as f64) * ph + self.cumulative_pka[k])
    }

    /// `log10 α(i, pH)` — the normalized log-fraction.
    ///
    /// Shared kernel of [`fraction`](Self::fraction) and
    /// [`log_concentration`](Self::log_concentration): computed entirely in
    /// log space and exponentiated (if at all) only at the end.
    ///
    /// # Errors
    ///
    /// [`EquilibriumError::IndexOutOfRange`] if `i > n`.
    pub fn log_fraction(&self, i: usize, ph: f64) -> Result<f64, EquilibriumError> {
        self.check_state(i)?;

        let denominator = log_sum_pow10_iter((0..self.num_states()).map(|k| self.log_term(k, ph)));
        Ok(self.log_term(i, ph) - denominator)
    }

    /// Fraction `α(i, pH)` of the total acid present as protonation
    /// state `i`.
    ///
    /// Guaranteed in `[0, 1]`, with `Σᵢ α(i, pH) = 1` for every finite pH.
    /// pH is not clamped to `[0, 14]` — that range is a plotting convention,
    /// not a domain constraint. A NaN pH propagates NaN.
    ///
    /// Degenerate acid (`n = 0`): `α(0, pH) = 1` for all pH, the only state
    /// that exists.
    ///
    /// # Errors
    ///
    /// [`EquilibriumError::IndexOutOfRange`] if `i > n`.
    pub fn fraction(&self, i: usize, ph: f64) -> Result<f64, EquilibriumError> {
        Ok(10f64.powf(self.log_fraction(i, ph)?))
    }

    /// Concentration of protonation state `i` at the given pH:
    /// `c(i, pH) = C · α(i, pH)` **[mol/L]**.
    ///
    /// # Errors
    ///
    /// [`EquilibriumError::IndexOutOfRange`] if `i > n`.
    pub fn concentration(&self, i: usize, ph: f64) -> Result<f64, EquilibriumError> {
        Ok(self.total_concentration * self.fraction(i, ph)?)
    }

    /// `log10` of the concentration of protonation state `i`.
    ///
    /// Computed directly in log space as `log10(C) + log10 α(i, pH)` — no
    /// round trip through the linear scale.
    ///
    /// Returns `f64::NEG_INFINITY` only for an exactly zero concentration.
    /// For finite pH every state term is a finite power of 10, so the
    /// concentration is strictly positive and the `-inf` case is
    /// unreachable; it exists only as the documented limit.
    ///
    /// # Errors
    ///
    /// [`EquilibriumError::IndexOutOfRange`] if `i > n`.
    pub fn log_concentration(&self, i: usize, ph: f64) -> Result<f64, EquilibriumError> {
        Ok(self.log_total + self.log_fraction(i, ph)?)
    }

    // ── Vectorized evaluation ────────────────────────────────────────────────

    /// Fraction of state `i` over a series of pH samples.
    ///
    /// Validates `i` once for the whole series; one output element per
    /// input sample.
    ///
    /// # Errors
    ///
    /// [`EquilibriumError::IndexOutOfRange`] if `i > n`.
    pub fn fraction_series(
        &self,
        i: usize,
        phs: &[f64],
    ) -> Result<DVector<f64>, EquilibriumError> {
        self.check_state(i)?;
        Ok(DVector::from_iterator(
            phs.len(),
            phs.iter()
                .map(|&ph| 10f64.powf(self.log_fraction_unchecked(i, ph))),
        ))
    }

    /// `log10` concentration of state `i` over a series of pH samples.
    ///
    /// The curve a diagram renderer requests once per (acid, state) pair.
    ///
    /// # Errors
    ///
    /// [`EquilibriumError::IndexOutOfRange`] if `i > n`.
    pub fn log_concentration_series(
        &self,
        i: usize,
        phs: &[f64],
    ) -> Result<DVector<f64>, EquilibriumError> {
        self.check_state(i)?;
        Ok(DVector::from_iterator(
            phs.len(),
            phs.iter()
                .map(|&ph| self.log_total + self.log_fraction_unchecked(i, ph)),
        ))
    }

    /// [`log_fraction`](Self::log_fraction) without the index check, for
    /// series loops where `i` was validated up front.
    fn log_fraction_unchecked(&self, i: usize, ph: f64) -> f64 {
        let denominator = log_sum_pow10_iter((0..self.num_states()).map(|k| self.log_term(k, ph)));
        self.log_term(i, ph) - denominator
    }

    // ── Labels ───────────────────────────────────────────────────────────────

    /// Plain-text formula of protonation state `i`.
    ///
    /// State `i` retains `n - i` protons and carries net charge
    /// `charge + (n - i)`. Formatting is caret notation
    /// (`H3PO4`, `H2PO4^-`, `HPO4^2-`, `PO4^3-`) — no LaTeX.
    ///
    /// # Errors
    ///
    /// [`EquilibriumError::IndexOutOfRange`] if `i > n`.
    pub fn label(&self, i: usize) -> Result<String, EquilibriumError> {
        self.check_state(i)?;

        let protons = self.num_steps() - i;
        let net_charge = self.charge + protons as i32;

        let charge_str = match net_charge {
            0 => String::new(),
            1 => "+".to_string(),
            -1 => "-".to_string(),
            c => format!("{}{}", c.abs(), if c > 0 { '+' } else { '-' }),
        };

        let skeleton = match protons {
            0 => self.name.clone(),
            1 => format!("H{}", self.name),
            p => format!("H{}{}", p, self.name),
        };

        if charge_str.is_empty() {
            Ok(skeleton)
        } else {
            Ok(format!("{skeleton}^{charge_str}"))
        }
    }
}

impl Speciation for EquilibriumModel {
    fn num_states(&self) -> usize {
        self.pkas.len() + 1
    }

    fn total_concentration(&self) -> f64 {
        self.total_concentration
    }

    fn fraction(&self, i: usize, ph: f64) -> Result<f64, EquilibriumError> {
        EquilibriumModel::fraction(self, i, ph)
    }

    fn concentration(&self, i: usize, ph: f64) -> Result<f64, EquilibriumError> {
        EquilibriumModel::concentration(self, i, ph)
    }

    fn log_concentration(&self, i: usize, ph: f64) -> Result<f64, EquilibriumError> {
        EquilibriumModel::log_concentration(self, i, ph)
    }

    fn label(&self, i: usize) -> Result<String, EquilibriumError> {
        EquilibriumModel::label(self, i)
    }
}

// Inherent mirrors of the trait accessors, so callers don't need the trait
// in scope for the common path.
impl EquilibriumModel {
    /// Number of protonation states `n + 1` (iteration bound for renderers).
    pub fn num_states(&self) -> usize {
        self.pkas.len() + 1
    }

    /// Total analytical concentration **[mol/L]**.
    pub fn total_concentration(&self) -> f64 {
        self.total_concentration
    }
}

// =================================================================================================
// Tests
// =================================================================================================
