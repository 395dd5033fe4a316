//! Speciation trait: the seam between chemistry and its consumers
//!
//! # Responsibility
//!
//! A [`Speciation`] implementor answers, for each of its protonation states
//! and any finite pH, "what fraction / concentration of the total is this
//! species?". It does NOT arrange series or render anything — that is the
//! job of the [`crate::diagram`] and [`crate::output`] layers, which are
//! generic over this trait.
//!
//! # Contract
//!
//! For every implementor, all valid `i` in `0..num_states()` and all finite
//! `ph`:
//!
//! - `fraction(i, ph)` ∈ `[0, 1]` and `Σᵢ fraction(i, ph) == 1` (within
//!   floating-point tolerance)
//! - `concentration(i, ph) == total_concentration() * fraction(i, ph)`
//! - `i >= num_states()` must yield `EquilibriumError::IndexOutOfRange`,
//!   never a silently wrong value
//!
//! Implementors are immutable after construction; every method is pure, so
//! the trait requires `Send + Sync` and calls are safe from tight loops on
//! any number of threads.

use crate::chemistry::error::EquilibriumError;

/// Equilibrium distribution of a fixed set of species over pH.
pub trait Speciation: Send + Sync {
    /// Number of distinguishable protonation states (`n + 1` for an acid
    /// with `n` dissociation steps). Iteration bound for consumers.
    fn num_states(&self) -> usize;

    /// Total analytical concentration, conserved across all states [mol/L].
    fn total_concentration(&self) -> f64;

    /// Fraction of the total present as state `i` at the given pH.
    fn fraction(&self, i: usize, ph: f64) -> Result<f64, EquilibriumError>;

    /// Concentration of state `i` at the given pH [mol/L].
    fn concentration(&self, i: usize, ph: f64) -> Result<f64, EquilibriumError>;

    /// Base-10 logarithm of the concentration of state `i`.
    fn log_concentration(&self, i: usize, ph: f64) -> Result<f64, EquilibriumError>;

    /// Human-readable formula label for state `i` (e.g. `H2PO4^-`).
    ///
    /// Presentation metadata only; carries no numerical meaning.
    fn label(&self, i: usize) -> Result<String, EquilibriumError>;
}
