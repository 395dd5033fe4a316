//! Error types for the chemistry core
//!
//! Two failure kinds exist, and both are local to a single call:
//!
//! - [`EquilibriumError::InvalidParameter`] — construction or configuration
//!   rejected during validation (fail-fast: no partially constructed model)
//! - [`EquilibriumError::IndexOutOfRange`] — a per-state query received a
//!   protonation state index outside `[0, n]`
//!
//! Every query is a pure, side-effect-free numeric computation, so there is
//! no partial-failure or retry concern.

use thiserror::Error;

/// Errors produced by equilibrium models and diagram configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquilibriumError {
    /// A parameter failed validation (e.g. non-positive total concentration,
    /// non-finite pKa, degenerate pH grid).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A protonation state index outside `[0, n]` was passed to a per-state
    /// query. Never silently clamped or wrapped.
    #[error("protonation state index {index} out of range: model has {num_states} states")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of valid states (`n + 1`); valid indices are `0..num_states`.
        num_states: usize,
    },
}
