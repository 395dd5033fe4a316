//! Diagram trace assembly
//!
//! # What a Sillén diagram contains
//!
//! For each acid on the diagram, one log-concentration curve per
//! protonation state, evaluated over a shared pH grid. Around those:
//!
//! - The water lines `log [H⁺] = -pH` and `log [OH⁻] = pH - pKw`
//! - Optionally, the two **proton-condition (PHG)** aggregate curves. Given
//!   a reference deprotonation level ℓ per acid (the state of the species
//!   actually dissolved), the left curve sums every species that has
//!   *retained* protons relative to the reference, the right curve every
//!   species that has *released* them:
//!
//!   ```text
//!   PHG_left(pH)  = [H⁺]  + Σ_acids Σ_{i < ℓ} cᵢ(pH)
//!   PHG_right(pH) = [OH⁻] + Σ_acids Σ_{i > ℓ} cᵢ(pH)
//!   ```
//!
//!   The intersection of the two curves locates the equilibrium pH of the
//!   dissolved species. This is plain summation over independently
//!   computed acids — no coupled proton-balance solving happens here.
//!
//! The sums are accumulated in log space ([`log_add_pow10`]) for the same
//! reason the core evaluates in log space: the individual concentrations
//! routinely sit 10+ orders of magnitude apart.
//!
//! # Parallelism
//!
//! Each trace depends only on immutable models and the shared grid, so with
//! the `parallel` feature the species traces are computed with rayon, one
//! job per (acid, state) pair. The sequential fallback produces identical
//! results.

use nalgebra::DVector;

use crate::chemistry::error::EquilibriumError;
use crate::chemistry::numerics::log_add_pow10;
use crate::chemistry::traits::Speciation;
use crate::chemistry::water;
use crate::diagram::grid::PhGrid;

// =================================================================================================
// Trace
// =================================================================================================

/// Role of a trace within the diagram.
///
/// Lets a renderer style species, water and aggregate curves differently
/// without parsing labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceKind {
    /// Protonation state `state` of the acid at `acid` (input order).
    Species { acid: usize, state: usize },

    /// `log [H⁺] = -pH`.
    Hydronium,

    /// `log [OH⁻] = pH - pKw`.
    Hydroxide,

    /// Proton-condition left-hand aggregate (proton excess side).
    ProtonExcess,

    /// Proton-condition right-hand aggregate (proton deficit side).
    ProtonDeficit,
}

/// One labeled log-concentration curve over the diagram's pH grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// What this curve represents.
    pub kind: TraceKind,

    /// Display label (species formula, `H^+`, `OH^-`, ...).
    pub label: String,

    /// `log10` concentration, one value per pH sample.
    pub values: DVector<f64>,
}

// =================================================================================================
// Configuration
// =================================================================================================

/// What to assemble into a [`SillenDiagram`].
///
/// # Example
///
/// ```rust
/// use sillen_rs::diagram::{DiagramConfig, PhGrid};
///
/// let config = DiagramConfig::new(PhGrid::new(0.0, 14.0, 281).unwrap())
///     .with_reference_states(vec![0]); // acids dissolved fully protonated
/// ```
#[derive(Debug, Clone)]
pub struct DiagramConfig {
    /// Shared pH sampling grid.
    pub grid: PhGrid,

    /// Include the H⁺ / OH⁻ reference lines (default: true).
    pub include_water_lines: bool,

    /// Reference deprotonation level per acid, enabling the
    /// proton-condition traces. `None` (default) skips them.
    ///
    /// Must hold exactly one level per acid passed to
    /// [`SillenDiagram::compute`], each a valid state index of its acid.
    pub reference_states: Option<Vec<usize>>,
}

impl DiagramConfig {
    /// Configuration with the given grid, water lines on, no
    /// proton-condition traces.
    pub fn new(grid: PhGrid) -> Self {
        Self {
            grid,
            include_water_lines: true,
            reference_states: None,
        }
    }

    /// Builder pattern: toggle the water reference lines.
    pub fn with_water_lines(mut self, include: bool) -> Self {
        self.include_water_lines = include;
        self
    }

    /// Builder pattern: enable proton-condition traces with one reference
    /// deprotonation level per acid.
    pub fn with_reference_states(mut self, levels: Vec<usize>) -> Self {
        self.reference_states = Some(levels);
        self
    }

    /// Validates the configuration against the acids it will be applied to.
    fn validate_for<S: Speciation>(&self, models: &[S]) -> Result<(), EquilibriumError> {
        let levels = match &self.reference_states {
            None => return Ok(()),
            Some(levels) => levels,
        };

        if levels.len() != models.len() {
            return Err(EquilibriumError::InvalidParameter(format!(
                "reference states must match the acid list: got {} levels for {} acids",
                levels.len(),
                models.len()
            )));
        }

        for (level, model) in levels.iter().zip(models) {
            if *level >= model.num_states() {
                return Err(EquilibriumError::IndexOutOfRange {
                    index: *level,
                    num_states: model.num_states(),
                });
            }
        }

        Ok(())
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self::new(PhGrid::default())
    }
}

// =================================================================================================
// Sillén diagram
// =================================================================================================

/// The assembled numerical content of a Sillén diagram.
///
/// Holds the shared pH samples and every requested trace. Purely data — a
/// renderer iterates [`traces`](Self::traces) and draws each
/// `(ph, trace.values)` pair however it likes.
#[derive(Debug, Clone)]
pub struct SillenDiagram {
    ph: DVector<f64>,
    traces: Vec<Trace>,
}

impl SillenDiagram {
    /// Assembles the diagram data for a set of acids.
    ///
    /// Produces, in order: one trace per (acid, protonation state) in input
    /// order, the proton-condition traces if configured, then the water
    /// lines if enabled.
    ///
    /// # Errors
    ///
    /// - [`EquilibriumError::InvalidParameter`] if the reference state list
    ///   does not match the acid list
    /// - [`EquilibriumError::IndexOutOfRange`] if a reference level is not
    ///   a valid state of its acid
    ///
    /// # Example
    ///
    /// ```rust
    /// use sillen_rs::chemistry::EquilibriumModel;
    /// use sillen_rs::diagram::{DiagramConfig, SillenDiagram, TraceKind};
    ///
    /// # fn main() -> Result<(), sillen_rs::chemistry::EquilibriumError> {
    /// let acetic = EquilibriumModel::new(vec![4.76], 0.01)?.with_name("Ac").with_charge(-1);
    /// let diagram = SillenDiagram::compute(&[acetic], &DiagramConfig::default())?;
    ///
    /// let species: Vec<_> = diagram
    ///     .traces()
    ///     .iter()
    ///     .filter(|t| matches!(t.kind, TraceKind::Species { .. }))
    ///     .collect();
    /// assert_eq!(species.len(), 2); // HAc and Ac^-
    /// # Ok(())
    /// # }
    /// ```
    pub fn compute<S: Speciation>(
        models: &[S],
        config: &DiagramConfig,
    ) -> Result<Self, EquilibriumError> {
        config.validate_for(models)?;

        let ph = config.grid.values();

        // One job per (acid, state) pair, in input order
        let jobs: Vec<(usize, usize)> = models
            .iter()
            .enumerate()
            .flat_map(|(a, model)| (0..model.num_states()).map(move |i| (a, i)))
            .collect();

        #[cfg(feature = "parallel")]
        let species: Result<Vec<Trace>, EquilibriumError> = {
            use rayon::prelude::*;
            jobs.par_iter()
                .map(|&(a, i)| Self::species_trace(&models[a], a, i, &ph))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let species: Result<Vec<Trace>, EquilibriumError> = jobs
            .iter()
            .map(|&(a, i)| Self::species_trace(&models[a], a, i, &ph))
            .collect();

        let mut traces = species?;

        if let Some(levels) = &config.reference_states {
            let (left, right) = Self::proton_condition(models, levels, &ph)?;
            traces.push(left);
            traces.push(right);
        }

        if config.include_water_lines {
            traces.push(Trace {
                kind: TraceKind::Hydronium,
                label: "H^+".to_string(),
                values: ph.map(water::log_hydronium),
            });
            traces.push(Trace {
                kind: TraceKind::Hydroxide,
                label: "OH^-".to_string(),
                values: ph.map(water::log_hydroxide),
            });
        }

        Ok(Self { ph, traces })
    }

    /// Computes the log-concentration curve of one protonation state.
    fn species_trace<S: Speciation>(
        model: &S,
        acid: usize,
        state: usize,
        ph: &DVector<f64>,
    ) -> Result<Trace, EquilibriumError> {
        let label = model.label(state)?;

        let mut values = DVector::zeros(ph.len());
        for (s, value) in values.iter_mut().enumerate() {
            *value = model.log_concentration(state, ph[s])?;
        }

        Ok(Trace {
            kind: TraceKind::Species { acid, state },
            label,
            values,
        })
    }

    /// Accumulates the two proton-condition aggregate curves in log space.
    fn proton_condition<S: Speciation>(
        models: &[S],
        levels: &[usize],
        ph: &DVector<f64>,
    ) -> Result<(Trace, Trace), EquilibriumError> {
        let mut left = ph.map(water::log_hydronium);
        let mut right = ph.map(water::log_hydroxide);

        for (model, &level) in models.iter().zip(levels) {
            for i in 0..model.num_states() {
                if i == level {
                    continue;
                }
                for (s, &ph_value) in ph.iter().enumerate() {
                    let logc = model.log_concentration(i, ph_value)?;
                    if i < level {
                        left[s] = log_add_pow10(left[s], logc);
                    } else {
                        right[s] = log_add_pow10(right[s], logc);
                    }
                }
            }
        }

        Ok((
            Trace {
                kind: TraceKind::ProtonExcess,
                label: "PHG (left)".to_string(),
                values: left,
            },
            Trace {
                kind: TraceKind::ProtonDeficit,
                label: "PHG (right)".to_string(),
                values: right,
            },
        ))
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// Shared pH samples, one per trace element.
    pub fn ph(&self) -> &DVector<f64> {
        &self.ph
    }

    /// All traces, species first (input order), then aggregates, then water.
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    /// Number of pH samples per trace.
    pub fn num_samples(&self) -> usize {
        self.ph.len()
    }

    /// Looks a trace up by kind.
    pub fn trace(&self, kind: TraceKind) -> Option<&Trace> {
        self.traces.iter().find(|t| t.kind == kind)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
