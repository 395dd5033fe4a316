//! pH sampling grid

use nalgebra::DVector;

use crate::chemistry::error::EquilibriumError;

/// Evenly spaced pH samples for diagram traces.
///
/// The default grid spans pH 0..14 with 100 samples — the conventional
/// plotting window, not a domain constraint: any finite bounds are valid,
/// including negative pH.
///
/// # Example
///
/// ```rust
/// use sillen_rs::diagram::PhGrid;
///
/// let grid = PhGrid::new(2.0, 12.0, 201).unwrap();
/// assert_eq!(grid.samples(), 201);
/// assert!((grid.step() - 0.05).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PhGrid {
    start: f64,
    end: f64,
    samples: usize,
}

impl PhGrid {
    /// Creates a grid of `samples` evenly spaced pH values over
    /// `[start, end]`, both endpoints included.
    ///
    /// # Errors
    ///
    /// Returns [`EquilibriumError::InvalidParameter`] if either bound is
    /// non-finite, `start >= end`, or `samples < 2`.
    pub fn new(start: f64, end: f64, samples: usize) -> Result<Self, EquilibriumError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(EquilibriumError::InvalidParameter(format!(
                "pH grid bounds must be finite, got [{start}, {end}]"
            )));
        }

        if start >= end {
            return Err(EquilibriumError::InvalidParameter(format!(
                "pH grid start must be below end, got [{start}, {end}]"
            )));
        }

        if samples < 2 {
            return Err(EquilibriumError::InvalidParameter(format!(
                "pH grid needs at least two samples, got {samples}"
            )));
        }

        Ok(Self { start, end, samples })
    }

    /// Lower pH bound (first sample).
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Upper pH bound (last sample).
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Number of samples, endpoints included.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Spacing between consecutive samples.
    pub fn step(&self) -> f64 {
        (self.end - self.start) / (self.samples - 1) as f64
    }

    /// Materializes the sample values.
    ///
    /// The last sample is pinned to `end` exactly, so accumulated rounding
    /// in `start + s·step` never leaks past the requested bound.
    pub fn values(&self) -> DVector<f64> {
        let step = self.step();
        DVector::from_fn(self.samples, |s, _| {
            if s == self.samples - 1 {
                self.end
            } else {
                self.start + step * s as f64
            }
        })
    }
}

impl Default for PhGrid {
    /// pH 0..14, 100 samples.
    fn default() -> Self {
        Self { start: 0.0, end: 14.0, samples: 100 }
    }
}
