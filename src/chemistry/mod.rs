//! Equilibrium chemistry
//!
//! This module provides the domain core: models of acid-base equilibria
//! and the numerical machinery they rely on.
//!
//! # Core Concepts
//!
//! - **Equilibrium Model**: one polyprotic acid — its pKa values and total
//!   analytical concentration — exposing pure functions from pH to the
//!   fraction, concentration and log-concentration of every protonation
//!   state
//! - **Speciation**: trait implemented by equilibrium models; the seam
//!   consumed by the diagram and export layers
//! - **Water**: autoprotolysis constants and the H⁺ / OH⁻ reference lines
//!
//! # Architecture
//!
//! The chemistry core is **separate from presentation**:
//! - This module computes the numbers (fractions, concentrations)
//! - The [`crate::diagram`] module arranges them into labeled series
//! - Rendering is left to external consumers
//!
//! This separation allows the same model to feed a static plot, an
//! interactive backend, or a CSV file without any change to the chemistry.
//!
//! # Example
//!
//! ```rust
//! use sillen_rs::chemistry::EquilibriumModel;
//!
//! # fn main() -> Result<(), sillen_rs::chemistry::EquilibriumError> {
//! let acetic = EquilibriumModel::new(vec![4.76], 0.01)?.with_name("CH3COO");
//!
//! // Conservation: fractions sum to 1 at any pH
//! let sum: f64 = (0..acetic.num_states())
//!     .map(|i| acetic.fraction(i, 5.2).unwrap())
//!     .sum();
//! assert!((sum - 1.0).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```

// module declaration
pub mod acid;
pub mod error;
pub mod numerics;
pub mod traits;
pub mod water;

// re-export commonly used types for convenience
pub use acid::EquilibriumModel;
pub use error::EquilibriumError;
pub use traits::Speciation;
