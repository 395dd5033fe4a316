//! sillen-rs: Polyprotic Acid Equilibrium Framework
//!
//! A library for computing the equilibrium distribution of protonation
//! states of polyprotic acids in aqueous solution, and for assembling the
//! numerical content of logarithmic concentration ("Sillén") diagrams.
//! Built with Rust for performance and safety.
//!
//! # Architecture
//!
//! sillen-rs is built on two core principles:
//!
//! 1. **Separation of Chemistry and Presentation**
//!    - The chemistry core computes species fractions and concentrations
//!    - The diagram layer assembles labeled data series
//!    - Rendering (colors, widgets, LaTeX labels) is left to external
//!      consumers of the data
//!
//! 2. **Extensibility and Type Safety**
//!    - Trait-based design (`Speciation`) for easy extension
//!    - Validated construction, typed errors
//!    - Pure, `Send + Sync` queries safe to call from tight loops
//!
//! # Quick Start
//!
//! ```rust
//! use sillen_rs::chemistry::EquilibriumModel;
//!
//! # fn main() -> Result<(), sillen_rs::chemistry::EquilibriumError> {
//! // Phosphoric-like triprotic acid, 0.1 mol/L
//! let acid = EquilibriumModel::new(vec![3.13, 4.76, 6.4], 0.1)?
//!     .with_name("PO4")
//!     .with_charge(-3);
//!
//! // Fraction of each protonation state at pH 7
//! for i in 0..acid.num_states() {
//!     let alpha = acid.fraction(i, 7.0)?;
//!     println!("{:<10} {:.4}", acid.label(i)?, alpha);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`chemistry`]: Equilibrium models (the domain core)
//! - [`diagram`]: Sillén diagram data assembly (pH grids, traces)
//! - [`output`]: Result export (CSV)

// Core modules
pub mod chemistry;

pub mod diagram;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use sillen_rs::prelude::*;
    //! ```
    pub use crate::chemistry::{EquilibriumError,
                               EquilibriumModel,
                               Speciation};
    pub use crate::diagram::{DiagramConfig,
                             PhGrid,
                             SillenDiagram,
                             Trace};
    pub use crate::output::export::{CsvConfig, CsvExporter, Exporter};
}
