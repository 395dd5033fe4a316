//! Sillén diagram data assembly
//!
//! This module turns equilibrium models into the *numbers* of a Sillén
//! diagram — the log-concentration-vs-pH curves of every protonation state,
//! plus the water reference lines and optional proton-condition aggregates.
//! It deliberately stops short of drawing anything: colors, legends, line
//! styles and plotting backends belong to the external renderer that
//! consumes [`SillenDiagram`].
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **`PhGrid`** — WHERE to sample
//!    - Validated, immutable pH sampling grid
//!    - Default 0..14 with 100 samples (the plotting convention; the
//!      chemistry itself accepts any finite pH)
//!
//! 2. **`DiagramConfig`** — WHAT to include
//!    - The grid
//!    - Water lines on/off
//!    - Optional reference deprotonation levels enabling the
//!      proton-condition traces
//!
//! 3. **`SillenDiagram`** — the assembled result
//!    - One labeled [`Trace`] per (acid, protonation state)
//!    - Tagged by [`TraceKind`] so renderers can style species, water and
//!      aggregate curves differently without parsing labels
//!
//! # Quick Start Example
//!
//! ```rust
//! use sillen_rs::chemistry::EquilibriumModel;
//! use sillen_rs::diagram::{DiagramConfig, SillenDiagram};
//!
//! # fn main() -> Result<(), sillen_rs::chemistry::EquilibriumError> {
//! let acid = EquilibriumModel::new(vec![3.13, 4.76, 6.4], 0.1)?
//!     .with_name("PO4")
//!     .with_charge(-3);
//!
//! let diagram = SillenDiagram::compute(&[acid], &DiagramConfig::default())?;
//!
//! // 4 species curves + H⁺ + OH⁻
//! assert_eq!(diagram.traces().len(), 6);
//! # Ok(())
//! # }
//! ```

pub mod grid;
pub mod series;

pub use grid::PhGrid;
pub use series::{DiagramConfig, SillenDiagram, Trace, TraceKind};
