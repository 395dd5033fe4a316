//! Export module for diagram data.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export
//! format. Each format is an independent implementation in its own
//! sub-module; adding a new format means adding a file, without ever
//! modifying existing code.
//!
//! # Available formats
//!
//! | Format  | Module          | Version |
//! |---------|-----------------|---------|
//! | CSV     | [`csv`]         | v0.1.0  |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use sillen_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//!
//! // Full export (all pH samples)
//! exporter.export(&diagram, None, "sillen.csv")?;
//!
//! // Downsampled export to 200 rows
//! exporter.export(&diagram, Some(200), "sillen_light.csv")?;
//! ```

pub mod csv;

// Re-export the most commonly used types at the module level so users can
// write `use sillen_rs::output::export::{CsvExporter, CsvConfig, CsvError};`
// instead of the full sub-module path.
pub use csv::{CsvConfig, CsvError, CsvExporter, CsvMetadata};

use crate::diagram::SillenDiagram;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type. This avoids
/// systematic boxing (`Box<dyn Error>`) and allows the caller to react
/// precisely based on the error type.
///
/// # Parameter `n_points`
///
/// - `None`: exports all pH samples (default behaviour)
/// - `Some(n)`: uniformly downsamples to `n` rows, always guaranteeing
///   that the **first and last** samples are included (important to keep
///   the diagram's end-of-range behaviour visible)
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports a diagram: one pH column, then one column per trace,
    /// in trace order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - the diagram contains no traces or no samples
    fn export(
        &self,
        diagram: &SillenDiagram,
        n_points: Option<usize>,
        path: &str,
    ) -> Result<(), Self::Error>;
}
