//! Output module for diagram data
//!
//! Exports assembled [`crate::diagram::SillenDiagram`] data for external
//! analysis and rendering. Plot drawing itself is out of scope for this
//! crate — a renderer is just another consumer of the exported or in-memory
//! data.
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs      ← This file
//! └── export/     ← Data export
//!     ├── mod.rs  ← Exporter trait
//!     └── csv.rs  ← CSV format
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sillen_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//! exporter.export(&diagram, None, "sillen.csv")?;
//! ```

pub mod export;

// Re-export commonly used items for convenience
pub use export::{CsvConfig, CsvError, CsvExporter, Exporter};
