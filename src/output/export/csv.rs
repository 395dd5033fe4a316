//! CSV export for Sillén diagram data
//!
//! Writes the assembled diagram as one pH column plus one log-concentration
//! column per trace — a layout that Excel, pandas, MATLAB and most plotting
//! tools ingest directly.
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use sillen_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//! exporter.export(&diagram, None, "sillen.csv")?;
//! ```
//!
//! **Output** (`sillen.csv`):
//! ```csv
//! pH,H3PO4,H2PO4^-,HPO4^2-,PO4^3-,H^+,OH^-
//! 0.000000,-1.000001,-4.130001,-9.890001,-16.290001,0.000000,-14.000000
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use sillen_rs::output::export::{CsvConfig, CsvMetadata};
//!
//! let config = CsvConfig::default().with_metadata(CsvMetadata {
//!     acids: vec!["PO4: pKa [3.13, 4.76, 6.4], C = 0.1 mol/L".to_string()],
//!     ..Default::default()
//! });
//! let exporter = CsvExporter::new(config);
//! exporter.export(&diagram, None, "sillen.csv")?;
//! ```
//!
//! **Output**:
//! ```csv
//! # Sillén Diagram Data
//! # Acid: PO4: pKa [3.13, 4.76, 6.4], C = 0.1 mol/L
//! #
//! pH,H3PO4,H2PO4^-,HPO4^2-,PO4^3-,H^+,OH^-
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use thiserror::Error;

use crate::diagram::SillenDiagram;
use crate::output::export::Exporter;

// =============================================================================
// Errors
// =============================================================================

/// Errors produced by CSV export.
#[derive(Debug, Error)]
pub enum CsvError {
    /// File could not be created or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The diagram has no traces or no samples — nothing to export.
    #[error("empty diagram: {0}")]
    EmptyDiagram(String),

    /// Downsampling target too small to keep first and last samples.
    #[error("downsample target must be at least 2, got {0}")]
    InvalidDownsample(usize),
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for CSV export.
///
/// # Example
///
/// ```rust
/// use sillen_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::default()
///     .delimiter(';')
///     .precision(10);
/// assert_eq!(config.precision, 10);
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',').
    pub delimiter: char,

    /// Decimal separator (default: '.').
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6).
    pub precision: usize,

    /// Include metadata header comments (default: false).
    pub include_metadata: bool,

    /// Metadata to include in the header.
    pub metadata: Option<CsvMetadata>,

    /// Header for the pH column (default: "pH").
    pub ph_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            ph_header: "pH".to_string(),
        }
    }
}

impl CsvConfig {
    /// Config with European CSV format (semicolon columns, comma decimals).
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Config with high precision (12 decimal places).
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata.
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments.
///
/// All fields are optional; only populated fields appear in the header.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// One summary line per acid (name, pKa values, concentration).
    pub acids: Vec<String>,

    /// pH grid description (range and sample count).
    pub grid: Option<String>,

    /// Additional custom parameters.
    pub custom: Vec<(String, String)>,
}

// =============================================================================
// Exporter
// =============================================================================

/// CSV exporter for [`SillenDiagram`] data.
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    config: CsvConfig,
}

impl CsvExporter {
    /// Exporter with a custom configuration.
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    /// Formats one floating-point value per the configured precision and
    /// decimal separator.
    fn format_value(&self, value: f64) -> String {
        let formatted = format!("{:.*}", self.config.precision, value);
        if self.config.decimal_separator != '.' {
            formatted.replace('.', &self.config.decimal_separator.to_string())
        } else {
            formatted
        }
    }

    /// Row indices to export: all of them, or `n` uniformly spaced indices
    /// always including the first and last.
    fn row_indices(total: usize, n_points: Option<usize>) -> Result<Vec<usize>, CsvError> {
        match n_points {
            None => Ok((0..total).collect()),
            Some(n) if n < 2 => Err(CsvError::InvalidDownsample(n)),
            Some(n) if n >= total => Ok((0..total).collect()),
            Some(n) => {
                let last = (total - 1) as f64;
                Ok((0..n)
                    .map(|k| (k as f64 * last / (n - 1) as f64).round() as usize)
                    .collect())
            }
        }
    }

    fn write_metadata(&self, writer: &mut impl Write) -> Result<(), CsvError> {
        let metadata = match &self.config.metadata {
            Some(m) => m,
            None => return Ok(()),
        };

        writeln!(writer, "# Sillén Diagram Data")?;
        for acid in &metadata.acids {
            writeln!(writer, "# Acid: {acid}")?;
        }
        if let Some(grid) = &metadata.grid {
            writeln!(writer, "# Grid: {grid}")?;
        }
        for (key, value) in &metadata.custom {
            writeln!(writer, "# {key}: {value}")?;
        }
        writeln!(writer, "#")?;
        Ok(())
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export(
        &self,
        diagram: &SillenDiagram,
        n_points: Option<usize>,
        path: &str,
    ) -> Result<(), CsvError> {
        if diagram.traces().is_empty() {
            return Err(CsvError::EmptyDiagram("no traces".to_string()));
        }
        if diagram.num_samples() == 0 {
            return Err(CsvError::EmptyDiagram("no pH samples".to_string()));
        }

        let rows = Self::row_indices(diagram.num_samples(), n_points)?;
        let delimiter = self.config.delimiter;

        let mut writer = BufWriter::new(File::create(path)?);

        if self.config.include_metadata {
            self.write_metadata(&mut writer)?;
        }

        // Header row: pH, then one column per trace
        write!(writer, "{}", self.config.ph_header)?;
        for trace in diagram.traces() {
            write!(writer, "{delimiter}{}", trace.label)?;
        }
        writeln!(writer)?;

        // Data rows
        let ph = diagram.ph();
        for &row in &rows {
            write!(writer, "{}", self.format_value(ph[row]))?;
            for trace in diagram.traces() {
                write!(writer, "{delimiter}{}", self.format_value(trace.values[row]))?;
            }
            writeln!(writer)?;
        }

        writer.flush()?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CsvConfig::default();
        assert_eq!(config.delimiter, ',');
        assert_eq!(config.precision, 6);
        assert!(!config.include_metadata);
    }

    #[test]
    fn test_european_config() {
        let config = CsvConfig::european();
        assert_eq!(config.delimiter, ';');
        assert_eq!(config.decimal_separator, ',');
    }

    #[test]
    fn test_format_value_precision() {
        let exporter = CsvExporter::new(CsvConfig::default().precision(3));
        assert_eq!(exporter.format_value(-1.23456), "-1.235");
    }

    #[test]
    fn test_format_value_european_decimals() {
        let exporter = CsvExporter::new(CsvConfig::european());
        assert_eq!(exporter.format_value(-0.5), "-0,500000");
    }

    #[test]
    fn test_row_indices_all() {
        assert_eq!(CsvExporter::row_indices(4, None).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_row_indices_downsample_keeps_endpoints() {
        let rows = CsvExporter::row_indices(101, Some(5)).unwrap();
        assert_eq!(rows, vec![0, 25, 50, 75, 100]);
    }

    #[test]
    fn test_row_indices_target_larger_than_data() {
        assert_eq!(CsvExporter::row_indices(3, Some(10)).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_row_indices_rejects_tiny_target() {
        assert!(matches!(
            CsvExporter::row_indices(100, Some(1)),
            Err(CsvError::InvalidDownsample(1))
        ));
    }
}
