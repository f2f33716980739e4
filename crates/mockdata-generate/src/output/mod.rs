//! Renderers turning a [`DataSet`] into an export document.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::DataSet;
use crate::errors::SynthesisError;

pub mod csv;
pub mod json;
pub mod text;

pub use self::csv::export_csv;
pub use self::json::export_json;
pub use self::text::export_text;

/// How CSV fields are escaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvQuoting {
    /// Values written verbatim; commas or newlines inside a value shift columns.
    #[default]
    None,
    /// Fields containing separators, quotes or newlines are quoted. A record
    /// holding one empty field stays an empty line.
    Rfc4180,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Text,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Text => "text",
        };
        f.write_str(name)
    }
}

/// Render `dataset` in `format`. `row_count` and `quoting` only affect CSV.
pub fn export(
    dataset: &DataSet,
    format: ExportFormat,
    row_count: usize,
    quoting: CsvQuoting,
) -> Result<String, SynthesisError> {
    match format {
        ExportFormat::Csv => export_csv(dataset, row_count, quoting),
        ExportFormat::Json => export_json(dataset),
        ExportFormat::Text => Ok(export_text(dataset)),
    }
}
