//! Value synthesis and tabular export for mockdata.
//!
//! A [`ValueSynthesizer`] turns a field type and a count into fake values,
//! [`generate_dataset`](ValueSynthesizer::generate_dataset) collects one column
//! per selected field type, and the [`output`] module renders the resulting
//! [`DataSet`] as CSV, JSON or plain text.

pub mod assemble;
pub mod dataset;
pub mod errors;
pub mod faker_rs;
pub mod generators;
pub mod output;
pub mod rng;
pub mod session;
pub mod synthesizer;

pub use assemble::{Cell, Row, assemble, effective_rows};
pub use dataset::{Column, DataSet};
pub use errors::SynthesisError;
pub use generators::{GeneratedValue, Generator, GeneratorContext, GeneratorRegistry};
pub use output::{CsvQuoting, ExportFormat, export, export_csv, export_json, export_text};
pub use rng::RandomSource;
pub use session::DataSetSlot;
pub use synthesizer::{SynthesisOptions, ValueSynthesizer};
