use std::path::Path;

use mockdata_generate::{CsvQuoting, ExportFormat};
use serde::{Deserialize, Serialize};

use super::atomic::write_bytes_atomic;
use super::{WorkspaceError, WorkspaceResult};

pub const DEFAULT_CONFIG_FILE: &str = "mockdata.toml";

/// Defaults for `mockdata generate`; command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_fields: Vec<String>,
    pub default_count: i64,
    pub format: ExportFormat,
    pub csv_quoting: CsvQuoting,
    pub strict: bool,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_fields: ["Name", "Email", "Avatar URL", "Hex Color"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            default_count: 7,
            format: ExportFormat::Csv,
            csv_quoting: CsvQuoting::None,
            strict: false,
            seed: None,
        }
    }
}

/// Read settings from `path`; a missing file yields the defaults.
pub fn load_settings(path: &Path) -> WorkspaceResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Write `settings` as TOML. An existing file is kept unless `force` is set.
pub fn save_settings(path: &Path, settings: &Settings, force: bool) -> WorkspaceResult<()> {
    if path.exists() && !force {
        return Err(WorkspaceError::Invalid(format!(
            "{} already exists, pass --force to overwrite",
            path.display()
        )));
    }
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(path, encoded.as_bytes())
}
