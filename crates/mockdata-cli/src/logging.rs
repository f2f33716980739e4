use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file: {0}")]
    Io(#[from] io::Error),
    #[error("logging already initialized: {0}")]
    Init(String),
}

/// Human-readable events on stderr, filtered by `RUST_LOG` (default `info`),
/// plus JSON lines appended to `log_file` when one is given.
pub fn init_logging(log_file: Option<&Path>) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);
    let file_layer = log_file.map(json_file_layer).transpose()?;

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| LoggingError::Init(err.to_string()))
}

/// JSON events with RFC 3339 UTC timestamps, appended to `path`.
fn json_file_layer<S>(path: &Path) -> Result<impl Layer<S> + use<S>, LoggingError>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(tracing_subscriber::fmt::layer()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(Mutex::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_layer_appends_json_lines() {
        let dir = std::env::temp_dir().join(format!("mockdata-log-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("scratch dir");
        let path = dir.join("mockdata.log");
        std::fs::write(&path, "existing\n").expect("seed file");

        let layer = json_file_layer(&path).expect("layer");
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(event = "generate_started", fields = 2, "starting");
        });

        let contents = std::fs::read_to_string(&path).expect("log contents");
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("existing"));
        let record: serde_json::Value =
            serde_json::from_str(lines.next().expect("json line")).expect("valid json");
        assert_eq!(record["fields"]["event"], "generate_started");
        assert_eq!(record["fields"]["fields"], 2);
        assert!(record["timestamp"].as_str().is_some_and(|ts| ts.ends_with('Z')));

        std::fs::remove_dir_all(&dir).ok();
    }
}
