mod logging;
mod selection;
mod workspace;

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};
use mockdata_core::{CategoryListing, Error as CoreError, FieldRegistry, validate_count};
use mockdata_generate::{
    CsvQuoting, ExportFormat, RandomSource, SynthesisError, ValueSynthesizer, export,
};
use thiserror::Error;

use logging::{LoggingError, init_logging};
use selection::resolve_selection;
use workspace::{
    DEFAULT_CONFIG_FILE, Settings, WorkspaceError, load_settings, save_settings,
    write_bytes_atomic,
};

#[derive(Debug, Error)]
enum CliError {
    #[error("workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("synthesis error: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "mockdata", version, about = "Mock data generator")]
struct Cli {
    /// Append JSON log lines to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List field types by category.
    Fields(FieldsArgs),
    /// Generate a data set and export it.
    Generate(GenerateArgs),
    /// Write a default configuration file.
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug)]
struct FieldsArgs {
    /// Print the catalog as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Field type to include; repeat for more columns.
    #[arg(short = 'f', long = "field", value_name = "FIELD")]
    fields: Vec<String>,
    /// Number of rows.
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    count: Option<i64>,
    /// Output format.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Reject field types missing from the catalog.
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// Quote CSV fields per RFC 4180.
    #[arg(long, default_value_t = false)]
    rfc4180: bool,
    /// Configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[derive(Args, Debug)]
struct InitConfigArgs {
    /// Destination path.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    path: PathBuf,
    /// Overwrite an existing file.
    #[arg(long, default_value_t = false)]
    force: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
    Text,
}

impl From<FormatArg> for ExportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Text => ExportFormat::Text,
        }
    }
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    match cli.command {
        Command::Fields(args) => run_fields(args),
        Command::Generate(args) => run_generate(args),
        Command::InitConfig(args) => run_init_config(args),
    }
}

fn run_fields(args: FieldsArgs) -> Result<(), CliError> {
    let registry = FieldRegistry::global();
    let mut stdout = std::io::stdout().lock();

    if args.json {
        let listing = CategoryListing::from_registry(registry);
        writeln!(stdout, "{}", serde_json::to_string_pretty(&listing)?)?;
        return Ok(());
    }

    for category in registry.categories() {
        writeln!(stdout, "{}", category.name)?;
        for field_type in category.field_types {
            writeln!(stdout, "  {field_type}")?;
        }
    }
    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let settings = load_settings(&args.config)?;
    let timer = Instant::now();

    let labels = if args.fields.is_empty() {
        settings.default_fields.clone()
    } else {
        args.fields
    };
    let count = validate_count(args.count.unwrap_or(settings.default_count))?;
    let strict = args.strict || settings.strict;
    let selection = resolve_selection(FieldRegistry::global(), &labels, strict)?;

    let source = args
        .seed
        .or(settings.seed)
        .map_or(RandomSource::Entropy, RandomSource::Seeded);
    let format = args.format.map_or(settings.format, ExportFormat::from);
    let quoting = if args.rfc4180 {
        CsvQuoting::Rfc4180
    } else {
        settings.csv_quoting
    };

    tracing::info!(
        event = "generate_started",
        fields = selection.len(),
        count,
        format = %format,
        strict
    );

    let dataset = ValueSynthesizer::new().generate_dataset(&selection, count, source)?;
    let document = export(&dataset, format, count, quoting)?;

    match &args.out {
        Some(path) => {
            write_bytes_atomic(path, document.as_bytes())?;
            tracing::info!(event = "export_written", path = %path.display(), bytes = document.len());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{document}")?;
        }
    }

    tracing::info!(
        event = "generate_finished",
        rows = count,
        duration_ms = timer.elapsed().as_millis() as u64
    );
    Ok(())
}

fn run_init_config(args: InitConfigArgs) -> Result<(), CliError> {
    save_settings(&args.path, &Settings::default(), args.force)?;
    tracing::info!(event = "config_written", path = %args.path.display());
    Ok(())
}
