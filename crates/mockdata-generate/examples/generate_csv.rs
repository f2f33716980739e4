use std::env;

use mockdata_core::FieldType;
use mockdata_generate::{CsvQuoting, RandomSource, ValueSynthesizer, export_csv};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut fields: Vec<FieldType> = Vec::new();
    let mut count = 7_usize;
    let mut source = RandomSource::Entropy;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--count" => count = args.next().ok_or("missing --count value")?.parse()?,
            "--seed" => {
                source = RandomSource::Seeded(args.next().ok_or("missing --seed value")?.parse()?)
            }
            _ => fields.push(FieldType::from(arg)),
        }
    }
    if fields.is_empty() {
        fields = ["Name", "Email", "Avatar URL", "Hex Color"]
            .into_iter()
            .map(FieldType::from)
            .collect();
    }

    let dataset = ValueSynthesizer::new().generate_dataset(&fields, count, source)?;
    println!("{}", export_csv(&dataset, count, CsvQuoting::None)?);
    Ok(())
}
