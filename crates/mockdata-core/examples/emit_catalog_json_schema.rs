use mockdata_core::catalog_json_schema;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let schema = catalog_json_schema()?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
