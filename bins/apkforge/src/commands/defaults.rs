//! Print the default record

use super::OutputFormat;
use apkforge_android::record::ConfigurationRecord;

pub fn run(format: OutputFormat) -> anyhow::Result<()> {
    let record = ConfigurationRecord::default();
    match format {
        OutputFormat::Text => print!("{}", record.to_toml()?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
    }
    Ok(())
}
