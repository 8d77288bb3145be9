use crate::aggregate::ResultTable;
use crate::config::OutputConfig;
use crate::error::Result;
use tracing::info;

/// Writes the finished table as a two-column CSV, overwriting any previous
/// dataset at the same path. An unknown population becomes an empty field.
pub fn write_csv(config: &OutputConfig, table: &ResultTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(&config.path)?;
    writer.write_record([
        config.name_header.as_str(),
        config.population_header.as_str(),
    ])?;
    for (country, population) in table {
        let population = match population {
            Some(p) => p.to_string(),
            None => String::new(),
        };
        writer.write_record([country.as_str(), population.as_str()])?;
    }
    writer.flush()?;
    info!("Wrote {} rows to {}", table.len(), config.path);
    Ok(())
}
