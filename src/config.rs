use crate::error::{Result, ScraperError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
    pub reference: ReferenceConfig,
    pub output: OutputConfig,
}

/// Where the table lives and how to read it.
///
/// The column indices are a contract with one specific page layout; when the
/// page drifts, the fix is a config edit, not a code change.
#[derive(Debug, Deserialize)]
pub struct SourceConfig {
    pub url: String,
    #[serde(default = "default_table_class")]
    pub table_class: String,
    #[serde(default = "default_name_column")]
    pub name_column: usize,
    #[serde(default = "default_population_column")]
    pub population_column: usize,
    #[serde(default = "default_min_cells")]
    pub min_cells: usize,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Deserialize)]
pub struct ReferenceConfig {
    pub path: String,
    #[serde(default = "default_reference_column")]
    pub column: String,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    #[serde(default = "default_name_header")]
    pub name_header: String,
    #[serde(default = "default_population_header")]
    pub population_header: String,
}

fn default_table_class() -> String {
    "wikitable".to_string()
}

fn default_name_column() -> usize {
    1
}

fn default_population_column() -> usize {
    3
}

fn default_min_cells() -> usize {
    3
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36".to_string()
}

fn default_reference_column() -> String {
    "País".to_string()
}

fn default_name_header() -> String {
    "País".to_string()
}

fn default_population_header() -> String {
    "Población".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            table_class: default_table_class(),
            name_column: default_name_column(),
            population_column: default_population_column(),
            min_cells: default_min_cells(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ScraperError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_in_omitted_fields() {
        let raw = r#"
            [source]
            url = "https://example.com/page"

            [reference]
            path = "catalogue.csv"

            [output]
            path = "out.csv"
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.source.table_class, "wikitable");
        assert_eq!(config.source.name_column, 1);
        assert_eq!(config.source.population_column, 3);
        assert_eq!(config.source.min_cells, 3);
        assert_eq!(config.reference.column, "País");
        assert_eq!(config.output.name_header, "País");
        assert_eq!(config.output.population_header, "Población");
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let err = Config::load("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ScraperError::Config(_)));
    }
}
