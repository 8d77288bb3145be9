use crate::error::{Result, ScraperError};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Canonical list of country names the final dataset is restricted to.
#[derive(Debug, Clone)]
pub struct ReferenceSet {
    names: HashSet<String>,
}

impl ReferenceSet {
    /// Loads the catalogue file and collects the configured column as a set
    /// of trimmed, lowercased unique names. Failure here is fatal: nothing
    /// downstream is meaningful without the reference list.
    pub fn load<P: AsRef<Path>>(path: P, column: &str) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let idx = reader
            .headers()?
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| ScraperError::MissingColumn(column.to_string()))?;

        let mut names = HashSet::new();
        for record in reader.records() {
            let record = record?;
            if let Some(name) = record.get(idx) {
                let name = name.trim().to_lowercase();
                if !name.is_empty() {
                    names.insert(name);
                }
            }
        }
        info!("Loaded {} unique reference countries", names.len());
        Ok(Self { names })
    }

    /// Builds a set directly from already-known names, trimming and
    /// lowercasing as `load` would.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().trim().to_lowercase())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Sorted copy for display; the set itself is unordered.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.names.iter().map(|s| s.as_str()).collect();
        sorted.sort_unstable();
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalogue(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_trimmed_lowercased_unique_names() {
        let file = write_catalogue("País,Región\n France ,Europa\nfrance,Europa\nSpain,Europa\n");
        let set = ReferenceSet::load(file.path(), "País").unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("france"));
        assert!(set.contains("spain"));
        assert!(!set.contains("France"));
    }

    #[test]
    fn missing_column_is_fatal() {
        let file = write_catalogue("Country,Region\nFrance,Europe\n");
        let err = ReferenceSet::load(file.path(), "País").unwrap_err();
        assert!(matches!(err, ScraperError::MissingColumn(_)));
    }

    #[test]
    fn missing_file_is_fatal() {
        assert!(ReferenceSet::load("no/such/catalogue.csv", "País").is_err());
    }

    #[test]
    fn sorted_names_are_ordered() {
        let set = ReferenceSet::from_names(["spain", "france", "monaco"]);
        assert_eq!(set.sorted_names(), vec!["france", "monaco", "spain"]);
    }
}
