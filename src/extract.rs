use crate::config::SourceConfig;
use crate::error::{Result, ScraperError};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

/// One unprocessed (name text, population text) pair from a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub name: String,
    pub population: String,
}

/// Pulls raw rows out of the first table carrying the marker class.
///
/// Which cells hold the name and the population is pinned to one page
/// layout and comes from configuration, so layout drift stays a config
/// edit.
pub struct TableExtractor {
    table_selector: Selector,
    row_selector: Selector,
    cell_selector: Selector,
    table_class: String,
    name_column: usize,
    population_column: usize,
    min_cells: usize,
}

impl TableExtractor {
    pub fn new(source: &SourceConfig) -> Result<Self> {
        let selector = format!("table.{}", source.table_class);
        let table_selector = Selector::parse(&selector).map_err(|e| {
            ScraperError::Config(format!(
                "Invalid table class '{}': {}",
                source.table_class, e
            ))
        })?;
        Ok(Self {
            table_selector,
            row_selector: Selector::parse("tr").unwrap(),
            cell_selector: Selector::parse("td").unwrap(),
            table_class: source.table_class.clone(),
            name_column: source.name_column,
            population_column: source.population_column,
            min_cells: source.min_cells,
        })
    }

    pub fn extract(&self, html: &str) -> Result<Vec<RawRow>> {
        let document = Html::parse_document(html);
        let table = document
            .select(&self.table_selector)
            .next()
            .ok_or_else(|| ScraperError::TableNotFound {
                class: self.table_class.clone(),
            })?;

        let mut rows = Vec::new();
        // The first row is the header.
        for row in table.select(&self.row_selector).skip(1) {
            let cells: Vec<ElementRef> = row.select(&self.cell_selector).collect();
            if cells.len() < self.min_cells {
                // Malformed or summary row.
                debug!("Skipping row with {} cells", cells.len());
                continue;
            }
            rows.push(RawRow {
                name: cell_text(cells.get(self.name_column)),
                population: cell_text(cells.get(self.population_column)),
            });
        }
        info!(
            "Extracted {} raw rows from table.{}",
            rows.len(),
            self.table_class
        );
        Ok(rows)
    }
}

fn cell_text(cell: Option<&ElementRef>) -> String {
    cell.map(|c| c.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceConfig;

    fn extractor() -> TableExtractor {
        TableExtractor::new(&SourceConfig::default()).unwrap()
    }

    #[test]
    fn extracts_name_and_population_cells() {
        let html = r#"
            <table class="wikitable">
              <tr><th>Pos</th><th>País</th><th>Densidad</th><th>Población</th></tr>
              <tr><td>1</td><td>Monaco</td><td>19 000</td><td>38.350</td></tr>
            </table>
        "#;
        let rows = extractor().extract(html).unwrap();
        assert_eq!(
            rows,
            vec![RawRow {
                name: "Monaco".to_string(),
                population: "38.350".to_string(),
            }]
        );
    }

    #[test]
    fn skips_header_and_short_rows() {
        let html = r#"
            <table class="wikitable">
              <tr><th>Pos</th><th>País</th><th>Densidad</th><th>Población</th></tr>
              <tr><td colspan="4">summary</td></tr>
              <tr><td>1</td><td>Spain</td><td>94</td><td>47.000.000</td></tr>
            </table>
        "#;
        let rows = extractor().extract(html).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Spain");
    }

    #[test]
    fn missing_table_is_signalled() {
        let err = extractor().extract("<p>no tables here</p>").unwrap_err();
        assert!(matches!(err, ScraperError::TableNotFound { .. }));
    }

    #[test]
    fn first_marked_table_wins() {
        let html = r#"
            <table class="infobox"><tr><td>x</td></tr></table>
            <table class="wikitable">
              <tr><th>h</th></tr>
              <tr><td>1</td><td>France</td><td>120</td><td>67.000.000</td></tr>
            </table>
        "#;
        let rows = extractor().extract(html).unwrap();
        assert_eq!(rows[0].name, "France");
        assert_eq!(rows[0].population, "67.000.000");
    }

    #[test]
    fn missing_population_cell_yields_empty_text() {
        // Three cells pass the guard but leave nothing at index 3.
        let html = r#"
            <table class="wikitable">
              <tr><th>h</th></tr>
              <tr><td>1</td><td>France</td><td>120</td></tr>
            </table>
        "#;
        let rows = extractor().extract(html).unwrap();
        assert_eq!(rows[0].name, "France");
        assert_eq!(rows[0].population, "");
    }
}
