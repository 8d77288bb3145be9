use crate::aggregate::{Aggregator, ResultTable};
use crate::config::Config;
use crate::error::Result;
use crate::extract::TableExtractor;
use crate::fetch::PageFetcher;
use crate::normalize::{normalize, parse_population};
use crate::reference::ReferenceSet;
use std::time::Duration;
use tracing::warn;

/// One full scrape: load the reference list, fetch the page, extract the
/// table, then a single linear pass of normalize/filter/aggregate.
///
/// Reference-load, fetch, and missing-table errors propagate; a row whose
/// population fails to parse is kept with no value, and a row outside the
/// reference set is dropped. One bad row never aborts the batch.
pub async fn run(config: &Config) -> Result<(ResultTable, ReferenceSet)> {
    let reference = ReferenceSet::load(&config.reference.path, &config.reference.column)?;

    let fetcher = PageFetcher::new(
        Duration::from_secs(config.source.timeout_seconds),
        &config.source.user_agent,
    )?;
    let body = fetcher.fetch(&config.source.url).await?;

    let extractor = TableExtractor::new(&config.source)?;
    let rows = extractor.extract(&body)?;

    let mut aggregator = Aggregator::new(reference.clone());
    for row in &rows {
        let name = normalize(&row.name);
        let population = parse_population(&row.population);
        if population.is_none() && !row.population.is_empty() {
            warn!("Population not numeric for '{}': '{}'", name, row.population);
        }
        aggregator.add(&name, population);
    }

    Ok((aggregator.finish(), reference))
}
