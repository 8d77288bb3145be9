//! Country population scraper: one page, one table, one CSV out.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod reference;

pub use aggregate::{Aggregator, ResultTable};
pub use error::{Result, ScraperError};
pub use extract::{RawRow, TableExtractor};
pub use reference::ReferenceSet;
