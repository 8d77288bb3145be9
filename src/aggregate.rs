use crate::normalize::title_case;
use crate::reference::ReferenceSet;
use indexmap::IndexMap;
use tracing::{debug, info};

/// Final mapping from display-form country name to population, kept in
/// first-seen order. Later rows for the same country overwrite earlier ones.
pub type ResultTable = IndexMap<String, Option<u64>>;

/// Applies the reference-set membership filter and accumulates the result
/// table.
pub struct Aggregator {
    reference: ReferenceSet,
    table: ResultTable,
    dropped: usize,
}

impl Aggregator {
    pub fn new(reference: ReferenceSet) -> Self {
        Self {
            reference,
            table: ResultTable::new(),
            dropped: 0,
        }
    }

    /// Adds one cleaned row and reports whether it was kept. A name absent
    /// from the reference set is out of scope for the dataset; the drop is
    /// logged so exclusions stay auditable.
    pub fn add(&mut self, normalized: &str, population: Option<u64>) -> bool {
        if !self.reference.contains(normalized) {
            debug!("Dropping '{}': not in reference set", normalized);
            self.dropped += 1;
            return false;
        }
        // Last row wins for duplicate appearances of the same country.
        self.table.insert(title_case(normalized), population);
        true
    }

    pub fn finish(self) -> ResultTable {
        info!(
            "Aggregation complete: {} countries kept, {} rows dropped",
            self.table.len(),
            self.dropped
        );
        self.table
    }
}
