//! Fan-in of per-partition tables into the global table.

use crate::error::Result;
use crate::models::table::AggregateTable;

/// Folds per-partition aggregate tables into one global table.
///
/// Aggregate accumulation is commutative and associative, so fold order is
/// irrelevant. The coordinator is the sole writer of the global table and
/// runs single-threaded, keeping synchronization out of the accumulation
/// path.
pub struct MergeCoordinator {
    verify_keys: bool,
}

impl MergeCoordinator {
    pub fn new() -> Self {
        Self { verify_keys: true }
    }

    pub fn with_verify_keys(verify_keys: bool) -> Self {
        Self { verify_keys }
    }

    /// Consume the partial tables and fold them into one. The first table
    /// becomes the global table; the rest are merged entry by entry, each
    /// entry reusing its carried hash.
    pub fn merge_tables(&self, tables: Vec<AggregateTable>) -> Result<AggregateTable> {
        let mut iter = tables.into_iter();
        let mut global = match iter.next() {
            Some(table) => table,
            None => return Ok(AggregateTable::new(self.verify_keys)),
        };
        for table in iter {
            global.merge(&table)?;
        }
        Ok(global)
    }
}

impl Default for MergeCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
