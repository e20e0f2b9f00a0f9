//! Whole-file orchestration: source, partition, scan in parallel, merge.

use crate::error::{ProcessingError, Result};
use crate::models::table::AggregateTable;
use crate::processors::{scan_partition, MergeCoordinator};
use crate::readers::{partition, InputSource, SourcingStrategy};
use crate::utils::progress::ProgressReporter;
use rayon::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{debug, info};

pub struct MeasurementsProcessor {
    max_workers: usize,
    sourcing: SourcingStrategy,
    verify_keys: bool,
}

impl MeasurementsProcessor {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers: max_workers.max(1),
            sourcing: SourcingStrategy::default(),
            verify_keys: true,
        }
    }

    pub fn with_sourcing(mut self, sourcing: SourcingStrategy) -> Self {
        self.sourcing = sourcing;
        self
    }

    pub fn with_verify_keys(mut self, verify_keys: bool) -> Self {
        self.verify_keys = verify_keys;
        self
    }

    /// Aggregate the whole input file into one global table.
    ///
    /// One partition per worker, each scanned into its own fresh table on a
    /// dedicated rayon pool — no shared mutable state inside the scan loop.
    /// The pool joins before the merge coordinator folds the partial
    /// tables, and the input source stays alive until both are done.
    pub fn process_file(
        &self,
        path: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<AggregateTable> {
        let started = Instant::now();

        let source = InputSource::open(path, self.sourcing)?;
        let data = source.bytes();
        info!(
            bytes = data.len(),
            workers = self.max_workers,
            sourcing = ?self.sourcing,
            "input sourced"
        );

        let partitions = partition(data, self.max_workers);
        debug!(partitions = partitions.len(), "input partitioned");
        if let Some(p) = progress {
            p.set_message(&format!("Scanning {} partitions...", partitions.len()));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| ProcessingError::Config(e.to_string()))?;

        let completed = AtomicUsize::new(0);
        let verify_keys = self.verify_keys;
        let tables: Result<Vec<AggregateTable>> = pool.install(|| {
            partitions
                .par_iter()
                .map(|part| {
                    let mut table = AggregateTable::new(verify_keys);
                    scan_partition(part.bytes(data), &mut table)?;

                    let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    if let Some(p) = progress {
                        p.update(done as u64);
                    }
                    Ok(table)
                })
                .collect()
        });

        let merger = MergeCoordinator::with_verify_keys(self.verify_keys);
        let global = merger.merge_tables(tables?)?;

        info!(
            stations = global.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "aggregation complete"
        );
        if let Some(p) = progress {
            p.finish_with_message(&format!("Aggregated {} stations", global.len()));
        }
        Ok(global)
    }
}
