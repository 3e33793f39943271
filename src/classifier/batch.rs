//! Batch classification drivers.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::classifier::engine::ClassificationEngine;
use crate::classifier::record::{ClassifiedRecord, CompanyRecord};
use crate::error::{ClassifierError, Result};

impl ClassificationEngine {
    /// Classify records one after another, preserving input order.
    pub fn classify_companies(&self, records: &[CompanyRecord]) -> Result<Vec<ClassifiedRecord>> {
        let total = records.len();
        let mut results = Vec::with_capacity(total);

        for (index, record) in records.iter().enumerate() {
            let insurance_labels = self.classify_company(record)?;
            results.push(ClassifiedRecord {
                record: record.clone(),
                insurance_labels,
            });
            self.report_progress(index + 1, total);
        }

        Ok(results)
    }

    /// Classify records on a worker pool, preserving input order.
    ///
    /// The pool size comes from `threads` in the configuration, defaulting to
    /// the number of CPU cores.
    pub fn classify_companies_parallel(
        &self,
        records: &[CompanyRecord],
    ) -> Result<Vec<ClassifiedRecord>> {
        let thread_pool_size = self.config().threads.unwrap_or_else(num_cpus::get);
        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(thread_pool_size)
            .thread_name(|i| format!("classifier-{i}"))
            .build()
            .map_err(|e| ClassifierError::internal(format!("Failed to create thread pool: {e}")))?;

        let total = records.len();
        let processed = AtomicUsize::new(0);

        thread_pool.install(|| {
            records
                .par_iter()
                .map(|record| -> Result<ClassifiedRecord> {
                    let insurance_labels = self.classify_company(record)?;
                    let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
                    self.report_progress(done, total);
                    Ok(ClassifiedRecord {
                        record: record.clone(),
                        insurance_labels,
                    })
                })
                .collect::<Result<Vec<_>>>()
        })
    }

    fn report_progress(&self, processed: usize, total: usize) {
        if processed % self.config().progress_interval == 0 {
            info!(
                "Processed {}/{} companies ({:.1}%)",
                processed,
                total,
                processed as f64 / total as f64 * 100.0
            );
        }
    }
}
