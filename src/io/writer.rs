//! CSV writer for classified records.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use log::debug;

use crate::classifier::record::ClassifiedRecord;
use crate::error::Result;

/// Output columns, in order.
pub const RESULT_HEADERS: [&str; 6] = [
    "Description",
    "Business Tags",
    "Sector",
    "Category",
    "Niche",
    "Insurance Labels",
];

/// Write classified records to a CSV file, replacing it if it exists.
pub fn write_results<P: AsRef<Path>>(path: P, results: &[ClassifiedRecord]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_results_to(file, results)?;
    debug!(
        "Wrote {} results to {}",
        results.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Write classified records as CSV to any sink.
///
/// Insurance labels are joined with `", "`; absent fields become empty cells.
pub fn write_results_to<W: Write>(output: W, results: &[ClassifiedRecord]) -> Result<()> {
    let mut writer = Writer::from_writer(output);
    writer.write_record(RESULT_HEADERS)?;

    for result in results {
        let record = &result.record;
        let text = |field: &Option<String>| field.clone().unwrap_or_default();
        writer.write_record([
            text(&record.description),
            record
                .business_tags
                .as_ref()
                .map(|tags| tags.to_string())
                .unwrap_or_default(),
            text(&record.sector),
            text(&record.category),
            text(&record.niche),
            result.labels_joined(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
