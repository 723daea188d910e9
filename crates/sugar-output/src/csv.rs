//! CSV output backend.
//!
//! Writes one file: a `tick` column followed by one column per registered
//! series, one row per collected sample.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::collector::{DataCollector, SampleRow};
use crate::OutputResult;

/// Writes collected metrics to a CSV file.
pub struct CsvWriter {
    inner: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `path` and write the header row (`tick` + series names).
    pub fn new(path: &Path, series_names: &[&str]) -> OutputResult<Self> {
        let mut inner = Writer::from_path(path)?;
        let mut header = vec!["tick"];
        header.extend_from_slice(series_names);
        inner.write_record(&header)?;
        Ok(Self {
            inner,
            finished: false,
        })
    }

    /// Append one sample row.
    pub fn write_row(&mut self, row: &SampleRow) -> OutputResult<()> {
        let mut record = vec![row.tick.0.to_string()];
        record.extend(row.values.iter().map(f64::to_string));
        self.inner.write_record(&record)?;
        Ok(())
    }

    /// Flush and close the underlying file handle.
    ///
    /// Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}

/// Dump a collector's full history to `path` in one call.
pub fn export_csv<S>(collector: &DataCollector<S>, path: &Path) -> OutputResult<()> {
    let names: Vec<&str> = collector.names().collect();
    let mut writer = CsvWriter::new(path, &names)?;
    for row in collector.rows() {
        writer.write_row(row)?;
    }
    writer.finish()
}
