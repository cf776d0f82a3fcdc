//! CSV output sink for amortization schedules
//!
//! One header row, then one row per month in column order month, payment,
//! balance, interest, principal paid. Numeric columns are written with two
//! decimal places. The console generator always writes to the fixed
//! [`OUTPUT_PATH`] destination.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::error;

use crate::error::ScheduleError;
use crate::schedule::{LoanTerms, ScheduleRow};

/// Destination file for the console generator
pub const OUTPUT_PATH: &str = "amortization_schedule.csv";

/// Column header, in persisted order
const HEADER: [&str; 5] = ["month", "payment", "balance", "interest", "principal_paid"];

/// Schedule sink wrapping a [`csv::Writer`]
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    /// Open the destination file for writing
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, ScheduleError> {
        let writer = csv::Writer::from_path(path)
            .map_err(|source| ScheduleError::SinkInit { source })?;
        Ok(Self { writer })
    }
}

impl<W: Write> CsvSink<W> {
    /// Wrap an arbitrary writer
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    /// Write the column header.
    ///
    /// Part of sink initialization: it runs before any input is collected,
    /// and a failure here is as fatal as a failed open.
    pub fn write_header(&mut self) -> Result<(), ScheduleError> {
        self.writer
            .write_record(HEADER)
            .map_err(|source| ScheduleError::SinkInit { source })
    }

    /// Persist one schedule row
    pub fn write_row(&mut self, row: &ScheduleRow) -> Result<(), ScheduleError> {
        self.writer
            .write_record([
                row.month.to_string(),
                format!("{:.2}", row.payment),
                format!("{:.2}", row.balance),
                format!("{:.2}", row.interest),
                format!("{:.2}", row.principal),
            ])
            .map_err(|source| ScheduleError::RowWrite {
                month: row.month,
                source,
            })
    }

    /// Flush buffered rows and release the destination
    pub fn close(mut self) -> Result<(), ScheduleError> {
        self.writer
            .flush()
            .map_err(|source| ScheduleError::SinkClose { source })
    }
}

/// Write every row of the schedule for `terms` into `sink`.
///
/// Row production is independent of sink health: a row that fails to persist
/// is logged and skipped, and the remaining months are still generated and
/// attempted. Returns the number of rows written.
pub fn export_schedule<W: Write>(terms: &LoanTerms, sink: &mut CsvSink<W>) -> u32 {
    let mut written = 0;
    for row in terms.schedule() {
        match sink.write_row(&row) {
            Ok(()) => written += 1,
            Err(e) => error!("{e}"),
        }
    }
    written
}
