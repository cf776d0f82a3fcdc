//! Error taxonomy for collecting input and persisting a schedule

use std::io;

use thiserror::Error;

/// Errors surfaced around the amortization engine.
///
/// The engine arithmetic itself never fails; degenerate numeric results pass
/// through it unchecked. Everything here belongs to the console provider or
/// the CSV sink.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The output destination could not be opened or its header written.
    /// Fatal: the sink is acquired before any input is collected.
    #[error("could not initialize the schedule writer: {source}")]
    SinkInit {
        #[source]
        source: csv::Error,
    },

    /// A console value failed to parse as a number. Fatal: no rows are
    /// produced beyond a possibly-already-written header.
    #[error("the {field} is mandatory to be numeric")]
    InputParse { field: &'static str },

    /// One row failed to persist. Recoverable: the export loop logs it and
    /// moves on to the next month.
    #[error("error while writing the row for month {month}: {source}")]
    RowWrite {
        month: u32,
        #[source]
        source: csv::Error,
    },

    /// The output file could not be finalized. Reported, not retried.
    #[error("could not finalize the schedule file: {source}")]
    SinkClose {
        #[source]
        source: io::Error,
    },
}
