//! Fixed-rate loan amortization.
//!
//! Derives the constant monthly payment for a loan from its principal, term,
//! and nominal annual rate, then decomposes each month's payment into
//! interest and principal while tracking the declining balance. Schedules
//! are persisted as CSV through [`output::CsvSink`]; loan terms come from
//! the console via [`input::read_loan_terms`].

pub mod error;
pub mod input;
pub mod output;
pub mod schedule;

pub use error::ScheduleError;
pub use schedule::{LoanTerms, ScheduleIter, ScheduleRow, ScheduleSummary};
