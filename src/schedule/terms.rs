//! Loan input parameters

use serde::{Deserialize, Serialize};

use super::engine::ScheduleIter;
use super::rows::ScheduleSummary;
use super::MONTHS_PER_YEAR;

/// Terms of a fixed-rate loan.
///
/// Built once from validated input and never mutated. The engine does not
/// validate these values itself; degenerate terms (zero rate, zero term)
/// produce degenerate but well-defined results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Principal amount borrowed
    pub principal: f64,

    /// Loan duration in years
    pub term_years: u32,

    /// Nominal annual interest rate as a percentage (6.0 = 6%)
    pub annual_rate_percent: f64,
}

impl LoanTerms {
    pub fn new(principal: f64, term_years: u32, annual_rate_percent: f64) -> Self {
        Self {
            principal,
            term_years,
            annual_rate_percent,
        }
    }

    /// Total number of monthly payments over the term
    pub fn months(&self) -> u32 {
        self.term_years * MONTHS_PER_YEAR
    }

    /// Lazy month-by-month schedule.
    ///
    /// The iterator is a pure function of the terms: calling this again
    /// reproduces the identical row sequence.
    pub fn schedule(&self) -> ScheduleIter {
        ScheduleIter::new(self.clone())
    }

    /// Aggregate totals over the full schedule
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary::from_terms(self)
    }
}
