//! Payment formula and the month-by-month schedule iterator

use super::terms::LoanTerms;
use super::rows::ScheduleRow;
use super::{MONTHS_PER_YEAR, PERCENT};

/// Constant monthly payment from the standard annuity formula:
/// `r * P / (1 - (1 + r)^-n)` where `r` is the monthly rate and `n` the
/// term in months.
///
/// A zero annual rate collapses the expression to `0/0`; the IEEE NaN result
/// is returned unchanged rather than special-cased. A zero-year term drives
/// the denominator to zero and yields infinity, but no schedule row is ever
/// produced for such terms.
pub fn monthly_payment(principal: f64, term_years: u32, annual_rate_percent: f64) -> f64 {
    let monthly_rate = annual_rate_percent / PERCENT / MONTHS_PER_YEAR as f64;
    let months = (term_years * MONTHS_PER_YEAR) as f64;
    monthly_rate * principal / (1.0 - (1.0 + monthly_rate).powf(-months))
}

/// Interest accrued on `balance` over one month at the nominal annual rate
pub fn monthly_interest(balance: f64, annual_rate_percent: f64) -> f64 {
    let interest_per_year = balance * annual_rate_percent / PERCENT;
    interest_per_year / MONTHS_PER_YEAR as f64
}

/// Lazy iterator over the monthly rows of an amortization schedule.
///
/// Carries the running balance forward; everything else is recomputed from
/// the terms on each step.
#[derive(Debug, Clone)]
pub struct ScheduleIter {
    terms: LoanTerms,
    month: u32,
    months: u32,
    balance: f64,
}

impl ScheduleIter {
    pub(super) fn new(terms: LoanTerms) -> Self {
        let months = terms.months();
        let balance = terms.principal;
        Self {
            terms,
            month: 0,
            months,
            balance,
        }
    }
}

impl Iterator for ScheduleIter {
    type Item = ScheduleRow;

    fn next(&mut self) -> Option<ScheduleRow> {
        if self.month >= self.months {
            return None;
        }
        self.month += 1;

        let last_balance = self.balance;
        // Recomputed every month on purpose: the emitted payment must come
        // out of the same arithmetic on every row, never out of a cache.
        let payment = monthly_payment(
            self.terms.principal,
            self.terms.term_years,
            self.terms.annual_rate_percent,
        );
        let interest = monthly_interest(last_balance, self.terms.annual_rate_percent);
        let principal = payment - interest;

        // Conditional rather than f64::max: max(0.0, NaN) would turn a NaN
        // balance back into zero.
        let reduced = last_balance - principal;
        self.balance = if reduced < 0.0 { 0.0 } else { reduced };

        Some(ScheduleRow {
            month: self.month,
            payment,
            interest,
            principal,
            balance: self.balance,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.months - self.month) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScheduleIter {}
