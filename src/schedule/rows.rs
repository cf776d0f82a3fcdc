//! Per-month schedule rows and whole-schedule aggregates

use serde::Serialize;

use super::engine::monthly_payment;
use super::terms::LoanTerms;

/// One month of an amortization schedule
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleRow {
    /// Payment number, 1-based
    pub month: u32,

    /// Constant monthly payment
    pub payment: f64,

    /// Interest accrued on the balance carried into this month
    pub interest: f64,

    /// Portion of the payment applied against the principal
    pub principal: f64,

    /// Balance remaining after this payment, clamped at zero
    pub balance: f64,
}

/// Totals across a full schedule
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSummary {
    /// Constant monthly payment for the terms
    pub monthly_payment: f64,

    /// Number of scheduled payments
    pub months: u32,

    /// Sum of all payments over the term
    pub total_paid: f64,

    /// Interest portion of the total
    pub total_interest: f64,

    /// Principal portion of the total
    pub total_principal: f64,
}

impl ScheduleSummary {
    /// Accumulate totals by walking the full schedule
    pub fn from_terms(terms: &LoanTerms) -> Self {
        let mut total_paid = 0.0;
        let mut total_interest = 0.0;
        let mut total_principal = 0.0;

        for row in terms.schedule() {
            total_paid += row.payment;
            total_interest += row.interest;
            total_principal += row.principal;
        }

        Self {
            monthly_payment: monthly_payment(
                terms.principal,
                terms.term_years,
                terms.annual_rate_percent,
            ),
            months: terms.months(),
            total_paid,
            total_interest,
            total_principal,
        }
    }
}
