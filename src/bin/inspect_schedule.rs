//! Print an amortization schedule for a scenario given on the command line
//!
//! Diagnostic companion to the console generator: renders the summary and
//! the leading rows as an aligned table, or the whole report as JSON.

use clap::Parser;
use serde::Serialize;

use loan_schedule::{LoanTerms, ScheduleRow, ScheduleSummary};

#[derive(Parser)]
#[command(
    name = "inspect_schedule",
    about = "Inspect the amortization schedule for a fixed-rate loan scenario"
)]
struct Args {
    /// Principal amount borrowed
    #[arg(long, default_value_t = 100_000.0)]
    principal: f64,

    /// Loan period in years
    #[arg(long, default_value_t = 30)]
    years: u32,

    /// Nominal annual interest rate in percent
    #[arg(long, default_value_t = 6.0)]
    rate: f64,

    /// Number of leading rows to print (0 = all)
    #[arg(long, default_value_t = 12)]
    take: usize,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    terms: LoanTerms,
    summary: ScheduleSummary,
    rows: Vec<ScheduleRow>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let terms = LoanTerms::new(args.principal, args.years, args.rate);
    let summary = terms.summary();

    if !summary.monthly_payment.is_finite() {
        log::warn!(
            "monthly payment is not finite for these terms; \
             a zero rate drives the annuity formula to 0/0"
        );
    }

    let take = if args.take == 0 {
        terms.months() as usize
    } else {
        args.take
    };
    let rows: Vec<ScheduleRow> = terms.schedule().take(take).collect();

    if args.json {
        let report = Report {
            terms,
            summary,
            rows,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Loan: principal {:.2}, {} years at {}%",
        terms.principal, terms.term_years, terms.annual_rate_percent
    );
    println!(
        "Monthly payment: {:.2} over {} months",
        summary.monthly_payment, summary.months
    );
    println!(
        "Totals: paid {:.2} (interest {:.2}, principal {:.2})",
        summary.total_paid, summary.total_interest, summary.total_principal
    );
    println!();
    println!(
        "{:<6} {:<12} {:<12} {:<12} {:<14}",
        "Month", "Payment", "Interest", "Principal", "Balance"
    );
    for row in &rows {
        println!(
            "{:<6} {:<12.2} {:<12.2} {:<12.2} {:<14.2}",
            row.month, row.payment, row.interest, row.principal, row.balance
        );
    }

    Ok(())
}
