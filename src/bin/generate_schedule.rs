//! Interactive console generator for a fixed-rate amortization schedule
//!
//! Prompts for the loan terms on stdin and writes the month-by-month
//! schedule to amortization_schedule.csv in the working directory.

use anyhow::Context;

use loan_schedule::input::read_loan_terms;
use loan_schedule::output::{export_schedule, CsvSink, OUTPUT_PATH};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The sink is acquired before any input is requested: if the destination
    // cannot be opened there is no point collecting terms.
    let mut sink = CsvSink::create(OUTPUT_PATH)
        .with_context(|| format!("cannot open {OUTPUT_PATH} for writing"))?;
    sink.write_header()?;

    let terms = read_loan_terms()?;

    let written = export_schedule(&terms, &mut sink);
    sink.close()?;

    println!("Schedule complete: {written} rows written to {OUTPUT_PATH}");
    Ok(())
}
