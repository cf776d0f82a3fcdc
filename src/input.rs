//! Console input provider for loan terms
//!
//! Reads the three loan scalars in a fixed order, one line each: principal
//! amount (whole number), loan period in years (whole number), annual
//! interest rate (decimal). The first value that fails to parse aborts the
//! run with an error naming the field.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::error::ScheduleError;
use crate::schedule::LoanTerms;

/// Prompt on stdout and read loan terms from stdin
pub fn read_loan_terms() -> Result<LoanTerms, ScheduleError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_loan_terms_from(&mut stdin.lock(), &mut stdout.lock())
}

/// Read loan terms from any reader, writing prompts to `prompts`.
///
/// Split out from [`read_loan_terms`] so tests can script the console.
pub fn read_loan_terms_from<R, W>(
    input: &mut R,
    prompts: &mut W,
) -> Result<LoanTerms, ScheduleError>
where
    R: BufRead,
    W: Write,
{
    let amount: i64 = prompt_value(input, prompts, "Please enter the amount:", "amount")?;
    let term_years: u32 = prompt_value(
        input,
        prompts,
        "Please enter the loan period in years:",
        "loan period",
    )?;
    let annual_rate: f64 = prompt_value(
        input,
        prompts,
        "Please enter the annual interest rate:",
        "annual interest rate",
    )?;

    Ok(LoanTerms::new(amount as f64, term_years, annual_rate))
}

/// One prompt-then-parse step.
///
/// A missing line counts the same as a non-numeric one: the value is
/// mandatory. Prompt writes are fire-and-forget, matching console println
/// behavior.
fn prompt_value<R, W, T>(
    input: &mut R,
    prompts: &mut W,
    prompt: &str,
    field: &'static str,
) -> Result<T, ScheduleError>
where
    R: BufRead,
    W: Write,
    T: FromStr,
{
    let _ = writeln!(prompts, "{prompt}");
    let _ = prompts.flush();

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|_| ScheduleError::InputParse { field })?;
    line.trim()
        .parse()
        .map_err(|_| ScheduleError::InputParse { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(script: &str) -> (Result<LoanTerms, ScheduleError>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut prompts = Vec::new();
        let result = read_loan_terms_from(&mut input, &mut prompts);
        (result, String::from_utf8(prompts).unwrap())
    }

    #[test]
    fn test_reads_terms_in_order() {
        let (result, prompts) = read("100000\n30\n6.5\n");
        let terms = result.unwrap();

        assert_eq!(terms.principal, 100_000.0);
        assert_eq!(terms.term_years, 30);
        assert_eq!(terms.annual_rate_percent, 6.5);

        let lines: Vec<_> = prompts.lines().collect();
        assert_eq!(
            lines,
            [
                "Please enter the amount:",
                "Please enter the loan period in years:",
                "Please enter the annual interest rate:",
            ]
        );
    }

    #[test]
    fn test_tolerates_surrounding_whitespace() {
        let (result, _) = read("  1200 \n 1\n 0.0 \n");
        let terms = result.unwrap();
        assert_eq!(terms.principal, 1_200.0);
        assert_eq!(terms.term_years, 1);
        assert_eq!(terms.annual_rate_percent, 0.0);
    }

    #[test]
    fn test_non_numeric_amount_aborts() {
        let (result, prompts) = read("abc\n30\n6.0\n");
        assert!(matches!(
            result,
            Err(ScheduleError::InputParse { field: "amount" })
        ));
        // Aborted before the second prompt
        assert_eq!(prompts.lines().count(), 1);
    }

    #[test]
    fn test_amount_must_be_whole() {
        let (result, _) = read("100000.50\n30\n6.0\n");
        assert!(matches!(
            result,
            Err(ScheduleError::InputParse { field: "amount" })
        ));
    }

    #[test]
    fn test_non_numeric_period_aborts() {
        let (result, _) = read("100000\nthirty\n6.0\n");
        assert!(matches!(
            result,
            Err(ScheduleError::InputParse { field: "loan period" })
        ));
    }

    #[test]
    fn test_non_numeric_rate_aborts() {
        let (result, _) = read("100000\n30\nsix\n");
        assert!(matches!(
            result,
            Err(ScheduleError::InputParse {
                field: "annual interest rate"
            })
        ));
    }

    #[test]
    fn test_missing_input_aborts() {
        let (result, _) = read("");
        assert!(matches!(
            result,
            Err(ScheduleError::InputParse { field: "amount" })
        ));
    }
}
