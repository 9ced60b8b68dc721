//! Valuation report numbering
//!
//! Report numbers look like `VAL-2025-06-0007`: a fixed prefix, the year and
//! month of issue, and a four-digit sequence that restarts every month.

use chrono::{Local, NaiveDate};

pub const REPORT_PREFIX: &str = "VAL";

/// `VAL-YYYY-MM` for the given date
pub fn month_prefix(date: NaiveDate) -> String {
    format!("{}-{}", REPORT_PREFIX, date.format("%Y-%m"))
}

/// Next report number for the month of `date`
///
/// `last` is the highest report number issued so far. It only continues the
/// sequence when it belongs to the same month; a malformed sequence restarts at 1.
pub fn next_report_number(date: NaiveDate, last: Option<&str>) -> String {
    let prefix = month_prefix(date);

    let next = match last {
        Some(last) if last.starts_with(&prefix) => match last
            .rsplit('-')
            .next()
            .and_then(|seq| seq.parse::<u32>().ok())
        {
            Some(seq) => seq + 1,
            None => {
                tracing::debug!("Unparseable report sequence in '{}'; restarting at 1", last);
                1
            }
        },
        _ => 1,
    };

    format!("{}-{:04}", prefix, next)
}

/// Next report number for today's date
pub fn next_report_number_today(last: Option<&str>) -> String {
    next_report_number(Local::now().date_naive(), last)
}

/// Placeholder suggested in an empty report number field
pub fn report_number_placeholder(date: NaiveDate) -> String {
    format!("{}-XXXX", month_prefix(date))
}
