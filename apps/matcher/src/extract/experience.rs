use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::Experience;

/// `<Month> <Year> - <Month> <Year>` or `<Month> <Year> to <Month> <Year>`.
static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([a-z]{3,9})\s+([0-9]{4})\s*(?:-|to)\s*([a-z]{3,9})\s+([0-9]{4})")
        .expect("date range pattern must compile")
});

/// Sums every positive-duration date range found in `text`.
///
/// Ranges whose month names cannot be resolved are skipped individually; only a
/// text with no valid range at all yields `None`.
pub fn compute_experience(text: &str) -> Option<Experience> {
    let mut total_months: u32 = 0;

    for caps in DATE_RANGE.captures_iter(text) {
        match range_months(&caps[1], &caps[2], &caps[3], &caps[4]) {
            Some(months) if months > 0 => {
                total_months = total_months.saturating_add(months as u32);
            }
            Some(_) => {}
            None => debug!(fragment = &caps[0], "skipping unresolvable date range"),
        }
    }

    Experience::from_months(total_months)
}

fn range_months(start_month: &str, start_year: &str, end_month: &str, end_year: &str) -> Option<i64> {
    let sm = month_number(start_month)?;
    let em = month_number(end_month)?;
    let sy: i64 = start_year.parse().ok()?;
    let ey: i64 = end_year.parse().ok()?;
    Some((ey - sy) * 12 + (em - sm))
}

fn month_number(name: &str) -> Option<i64> {
    let month = match name.to_lowercase().as_str() {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" | "sept" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(month)
}
