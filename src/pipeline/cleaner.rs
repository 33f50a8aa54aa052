//! Table normalization: header names, title casing, date canonicalization,
//! deduplication, and location back-filling.

use chrono::NaiveDate;

use crate::core::{Result, Table};

/// Placeholder written into empty `location` cells
pub const LOCATION_SENTINEL: &str = "Not Specified";

/// Accepted `posted_date` input formats, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Canonical output format for dates
const DATE_OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// What the cleaning pass changed, for logging and the final report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanSummary {
    pub duplicates_removed: usize,
    pub locations_filled: usize,
    pub dates_unparseable: usize,
}

/// Clean a raw table in the fixed order: normalize headers, title-case
/// titles, canonicalize dates, fill empty locations, drop exact duplicates.
/// All cell rewrites happen before deduplication so that rows differing only
/// in a normalized cell still compare equal.
///
/// Fails only when a required column is absent; malformed cells degrade to
/// sentinels. Running `clean` on already-clean data is a no-op apart from
/// the returned summary.
pub fn clean(mut table: Table) -> Result<(Table, CleanSummary)> {
    normalize_headers(&mut table);

    let title_idx = table.require_column("job_title")?;
    table.require_column("job_description")?;
    let location_idx = table.require_column("location")?;

    for row in 0..table.len() {
        let cased = title_case(table.cell(row, title_idx));
        table.set_cell(row, title_idx, cased);
    }

    let mut summary = CleanSummary::default();

    if let Some(date_idx) = table.column_index("posted_date") {
        for row in 0..table.len() {
            let cell = table.cell(row, date_idx);
            if cell.trim().is_empty() {
                continue;
            }
            match parse_posted_date(cell) {
                Some(date) => {
                    table.set_cell(row, date_idx, date.format(DATE_OUTPUT_FORMAT).to_string())
                }
                None => {
                    summary.dates_unparseable += 1;
                    table.set_cell(row, date_idx, String::new());
                }
            }
        }
    } else {
        log::debug!("No posted_date column; skipping date parsing");
    }

    // Back-fill before deduplication: rows differing only in how their
    // location is blank ("" vs whitespace) must collapse to one row.
    for row in 0..table.len() {
        if table.cell(row, location_idx).trim().is_empty() {
            table.set_cell(row, location_idx, LOCATION_SENTINEL.to_string());
            summary.locations_filled += 1;
        }
    }

    summary.duplicates_removed = table.dedup_rows();

    log::info!(
        "Cleaned table: {} duplicates removed, {} locations filled, {} unparseable dates",
        summary.duplicates_removed,
        summary.locations_filled,
        summary.dates_unparseable
    );
    Ok((table, summary))
}

/// Lowercase a header and replace spaces with underscores
fn normalize_header(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

fn normalize_headers(table: &mut Table) {
    for header in table.headers_mut() {
        *header = normalize_header(header);
    }
}

/// Parse an ISO-like date cell; `None` for anything unrecognized
pub fn parse_posted_date(cell: &str) -> Option<NaiveDate> {
    let trimmed = cell.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Uppercase the first letter of each word, lowercase the rest. Word breaks
/// are non-alphabetic characters; whitespace is preserved as-is.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;

    fn raw_table(headers: &[&str], rows: &[&[&str]]) -> Table {
        let mut table = Table::new(headers.iter().map(|h| h.to_string()).collect());
        for row in rows {
            table
                .push_row(row.iter().map(|c| c.to_string()).collect())
                .unwrap();
        }
        table
    }

    #[test]
    fn normalizes_header_names() {
        let table = raw_table(
            &["Job Title", "Job Description", "Location"],
            &[&["dev", "code", "Berlin"]],
        );
        let (cleaned, _) = clean(table).unwrap();
        assert_eq!(
            cleaned.headers(),
            &["job_title", "job_description", "location"]
        );
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let table = raw_table(&["job_title", "location"], &[]);
        let err = clean(table).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { ref name, .. } if name == "job_description"));
    }

    #[test]
    fn title_cases_job_titles() {
        let table = raw_table(
            &["job_title", "job_description", "location"],
            &[&["senior DATA engineer", "x", "Oslo"]],
        );
        let (cleaned, _) = clean(table).unwrap();
        assert_eq!(cleaned.cell(0, 0), "Senior Data Engineer");
    }

    #[test]
    fn unparseable_dates_become_empty_not_errors() {
        let table = raw_table(
            &["job_title", "job_description", "location", "posted_date"],
            &[
                &["a", "x", "Oslo", "2024-03-01"],
                &["b", "y", "Oslo", "sometime soon"],
            ],
        );
        let (cleaned, summary) = clean(table).unwrap();
        assert_eq!(cleaned.cell(0, 3), "2024-03-01");
        assert_eq!(cleaned.cell(1, 3), "");
        assert_eq!(summary.dates_unparseable, 1);
    }

    #[test]
    fn slash_dates_are_canonicalized() {
        assert_eq!(
            parse_posted_date("2024/03/09"),
            NaiveDate::from_ymd_opt(2024, 3, 9)
        );
        assert_eq!(parse_posted_date("not a date"), None);
    }

    #[test]
    fn empty_location_gets_sentinel() {
        let table = raw_table(
            &["job_title", "job_description", "location"],
            &[&["a", "x", ""], &["b", "y", "  "]],
        );
        let (cleaned, summary) = clean(table).unwrap();
        assert_eq!(cleaned.cell(0, 2), LOCATION_SENTINEL);
        assert_eq!(cleaned.cell(1, 2), LOCATION_SENTINEL);
        assert_eq!(summary.locations_filled, 2);
    }

    #[test]
    fn rows_differing_only_in_blank_location_collapse() {
        // "" and "  " both become the sentinel; the rows are then exact
        // duplicates and must not survive cleaning
        let table = raw_table(
            &["job_title", "job_description", "location"],
            &[&["a", "x", ""], &["a", "x", "  "]],
        );
        let (cleaned, summary) = clean(table).unwrap();

        assert_eq!(cleaned.len(), 1);
        assert_eq!(summary.duplicates_removed, 1);
        assert_eq!(cleaned.cell(0, 2), LOCATION_SENTINEL);

        let count = cleaned.len();
        let (again, second) = clean(cleaned).unwrap();
        assert_eq!(second.duplicates_removed, 0);
        assert_eq!(again.len(), count);
    }

    #[test]
    fn cleaning_is_idempotent_on_row_count() {
        let table = raw_table(
            &["job_title", "job_description", "location"],
            &[
                &["a", "x", "Oslo"],
                &["a", "x", "Oslo"],
                &["b", "y", "Bergen"],
            ],
        );
        let (once, first) = clean(table).unwrap();
        assert_eq!(first.duplicates_removed, 1);

        let count = once.len();
        let (twice, second) = clean(once).unwrap();
        assert_eq!(second.duplicates_removed, 0);
        assert_eq!(twice.len(), count);
    }
}
