//! Candidate label codec.
//!
//! A candidate slot is stored as a single composite string,
//! `"YYYY/MM/DD <time label>"`, e.g. `"2025/04/01 19:00～"`. The time label
//! is free text and opaque to aggregation. Organizers can edit candidates
//! directly, so any string may show up here; parsing degrades to a freeform
//! passthrough instead of failing.

use std::fmt;

use chrono::NaiveDate;

/// Serialize a calendar date and time label into candidate form.
///
/// Month and day are zero-padded: `2025/01/10 19:00～`.
pub fn format_candidate(date: NaiveDate, time_label: &str) -> String {
    format!("{} {}", date.format("%Y/%m/%d"), time_label)
}

/// A parsed candidate label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateLabel {
    /// `"YYYY/MM/DD <label>"`. Components are kept as the original strings
    /// so zero-padding (or the lack of it) survives display.
    Dated {
        year: String,
        month: String,
        day: String,
        time_label: String,
    },
    /// Anything whose date part does not split into exactly three
    /// components. Rendered unchanged.
    Freeform(String),
}

/// Split a candidate string into its date and time label parts.
///
/// The split is on the first space; everything after it is the time label.
/// The date part must split on `/` into exactly three components, otherwise
/// the whole string passes through as [`CandidateLabel::Freeform`]. A
/// candidate without a space parses as a dated label with an empty time
/// label. Never an error.
pub fn parse_candidate(raw: &str) -> CandidateLabel {
    let (date_part, time_label) = match raw.split_once(' ') {
        Some((date, time)) => (date, time),
        None => (raw, ""),
    };

    let components: Vec<&str> = date_part.split('/').collect();
    match components.as_slice() {
        [year, month, day] => CandidateLabel::Dated {
            year: (*year).to_string(),
            month: (*month).to_string(),
            day: (*day).to_string(),
            time_label: time_label.to_string(),
        },
        _ => CandidateLabel::Freeform(raw.to_string()),
    }
}

impl fmt::Display for CandidateLabel {
    /// Japanese display form: `2025年04月01日 19:00～`. Freeform labels
    /// render as-is.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateLabel::Dated {
                year,
                month,
                day,
                time_label,
            } => write!(f, "{year}年{month}月{day}日 {time_label}"),
            CandidateLabel::Freeform(raw) => write!(f, "{raw}"),
        }
    }
}
