//! Date-range clamping and filtering.
//!
//! Analysis is always clipped to the window the dashboard supports
//! (2011-2024) intersected with the dates actually present in the dataset.

use crate::models::Report;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// First calendar day the analysis window may start on.
pub const ANALYSIS_START: NaiveDate = match NaiveDate::from_ymd_opt(2011, 1, 1) {
    Some(d) => d,
    None => unreachable!(),
};
/// Last calendar day the analysis window may end on.
pub const ANALYSIS_END: NaiveDate = match NaiveDate::from_ymd_opt(2024, 12, 31) {
    Some(d) => d,
    None => unreachable!(),
};

/// Inclusive date range. After [`DateRange::effective`], `start <= end`
/// always holds and both bounds lie inside the effective window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Effective bounds for a dataset: its own date span clipped to the
    /// supported analysis window. `bounds` is `(earliest, latest)` from the
    /// dataset; `None` means no dated rows, in which case the full analysis
    /// window applies.
    pub fn effective_bounds(bounds: Option<(NaiveDate, NaiveDate)>) -> (NaiveDate, NaiveDate) {
        match bounds {
            Some((min, max)) => (min.max(ANALYSIS_START), max.min(ANALYSIS_END)),
            None => (ANALYSIS_START, ANALYSIS_END),
        }
    }

    /// Resolve user input into the effective range.
    ///
    /// Empty or unparseable inputs fall back to the corresponding effective
    /// bound; parsed bounds are clamped into the effective window. An
    /// inverted pair is swapped so the result always satisfies
    /// `start <= end`.
    pub fn effective(
        start_input: &str,
        end_input: &str,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> Self {
        let (min_bound, max_bound) = Self::effective_bounds(bounds);
        let mut start = parse_input(start_input).unwrap_or(min_bound);
        let mut end = parse_input(end_input).unwrap_or(max_bound);
        if start > end {
            log::debug!("inverted date range {}..{}, swapping", start, end);
            std::mem::swap(&mut start, &mut end);
        }
        DateRange {
            start: start.clamp(min_bound, max_bound),
            end: end.clamp(min_bound, max_bound),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

fn parse_input(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Clip a row set to the given range, inclusive on both ends.
pub fn filter_by_range(rows: &[Report], range: &DateRange) -> Vec<Report> {
    rows.iter()
        .filter(|r| range.contains(r.reporting_date))
        .cloned()
        .collect()
}
