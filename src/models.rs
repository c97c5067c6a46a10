use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw situation-report record as it appears in the source CSV.
///
/// Every field is optional text: the export is hand-maintained and routinely
/// carries blanks, stray whitespace, and non-numeric values in numeric
/// columns. All cleaning happens in [`Report::from_raw`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawReport {
    #[serde(rename = "Index")]
    pub index: Option<String>,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "Region")]
    pub region: Option<String>,
    #[serde(rename = "District")]
    pub district: Option<String>,
    #[serde(rename = "sCh")]
    pub suspected: Option<String>,
    #[serde(rename = "cCh")]
    pub confirmed: Option<String>,
    #[serde(rename = "CFR")]
    pub cfr: Option<String>,
    #[serde(rename = "deaths")]
    pub deaths: Option<String>,
    #[serde(rename = "reporting_date")]
    pub reporting_date: Option<String>,
}

/// Validated situation report (one row = one dated observation).
///
/// Construction is the single place where numeric coercion and date
/// validation happen; a `Report` always carries a valid `reporting_date`,
/// so downstream aggregation never re-checks it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    /// Source `Index` column, or the zero-based row index when absent.
    pub id: String,
    /// Reporting site; falls back to the district, then `"Unknown"`.
    pub location: String,
    /// Administrative region; `"Unknown"` when blank.
    pub region: String,
    /// District as written in the source; empty when blank.
    pub district: String,
    /// Suspected cholera cases (sCh).
    pub suspected: f64,
    /// Confirmed cholera cases (cCh).
    pub confirmed: f64,
    pub deaths: f64,
    /// Case-fatality rate in percent, as supplied by the source. Never
    /// recomputed from deaths/confirmed at the row level.
    pub cfr: f64,
    pub reporting_date: NaiveDate,
    /// Verbatim date text from the CSV, kept for display labels.
    pub date_raw: String,
}

impl Report {
    /// Build a validated report from a raw CSV record.
    ///
    /// Returns `None` when the reporting date is missing or unparseable —
    /// dateless rows are excluded from all analysis.
    pub fn from_raw(raw: &RawReport, row_index: usize) -> Option<Self> {
        let date_raw = raw
            .reporting_date
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_string();
        let reporting_date = parse_reporting_date(&date_raw)?;

        let district = clean_text(raw.district.as_deref());
        let location = match clean_text(raw.location.as_deref()) {
            s if !s.is_empty() => s,
            _ if !district.is_empty() => district.clone(),
            _ => "Unknown".to_string(),
        };
        let region = match clean_text(raw.region.as_deref()) {
            s if !s.is_empty() => s,
            _ => "Unknown".to_string(),
        };
        let id = match clean_text(raw.index.as_deref()) {
            s if !s.is_empty() => s,
            _ => row_index.to_string(),
        };

        Some(Report {
            id,
            location,
            region,
            district,
            suspected: num_or_zero(raw.suspected.as_deref()),
            confirmed: num_or_zero(raw.confirmed.as_deref()),
            deaths: num_or_zero(raw.deaths.as_deref()),
            cfr: num_or_zero(raw.cfr.as_deref()),
            reporting_date,
            date_raw,
        })
    }
}

fn clean_text(s: Option<&str>) -> String {
    s.map(str::trim).unwrap_or("").to_string()
}

/// Parse a numeric field, coercing anything unparseable to 0.
///
/// Thousands separators are tolerated; text values ("n/a", "-") become 0
/// rather than an error, matching the source dataset's conventions.
pub fn num_or_zero(s: Option<&str>) -> f64 {
    let Some(s) = s else { return 0.0 };
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    s.replace(',', "").parse::<f64>().unwrap_or(0.0)
}

/// Parse a reporting date.
///
/// The dataset's native format is `DD/MM/YYYY`; a few generic formats are
/// accepted as fallbacks. Anything else yields `None`.
pub fn parse_reporting_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    const FORMATS: [&str; 4] = ["%d/%m/%Y", "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
