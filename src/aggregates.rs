//! Aggregate builders: summary totals, regional distribution, scatter
//! projection, seasonality profile, metric breakdowns, and district
//! aggregates.
//!
//! Every builder is a pure function of the filtered row set and degrades to
//! a zero-valued or empty result for empty input.

use crate::models::Report;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Dataset-wide totals for the filtered window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_reports: usize,
    pub total_suspected: f64,
    pub total_confirmed: f64,
    pub total_deaths: f64,
    /// Mean of per-report CFR values.
    pub avg_cfr: f64,
    /// `total_confirmed / total_suspected * 100`, 0 when nothing suspected.
    pub positivity_rate: f64,
}

pub fn summary(rows: &[Report]) -> Summary {
    if rows.is_empty() {
        return Summary::default();
    }
    let mut s = Summary {
        total_reports: rows.len(),
        ..Summary::default()
    };
    let mut cfr_total = 0.0;
    for row in rows {
        s.total_suspected += row.suspected;
        s.total_confirmed += row.confirmed;
        s.total_deaths += row.deaths;
        cfr_total += row.cfr;
    }
    s.avg_cfr = cfr_total / rows.len() as f64;
    s.positivity_rate = if s.total_suspected > 0.0 {
        s.total_confirmed / s.total_suspected * 100.0
    } else {
        0.0
    };
    s
}

/// Confirmed-case total for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCount {
    pub region: String,
    pub confirmed: f64,
}

/// Confirmed cases per region, descending. The literal `"Unknown"` region
/// is excluded so placeholder rows never dominate the chart.
pub fn region_distribution(rows: &[Report]) -> Vec<RegionCount> {
    let mut map: BTreeMap<&str, f64> = BTreeMap::new();
    for row in rows {
        if row.region == "Unknown" {
            continue;
        }
        *map.entry(row.region.as_str()).or_default() += row.confirmed;
    }
    let mut out: Vec<RegionCount> = map
        .into_iter()
        .map(|(region, confirmed)| RegionCount {
            region: region.to_string(),
            confirmed,
        })
        .collect();
    out.sort_by(|a, b| desc(a.confirmed, b.confirmed));
    out
}

/// One suspected-vs-confirmed scatter point; identity projection of a row
/// with derived positivity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub id: String,
    pub label: String,
    pub suspected: f64,
    pub confirmed: f64,
    pub deaths: f64,
    /// Row-level positivity, rounded to one decimal.
    pub positivity: f64,
    pub cfr: f64,
}

pub fn scatter_points(rows: &[Report]) -> Vec<ScatterPoint> {
    rows.iter()
        .map(|row| {
            let positivity = if row.suspected > 0.0 {
                (row.confirmed / row.suspected * 1000.0).round() / 10.0
            } else {
                0.0
            };
            ScatterPoint {
                id: row.id.clone(),
                label: format!("{} \u{2022} {}", row.location, row.date_raw),
                suspected: row.suspected,
                confirmed: row.confirmed,
                deaths: row.deaths,
                positivity,
                cfr: row.cfr,
            }
        })
        .collect()
}

/// Per-calendar-month averages across all observed years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityEntry {
    pub label: String,
    pub avg_suspected: f64,
    pub avg_confirmed: f64,
}

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Seasonality profile: for each calendar month, the per-year average of
/// suspected and confirmed cases. The divisor is the number of distinct
/// years observed for that month (floor 1, so an unobserved month stays 0
/// instead of NaN).
pub fn seasonality_profile(rows: &[Report]) -> Vec<SeasonalityEntry> {
    let mut sums = [(0.0f64, 0.0f64); 12];
    let mut years: [BTreeSet<i32>; 12] = Default::default();

    for row in rows {
        let idx = row.reporting_date.month0() as usize;
        sums[idx].0 += row.suspected;
        sums[idx].1 += row.confirmed;
        years[idx].insert(row.reporting_date.year());
    }

    (0..12)
        .map(|i| {
            let divisor = years[i].len().max(1) as f64;
            SeasonalityEntry {
                label: MONTH_LABELS[i].to_string(),
                avg_suspected: sums[i].0 / divisor,
                avg_confirmed: sums[i].1 / divisor,
            }
        })
        .collect()
}

/// Aggregated figures for one breakdown segment (a region, a year, or a
/// district).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub label: String,
    pub suspected: f64,
    pub confirmed: f64,
    pub deaths: f64,
    pub reports: usize,
    /// Mean of per-report CFR values within the segment.
    pub avg_cfr: f64,
    pub positivity: f64,
}

/// The three parallel breakdowns backing the metric drill-down views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricBreakdowns {
    pub regions: Vec<BreakdownEntry>,
    pub years: Vec<BreakdownEntry>,
    /// Truncated to the five districts with the most confirmed cases.
    pub top_districts: Vec<BreakdownEntry>,
}

#[derive(Default)]
struct SegmentAcc {
    suspected: f64,
    confirmed: f64,
    deaths: f64,
    cfr_sum: f64,
    count: usize,
}

fn accumulate(map: &mut BTreeMap<String, SegmentAcc>, key: String, row: &Report) {
    let acc = map.entry(key).or_default();
    acc.suspected += row.suspected;
    acc.confirmed += row.confirmed;
    acc.deaths += row.deaths;
    acc.cfr_sum += row.cfr;
    acc.count += 1;
}

fn finalize(map: BTreeMap<String, SegmentAcc>, limit: Option<usize>) -> Vec<BreakdownEntry> {
    let mut out: Vec<BreakdownEntry> = map
        .into_iter()
        .map(|(label, acc)| BreakdownEntry {
            label,
            suspected: acc.suspected,
            confirmed: acc.confirmed,
            deaths: acc.deaths,
            reports: acc.count,
            avg_cfr: if acc.count > 0 {
                acc.cfr_sum / acc.count as f64
            } else {
                0.0
            },
            positivity: if acc.suspected > 0.0 {
                acc.confirmed / acc.suspected * 100.0
            } else {
                0.0
            },
        })
        .collect();
    out.sort_by(|a, b| desc(a.confirmed, b.confirmed));
    if let Some(limit) = limit {
        out.truncate(limit);
    }
    out
}

/// Build the region / year / district breakdowns, each sorted descending by
/// confirmed cases.
pub fn metric_breakdowns(rows: &[Report]) -> MetricBreakdowns {
    let mut regions: BTreeMap<String, SegmentAcc> = BTreeMap::new();
    let mut years: BTreeMap<String, SegmentAcc> = BTreeMap::new();
    let mut districts: BTreeMap<String, SegmentAcc> = BTreeMap::new();

    for row in rows {
        accumulate(&mut regions, row.region.clone(), row);
        accumulate(&mut years, row.reporting_date.year().to_string(), row);
        let district_key = if !row.district.is_empty() {
            row.district.clone()
        } else if !row.location.is_empty() {
            row.location.clone()
        } else {
            "Unknown".to_string()
        };
        accumulate(&mut districts, district_key, row);
    }

    MetricBreakdowns {
        regions: finalize(regions, None),
        years: finalize(years, None),
        top_districts: finalize(districts, Some(5)),
    }
}

/// Running totals for one district, keyed by its normalized name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictAggregate {
    /// Normalized key, e.g. `"kampala"`.
    pub key: String,
    /// First display name seen for the district.
    pub name: String,
    pub suspected: f64,
    pub confirmed: f64,
    pub deaths: f64,
}

/// District aggregates plus the running maximum confirmed value, used for
/// choropleth color scaling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistrictStats {
    pub districts: BTreeMap<String, DistrictAggregate>,
    pub max_confirmed: f64,
}

/// Normalize a district name for joining against map geography: trim,
/// lowercase, strip a trailing `" district"` (any case).
pub fn normalize_district(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    match lowered.strip_suffix(" district") {
        Some(stripped) => stripped.to_string(),
        None => lowered,
    }
}

pub fn district_aggregates(rows: &[Report]) -> DistrictStats {
    let mut stats = DistrictStats::default();

    for row in rows {
        let source = if !row.district.is_empty() {
            row.district.as_str()
        } else {
            row.location.as_str()
        };
        let key = normalize_district(source);
        if key.is_empty() {
            continue;
        }
        let entry = stats
            .districts
            .entry(key.clone())
            .or_insert_with(|| DistrictAggregate {
                key,
                name: source.to_string(),
                suspected: 0.0,
                confirmed: 0.0,
                deaths: 0.0,
            });
        entry.suspected += row.suspected;
        entry.confirmed += row.confirmed;
        entry.deaths += row.deaths;
        stats.max_confirmed = stats.max_confirmed.max(entry.confirmed);
    }

    stats
}

/// Descending order for f64 scores; NaN sorts as equal.
pub(crate) fn desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn district_normalization_strips_suffix_and_case() {
        assert_eq!(normalize_district("Kampala District"), "kampala");
        assert_eq!(normalize_district("kampala district"), "kampala");
        assert_eq!(normalize_district(" Kampala District "), "kampala");
        assert_eq!(normalize_district("Kampala"), "kampala");
        assert_eq!(normalize_district(""), "");
    }
}
