//! Period bucketing: groups reports into month or year buckets.
//!
//! Buckets are transient — rebuilt from the filtered row set on every
//! recomputation and never persisted. Ordering is ascending by the bucket's
//! anchor date (first day of the month or year).

use crate::models::Report;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bucket granularity for temporal series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    Month,
    Year,
}

/// Aggregated figures for one calendar period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodBucket {
    /// Display label: `"Jan 2020"` for months, `"2020"` for years.
    pub label: String,
    /// First day of the period; the sort key.
    pub anchor: NaiveDate,
    pub suspected: f64,
    pub confirmed: f64,
    /// `confirmed / suspected * 100`, recomputed from the bucket sums.
    pub positivity: f64,
    /// Arithmetic mean of per-report CFR values. Deliberately not
    /// recomputed from the bucket's aggregated deaths/confirmed.
    pub cfr: f64,
}

#[derive(Default)]
struct Acc {
    suspected: f64,
    confirmed: f64,
    cfr_sum: f64,
    count: usize,
}

/// Group reports into ordered period buckets.
///
/// Empty input yields an empty vector.
pub fn bucket_by_period(rows: &[Report], granularity: Granularity) -> Vec<PeriodBucket> {
    let mut map: BTreeMap<NaiveDate, Acc> = BTreeMap::new();

    for row in rows {
        let date = row.reporting_date;
        let anchor = match granularity {
            Granularity::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1),
            Granularity::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1),
        };
        // First-of-period is always a valid date.
        let Some(anchor) = anchor else { continue };
        let acc = map.entry(anchor).or_default();
        acc.suspected += row.suspected;
        acc.confirmed += row.confirmed;
        acc.cfr_sum += row.cfr;
        acc.count += 1;
    }

    map.into_iter()
        .map(|(anchor, acc)| {
            let label = match granularity {
                Granularity::Year => anchor.format("%Y").to_string(),
                Granularity::Month => anchor.format("%b %Y").to_string(),
            };
            PeriodBucket {
                label,
                anchor,
                suspected: acc.suspected,
                confirmed: acc.confirmed,
                positivity: if acc.suspected > 0.0 {
                    acc.confirmed / acc.suspected * 100.0
                } else {
                    0.0
                },
                cfr: if acc.count > 0 {
                    acc.cfr_sum / acc.count as f64
                } else {
                    0.0
                },
            }
        })
        .collect()
}

/// Monthly and yearly bucket series for the trend charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub monthly: Vec<PeriodBucket>,
    pub yearly: Vec<PeriodBucket>,
}

pub fn trend_series(rows: &[Report]) -> TrendSeries {
    TrendSeries {
        monthly: bucket_by_period(rows, Granularity::Month),
        yearly: bucket_by_period(rows, Granularity::Year),
    }
}
