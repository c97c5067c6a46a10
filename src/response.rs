//! Response-insight engine: spread trend, outbreak detection, recent
//! response indicators, regional risk scoring, vulnerable districts, and
//! transmission patterns.

use crate::aggregates::{self, BreakdownEntry, MetricBreakdowns};
use crate::buckets::{Granularity, PeriodBucket, bucket_by_period};
use crate::models::Report;
use serde::{Deserialize, Serialize};

/// Percentile used for the outbreak threshold.
pub const OUTBREAK_PERCENTILE: f64 = 0.85;
/// Number of trailing monthly buckets feeding the response indicators.
pub const INDICATOR_WINDOW: usize = 6;
const RISK_REGION_LIMIT: usize = 8;
const VULNERABLE_LIMIT: usize = 6;

/// One monthly bucket annotated with its month-over-month growth rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadPoint {
    #[serde(flatten)]
    pub bucket: PeriodBucket,
    /// Percent change in confirmed cases versus the previous month; 0 for
    /// the first bucket or when the previous month had none.
    pub growth_rate: f64,
}

/// A month whose confirmed cases met the outbreak threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutbreakFlag {
    pub label: String,
    pub confirmed: f64,
    pub suspected: f64,
    pub growth_rate: f64,
    pub positivity: f64,
}

/// Means over the trailing indicator window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseIndicators {
    pub avg_positivity: f64,
    pub avg_cfr: f64,
    pub avg_growth: f64,
}

/// A region's breakdown entry plus its composite risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRegion {
    #[serde(flatten)]
    pub entry: BreakdownEntry,
    pub risk_score: f64,
}

/// Monthly exposure gap and case-confirmation efficiency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransmissionPattern {
    pub label: String,
    /// `suspected - confirmed`: cases that never got confirmed.
    pub exposure_gap: f64,
    /// `confirmed / suspected`; 0 when nothing was suspected.
    pub efficiency_ratio: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseInsights {
    pub spread_series: Vec<SpreadPoint>,
    pub outbreak_threshold: f64,
    pub outbreak_flags: Vec<OutbreakFlag>,
    pub response_indicators: ResponseIndicators,
    /// Top regions by risk score, descending.
    pub risk_regions: Vec<RiskRegion>,
    /// Districts from the confirmed-cases breakdown re-ranked by deaths.
    pub vulnerable_populations: Vec<BreakdownEntry>,
    pub transmission_patterns: Vec<TransmissionPattern>,
}

/// Nearest-rank percentile: sort ascending and index at
/// `floor(p * (n - 1))`, clamped to the valid range. Not interpolated.
pub fn percentile_of(values: &[f64], percentile: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let index = (percentile * (sorted.len() - 1) as f64).floor().max(0.0) as usize;
    sorted[index.min(sorted.len() - 1)]
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

/// Build the response-insight bundle.
///
/// `breakdowns` lets callers that already computed the metric breakdowns
/// avoid doing it twice; pass `None` to compute them here.
pub fn response_insights(
    rows: &[Report],
    breakdowns: Option<&MetricBreakdowns>,
) -> ResponseInsights {
    let monthly = bucket_by_period(rows, Granularity::Month);

    let spread_series: Vec<SpreadPoint> = monthly
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let growth_rate = match i.checked_sub(1).map(|p| &monthly[p]) {
                Some(prev) if prev.confirmed != 0.0 => {
                    (bucket.confirmed - prev.confirmed) / prev.confirmed * 100.0
                }
                _ => 0.0,
            };
            SpreadPoint {
                bucket: bucket.clone(),
                growth_rate,
            }
        })
        .collect();

    // Only months that saw any confirmed cases inform the threshold.
    let confirmed_values: Vec<f64> = monthly
        .iter()
        .map(|b| b.confirmed)
        .filter(|&c| c != 0.0)
        .collect();
    let outbreak_threshold = percentile_of(&confirmed_values, OUTBREAK_PERCENTILE);

    let outbreak_flags: Vec<OutbreakFlag> = spread_series
        .iter()
        .filter(|p| p.bucket.confirmed >= outbreak_threshold)
        .map(|p| OutbreakFlag {
            label: p.bucket.label.clone(),
            confirmed: p.bucket.confirmed,
            suspected: p.bucket.suspected,
            growth_rate: p.growth_rate,
            positivity: p.bucket.positivity,
        })
        .collect();

    let recent = &spread_series[spread_series.len().saturating_sub(INDICATOR_WINDOW)..];
    let response_indicators = ResponseIndicators {
        avg_positivity: mean(recent.iter().map(|p| p.bucket.positivity), recent.len()),
        avg_cfr: mean(recent.iter().map(|p| p.bucket.cfr), recent.len()),
        avg_growth: mean(recent.iter().map(|p| p.growth_rate), recent.len()),
    };

    let computed;
    let breakdowns = match breakdowns {
        Some(b) => b,
        None => {
            computed = aggregates::metric_breakdowns(rows);
            &computed
        }
    };

    let mut risk_regions: Vec<RiskRegion> = breakdowns
        .regions
        .iter()
        .map(|entry| RiskRegion {
            entry: entry.clone(),
            risk_score: risk_score(entry),
        })
        .collect();
    risk_regions.sort_by(|a, b| aggregates::desc(a.risk_score, b.risk_score));
    risk_regions.truncate(RISK_REGION_LIMIT);

    let mut vulnerable_populations = breakdowns.top_districts.clone();
    vulnerable_populations.sort_by(|a, b| aggregates::desc(a.deaths, b.deaths));
    vulnerable_populations.truncate(VULNERABLE_LIMIT);

    let transmission_patterns: Vec<TransmissionPattern> = spread_series
        .iter()
        .map(|p| TransmissionPattern {
            label: p.bucket.label.clone(),
            exposure_gap: p.bucket.suspected - p.bucket.confirmed,
            efficiency_ratio: if p.bucket.suspected > 0.0 {
                p.bucket.confirmed / p.bucket.suspected
            } else {
                0.0
            },
        })
        .collect();

    ResponseInsights {
        spread_series,
        outbreak_threshold,
        outbreak_flags,
        response_indicators,
        risk_regions,
        vulnerable_populations,
        transmission_patterns,
    }
}

/// Composite regional risk score, rounded to two decimals:
/// `avg_cfr * 0.5 + positivity * 0.3 + confirmed / (suspected + 1) * 10`.
fn risk_score(entry: &BreakdownEntry) -> f64 {
    let raw = entry.avg_cfr * 0.5
        + entry.positivity * 0.3
        + entry.confirmed / (entry.suspected + 1.0) * 10.0;
    (raw * 100.0).round() / 100.0
}
