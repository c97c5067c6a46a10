//! Early-warning engine: rolling-average anomaly detection over the
//! monthly series plus a short-term momentum forecast.
//!
//! The forecast is a naive exponential extrapolation — the latest observed
//! value compounded by the recent average growth rate — not a statistical
//! model.

use crate::buckets::{Granularity, PeriodBucket, bucket_by_period};
use crate::models::Report;
use serde::{Deserialize, Serialize};

/// Tuning knobs for the early-warning engine. The defaults reproduce the
/// dashboard's historical behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningConfig {
    /// Trailing rolling-average window, in monthly buckets (current month
    /// plus `window - 1` prior).
    pub window: usize,
    /// A month alerts when its confirmed cases exceed
    /// `rolling_average * alert_multiplier`.
    pub alert_multiplier: f64,
    /// Number of future months to project.
    pub horizon: usize,
    /// Number of trailing months whose growth rates are averaged for the
    /// forecast.
    pub growth_lookback: usize,
    /// Most recent alerts retained in the anomaly list.
    pub max_anomalies: usize,
}

impl Default for WarningConfig {
    fn default() -> Self {
        WarningConfig {
            window: 3,
            alert_multiplier: 1.25,
            horizon: 3,
            growth_lookback: 3,
            max_anomalies: 10,
        }
    }
}

/// One monthly bucket annotated with rolling-average context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertPoint {
    #[serde(flatten)]
    pub bucket: PeriodBucket,
    /// Mean confirmed cases over the trailing window ending at this month.
    pub rolling_average: f64,
    /// Percent deviation of this month from its rolling average; 0 when the
    /// rolling average is 0.
    pub deviation: f64,
    pub is_alert: bool,
    pub growth_rate: f64,
}

/// Projected confirmed cases for one future month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// `"Forecast +1"`, `"Forecast +2"`, ...
    pub label: String,
    /// Rounded projection, floored at zero.
    pub confirmed: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarlyWarning {
    pub alert_series: Vec<AlertPoint>,
    /// The most recent alert-flagged months, in chronological order.
    pub anomalies: Vec<AlertPoint>,
    pub forecast: Vec<ForecastPoint>,
}

/// Build the early-warning bundle from the filtered row set.
pub fn early_warning(rows: &[Report], config: &WarningConfig) -> EarlyWarning {
    let monthly = bucket_by_period(rows, Granularity::Month);

    let alert_series: Vec<AlertPoint> = monthly
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let window_start = i.saturating_sub(config.window.saturating_sub(1));
            let window = &monthly[window_start..=i];
            let rolling_average =
                window.iter().map(|b| b.confirmed).sum::<f64>() / window.len() as f64;

            let deviation = if rolling_average != 0.0 {
                (bucket.confirmed - rolling_average) / rolling_average * 100.0
            } else {
                0.0
            };
            let is_alert = rolling_average != 0.0
                && bucket.confirmed > rolling_average * config.alert_multiplier;

            let growth_rate = match i.checked_sub(1).map(|p| &monthly[p]) {
                Some(prev) if prev.confirmed != 0.0 => {
                    (bucket.confirmed - prev.confirmed) / prev.confirmed * 100.0
                }
                _ => 0.0,
            };

            AlertPoint {
                bucket: bucket.clone(),
                rolling_average,
                deviation,
                is_alert,
                growth_rate,
            }
        })
        .collect();

    let alerts: Vec<&AlertPoint> = alert_series.iter().filter(|p| p.is_alert).collect();
    let anomalies: Vec<AlertPoint> = alerts
        [alerts.len().saturating_sub(config.max_anomalies)..]
        .iter()
        .map(|p| (*p).clone())
        .collect();

    let forecast = forecast(&alert_series, config);

    EarlyWarning {
        alert_series,
        anomalies,
        forecast,
    }
}

/// Project `horizon` months of confirmed cases by compounding the average
/// growth rate of the trailing months onto the single latest observation.
fn forecast(alert_series: &[AlertPoint], config: &WarningConfig) -> Vec<ForecastPoint> {
    let recent = &alert_series[alert_series.len().saturating_sub(config.growth_lookback)..];
    let avg_growth = if recent.is_empty() {
        0.0
    } else {
        recent.iter().map(|p| p.growth_rate).sum::<f64>() / recent.len() as f64
    };
    let latest_confirmed = recent.last().map(|p| p.bucket.confirmed).unwrap_or(0.0);

    (1..=config.horizon)
        .map(|k| {
            let projected = latest_confirmed * (1.0 + avg_growth / 100.0).powi(k as i32);
            ForecastPoint {
                label: format!("Forecast +{}", k),
                confirmed: projected.round().max(0.0) as u64,
            }
        })
        .collect()
}
