//! Resource-planning engine: severity-ranked priority districts, a
//! dataset-wide impact assessment, and regional pressure signals.

use crate::aggregates::{DistrictStats, MetricBreakdowns, desc};
use serde::{Deserialize, Serialize};

const PRIORITY_LIMIT: usize = 10;
const SIGNAL_LIMIT: usize = 6;

/// A district ranked by outbreak severity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityArea {
    pub label: String,
    pub suspected: f64,
    pub confirmed: f64,
    pub deaths: f64,
    /// `confirmed + deaths * 5`; deaths weigh heaviest in triage.
    pub severity: f64,
    /// This district's share of all confirmed cases, in percent.
    pub share: f64,
}

/// Totals across every district in the window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactAssessment {
    pub total_suspected: f64,
    pub total_confirmed: f64,
    pub total_deaths: f64,
    /// Dataset-wide CFR recomputed as `deaths / confirmed * 100` — unlike
    /// the per-report CFR field averaged elsewhere.
    pub cfr: f64,
}

/// A region ranked by resource pressure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSignal {
    pub label: String,
    /// `confirmed + deaths * 4`.
    pub pressure_score: f64,
    pub confirmed: f64,
    pub positivity: f64,
    pub avg_cfr: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourcePlanning {
    pub priority_areas: Vec<PriorityArea>,
    pub impact_assessment: ImpactAssessment,
    pub resource_signals: Vec<ResourceSignal>,
}

/// Build the resource-planning bundle from precomputed district aggregates
/// and metric breakdowns.
pub fn resource_planning(
    district_stats: &DistrictStats,
    breakdowns: &MetricBreakdowns,
) -> ResourcePlanning {
    let mut totals = ImpactAssessment::default();
    for entry in district_stats.districts.values() {
        totals.total_suspected += entry.suspected;
        totals.total_confirmed += entry.confirmed;
        totals.total_deaths += entry.deaths;
    }
    totals.cfr = if totals.total_confirmed > 0.0 {
        totals.total_deaths / totals.total_confirmed * 100.0
    } else {
        0.0
    };

    let mut priority_areas: Vec<PriorityArea> = district_stats
        .districts
        .values()
        .map(|entry| PriorityArea {
            label: entry.name.clone(),
            suspected: entry.suspected,
            confirmed: entry.confirmed,
            deaths: entry.deaths,
            severity: entry.confirmed + entry.deaths * 5.0,
            share: if totals.total_confirmed > 0.0 {
                entry.confirmed / totals.total_confirmed * 100.0
            } else {
                0.0
            },
        })
        .collect();
    priority_areas.sort_by(|a, b| desc(a.severity, b.severity));
    priority_areas.truncate(PRIORITY_LIMIT);

    let mut resource_signals: Vec<ResourceSignal> = breakdowns
        .regions
        .iter()
        .map(|entry| ResourceSignal {
            label: entry.label.clone(),
            pressure_score: entry.confirmed + entry.deaths * 4.0,
            confirmed: entry.confirmed,
            positivity: entry.positivity,
            avg_cfr: entry.avg_cfr,
        })
        .collect();
    resource_signals.sort_by(|a, b| desc(a.pressure_score, b.pressure_score));
    resource_signals.truncate(SIGNAL_LIMIT);

    ResourcePlanning {
        priority_areas,
        impact_assessment: totals,
        resource_signals,
    }
}
