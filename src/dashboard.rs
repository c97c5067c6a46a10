//! One-shot computation of every derived view for a filtered row set.
//!
//! The presentation layer recomputes this whole bundle whenever the date
//! range changes; expensive intermediates (metric breakdowns, district
//! aggregates) are computed once and shared across the engines.

use crate::aggregates::{
    self, DistrictStats, MetricBreakdowns, RegionCount, ScatterPoint, SeasonalityEntry, Summary,
};
use crate::buckets::{self, TrendSeries};
use crate::models::Report;
use crate::narrative;
use crate::planning::{self, ResourcePlanning};
use crate::response::{self, ResponseInsights};
use crate::warning::{self, EarlyWarning, WarningConfig};
use serde::{Deserialize, Serialize};

/// Every derived statistic the dashboard displays, computed from one
/// filtered row set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardModel {
    pub summary: Summary,
    pub region_distribution: Vec<RegionCount>,
    pub scatter: Vec<ScatterPoint>,
    pub trend: TrendSeries,
    pub seasonality: Vec<SeasonalityEntry>,
    pub breakdowns: MetricBreakdowns,
    pub district_stats: DistrictStats,
    pub insights: Vec<String>,
    pub response: ResponseInsights,
    pub early_warning: EarlyWarning,
    pub resource_planning: ResourcePlanning,
}

impl DashboardModel {
    pub fn compute(rows: &[Report], config: &WarningConfig) -> Self {
        let summary = aggregates::summary(rows);
        let region_distribution = aggregates::region_distribution(rows);
        let scatter = aggregates::scatter_points(rows);
        let trend = buckets::trend_series(rows);
        let seasonality = aggregates::seasonality_profile(rows);
        let breakdowns = aggregates::metric_breakdowns(rows);
        let district_stats = aggregates::district_aggregates(rows);
        let insights =
            narrative::build_insights(rows, &region_distribution, &trend.monthly, &summary);
        let response = response::response_insights(rows, Some(&breakdowns));
        let early_warning = warning::early_warning(rows, config);
        let resource_planning = planning::resource_planning(&district_stats, &breakdowns);

        DashboardModel {
            summary,
            region_distribution,
            scatter,
            trend,
            seasonality,
            breakdowns,
            district_stats,
            insights,
            response,
            early_warning,
            resource_planning,
        }
    }
}
