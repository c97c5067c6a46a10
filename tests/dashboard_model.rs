use cholera_insights::models::Report;
use cholera_insights::{DashboardModel, WarningConfig};
use chrono::NaiveDate;

fn report(i: u32) -> Report {
    Report {
        id: i.to_string(),
        location: "Kampala".into(),
        region: "Central".into(),
        district: "Kampala District".into(),
        suspected: 50.0 + i as f64,
        confirmed: 10.0 + i as f64,
        deaths: (i % 3) as f64,
        cfr: 2.0,
        reporting_date: NaiveDate::from_ymd_opt(2020, (i % 12) + 1, 10).unwrap(),
        date_raw: format!("10/{:02}/2020", (i % 12) + 1),
    }
}

#[test]
fn compute_is_deterministic() {
    let rows: Vec<Report> = (0..24).map(report).collect();
    let config = WarningConfig::default();
    let a = DashboardModel::compute(&rows, &config);
    let b = DashboardModel::compute(&rows, &config);
    assert_eq!(a, b);
}

#[test]
fn intermediates_are_shared_consistently() {
    let rows: Vec<Report> = (0..24).map(report).collect();
    let model = DashboardModel::compute(&rows, &WarningConfig::default());

    // The resource-planning totals come from the same district aggregates
    // the model exposes.
    let total_confirmed: f64 = model
        .district_stats
        .districts
        .values()
        .map(|d| d.confirmed)
        .sum();
    assert_eq!(
        model.resource_planning.impact_assessment.total_confirmed,
        total_confirmed
    );

    // The narrative covers the same row count the summary reports.
    assert_eq!(model.summary.total_reports, rows.len());
    assert!(model.insights[0].contains("24 situation reports"));
}

#[test]
fn empty_rows_yield_fully_degraded_model() {
    let model = DashboardModel::compute(&[], &WarningConfig::default());
    assert_eq!(model.summary.total_reports, 0);
    assert!(model.region_distribution.is_empty());
    assert!(model.scatter.is_empty());
    assert!(model.trend.monthly.is_empty());
    assert_eq!(model.seasonality.len(), 12);
    assert!(model.breakdowns.regions.is_empty());
    assert!(model.district_stats.districts.is_empty());
    assert_eq!(model.insights.len(), 1);
    assert!(model.response.spread_series.is_empty());
    assert!(model.early_warning.alert_series.is_empty());
    assert!(model.resource_planning.priority_areas.is_empty());
}
