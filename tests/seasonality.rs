use cholera_insights::aggregates::seasonality_profile;
use cholera_insights::models::Report;
use chrono::NaiveDate;

fn report(date: (i32, u32, u32), s: f64, c: f64) -> Report {
    Report {
        id: "1".into(),
        location: "Site".into(),
        region: "Central".into(),
        district: String::new(),
        suspected: s,
        confirmed: c,
        deaths: 0.0,
        cfr: 0.0,
        reporting_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        date_raw: String::new(),
    }
}

#[test]
fn single_year_average_equals_sum() {
    let rows = vec![
        report((2020, 1, 5), 40.0, 8.0),
        report((2020, 1, 20), 60.0, 2.0),
        report((2020, 3, 1), 30.0, 3.0),
    ];
    let profile = seasonality_profile(&rows);
    assert_eq!(profile.len(), 12);
    assert_eq!(profile[0].label, "Jan");
    assert_eq!(profile[0].avg_suspected, 100.0);
    assert_eq!(profile[0].avg_confirmed, 10.0);
    assert_eq!(profile[2].avg_suspected, 30.0);
}

#[test]
fn divisor_is_distinct_years_not_row_count() {
    // Three January rows across two years: divisor is 2, not 3.
    let rows = vec![
        report((2020, 1, 5), 100.0, 10.0),
        report((2020, 1, 9), 20.0, 2.0),
        report((2021, 1, 5), 50.0, 4.0),
    ];
    let profile = seasonality_profile(&rows);
    assert_eq!(profile[0].avg_suspected, 85.0);
    assert_eq!(profile[0].avg_confirmed, 8.0);
}

#[test]
fn unobserved_months_stay_zero() {
    let rows = vec![report((2020, 6, 1), 10.0, 1.0)];
    let profile = seasonality_profile(&rows);
    for (i, entry) in profile.iter().enumerate() {
        if i == 5 {
            assert_eq!(entry.avg_suspected, 10.0);
        } else {
            assert_eq!(entry.avg_suspected, 0.0);
            assert!(entry.avg_suspected.is_finite());
        }
    }
}
