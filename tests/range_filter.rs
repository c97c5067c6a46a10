use cholera_insights::models::Report;
use cholera_insights::range::{ANALYSIS_END, ANALYSIS_START, DateRange, filter_by_range};
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn report(date: NaiveDate) -> Report {
    Report {
        id: "1".into(),
        location: "Site".into(),
        region: "Central".into(),
        district: String::new(),
        suspected: 1.0,
        confirmed: 1.0,
        deaths: 0.0,
        cfr: 0.0,
        reporting_date: date,
        date_raw: String::new(),
    }
}

#[test]
fn filter_is_inclusive_on_both_ends() {
    let rows = vec![
        report(d(2020, 1, 1)),
        report(d(2020, 6, 15)),
        report(d(2020, 12, 31)),
        report(d(2021, 1, 1)),
    ];
    let range = DateRange {
        start: d(2020, 1, 1),
        end: d(2020, 12, 31),
    };
    let got = filter_by_range(&rows, &range);
    assert_eq!(got.len(), 3);
    assert!(got.iter().all(|r| r.reporting_date <= d(2020, 12, 31)));
}

#[test]
fn user_range_is_clamped_into_dataset_bounds() {
    let bounds = Some((d(2015, 3, 1), d(2020, 9, 30)));
    let r = DateRange::effective("2012-01-01", "2023-01-01", bounds);
    assert_eq!(r.start, d(2015, 3, 1));
    assert_eq!(r.end, d(2020, 9, 30));
}

#[test]
fn analysis_window_caps_out_of_range_datasets() {
    let bounds = Some((d(2008, 1, 1), d(2030, 1, 1)));
    let r = DateRange::effective("", "", bounds);
    assert_eq!(r.start, ANALYSIS_START);
    assert_eq!(r.end, ANALYSIS_END);
}

#[test]
fn start_never_exceeds_end() {
    let bounds = Some((d(2015, 1, 1), d(2020, 12, 31)));
    for (a, b) in [
        ("2019-01-01", "2016-01-01"),
        ("", "2016-01-01"),
        ("2019-01-01", ""),
        ("bogus", "also bogus"),
    ] {
        let r = DateRange::effective(a, b, bounds);
        assert!(r.start <= r.end, "inputs {:?} gave {:?}", (a, b), r);
    }
}

#[test]
fn empty_dataset_falls_back_to_full_analysis_window() {
    let r = DateRange::effective("", "", None);
    assert_eq!(r.start, ANALYSIS_START);
    assert_eq!(r.end, ANALYSIS_END);
}
