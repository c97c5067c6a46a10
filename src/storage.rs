use crate::buckets::PeriodBucket;
use crate::models::Report;
use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save cleaned reports as CSV with header.
pub fn save_reports_csv<P: AsRef<Path>>(reports: &[Report], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize((
        "id",
        "location",
        "region",
        "district",
        "suspected",
        "confirmed",
        "deaths",
        "cfr",
        "reporting_date",
    ))?;
    for r in reports {
        wtr.serialize((
            &r.id,
            &r.location,
            &r.region,
            &r.district,
            r.suspected,
            r.confirmed,
            r.deaths,
            r.cfr,
            r.reporting_date.format("%Y-%m-%d").to_string(),
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save a period-bucket series as CSV with header.
pub fn save_buckets_csv<P: AsRef<Path>>(buckets: &[PeriodBucket], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("label", "anchor", "suspected", "confirmed", "positivity", "cfr"))?;
    for b in buckets {
        wtr.serialize((
            &b.label,
            b.anchor.format("%Y-%m-%d").to_string(),
            b.suspected,
            b.confirmed,
            b.positivity,
            b.cfr,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save any serializable value as pretty JSON.
pub fn save_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(value)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn report() -> Report {
        Report {
            id: "1".into(),
            location: "Kampala".into(),
            region: "Central".into(),
            district: "Kampala District".into(),
            suspected: 100.0,
            confirmed: 20.0,
            deaths: 2.0,
            cfr: 10.0,
            reporting_date: NaiveDate::from_ymd_opt(2020, 1, 5).unwrap(),
            date_raw: "05/01/2020".into(),
        }
    }

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("reports.csv");
        let jsonp = dir.path().join("summary.json");
        let rows = vec![report()];
        save_reports_csv(&rows, &csvp).unwrap();
        save_json(&aggregates::summary(&rows), &jsonp).unwrap();
        assert!(csvp.exists());
        assert!(jsonp.exists());
        let text = std::fs::read_to_string(&csvp).unwrap();
        assert!(text.starts_with("id,location,region"));
        assert!(text.contains("2020-01-05"));
    }

    #[test]
    fn bucket_export_round_trips_labels() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("buckets.csv");
        let buckets = crate::buckets::bucket_by_period(&[report()], crate::buckets::Granularity::Month);
        save_buckets_csv(&buckets, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Jan 2020"));
    }
}
