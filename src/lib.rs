//! cholera_insights
//!
//! Aggregation and insight engine for cholera situation-report data. Ingests
//! a CSV of dated reports (suspected/confirmed cases, deaths, case-fatality
//! rate), clips them to a date range, and derives every statistic the
//! dashboard views display: summary totals, regional and district
//! breakdowns, monthly/yearly trend series, outbreak detection, a
//! short-term momentum forecast, risk and priority scoring, and narrative
//! insight sentences.
//!
//! All builders are pure functions of the filtered row set: same rows in,
//! bit-identical output out. Nothing here caches, spawns, or blocks.
//!
//! ### Example
//! ```no_run
//! use cholera_insights::{DashboardModel, DateRange, WarningConfig, ingest, range};
//!
//! let dataset = ingest::load_reports("cholera_data.csv")?;
//! let window = DateRange::effective("2019-01-01", "2021-12-31", dataset.bounds());
//! let rows = range::filter_by_range(&dataset.reports, &window);
//! let model = DashboardModel::compute(&rows, &WarningConfig::default());
//! for line in &model.insights {
//!     println!("{line}");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod aggregates;
pub mod buckets;
pub mod dashboard;
pub mod ingest;
pub mod models;
pub mod narrative;
pub mod planning;
pub mod range;
pub mod response;
pub mod storage;
pub mod warning;
pub mod weather;

pub use aggregates::{MetricBreakdowns, Summary};
pub use buckets::{Granularity, PeriodBucket};
pub use dashboard::DashboardModel;
pub use ingest::Dataset;
pub use models::Report;
pub use range::DateRange;
pub use warning::WarningConfig;
