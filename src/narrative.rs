//! Narrative insight builder: a fixed-shape list of short human-readable
//! sentences summarizing the filtered window.

use crate::aggregates::{RegionCount, Summary};
use crate::buckets::PeriodBucket;
use crate::models::Report;
use num_format::{Locale, ToFormattedString};

/// Sentence returned when the filtered window holds no data.
pub const EMPTY_PLACEHOLDER: &str = "Select a date range with data to see insights.";

/// Format a (non-negative) count with thousands separators.
fn format_count(n: f64) -> String {
    (n.max(0.0).round() as u64).to_formatted_string(&Locale::en)
}

/// Build the overview insight sentences.
///
/// `monthly_cfr` is the monthly bucket series (only `label` and `cfr` are
/// read). Empty `rows` yields the single placeholder sentence.
pub fn build_insights(
    rows: &[Report],
    region_distribution: &[RegionCount],
    monthly_cfr: &[PeriodBucket],
    summary: &Summary,
) -> Vec<String> {
    if rows.is_empty() {
        return vec![EMPTY_PLACEHOLDER.to_string()];
    }

    let mut insights = Vec::with_capacity(4);

    insights.push(format!(
        "Filtered dataset covers {} situation reports.",
        (rows.len() as u64).to_formatted_string(&Locale::en)
    ));

    insights.push(match region_distribution.first() {
        Some(leader) => format!(
            "{} accounts for {} confirmed cases in this window.",
            leader.region,
            format_count(leader.confirmed)
        ),
        None => "No regional data available in this window.".to_string(),
    });

    // Strictly-greater comparison: the first occurrence of the peak wins.
    let mut peak: Option<&PeriodBucket> = None;
    for bucket in monthly_cfr {
        if bucket.cfr > peak.map(|p| p.cfr).unwrap_or(0.0) {
            peak = Some(bucket);
        }
    }
    insights.push(match peak {
        Some(bucket) => format!(
            "Highest monthly CFR ({:.2}%) occurred around {}.",
            bucket.cfr, bucket.label
        ),
        None => "CFR trend requires more data in this window.".to_string(),
    });

    insights.push(if summary.total_deaths > 0.0 {
        format!(
            "{} deaths reported with an average CFR of {:.2}%.",
            format_count(summary.total_deaths),
            summary.avg_cfr
        )
    } else {
        "No reported deaths in this time slice.".to_string()
    });

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_use_thousands_separators() {
        assert_eq!(format_count(1234567.0), "1,234,567");
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(-3.0), "0");
    }
}
