//! Format - Formatting Utilities

use chrono::NaiveDate;

use crate::domain::MetricReading;

/// Format a date for display
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a metric value with its unit, e.g. "452.8 kW"
///
/// Metrics without a unit render just the value.
pub fn format_metric(metric: &MetricReading) -> String {
    if metric.unit.is_empty() {
        metric.value.to_string()
    } else {
        format!("{} {}", metric.value, metric.unit)
    }
}

/// Join a location path for display, e.g. "Tower A / 1F / Server Room"
pub fn join_path(path: &[String]) -> String {
    path.join(" / ")
}
