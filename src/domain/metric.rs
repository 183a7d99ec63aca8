//! Metric - Monitored Values and Alert Classification

use serde::{Deserialize, Serialize};

/// Visualization style of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Plain number with a unit
    Numeric,
    /// Percentage rendered as a progress bar
    Progress,
    /// Percentage rendered as a gauge
    Gauge,
}

/// Warning/danger cut points for a metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub warning: f64,
    pub danger: f64,
}

/// Severity classification derived from a metric's thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertLevel {
    Safe,
    Warning,
    Danger,
}

/// A single monitored value on a piece of equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricReading {
    /// Stable metric identifier, e.g. `load`, `pressure`, `level`
    pub id: String,
    /// Display label
    pub label: String,
    /// Current value; for progress/gauge metrics conventionally 0..=100
    pub value: f64,
    /// Display unit, may be empty
    pub unit: String,
    /// Visualization style
    #[serde(rename = "type")]
    pub kind: MetricKind,
    /// Optional alert thresholds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,
}

impl MetricReading {
    /// Classify the current value against the thresholds.
    ///
    /// Storage-style metrics (id `level`) treat low values as bad;
    /// everything else treats high values as bad. Metrics without
    /// thresholds are always `Safe`.
    pub fn alert_level(&self) -> AlertLevel {
        let Some(thresholds) = &self.thresholds else {
            return AlertLevel::Safe;
        };

        let low_is_bad = self.id == "level";
        if low_is_bad {
            if self.value <= thresholds.danger {
                AlertLevel::Danger
            } else if self.value <= thresholds.warning {
                AlertLevel::Warning
            } else {
                AlertLevel::Safe
            }
        } else if self.value >= thresholds.danger {
            AlertLevel::Danger
        } else if self.value >= thresholds.warning {
            AlertLevel::Warning
        } else {
            AlertLevel::Safe
        }
    }
}
