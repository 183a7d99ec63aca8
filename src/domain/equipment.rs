//! Equipment - Monitored Devices

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::metric::MetricReading;

/// Subsystem a device belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemType {
    Electricity,
    Water,
    Gas,
    Hvac,
    Lighting,
}

impl SystemType {
    /// All subsystems in display order
    pub const ALL: [SystemType; 5] = [
        SystemType::Electricity,
        SystemType::Water,
        SystemType::Gas,
        SystemType::Hvac,
        SystemType::Lighting,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            SystemType::Electricity => "Electricity",
            SystemType::Water => "Water Supply",
            SystemType::Gas => "Gas",
            SystemType::Hvac => "HVAC",
            SystemType::Lighting => "Lighting",
        }
    }
}

/// Health status of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentStatus {
    Normal,
    Offline,
    Abnormal,
    Maintenance,
}

impl EquipmentStatus {
    /// All status categories in display order
    pub const ALL: [EquipmentStatus; 4] = [
        EquipmentStatus::Normal,
        EquipmentStatus::Offline,
        EquipmentStatus::Abnormal,
        EquipmentStatus::Maintenance,
    ];
}

/// One physical device in the facility
///
/// The engine treats equipment as read-only; every derived view is a
/// freshly computed value, never an alias into mutable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    /// Unique ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Subsystem tag
    pub system: SystemType,
    /// Human-readable location names from the campus down to the
    /// containing area. `path[0]` is always the root campus name; the
    /// area level is optional so there is no fixed length.
    pub path: Vec<String>,
    /// Current health status
    pub status: EquipmentStatus,
    /// True iff status is `Normal`
    pub is_running: bool,
    /// Monitored values in display order
    #[serde(default)]
    pub metrics: Vec<MetricReading>,
    /// Last completed maintenance date
    pub last_maintenance: NaiveDate,
    /// Next scheduled maintenance date
    pub next_maintenance: NaiveDate,
    /// Whether a CCTV camera covers this device
    #[serde(default, rename = "hasCCTV")]
    pub has_cctv: bool,
}

impl Equipment {
    /// The first metric, shown on dashboard list rows
    pub fn primary_metric(&self) -> Option<&MetricReading> {
        self.metrics.first()
    }
}
