//! Domain - Pure Data Structures
//!
//! These types represent the monitoring domain and carry no engine logic.

pub mod equipment;
pub mod metric;
pub mod space;

pub use equipment::{Equipment, EquipmentStatus, SystemType};
pub use metric::{AlertLevel, MetricKind, MetricReading, Thresholds};
pub use space::{SpaceKind, SpaceNode};
