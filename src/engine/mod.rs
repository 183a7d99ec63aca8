//! Engine - Topology Lookup, Scope Resolution and Aggregation
//!
//! Data flows one direction through the engine:
//!
//! ```text
//! SpaceTree + equipment → scope resolution → aggregation → presentation
//! ```
//!
//! Every component is a pure function over immutable snapshot data;
//! nothing here caches, mutates or performs IO.

pub mod aggregate;
pub mod filter;
pub mod scope;
pub mod topology;

pub use aggregate::{
    StatusTally, SystemSummary, group_by_location, group_by_relative_location,
    relative_group_label, system_overview, tally,
};
pub use filter::{filter_by_space, filter_by_status, filter_by_system};
pub use scope::{ResolvedScope, ScopeSelection, resolve};
pub use topology::SpaceTree;
