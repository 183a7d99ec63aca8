//! FMD Core Library
//!
//! This crate provides the topology and aggregation engine for the FMD
//! (Facility Monitoring Dashboard): spatial hierarchy indexing, scope
//! resolution and status aggregation over immutable monitoring snapshots.

pub mod domain;
pub mod engine;
pub mod error;
pub mod snapshot;
pub mod utils;
