//! Utilities
//!
//! Small display helpers shared by presentation consumers.

pub mod format;
