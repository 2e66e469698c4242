//! # Unit Components
//!
//! Organizes the unit tests by crate module: common types, configuration,
//! the processor core, ISA helpers, simulation utilities, memories and
//! statistics.







/// Statistics counting and reporting.
pub mod stats;
