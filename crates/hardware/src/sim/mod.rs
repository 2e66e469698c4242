//! Simulation utilities and program loading.
//!
//! Provides the loader for program images, built-in programs, and the
//! `Simulator` that runs them.

/// Binary loading and word packing.
pub mod loader;

/// Built-in programs.
pub mod programs;

/// Top-level simulator.
pub mod simulator;

pub use simulator::Simulator;
