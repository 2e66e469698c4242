//! Core processor implementation.
//!
//! This module contains the single-cycle CPU: its architectural state, the
//! datapath that wires decoder and units together each tick, and the
//! execution units themselves.

/// Architectural state (register file, program counter).
pub mod arch;

/// CPU core implementation and tick orchestration.
pub mod cpu;

/// Datapath (signals, tick lines, stages).
pub mod datapath;

/// Execution units (ALU, LSU).
pub mod units;

pub use self::cpu::Cpu;
