//! Single-cycle RISC-V datapath model.
//!
//! This crate implements a stepped software model of a single-cycle RV32I-subset
//! processor with the following:
//! 1. **Core:** Decoder, ALU, load unit, register file and program counter, composed
//!    by a CPU that evaluates each tick from pre-tick state and then commits.
//! 2. **ISA:** Field extraction, immediate reconstruction, encoders and a disassembler
//!    for OP-IMM, JAL and LOAD.
//! 3. **SoC:** Word-addressed instruction and data memory collaborators.
//! 4. **Simulation:** Image loader, built-in programs, configuration and statistics.

/// Common types and constants (errors, register and memory constants).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// CPU core (architectural state, datapath, execution units).
pub mod core;
/// Instruction set (decode, encode, disassembly, RV32I constants).
pub mod isa;
/// Image loader, built-in programs and the simulator.
pub mod sim;
/// Instruction and data memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds registers, program counter, memories and stats.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
/// Instruction and data memory pair; construct with `System::with_images`.
pub use crate::soc::System;
