//! Execution units and functional components.
//!
//! This module contains the combinational units the datapath drives each
//! tick: the integer ALU and the load/store unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Load/Store Unit for memory access operations.
pub mod lsu;
