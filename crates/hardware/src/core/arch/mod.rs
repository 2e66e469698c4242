//! RISC-V architectural state.
//!
//! This module contains the clocked state of the processor:
//! 1. **GPRs:** General-Purpose Register file with a clocked write port.
//! 2. **PC:** The two-register program counter.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Program counter implementation.
pub mod pc;
