//! Single-cycle datapath.
//!
//! This module contains the control signals, per-tick lines, and the stage
//! functions that wire the decoder, register file, ALU and LSU together.
//! It includes the following:
//! 1. **Signals:** The control bundle and its operation/source enums.
//! 2. **Lines:** The combinational values of one tick.
//! 3. **Stages:** Fetch, decode, execute, memory and write-back logic.

/// Combinational values of one tick.
pub mod lines;

/// Control signals and operation types.
pub mod signals;

/// Stage implementations.
pub mod stages;

pub use lines::TickLines;
pub use signals::ControlSignals;
