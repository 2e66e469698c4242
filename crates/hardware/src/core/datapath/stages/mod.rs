//! Datapath stage implementations.
//!
//! In the single-cycle model every stage runs within one tick, in order, each
//! reading pre-tick state and filling its part of `TickLines`:
//! 1. **Fetch:** Reads the instruction at the program counter.
//! 2. **Decode:** Produces the control bundle and reads the register file.
//! 3. **Execute:** Selects ALU operands and computes the result.
//! 4. **Memory:** Issues the load and extracts the loaded value.
//! 5. **Writeback:** Selects the value driven onto the register write port.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point.
pub use decode::{InstructionDecoder, decode_stage};
/// Execute stage entry point.
pub use execute::execute_stage;
/// Fetch stage entry point.
pub use fetch::fetch_stage;
/// Memory stage entry point.
pub use memory::mem_stage;
/// Writeback stage entry point.
pub use writeback::wb_stage;
