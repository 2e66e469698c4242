//! Global Datapath Constants.
//!
//! This module defines constants shared across the datapath model. It includes:
//! 1. **Instruction Constants:** Instruction width and program-counter stride.
//! 2. **Register Constants:** Register count, index mask, and the hardwired zero register.
//! 3. **Memory Constants:** Word size and default collaborator depths.

/// Size of a standard (32-bit) RISC-V instruction in bytes.
///
/// The program counter advances by this stride every tick that does not
/// take a control transfer.
pub const INSTRUCTION_BYTES: u32 = 4;

/// Number of general-purpose registers (`x0`-`x31`).
pub const NUM_REGISTERS: usize = 32;

/// Bit mask applied to every register selector (5-bit index space).
pub const REG_INDEX_MASK: usize = 0x1F;

/// Index of the hardwired zero register.
pub const REG_ZERO: usize = 0;

/// Bit mask for the shift amount taken from the first ALU operand.
pub const SHAMT_MASK: u32 = 0x1F;

/// Number of low address bits dropped to form a word address.
pub const WORD_ADDRESS_SHIFT: u32 = 2;

/// Register exposed on the diagnostic read port unless configured otherwise.
pub const DEFAULT_DEBUG_REG: usize = 2;

/// Default instruction memory depth in 32-bit words.
pub const DEFAULT_IMEM_WORDS: usize = 1024;

/// Default data memory depth in 32-bit words.
pub const DEFAULT_DMEM_WORDS: usize = 256;
