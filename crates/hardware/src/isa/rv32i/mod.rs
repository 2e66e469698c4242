//! RISC-V Base Integer Instruction Set (RV32I).
//!
//! Defines the encoding constants for the 32-bit base integer instructions.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (Load, OpImm, Jal, and the remaining RV32I classes).
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.
//! - `funct7`: The right-shift-type field separating logical from arithmetic shifts.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Function code 7 definitions for base integer operations.
pub mod funct7;

/// Base integer instruction set opcodes.
pub mod opcodes;
