//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the encoding constants, field extraction, immediate
//! reconstruction, encoders and disassembler for the RV32I subset the
//! datapath executes (OP-IMM, JAL, LOAD).

/// Instruction decoding: immediates and instruction classification.
pub mod decode;

/// Instruction disassembler for tracing and diagnostics.
pub mod disasm;

/// Instruction encoders (the inverse of `decode`).
pub mod encode;

/// Instruction field extraction utilities.
pub mod instruction;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;
