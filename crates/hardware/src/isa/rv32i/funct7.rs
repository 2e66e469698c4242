//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! For OP-IMM shift-right instructions the upper seven bits of the immediate
//! (bits 31-25) form the right-shift-type field.

/// Logical right shift (SRLI).
pub const SRLI: u32 = 0b0000000;

/// Arithmetic right shift (SRAI).
pub const SRAI: u32 = 0b0100000;
