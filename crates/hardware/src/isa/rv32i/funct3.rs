//! RISC-V Base Integer (I) Function Codes (funct3).
//!
//! The `funct3` field (bits 14-12) distinguishes between instructions sharing
//! the same major opcode (e.g., LB vs LH, ADDI vs XORI).

/// Load Byte (signed).
pub const LB: u32 = 0b000;
/// Load Halfword (signed).
pub const LH: u32 = 0b001;
/// Load Word.
pub const LW: u32 = 0b010;
/// Load Byte Unsigned.
pub const LBU: u32 = 0b100;
/// Load Halfword Unsigned.
pub const LHU: u32 = 0b101;

/// Bit of a load's `funct3` that marks the zero-extending ("U") variants.
pub const LOAD_UNSIGNED_BIT: u32 = 0b100;

/// Add Immediate.
pub const ADDI: u32 = 0b000;
/// Shift Left Logical Immediate.
pub const SLLI: u32 = 0b001;
/// Set Less Than Immediate (signed). Not executed by this core.
pub const SLTI: u32 = 0b010;
/// Set Less Than Immediate Unsigned. Not executed by this core.
pub const SLTIU: u32 = 0b011;
/// Bitwise XOR Immediate.
pub const XORI: u32 = 0b100;
/// Shift Right Logical / Arithmetic Immediate.
pub const SRLI_SRAI: u32 = 0b101;
/// Bitwise OR Immediate.
pub const ORI: u32 = 0b110;
/// Bitwise AND Immediate.
pub const ANDI: u32 = 0b111;
