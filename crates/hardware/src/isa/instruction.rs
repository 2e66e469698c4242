//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for the fixed-position fields of a
//! 32-bit RISC-V instruction word. Every field sits at the same position in
//! every format; whether a field means anything depends on the opcode.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for extracting the shift amount of an OP-IMM shift (bits 20-24).
pub const SHAMT_MASK: u32 = 0x1F;

/// Bit position of the destination register field.
pub const RD_SHIFT: u32 = 7;
/// Bit position of the funct3 field.
pub const FUNCT3_SHIFT: u32 = 12;
/// Bit position of the first source register field.
pub const RS1_SHIFT: u32 = 15;
/// Bit position of the second source register field.
pub const RS2_SHIFT: u32 = 20;
/// Bit position of the funct7 field.
pub const FUNCT7_SHIFT: u32 = 25;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Extraction is unconditional: the consumer decides which fields the
/// instruction's format actually defines.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Returns the 5-bit register index (0-31). Register 0 (x0) is hardwired
    /// to zero and writes to it are ignored.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// For OP-IMM shift-right instructions this is the right-shift-type
    /// field distinguishing SRLI from SRAI.
    fn funct7(&self) -> u32;

    /// Extracts the 5-bit shift amount of an OP-IMM shift (bits 20-24).
    fn shamt(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> RS2_SHIFT) & SHAMT_MASK
    }
}
