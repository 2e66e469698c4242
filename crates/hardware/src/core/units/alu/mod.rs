//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU used by the execute stage.
//! It is a stateless combinational function of an operation and two operands.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      And, Or, Xor
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical operations (and, or, xor).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::core::datapath::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Operand `a` carries the immediate and is the shift amount for shifts;
/// operand `b` is the value being operated on.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (shift amount for shifts; only bits 0-4 are used)
    /// * `b`  - Second operand
    ///
    /// # Returns
    ///
    /// The 32-bit result. Arithmetic wraps modulo 2^32.
    ///
    /// # Examples
    ///
    /// ```
    /// use riscy_core::core::units::alu::Alu;
    /// use riscy_core::core::datapath::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), 50);
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1), 0);
    ///
    /// // The shift amount comes from `a`.
    /// assert_eq!(Alu::execute(AluOp::Sll, 4, 0x1), 0x10);
    /// assert_eq!(Alu::execute(AluOp::Sra, 1, 0x8000_0000), 0xC000_0000);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Xor => logic::execute(op, a, b),
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }

    /// Executes an operation given by its raw 3-bit encoding.
    ///
    /// An encoding outside the eight defined operations yields 0.
    pub fn execute_encoded(bits: u8, a: u32, b: u32) -> u32 {
        AluOp::from_bits(bits).map_or(0, |op| Self::execute(op, a, b))
    }
}
