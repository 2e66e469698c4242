//! ALU arithmetic operations.
//!
//! Implements addition and subtraction. Both wrap modulo 2^32; there is no
//! overflow or carry output.

use crate::core::datapath::signals::AluOp;

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be `Add` or `Sub`).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// `a + b` or `a - b`, wrapping. Returns `0` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
