//! ALU logical operations.
//!
//! Implements bitwise AND, OR and XOR over the full 32 bits.

use crate::core::datapath::signals::AluOp;

/// Executes a logical operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The bitwise result. Returns `0` for non-logic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        _ => 0,
    }
}
