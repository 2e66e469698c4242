//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA).
//!
//! The value shifted is operand `b`; the shift amount is the low 5 bits of
//! operand `a`, whatever the rest of `a` holds.

use crate::common::constants::SHAMT_MASK;
use crate::core::datapath::signals::AluOp;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The shift amount (bits 0-4 used, upper bits ignored).
/// * `b`  - The value to be shifted.
///
/// # Returns
///
/// The shifted value. `Sra` fills with the sign bit of `b`. Returns `0` for
/// non-shift opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    let shamt = a & SHAMT_MASK;
    match op {
        AluOp::Sll => b << shamt,
        AluOp::Srl => b >> shamt,
        AluOp::Sra => ((b as i32) >> shamt) as u32,
        _ => 0,
    }
}
