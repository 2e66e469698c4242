//! Execute (EX) Stage.
//!
//! Drives the ALU. Operand A is always the decoder's immediate; operand B is
//! the `rs1` value or the program counter, as the control bundle selects.
//! The ALU result serves as the arithmetic result, the load address and the
//! jump target.

use crate::core::datapath::lines::TickLines;
use crate::core::datapath::signals::OpBSrc;
use crate::core::units::alu::Alu;

/// Executes the execute stage.
///
/// # Arguments
///
/// * `lines` - Tick lines; reads the decode outputs, fills the ALU lines.
pub fn execute_stage(lines: &mut TickLines) {
    let ctrl = &lines.ctrl;
    lines.alu_a = ctrl.alu_imm;
    lines.alu_b = match ctrl.b_src {
        OpBSrc::Reg1 => lines.rs1_val,
        OpBSrc::Pc => lines.pc,
    };
    lines.alu_result = Alu::execute(ctrl.alu, lines.alu_a, lines.alu_b);
}
