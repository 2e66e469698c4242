//! Writeback (WB) Stage.
//!
//! Selects the value driven onto the register-file write port: the ALU
//! result, the link value, or the loaded value.

use crate::core::datapath::lines::TickLines;
use crate::core::datapath::signals::WbSrc;

/// Executes the writeback selection.
///
/// The write itself is committed at the clock edge by `Cpu::commit`.
///
/// # Arguments
///
/// * `lines` - Tick lines; fills `wb_value`.
pub fn wb_stage(lines: &mut TickLines) {
    lines.wb_value = match lines.ctrl.wb_src {
        WbSrc::Alu => lines.alu_result,
        WbSrc::PcInc => lines.pc_inc,
        WbSrc::Load => lines.load_value,
    };
}
