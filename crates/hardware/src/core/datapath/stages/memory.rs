//! Memory Access (MEM) Stage.
//!
//! For loads, presents the ALU result's word address to data memory and
//! extracts the addressed lane of the returned word. Data memory is left
//! untouched by every other instruction.

use crate::core::Cpu;
use crate::core::datapath::lines::TickLines;
use crate::core::units::lsu::Lsu;

/// Executes the memory access stage.
///
/// # Arguments
///
/// * `cpu`   - CPU state (read only); supplies data memory.
/// * `lines` - Tick lines; reads the ALU result, fills the memory lines.
pub fn mem_stage(cpu: &Cpu, lines: &mut TickLines) {
    lines.mem_addr = Lsu::word_address(lines.alu_result);
    if !lines.ctrl.mem_read {
        return;
    }
    lines.mem_word = cpu.system.dmem.read_word(lines.mem_addr);
    lines.load_value = Lsu::extract(
        lines.mem_word,
        lines.alu_result,
        lines.ctrl.width,
        lines.ctrl.signed_load,
    );
}
