//! Instruction Fetch (IF) Stage.
//!
//! Reads the instruction word at the program counter's fetch address from
//! instruction memory and latches the link value alongside it.

use crate::core::Cpu;
use crate::core::datapath::lines::TickLines;
use crate::core::units::lsu::Lsu;

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `cpu`   - CPU state (read only).
/// * `lines` - Tick lines to fill with `pc`, `pc_inc` and `inst`.
pub fn fetch_stage(cpu: &Cpu, lines: &mut TickLines) {
    lines.pc = cpu.pc.next_fetch_address();
    lines.pc_inc = cpu.pc.incremented();
    lines.inst = cpu.system.imem.read_word(Lsu::word_address(lines.pc));
}
