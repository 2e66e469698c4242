//! Instruction Execution Orchestration.
//!
//! This module drives one tick of the single-cycle datapath. It performs:
//! 1. **Evaluate:** Runs every stage over pre-tick state and collects the
//!    results in `TickLines`, without mutating anything.
//! 2. **Commit:** At the clock edge, drives the register write port and the
//!    program counter from those lines, then clocks both.
//!
//! Splitting the tick this way is what makes a write in tick N visible only
//! to reads in tick N+1.

use tracing::debug;

use super::Cpu;
use crate::core::datapath::lines::TickLines;
use crate::core::datapath::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::isa::disasm::disassemble;

impl Cpu {
    /// Computes every combinational value of the coming tick.
    ///
    /// # Returns
    ///
    /// The tick's lines, derived only from committed state.
    pub fn evaluate(&self) -> TickLines {
        let mut lines = TickLines::default();
        fetch_stage(self, &mut lines);
        decode_stage(self, &mut lines);
        execute_stage(&mut lines);
        mem_stage(self, &mut lines);
        wb_stage(&mut lines);
        lines
    }

    /// Applies the clock edge for a previously evaluated tick.
    ///
    /// # Arguments
    ///
    /// * `lines` - The output of [`evaluate`](Self::evaluate) for this tick.
    pub fn commit(&mut self, lines: &TickLines) {
        let ctrl = &lines.ctrl;
        self.regs.write(ctrl.reg_write, ctrl.rd, lines.wb_value);
        self.regs.clock();
        self.pc.clock(ctrl.pc_load, lines.alu_result);
        self.stats.record(ctrl);
    }

    /// Runs one full tick: evaluate, then commit.
    pub fn tick(&mut self) {
        let lines = self.evaluate();
        if self.trace {
            debug!(
                pc = format_args!("{:#010x}", lines.pc),
                inst = format_args!("{:#010x}", lines.inst),
                wb = format_args!("{:#010x}", lines.wb_value),
                "{}",
                disassemble(lines.inst)
            );
        }
        self.commit(&lines);
    }
}
