//! Simulation statistics collection and reporting.
//!
//! This module tracks what the datapath did over a run. It provides:
//! 1. **Ticks and retirement:** Ticks elapsed and instructions retired (one per tick).
//! 2. **Instruction mix:** Counts by class (ALU, load, jump, no-op).
//! 3. **Reporting:** A sectioned text report and a serde-serializable form for JSON output.

use std::fmt::{self, Write as _};

use serde::Serialize;

use crate::core::datapath::signals::{ControlSignals, WbSrc};

/// Report section names accepted by [`SimStats::render_sections`].
pub const STATS_SECTIONS: [&str; 2] = ["summary", "instruction_mix"];

/// Horizontal rule used between report sections.
const RULE: &str = "----------------------------------------------------------";

/// Banner rule framing the report.
const BANNER: &str = "==========================================================";

/// Simulation statistics structure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total ticks elapsed.
    pub ticks: u64,
    /// Number of instructions retired. The datapath is single-cycle, so this
    /// equals `ticks`.
    pub instructions_retired: u64,
    /// Count of register-immediate ALU instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of jump-and-link instructions retired.
    pub inst_jump: u64,
    /// Count of words that decoded to the no-op bundle.
    pub inst_nop: u64,
}

impl SimStats {
    /// Records one tick executing the given control bundle.
    pub fn record(&mut self, ctrl: &ControlSignals) {
        self.ticks += 1;
        self.instructions_retired += 1;
        if ctrl.is_nop() {
            self.inst_nop += 1;
            return;
        }
        match ctrl.wb_src {
            WbSrc::Alu => self.inst_alu += 1,
            WbSrc::PcInc => self.inst_jump += 1,
            WbSrc::Load => self.inst_load += 1,
        }
    }

    /// Renders the selected report sections.
    ///
    /// # Arguments
    ///
    /// * `sections` - Section names from [`STATS_SECTIONS`]; empty selects all.
    ///   Unknown names are ignored.
    pub fn render_sections(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let total = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;
        let mut out = String::new();

        let _ = writeln!(out, "{BANNER}");
        let _ = writeln!(out, "RISC-V DATAPATH SIMULATION STATISTICS");
        let _ = writeln!(out, "{BANNER}");
        if want("summary") {
            let _ = writeln!(out, "sim_ticks                {}", self.ticks);
            let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
            let _ = writeln!(out, "{RULE}");
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            let _ = writeln!(out, "  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
            let _ = writeln!(out, "  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
            let _ = writeln!(out, "  op.jump                {} ({:.2}%)", self.inst_jump, pct(self.inst_jump));
            let _ = writeln!(out, "  op.nop                 {} ({:.2}%)", self.inst_nop, pct(self.inst_nop));
            let _ = writeln!(out, "{RULE}");
        }
        out
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_sections(&[]))
    }
}
