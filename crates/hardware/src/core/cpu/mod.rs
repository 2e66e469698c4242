//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the datapath integrator.
//! It coordinates the following:
//! 1. **State Management:** Owns the register file and program counter.
//! 2. **System Integration:** Holds the instruction and data memory collaborators.
//! 3. **Observation:** Tracks statistics, the trace switch and the diagnostic port.

/// Two-phase tick: evaluate, then commit.
pub mod execution;

use crate::config::Config;
use crate::core::arch::gpr::RegisterFile;
use crate::core::arch::pc::ProgramCounter;
use crate::soc::System;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state and components.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Program counter.
    pub pc: ProgramCounter,
    /// Instruction and data memory.
    pub system: System,
    /// Execution statistics.
    pub stats: SimStats,
    /// Emit a per-tick trace event with the disassembled instruction.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU in its reset state attached to `system`.
    ///
    /// # Arguments
    ///
    /// * `system` - Instruction and data memory.
    /// * `config` - Reset vector, diagnostic register and trace switch.
    pub fn new(system: System, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(config.general.debug_reg),
            pc: ProgramCounter::new(config.general.reset_pc),
            system,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Value on the diagnostic read port.
    pub fn debug_out(&self) -> u32 {
        self.regs.debug_read()
    }
}
