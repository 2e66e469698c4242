//! Simulator: a CPU plus the memories it runs against.
//!
//! Builds a `Cpu` from a `Config` and memory images and steps it.

use tracing::info;

use crate::common::error::Result;
use crate::config::Config;
use crate::core::Cpu;
use crate::soc::System;
use crate::stats::SimStats;

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    /// CPU state (registers, program counter, memories, stats).
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a simulator with block memories preloaded from images.
    ///
    /// # Arguments
    ///
    /// * `config`  - Validated before use.
    /// * `program` - Instruction image, placed at word 0.
    /// * `data`    - Data image, placed at word 0.
    ///
    /// # Returns
    ///
    /// `SimError::InvalidConfig` or `SimError::ImageTooLarge` on failure.
    pub fn new(config: &Config, program: &[u32], data: &[u32]) -> Result<Self> {
        config.validate()?;
        let system = System::with_images(&config.memory, program, data)?;
        info!(
            program_words = program.len(),
            data_words = data.len(),
            reset_pc = format_args!("{:#010x}", config.general.reset_pc),
            "simulator ready"
        );
        Ok(Self::with_system(system, config))
    }

    /// Creates a simulator around caller-supplied memories.
    pub fn with_system(system: System, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(system, config),
        }
    }

    /// Advances the simulator by one clock tick.
    pub fn tick(&mut self) {
        self.cpu.tick();
    }

    /// Advances the simulator by `ticks` clock ticks.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Current fetch address.
    pub fn pc(&self) -> u32 {
        self.cpu.pc.next_fetch_address()
    }

    /// Value on the diagnostic read port.
    pub fn debug_out(&self) -> u32 {
        self.cpu.debug_out()
    }

    /// Statistics gathered so far.
    pub fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }
}
