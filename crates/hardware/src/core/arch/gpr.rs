//! RISC-V General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Clocked Writes:** A write is latched on the write port and only lands on `clock`,
//!    so reads in the same tick observe the pre-write value.
//! 3. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 4. **Debugging:** Exposes a diagnostic read port and a register dump.

use std::fmt;

use tracing::trace;

use crate::common::constants::{DEFAULT_DEBUG_REG, NUM_REGISTERS, REG_INDEX_MASK, REG_ZERO};

/// A write latched on the write port, waiting for the clock edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingWrite {
    /// Destination register index (never 0).
    pub dest: usize,
    /// Value to store.
    pub value: u32,
}

/// General-Purpose Register file.
///
/// Two primary read ports (two calls to [`read`](Self::read)), one clocked
/// write port, and a diagnostic port fixed to one register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGISTERS],
    pending: Option<PendingWrite>,
    debug_reg: usize,
}

impl RegisterFile {
    /// Creates a register file with all registers zeroed.
    ///
    /// # Arguments
    ///
    /// * `debug_reg` - Register index observed by [`debug_read`](Self::debug_read);
    ///   masked to 5 bits.
    pub fn new(debug_reg: usize) -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
            pending: None,
            debug_reg: debug_reg & REG_INDEX_MASK,
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `sel` - Register index; only bits 0-4 are used.
    ///
    /// # Returns
    ///
    /// The committed value of the register. Register `x0` always returns 0.
    pub fn read(&self, sel: usize) -> u32 {
        let idx = sel & REG_INDEX_MASK;
        if idx == REG_ZERO { 0 } else { self.regs[idx] }
    }

    /// Reads the register bound to the diagnostic port.
    pub fn debug_read(&self) -> u32 {
        self.read(self.debug_reg)
    }

    /// Returns the register index bound to the diagnostic port.
    pub const fn debug_reg(&self) -> usize {
        self.debug_reg
    }

    /// Drives the write port for the current tick.
    ///
    /// The write takes effect at the next [`clock`](Self::clock). Writes are
    /// dropped when `enable` is false or `dest` is `x0`. Driving the port
    /// again before the clock replaces the earlier value.
    ///
    /// # Arguments
    ///
    /// * `enable` - Write enable.
    /// * `dest`   - Destination register index; only bits 0-4 are used.
    /// * `value`  - Value to write.
    pub fn write(&mut self, enable: bool, dest: usize, value: u32) {
        let dest = dest & REG_INDEX_MASK;
        self.pending = (enable && dest != REG_ZERO).then_some(PendingWrite { dest, value });
    }

    /// Returns the write waiting for the next clock edge, if any.
    pub const fn pending(&self) -> Option<PendingWrite> {
        self.pending
    }

    /// Clock edge: commits the latched write, if any.
    pub fn clock(&mut self) {
        if let Some(PendingWrite { dest, value }) = self.pending.take() {
            trace!(reg = dest, value = format_args!("{value:#010x}"), "register commit");
            self.regs[dest] = value;
        }
    }

    /// Returns a copy of all 32 committed register values.
    pub fn snapshot(&self) -> [u32; NUM_REGISTERS] {
        let mut regs = self.regs;
        regs[REG_ZERO] = 0;
        regs
    }

    /// Renders all registers in pairs with hexadecimal formatting for debugging.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new(DEFAULT_DEBUG_REG)
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_REGISTERS).step_by(2) {
            writeln!(
                f,
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.read(i),
                i + 1,
                self.read(i + 1)
            )?;
        }
        Ok(())
    }
}
