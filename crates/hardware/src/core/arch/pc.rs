//! Program Counter.
//!
//! The program counter is a pair of registers rather than a single counter:
//! the address being fetched and that address plus 4. Holding both lets the
//! link value of a jump and the next fetch address coexist in one tick
//! without a combinational loop through the adder.

use tracing::trace;

use crate::common::constants::INSTRUCTION_BYTES;

/// Two-register program counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramCounter {
    address: u32,
    incremented: u32,
}

impl ProgramCounter {
    /// Creates a program counter at the given reset address.
    pub const fn new(reset: u32) -> Self {
        Self {
            address: reset,
            incremented: reset.wrapping_add(INSTRUCTION_BYTES),
        }
    }

    /// Address of the instruction fetched this tick.
    pub const fn next_fetch_address(&self) -> u32 {
        self.address
    }

    /// Fetch address plus 4; the link value for jump-and-link.
    pub const fn incremented(&self) -> u32 {
        self.incremented
    }

    /// Clock edge: advances to `input_address` when `load` is set, otherwise
    /// to the previous incremented value.
    ///
    /// # Arguments
    ///
    /// * `load`          - Take the absolute target.
    /// * `input_address` - Target address; ignored unless `load` is set.
    pub fn clock(&mut self, load: bool, input_address: u32) {
        let next = if load {
            trace!(addr = format_args!("{input_address:#010x}"), "pc load");
            input_address
        } else {
            self.incremented
        };
        self.address = next;
        self.incremented = next.wrapping_add(INSTRUCTION_BYTES);
    }
}

impl Default for ProgramCounter {
    fn default() -> Self {
        Self::new(0)
    }
}
