//! Built-in programs.
//!
//! Small instruction images that need no toolchain, used for bring-up and by
//! the `demo` command.

use crate::isa::encode::{addi, jal};

/// Byte offset from the loop's JAL back to its ADDI.
const LOOP_BACK: i32 = -4;

/// The counter loop: `addi reg, reg, 1` followed by `jal link_reg, -4`.
///
/// Run from reset, `reg` increments once every two ticks and the program
/// counter alternates between 0 and 4.
///
/// # Arguments
///
/// * `reg`      - Register to increment.
/// * `link_reg` - Register receiving the JAL link value (8).
///
/// # Examples
///
/// ```
/// use riscy_core::sim::programs::counter_loop;
///
/// assert_eq!(counter_loop(2, 5), [0x0011_0113, 0xFFDF_F2EF]);
/// ```
pub const fn counter_loop(reg: u32, link_reg: u32) -> [u32; 2] {
    [addi(reg, reg, 1), jal(link_reg, LOOP_BACK)]
}
