//! Load/Store Unit (LSU).
//!
//! This module provides the load path between the datapath and data memory.
//! It includes:
//! - [`extract`]: Byte/half-word lane selection and sign or zero extension.
//!
//! Data memory is word-addressed; the LSU turns a byte address into the word
//! address the memory sees, and carves the loaded scalar out of the raw word.

/// Sub-word lane selection and extension.
pub mod extract;

use crate::common::constants::WORD_ADDRESS_SHIFT;
use crate::core::datapath::signals::MemWidth;

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Converts a byte address into the word address presented to memory.
    pub const fn word_address(byte_address: u32) -> u32 {
        byte_address >> WORD_ADDRESS_SHIFT
    }

    /// Derives the scalar load value from a raw memory word.
    ///
    /// Delegates to [`extract::extract`]. See that function for full
    /// documentation.
    ///
    /// # Arguments
    ///
    /// * `raw`          - The 32-bit word read from memory
    /// * `byte_address` - The effective byte address of the load
    /// * `width`        - The width of the load
    /// * `signed`       - Sign-extend (`true`) or zero-extend (`false`)
    ///
    /// # Examples
    ///
    /// ```
    /// use riscy_core::core::units::lsu::Lsu;
    /// use riscy_core::core::datapath::signals::MemWidth;
    ///
    /// assert_eq!(Lsu::extract(0x1234_5678, 0, MemWidth::Byte, false), 0x78);
    /// assert_eq!(Lsu::extract(0x8000_00FF, 0, MemWidth::Byte, true), 0xFFFF_FFFF);
    /// assert_eq!(Lsu::extract(0x1234_5678, 2, MemWidth::Half, false), 0x1234);
    /// ```
    pub fn extract(raw: u32, byte_address: u32, width: MemWidth, signed: bool) -> u32 {
        extract::extract(raw, byte_address, width, signed)
    }
}
