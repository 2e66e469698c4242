//! Load value extraction.
//!
//! This module selects the addressed lane of a raw memory word and widens it
//! to 32 bits. It performs:
//! 1. **Lane Selection:** Bits 0-1 of the byte address pick one of four bytes;
//!    bit 1 picks one of two half-words.
//! 2. **Extension:** Sign-extension from bit 7 or 15, or zero-extension.
//!
//! Word loads return the raw word. The low two address bits are ignored, so a
//! misaligned word load reads the enclosing aligned word.

use crate::core::datapath::signals::MemWidth;

/// Mask selecting the byte lane (bits 0-1 of the byte address).
const BYTE_LANE_MASK: u32 = 0b11;

/// Address bit selecting the half-word lane.
const HALF_LANE_BIT: u32 = 1;

/// Bits per byte.
const BITS_PER_BYTE: u32 = 8;

/// Bits per half-word.
const BITS_PER_HALF: u32 = 16;

/// Derives the sign- or zero-extended scalar for a load.
///
/// # Arguments
///
/// * `raw`          - The 32-bit word read from memory.
/// * `byte_address` - The effective byte address; only bits 0-1 are consulted.
/// * `width`        - Byte, half-word, or word.
/// * `signed`       - Sign-extend the selected lane when true.
///
/// # Returns
///
/// The 32-bit value to write back.
pub fn extract(raw: u32, byte_address: u32, width: MemWidth, signed: bool) -> u32 {
    match width {
        MemWidth::Byte => {
            let lane = byte_address & BYTE_LANE_MASK;
            let byte = (raw >> (lane * BITS_PER_BYTE)) as u8;
            if signed {
                byte as i8 as i32 as u32
            } else {
                u32::from(byte)
            }
        }
        MemWidth::Half => {
            let lane = (byte_address >> HALF_LANE_BIT) & 1;
            let half = (raw >> (lane * BITS_PER_HALF)) as u16;
            if signed {
                half as i16 as i32 as u32
            } else {
                u32::from(half)
            }
        }
        MemWidth::Word => raw,
    }
}
