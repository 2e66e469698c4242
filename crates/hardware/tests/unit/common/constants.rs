//! # Constant Tests
//!
//! Sanity checks tying the shared constants to the register and address geometry.

use riscy_core::common::constants::{
    INSTRUCTION_BYTES, NUM_REGISTERS, REG_INDEX_MASK, SHAMT_MASK, WORD_ADDRESS_SHIFT,
};

#[test]
fn register_mask_covers_exactly_the_register_file() {
    assert_eq!(REG_INDEX_MASK + 1, NUM_REGISTERS);
}

#[test]
fn word_shift_matches_instruction_stride() {
    assert_eq!(1 << WORD_ADDRESS_SHIFT, INSTRUCTION_BYTES);
}

#[test]
fn shift_amount_is_five_bits() {
    assert_eq!(SHAMT_MASK, 31);
}
