//! Encoder Tests.
//!
//! Known encodings for each mnemonic helper, and truncation of
//! out-of-range fields.

use rstest::rstest;

use riscy_core::isa::decode::j_type_imm;
use riscy_core::isa::encode::{
    addi, andi, encode_i_type, jal, lb, lbu, lh, lhu, lw, ori, slli, srai, srli, xori,
};
use riscy_core::isa::instruction::InstructionBits;
use riscy_core::isa::rv32i::opcodes;

#[rstest]
#[case::addi(addi(2, 2, 1), 0x0011_0113)]
#[case::addi_neg(addi(1, 0, -1), 0xFFF0_0093)]
#[case::xori(xori(1, 2, -1), 0xFFF1_4093)]
#[case::ori(ori(1, 2, 0x0F0), 0x0F01_6093)]
#[case::andi(andi(1, 2, 0xFF), 0x0FF1_7093)]
#[case::slli(slli(1, 2, 3), 0x0031_1093)]
#[case::srli(srli(1, 2, 3), 0x0031_5093)]
#[case::srai(srai(1, 2, 3), 0x4031_5093)]
#[case::jal(jal(5, -4), 0xFFDF_F2EF)]
#[case::jal_fwd(jal(0, 8), 0x0080_006F)]
#[case::lb(lb(1, 2, 4), 0x0041_0083)]
#[case::lh(lh(1, 2, 4), 0x0041_1083)]
#[case::lw(lw(1, 2, 4), 0x0041_2083)]
#[case::lbu(lbu(1, 2, 4), 0x0041_4083)]
#[case::lhu(lhu(1, 2, 4), 0x0041_5083)]
fn known_encodings(#[case] actual: u32, #[case] expected: u32) {
    assert_eq!(actual, expected, "{actual:#010x} != {expected:#010x}");
}

#[test]
fn i_type_immediate_truncated_to_twelve_bits() {
    // 0x1001 keeps only 0x001
    assert_eq!(addi(1, 0, 0x1001), addi(1, 0, 1));
}

#[test]
fn register_fields_masked_to_five_bits() {
    let inst = encode_i_type(0, 33, 0, 34, opcodes::OP_IMM);
    assert_eq!(inst.rs1(), 1);
    assert_eq!(inst.rd(), 2);
}

#[test]
fn shift_amount_masked_to_five_bits() {
    assert_eq!(slli(1, 1, 33).shamt(), 1);
    assert_eq!(srai(1, 1, 33).funct7(), 0b0100000);
}

#[test]
fn jal_odd_offset_drops_bit_zero() {
    assert_eq!(j_type_imm(jal(1, 7)), 6);
}
