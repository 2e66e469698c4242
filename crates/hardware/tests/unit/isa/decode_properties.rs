//! Instruction Decode Properties.
//!
//! Verifies field extraction, immediate reconstruction and the layered
//! classification (opcode, then funct3, then right-shift type).

use proptest::prelude::*;
use rstest::rstest;

use riscy_core::isa::decode::{
    InstructionClass, LoadFunct, OpImmFunct, RightShiftType, classify, decode, i_type_imm,
    j_type_imm, sign_extend,
};
use riscy_core::isa::encode::{encode_i_type, encode_j_type};
use riscy_core::isa::instruction::InstructionBits;
use riscy_core::isa::rv32i::opcodes;

// ──────────────────────────────────────────────────────────
// Field extraction
// ──────────────────────────────────────────────────────────

#[test]
fn fields_at_fixed_positions() {
    // funct7=0b0100000 rs2=0b10101 rs1=0b01010 funct3=0b101 rd=0b11111 opcode=0b0010011
    let inst: u32 = 0b0100000_10101_01010_101_11111_0010011;
    assert_eq!(inst.opcode(), 0b0010011);
    assert_eq!(inst.rd(), 31);
    assert_eq!(inst.funct3(), 0b101);
    assert_eq!(inst.rs1(), 10);
    assert_eq!(inst.rs2(), 21);
    assert_eq!(inst.funct7(), 0b0100000);
    assert_eq!(inst.shamt(), 21);
}

#[test]
fn decoded_struct_carries_raw_fields() {
    let d = decode(0x0011_0113); // addi x2, x2, 1
    assert_eq!(d.raw, 0x0011_0113);
    assert_eq!(d.opcode, opcodes::OP_IMM);
    assert_eq!((d.rd, d.rs1), (2, 2));
    assert_eq!(d.funct3, 0);
    assert_eq!(d.imm, 1);
    assert_eq!(d.class, InstructionClass::OpImm(OpImmFunct::Addi));
}

// ──────────────────────────────────────────────────────────
// Immediates
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(0xFFF0_0000, -1)]
#[case(0x8000_0000, -2048)]
#[case(0x7FF0_0000, 2047)]
#[case(0x0010_0000, 1)]
#[case(0x000F_FFFF, 0)]
fn i_type_sign_bit_is_bit_31(#[case] inst: u32, #[case] imm: i32) {
    assert_eq!(i_type_imm(inst), imm);
}

#[rstest]
#[case(0xFFDF_F2EF, -4)]
#[case(0x0080_006F, 8)]
#[case(0x8000_006F, -1_048_576)]
#[case(0x7FFF_F06F, 1_048_574)]
fn j_type_reassembles_four_groups(#[case] inst: u32, #[case] imm: i32) {
    assert_eq!(j_type_imm(inst), imm);
}

#[test]
fn j_type_bit_zero_is_never_set() {
    for inst in [0xFFFF_FFFF_u32, 0x7FFF_FFFF, 0x0010_0000, 0x8000_0000] {
        assert_eq!(j_type_imm(inst) & 1, 0);
    }
}

#[rstest]
#[case(0x80, 8, -128)]
#[case(0x7F, 8, 127)]
#[case(0x8000, 16, -32768)]
#[case(0x1_0000, 17, -65536)]
fn sign_extend_from_width(#[case] val: u32, #[case] bits: u32, #[case] expected: i32) {
    assert_eq!(sign_extend(val, bits), expected);
}

proptest! {
    #[test]
    fn i_type_round_trip(imm in -2048i32..=2047, rs1 in 0u32..32, rd in 0u32..32, f3 in 0u32..8) {
        let inst = encode_i_type(imm, rs1, f3, rd, opcodes::OP_IMM);
        prop_assert_eq!(i_type_imm(inst), imm);
        prop_assert_eq!(decode(inst).imm, imm);
        prop_assert_eq!(inst.rs1(), rs1 as usize);
        prop_assert_eq!(inst.rd(), rd as usize);
        prop_assert_eq!(inst.funct3(), f3);
    }

    #[test]
    fn j_type_round_trip(half in -(1i32 << 19)..(1i32 << 19), rd in 0u32..32) {
        let offset = half * 2;
        let inst = encode_j_type(offset, rd);
        prop_assert_eq!(j_type_imm(inst), offset);
        prop_assert_eq!(decode(inst).imm, offset);
        prop_assert_eq!(inst.rd(), rd as usize);
        prop_assert_eq!(inst.opcode(), opcodes::OP_JAL);
    }

    #[test]
    fn classify_never_panics(inst in any::<u32>()) {
        let _ = classify(inst);
        let _ = decode(inst);
    }
}

// ──────────────────────────────────────────────────────────
// Classification
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(0b000, OpImmFunct::Addi)]
#[case(0b100, OpImmFunct::Xori)]
#[case(0b110, OpImmFunct::Ori)]
#[case(0b111, OpImmFunct::Andi)]
#[case(0b001, OpImmFunct::Slli)]
#[case(0b010, OpImmFunct::Unsupported(0b010))]
#[case(0b011, OpImmFunct::Unsupported(0b011))]
fn op_imm_dispatch_on_funct3(#[case] f3: u32, #[case] expected: OpImmFunct) {
    let inst = encode_i_type(3, 1, f3, 1, opcodes::OP_IMM);
    assert_eq!(classify(inst), InstructionClass::OpImm(expected));
}

#[rstest]
#[case(0b0000000, RightShiftType::Logical)]
#[case(0b0100000, RightShiftType::Arithmetic)]
#[case(0b0000001, RightShiftType::Unknown(0b0000001))]
#[case(0b1111111, RightShiftType::Unknown(0b1111111))]
fn right_shift_dispatch_on_funct7(#[case] f7: u32, #[case] expected: RightShiftType) {
    let imm = ((f7 << 5) | 3) as i32;
    let inst = encode_i_type(imm, 1, 0b101, 1, opcodes::OP_IMM);
    assert_eq!(
        classify(inst),
        InstructionClass::OpImm(OpImmFunct::ShiftRight(expected))
    );
}

#[rstest]
#[case(0b000, LoadFunct::Lb)]
#[case(0b001, LoadFunct::Lh)]
#[case(0b010, LoadFunct::Lw)]
#[case(0b100, LoadFunct::Lbu)]
#[case(0b101, LoadFunct::Lhu)]
#[case(0b011, LoadFunct::Unsupported(0b011))]
#[case(0b110, LoadFunct::Unsupported(0b110))]
#[case(0b111, LoadFunct::Unsupported(0b111))]
fn load_dispatch_on_funct3(#[case] f3: u32, #[case] expected: LoadFunct) {
    let inst = encode_i_type(0, 1, f3, 1, opcodes::OP_LOAD);
    assert_eq!(classify(inst), InstructionClass::Load(expected));
}

#[test]
fn jal_and_unknown_classes() {
    assert_eq!(classify(encode_j_type(-4, 5)), InstructionClass::Jal);
    assert_eq!(classify(0x0000_0037), InstructionClass::Unknown);
    assert_eq!(decode(0x0000_0037).imm, 0);
}
