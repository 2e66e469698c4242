//! Instruction encoders.
//!
//! The inverse of [`crate::isa::decode`]: packs register indices, function
//! codes and immediates into 32-bit instruction words. Used to build test
//! programs and the bring-up program in [`crate::sim::programs`].
//!
//! Immediates are truncated to the width their format can carry, so
//! `i_type_imm(encode_i_type(x, ..)) == x` for every `x` in `[-2048, 2047]`
//! and `j_type_imm(encode_j_type(x, ..)) == x` for every even `x` in
//! `[-2^20, 2^20)`.

use crate::isa::instruction::{
    FUNCT3_MASK, FUNCT3_SHIFT, FUNCT7_SHIFT, OPCODE_MASK, RD_MASK, RD_SHIFT, RS1_MASK, RS1_SHIFT,
    RS2_SHIFT, SHAMT_MASK,
};
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Mask for the 12-bit I-type immediate.
const I_IMM_MASK: u32 = 0xFFF;

/// Bit position of the I-type immediate.
const I_IMM_SHIFT: u32 = 20;

/// One contiguous group of J-type immediate bits: where it sits in the
/// offset and where it sits in the instruction word.
#[derive(Clone, Copy)]
struct JImmField {
    offset_start: u32,
    width: u32,
    inst_start: u32,
}

/// The four disjoint groups forming a J-type immediate.
const J_IMM_FIELDS: [JImmField; 4] = [
    JImmField { offset_start: 12, width: 8, inst_start: 12 },
    JImmField { offset_start: 11, width: 1, inst_start: 20 },
    JImmField { offset_start: 1, width: 10, inst_start: 21 },
    JImmField { offset_start: 20, width: 1, inst_start: 31 },
];

/// Encodes an I-type instruction.
///
/// # Arguments
///
/// * `imm` - Immediate value; only the low 12 bits are encoded.
/// * `rs1` - First source register index.
/// * `funct3` - Function code.
/// * `rd` - Destination register index.
/// * `opcode` - Major opcode.
pub const fn encode_i_type(imm: i32, rs1: u32, funct3: u32, rd: u32, opcode: u32) -> u32 {
    ((imm as u32 & I_IMM_MASK) << I_IMM_SHIFT)
        | ((rs1 & RS1_MASK) << RS1_SHIFT)
        | ((funct3 & FUNCT3_MASK) << FUNCT3_SHIFT)
        | ((rd & RD_MASK) << RD_SHIFT)
        | (opcode & OPCODE_MASK)
}

/// Encodes a JAL instruction.
///
/// # Arguments
///
/// * `offset` - Signed, even jump offset relative to the JAL's own address.
///   Bit 0 and bits above 20 are discarded.
/// * `rd` - Register receiving the link address.
pub const fn encode_j_type(offset: i32, rd: u32) -> u32 {
    let offset = offset as u32;
    let mut inst = ((rd & RD_MASK) << RD_SHIFT) | opcodes::OP_JAL;
    let mut i = 0;
    while i < J_IMM_FIELDS.len() {
        let JImmField { offset_start, width, inst_start } = J_IMM_FIELDS[i];
        let bits = (offset >> offset_start) & ((1 << width) - 1);
        inst |= bits << inst_start;
        i += 1;
    }
    inst
}

/// Encodes an OP-IMM shift with the given right-shift-type field.
const fn encode_shift(shamt: u32, rs1: u32, funct3: u32, rd: u32, shift_type: u32) -> u32 {
    (shift_type << FUNCT7_SHIFT)
        | ((shamt & SHAMT_MASK) << RS2_SHIFT)
        | ((rs1 & RS1_MASK) << RS1_SHIFT)
        | ((funct3 & FUNCT3_MASK) << FUNCT3_SHIFT)
        | ((rd & RD_MASK) << RD_SHIFT)
        | opcodes::OP_IMM
}

/// `addi rd, rs1, imm`
pub const fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    encode_i_type(imm, rs1, funct3::ADDI, rd, opcodes::OP_IMM)
}

/// `xori rd, rs1, imm`
pub const fn xori(rd: u32, rs1: u32, imm: i32) -> u32 {
    encode_i_type(imm, rs1, funct3::XORI, rd, opcodes::OP_IMM)
}

/// `ori rd, rs1, imm`
pub const fn ori(rd: u32, rs1: u32, imm: i32) -> u32 {
    encode_i_type(imm, rs1, funct3::ORI, rd, opcodes::OP_IMM)
}

/// `andi rd, rs1, imm`
pub const fn andi(rd: u32, rs1: u32, imm: i32) -> u32 {
    encode_i_type(imm, rs1, funct3::ANDI, rd, opcodes::OP_IMM)
}

/// `slli rd, rs1, shamt`
pub const fn slli(rd: u32, rs1: u32, shamt: u32) -> u32 {
    encode_shift(shamt, rs1, funct3::SLLI, rd, funct7::SRLI)
}

/// `srli rd, rs1, shamt`
pub const fn srli(rd: u32, rs1: u32, shamt: u32) -> u32 {
    encode_shift(shamt, rs1, funct3::SRLI_SRAI, rd, funct7::SRLI)
}

/// `srai rd, rs1, shamt`
pub const fn srai(rd: u32, rs1: u32, shamt: u32) -> u32 {
    encode_shift(shamt, rs1, funct3::SRLI_SRAI, rd, funct7::SRAI)
}

/// `jal rd, offset`
pub const fn jal(rd: u32, offset: i32) -> u32 {
    encode_j_type(offset, rd)
}

/// `lb rd, imm(rs1)`
pub const fn lb(rd: u32, rs1: u32, imm: i32) -> u32 {
    encode_i_type(imm, rs1, funct3::LB, rd, opcodes::OP_LOAD)
}

/// `lh rd, imm(rs1)`
pub const fn lh(rd: u32, rs1: u32, imm: i32) -> u32 {
    encode_i_type(imm, rs1, funct3::LH, rd, opcodes::OP_LOAD)
}

/// `lw rd, imm(rs1)`
pub const fn lw(rd: u32, rs1: u32, imm: i32) -> u32 {
    encode_i_type(imm, rs1, funct3::LW, rd, opcodes::OP_LOAD)
}

/// `lbu rd, imm(rs1)`
pub const fn lbu(rd: u32, rs1: u32, imm: i32) -> u32 {
    encode_i_type(imm, rs1, funct3::LBU, rd, opcodes::OP_LOAD)
}

/// `lhu rd, imm(rs1)`
pub const fn lhu(rd: u32, rs1: u32, imm: i32) -> u32 {
    encode_i_type(imm, rs1, funct3::LHU, rd, opcodes::OP_LOAD)
}
