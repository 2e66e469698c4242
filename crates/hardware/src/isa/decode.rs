//! RISC-V Instruction Decoder.
//!
//! This module decodes 32-bit instruction encodings into a structured
//! `Decoded` form. It performs:
//! 1. **Field Extraction:** Opcode, register indices and function codes.
//! 2. **Immediate Reconstruction:** Sign-extended I-type and J-type immediates.
//! 3. **Classification:** A layered dispatch (opcode, then funct3, then the
//!    right-shift-type field) into `InstructionClass`.

use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Bit shift for extracting the I-Type immediate field (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
/// The immediate occupies the upper 12 bits and is sign-extended from bit 31.
const I_IMM_SHIFT: u32 = 20;

/// Bit shift for extracting J-Type immediate bits 19-12 (bits 12-19 of instruction).
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
/// The immediate is a signed, even offset; bit 0 is never encoded.
const J_IMM_19_12_SHIFT: u32 = 12;

/// Bit mask for J-Type immediate bits 19-12 (8 bits).
const J_IMM_19_12_MASK: u32 = 0xFF;

/// Bit shift for extracting J-Type immediate bit 11 (bit 20 of instruction).
const J_IMM_11_SHIFT: u32 = 20;

/// Bit mask for J-Type immediate bit 11.
const J_IMM_11_MASK: u32 = 1;

/// Bit shift for extracting J-Type immediate bits 10-1 (bits 21-30 of instruction).
const J_IMM_10_1_SHIFT: u32 = 21;

/// Bit mask for J-Type immediate bits 10-1 (10 bits).
const J_IMM_10_1_MASK: u32 = 0x3FF;

/// Bit shift for extracting J-Type immediate bit 20 (bit 31 of instruction).
const J_IMM_20_SHIFT: u32 = 31;

/// Bit mask for J-Type immediate bit 20 (sign bit).
const J_IMM_20_MASK: u32 = 1;

/// Total number of bits in J-Type immediate (21 bits, sign-extended).
const J_IMM_BITS: u32 = 21;

/// Bit position of bit 20 in the reconstructed J-Type immediate.
const J_IMM_20_POS: u32 = 20;

/// Bit position of bits 19-12 in the reconstructed J-Type immediate.
const J_IMM_19_12_POS: u32 = 12;

/// Bit position of bit 11 in the reconstructed J-Type immediate.
const J_IMM_11_POS: u32 = 11;

/// Bit position of bits 10-1 in the reconstructed J-Type immediate.
const J_IMM_10_1_POS: u32 = 1;

/// Right-shift flavour selected by the funct7 field of SRLI/SRAI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RightShiftType {
    /// `0000000`: zero-filling shift (SRLI).
    Logical,
    /// `0100000`: sign-filling shift (SRAI).
    Arithmetic,
    /// Any other funct7 pattern; carries the raw field.
    Unknown(u32),
}

/// Register-immediate arithmetic operation selected by funct3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpImmFunct {
    /// `000`: ADDI.
    Addi,
    /// `100`: XORI.
    Xori,
    /// `110`: ORI.
    Ori,
    /// `111`: ANDI.
    Andi,
    /// `001`: SLLI.
    Slli,
    /// `101`: SRLI or SRAI, split by the right-shift-type field.
    ShiftRight(RightShiftType),
    /// SLTI/SLTIU, which this core does not execute; carries the raw funct3.
    Unsupported(u32),
}

/// Load width and signedness selected by funct3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadFunct {
    /// `000`: sign-extended byte.
    Lb,
    /// `001`: sign-extended halfword.
    Lh,
    /// `010`: word.
    Lw,
    /// `100`: zero-extended byte.
    Lbu,
    /// `101`: zero-extended halfword.
    Lhu,
    /// Reserved encodings (`011`, `110`, `111`); carries the raw funct3.
    Unsupported(u32),
}

/// Instruction class resolved from the opcode and its sub-fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InstructionClass {
    /// Register-immediate arithmetic (OP-IMM).
    OpImm(OpImmFunct),
    /// Jump and link.
    Jal,
    /// Load from data memory.
    Load(LoadFunct),
    /// Any opcode this core does not execute.
    #[default]
    Unknown,
}

/// Decoded instruction structure containing all extracted fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// Resolved instruction class.
    pub class: InstructionClass,
    /// Sign-extended immediate for the class's format (0 when it has none).
    pub imm: i32,
}

/// Decodes a RISC-V instruction into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
///
/// # Returns
///
/// A `Decoded` structure containing all extracted instruction fields and
/// the resolved `InstructionClass`.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();
    let class = classify(inst);

    let imm = match class {
        InstructionClass::OpImm(_) | InstructionClass::Load(_) => i_type_imm(inst),
        InstructionClass::Jal => j_type_imm(inst),
        InstructionClass::Unknown => 0,
    };

    Decoded {
        raw: inst,
        opcode,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        class,
        imm,
    }
}

/// Resolves the instruction class: opcode first, then funct3, then the
/// right-shift-type field for SRLI/SRAI.
pub fn classify(inst: u32) -> InstructionClass {
    match inst.opcode() {
        opcodes::OP_IMM => InstructionClass::OpImm(match inst.funct3() {
            funct3::ADDI => OpImmFunct::Addi,
            funct3::XORI => OpImmFunct::Xori,
            funct3::ORI => OpImmFunct::Ori,
            funct3::ANDI => OpImmFunct::Andi,
            funct3::SLLI => OpImmFunct::Slli,
            funct3::SRLI_SRAI => OpImmFunct::ShiftRight(match inst.funct7() {
                funct7::SRLI => RightShiftType::Logical,
                funct7::SRAI => RightShiftType::Arithmetic,
                other => RightShiftType::Unknown(other),
            }),
            other => OpImmFunct::Unsupported(other),
        }),
        opcodes::OP_JAL => InstructionClass::Jal,
        opcodes::OP_LOAD => InstructionClass::Load(match inst.funct3() {
            funct3::LB => LoadFunct::Lb,
            funct3::LH => LoadFunct::Lh,
            funct3::LW => LoadFunct::Lw,
            funct3::LBU => LoadFunct::Lbu,
            funct3::LHU => LoadFunct::Lhu,
            other => LoadFunct::Unsupported(other),
        }),
        _ => InstructionClass::Unknown,
    }
}

/// Decodes the immediate value for I-Type instructions.
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
/// Used for Load and Immediate Arithmetic instructions.
pub const fn i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> I_IMM_SHIFT
}

/// Decodes the immediate value for J-Type instructions.
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
/// Used for JAL (Unconditional Jump).
pub const fn j_type_imm(inst: u32) -> i32 {
    let bits_19_12 = (inst >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (inst >> J_IMM_11_SHIFT) & J_IMM_11_MASK;
    let bits_10_1 = (inst >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = (inst >> J_IMM_20_SHIFT) & J_IMM_20_MASK;

    let combined = (bit_20 << J_IMM_20_POS)
        | (bits_19_12 << J_IMM_19_12_POS)
        | (bit_11 << J_IMM_11_POS)
        | (bits_10_1 << J_IMM_10_1_POS);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val`.
pub const fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val << shift) as i32) >> shift
}
