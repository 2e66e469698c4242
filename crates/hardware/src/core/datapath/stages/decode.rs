//! Instruction Decode (ID) Stage.
//!
//! This module implements the decoder and the decode stage. It performs the following:
//! 1. **Decoding:** Converts the raw instruction word into a `ControlSignals` bundle
//!    by dispatching on the resolved `InstructionClass`.
//! 2. **Register Read:** Reads both source selectors from the register file.
//!
//! Register selectors and the destination are extracted from their fixed
//! positions for every instruction. Anything the datapath does not execute
//! (unknown opcodes, SLTI/SLTIU, unknown right-shift types, reserved load
//! widths) decodes to the no-op bundle: no register write and no jump.

use tracing::trace;

use crate::core::Cpu;
use crate::core::datapath::lines::TickLines;
use crate::core::datapath::signals::{AluOp, ControlSignals, MemWidth, OpBSrc, WbSrc};
use crate::isa::decode::{Decoded, InstructionClass, LoadFunct, OpImmFunct, RightShiftType, decode};
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::funct3;

/// Combinational instruction decoder.
#[derive(Debug)]
pub struct InstructionDecoder;

impl InstructionDecoder {
    /// Maps an instruction word to its control bundle.
    ///
    /// # Arguments
    ///
    /// * `inst` - The 32-bit instruction encoding.
    ///
    /// # Returns
    ///
    /// The control bundle. Instructions outside the executed subset yield the
    /// no-op bundle with only the register selectors populated.
    ///
    /// # Examples
    ///
    /// ```
    /// use riscy_core::core::datapath::signals::{AluOp, WbSrc};
    /// use riscy_core::core::datapath::stages::InstructionDecoder;
    ///
    /// let ctrl = InstructionDecoder::decode(0x00110113); // addi x2, x2, 1
    /// assert!(ctrl.reg_write);
    /// assert_eq!(ctrl.alu, AluOp::Add);
    /// assert_eq!(ctrl.alu_imm, 1);
    /// assert_eq!(ctrl.wb_src, WbSrc::Alu);
    /// ```
    pub fn decode(inst: u32) -> ControlSignals {
        let d = decode(inst);
        let base = ControlSignals {
            rd: d.rd,
            rs1: d.rs1,
            rs2: d.rs2,
            ..ControlSignals::default()
        };

        let ctrl = match d.class {
            InstructionClass::OpImm(funct) => Self::op_imm(base, &d, funct),
            InstructionClass::Jal => Some(ControlSignals {
                pc_load: true,
                reg_write: true,
                alu: AluOp::Add,
                alu_imm: d.imm as u32,
                b_src: OpBSrc::Pc,
                wb_src: WbSrc::PcInc,
                ..base
            }),
            InstructionClass::Load(funct) => Self::load(base, &d, funct),
            InstructionClass::Unknown => None,
        };

        ctrl.unwrap_or_else(|| {
            trace!(inst = format_args!("{inst:#010x}"), "no-op decode");
            base
        })
    }

    /// Register-immediate arithmetic: write-back from the ALU, operand B = `rs1`.
    fn op_imm(base: ControlSignals, d: &Decoded, funct: OpImmFunct) -> Option<ControlSignals> {
        let imm = d.imm as u32;
        let shamt = d.raw.shamt();
        let (alu, alu_imm) = match funct {
            OpImmFunct::Addi => (AluOp::Add, imm),
            OpImmFunct::Xori => (AluOp::Xor, imm),
            OpImmFunct::Ori => (AluOp::Or, imm),
            OpImmFunct::Andi => (AluOp::And, imm),
            OpImmFunct::Slli => (AluOp::Sll, shamt),
            OpImmFunct::ShiftRight(RightShiftType::Logical) => (AluOp::Srl, shamt),
            OpImmFunct::ShiftRight(RightShiftType::Arithmetic) => (AluOp::Sra, shamt),
            OpImmFunct::ShiftRight(RightShiftType::Unknown(_)) | OpImmFunct::Unsupported(_) => {
                return None;
            }
        };
        Some(ControlSignals {
            reg_write: true,
            alu,
            alu_imm,
            b_src: OpBSrc::Reg1,
            wb_src: WbSrc::Alu,
            ..base
        })
    }

    /// Loads: effective address `rs1 + imm`, write-back from the LSU.
    fn load(base: ControlSignals, d: &Decoded, funct: LoadFunct) -> Option<ControlSignals> {
        let width = match funct {
            LoadFunct::Lb | LoadFunct::Lbu => MemWidth::Byte,
            LoadFunct::Lh | LoadFunct::Lhu => MemWidth::Half,
            LoadFunct::Lw => MemWidth::Word,
            LoadFunct::Unsupported(_) => return None,
        };
        let signed_load = d.funct3 & funct3::LOAD_UNSIGNED_BIT == 0;
        Some(ControlSignals {
            reg_write: true,
            alu: AluOp::Add,
            alu_imm: d.imm as u32,
            b_src: OpBSrc::Reg1,
            wb_src: WbSrc::Load,
            mem_read: true,
            width,
            signed_load,
            ..base
        })
    }
}

/// Executes the instruction decode stage.
///
/// Decodes the fetched word and reads both register selectors. The reads
/// observe committed state only.
///
/// # Arguments
///
/// * `cpu`   - CPU state (read only); supplies the register file.
/// * `lines` - Tick lines; reads `inst`, fills `ctrl`, `rs1_val` and `rs2_val`.
pub fn decode_stage(cpu: &Cpu, lines: &mut TickLines) {
    lines.ctrl = InstructionDecoder::decode(lines.inst);
    lines.rs1_val = cpu.regs.read(lines.ctrl.rs1);
    lines.rs2_val = cpu.regs.read(lines.ctrl.rs2);
}
