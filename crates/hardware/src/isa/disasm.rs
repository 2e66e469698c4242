//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for per-tick tracing, the command-line driver, and test diagnostics.
//! Registers are printed by index (`x0`-`x31`).
//!
//! # Usage
//!
//! ```
//! use riscy_core::isa::disasm::disassemble;
//! let text = disassemble(0x00110113); // ADDI x2, x2, 1
//! assert_eq!(text, "addi x2, x2, 1");
//! ```

use crate::isa::decode::{InstructionClass, LoadFunct, OpImmFunct, RightShiftType, decode};
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3, opcodes};

/// Disassembles a 32-bit RISC-V instruction into a human-readable string.
///
/// Instructions the datapath executes print as assembly, as do SLTI/SLTIU
/// (which it treats as no-ops). Other RV32I major opcodes print their class
/// name; anything else prints as a raw word.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    let d = decode(inst);
    let (rd, rs1, imm) = (d.rd, d.rs1, d.imm);

    match d.class {
        InstructionClass::OpImm(funct) => match funct {
            OpImmFunct::Addi => format!("addi x{rd}, x{rs1}, {imm}"),
            OpImmFunct::Xori => format!("xori x{rd}, x{rs1}, {imm}"),
            OpImmFunct::Ori => format!("ori x{rd}, x{rs1}, {imm}"),
            OpImmFunct::Andi => format!("andi x{rd}, x{rs1}, {imm}"),
            OpImmFunct::Slli => format!("slli x{rd}, x{rs1}, {}", inst.shamt()),
            OpImmFunct::ShiftRight(RightShiftType::Logical) => {
                format!("srli x{rd}, x{rs1}, {}", inst.shamt())
            }
            OpImmFunct::ShiftRight(RightShiftType::Arithmetic) => {
                format!("srai x{rd}, x{rs1}, {}", inst.shamt())
            }
            OpImmFunct::Unsupported(funct3::SLTI) => format!("slti x{rd}, x{rs1}, {imm}"),
            OpImmFunct::Unsupported(funct3::SLTIU) => format!("sltiu x{rd}, x{rs1}, {imm}"),
            OpImmFunct::ShiftRight(RightShiftType::Unknown(_)) | OpImmFunct::Unsupported(_) => {
                format!("op-imm? {inst:#010x}")
            }
        },
        InstructionClass::Jal => format!("jal x{rd}, {imm}"),
        InstructionClass::Load(funct) => {
            let mn = match funct {
                LoadFunct::Lb => "lb",
                LoadFunct::Lh => "lh",
                LoadFunct::Lw => "lw",
                LoadFunct::Lbu => "lbu",
                LoadFunct::Lhu => "lhu",
                LoadFunct::Unsupported(_) => "l??",
            };
            format!("{mn} x{rd}, {imm}(x{rs1})")
        }
        InstructionClass::Unknown => {
            let class = match inst.opcode() {
                opcodes::OP_MISC_MEM => "misc-mem",
                opcodes::OP_AUIPC => "auipc",
                opcodes::OP_STORE => "store",
                opcodes::OP_REG => "op",
                opcodes::OP_LUI => "lui",
                opcodes::OP_BRANCH => "branch",
                opcodes::OP_JALR => "jalr",
                opcodes::OP_SYSTEM => "system",
                _ => ".word",
            };
            format!("{class} {inst:#010x}")
        }
    }
}
