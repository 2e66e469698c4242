//! RISC-V Base Integer (I) Opcodes.
//!
//! Defines the major opcodes (bits 6-0) for the base integer instruction set.
//! Only `OP_LOAD`, `OP_IMM` and `OP_JAL` are executed by the datapath; the
//! others are recognised for disassembly and decode to a no-op.

/// Load instructions (LB, LH, LW, LBU, LHU).
pub const OP_LOAD: u32 = 0b0000011;

/// Memory ordering instructions (FENCE).
pub const OP_MISC_MEM: u32 = 0b0001111;

/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.).
pub const OP_IMM: u32 = 0b0010011;

/// Add Upper Immediate to PC (AUIPC).
pub const OP_AUIPC: u32 = 0b0010111;

/// Store instructions (SB, SH, SW).
pub const OP_STORE: u32 = 0b0100011;

/// Register-Register arithmetic (ADD, SUB, SLL, etc.).
pub const OP_REG: u32 = 0b0110011;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0b0110111;

/// Conditional Branch instructions (BEQ, BNE, etc.).
pub const OP_BRANCH: u32 = 0b1100011;

/// Jump and Link Register (JALR).
pub const OP_JALR: u32 = 0b1100111;

/// Jump and Link (JAL). The only RV32I opcode using the J-type format.
pub const OP_JAL: u32 = 0b1101111;

/// System instructions (ECALL, EBREAK, CSR access).
pub const OP_SYSTEM: u32 = 0b1110011;
