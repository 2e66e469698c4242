//! Datapath control signals and operation types.
//!
//! This module defines the signals the decoder drives into the datapath. It performs:
//! 1. **Operation Classification:** The eight ALU operations and their 3-bit encoding.
//! 2. **Operand Selection:** The source of ALU operand B (register or PC).
//! 3. **Write-back Selection:** Which computed value reaches the register file.
//! 4. **Memory Control:** Load width and sign-extension.

/// ALU operation, with the 3-bit encoding the control bundle carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AluOp {
    /// Integer addition (wrapping).
    #[default]
    Add = 0,

    /// Integer subtraction (wrapping).
    Sub = 1,

    /// Bitwise AND.
    And = 2,

    /// Bitwise OR.
    Or = 3,

    /// Bitwise XOR.
    Xor = 4,

    /// Shift left logical.
    Sll = 5,

    /// Shift right logical.
    Srl = 6,

    /// Shift right arithmetic.
    Sra = 7,
}

impl AluOp {
    /// Every operation, in encoding order.
    pub const ALL: [Self; 8] = [
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Sll,
        Self::Srl,
        Self::Sra,
    ];

    /// Resolves a 3-bit operation encoding.
    ///
    /// # Returns
    ///
    /// `None` for any value outside `0..=7`.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Add),
            1 => Some(Self::Sub),
            2 => Some(Self::And),
            3 => Some(Self::Or),
            4 => Some(Self::Xor),
            5 => Some(Self::Sll),
            6 => Some(Self::Srl),
            7 => Some(Self::Sra),
            _ => None,
        }
    }

    /// Returns the 3-bit encoding of this operation.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Memory access width for loads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// 8-bit byte access.
    Byte,

    /// 16-bit half-word access.
    Half,

    /// 32-bit word access.
    #[default]
    Word,
}

/// Source for ALU operand B.
///
/// Operand A is always the decoder's immediate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Use the `rs1` register value.
    #[default]
    Reg1,

    /// Use the current program counter.
    Pc,
}

/// Source of the value written back to `rd`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WbSrc {
    /// ALU result.
    #[default]
    Alu,

    /// Incremented program counter (the link value).
    PcInc,

    /// Extracted load value.
    Load,
}

/// Control bundle for one instruction.
///
/// Produced afresh each tick by the instruction decoder; it carries no state.
/// The default value is the no-op bundle: no register write and no jump.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Load the program counter with the ALU result.
    pub pc_load: bool,
    /// ALU operation to perform.
    pub alu: AluOp,
    /// ALU operand A: the immediate (or shift amount) for this instruction.
    pub alu_imm: u32,
    /// Source selection for ALU operand B.
    pub b_src: OpBSrc,
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Destination register index.
    pub rd: usize,
    /// First read selector.
    pub rs1: usize,
    /// Second read selector.
    pub rs2: usize,
    /// Write-back source selection.
    pub wb_src: WbSrc,
    /// Instruction reads data memory.
    pub mem_read: bool,
    /// Width of the load.
    pub width: MemWidth,
    /// Load should be sign-extended.
    pub signed_load: bool,
}

impl ControlSignals {
    /// Returns true if the bundle has no architectural effect.
    pub const fn is_nop(&self) -> bool {
        !self.reg_write && !self.pc_load
    }
}
