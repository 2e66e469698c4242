//! Combinational lines of one tick.
//!
//! `TickLines` captures every value the datapath computes between two clock
//! edges. It is produced purely from pre-tick state by `Cpu::evaluate` and
//! consumed by `Cpu::commit`, so nothing computed in a tick can observe a
//! write made in the same tick.

use crate::core::datapath::signals::ControlSignals;

/// All combinational values for one tick, grouped by the stage that drives them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickLines {
    // Fetch
    /// Address of the fetched instruction.
    pub pc: u32,
    /// Fetch address plus 4 (the link value).
    pub pc_inc: u32,
    /// Fetched instruction word.
    pub inst: u32,

    // Decode
    /// Control bundle for the fetched instruction.
    pub ctrl: ControlSignals,
    /// Value on read port 1.
    pub rs1_val: u32,
    /// Value on read port 2.
    pub rs2_val: u32,

    // Execute
    /// ALU operand A.
    pub alu_a: u32,
    /// ALU operand B.
    pub alu_b: u32,
    /// ALU result; the effective address for loads and the target for jumps.
    pub alu_result: u32,

    // Memory
    /// Word address presented to data memory.
    pub mem_addr: u32,
    /// Raw word returned by data memory (0 when no load is issued).
    pub mem_word: u32,
    /// Extracted, extended load value.
    pub load_value: u32,

    // Writeback
    /// Value on the register-file write port.
    pub wb_value: u32,
}
