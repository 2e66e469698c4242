//! Word-addressed memory collaborator trait.
//!
//! This module defines the `WordMemory` trait through which the datapath
//! reaches instruction and data memory. It provides:
//! 1. **Read:** A combinational word read keyed by word address.
//! 2. **Write:** An enabled word write, for store support and image loading.
//!
//! Addresses are word addresses (`byte_address >> 2`); mapping them onto a
//! finite backing store is the implementor's business.

/// Word-addressed memory attached to the datapath.
pub trait WordMemory {
    /// Reads the 32-bit word at `word_address`.
    fn read_word(&self, word_address: u32) -> u32;

    /// Writes `value` at `word_address` when `enable` is set.
    fn write_word(&mut self, word_address: u32, value: u32, enable: bool);
}
