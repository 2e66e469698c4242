//! System-on-Chip (SoC) Components.
//!
//! This module organizes the memories the datapath is attached to: the
//! word-memory trait, the block memory implementation, and the `System`
//! pairing instruction and data memory.

/// Block memory implementation.
pub mod memory;

/// Word-memory trait definition.
pub mod traits;

use std::fmt;

use crate::common::error::Result;
use crate::config::MemoryConfig;
use crate::soc::memory::Memory;
use crate::soc::traits::WordMemory;

/// Instruction and data memory attached to the CPU.
pub struct System {
    /// Instruction memory, read once per tick at the fetch address.
    pub imem: Box<dyn WordMemory>,
    /// Data memory, read by loads.
    pub dmem: Box<dyn WordMemory>,
}

impl System {
    /// Attaches arbitrary memory collaborators.
    pub fn new(imem: Box<dyn WordMemory>, dmem: Box<dyn WordMemory>) -> Self {
        Self { imem, dmem }
    }

    /// Builds block memories sized by `config`, preloaded with the given images.
    ///
    /// # Arguments
    ///
    /// * `config`  - Memory geometry.
    /// * `program` - Instruction image placed at word 0 of instruction memory.
    /// * `data`    - Data image placed at word 0 of data memory.
    ///
    /// # Returns
    ///
    /// `SimError::ImageTooLarge` if either image does not fit.
    pub fn with_images(config: &MemoryConfig, program: &[u32], data: &[u32]) -> Result<Self> {
        let imem = Memory::with_image(config.imem_words, program)?;
        let dmem = Memory::with_image(config.dmem_words, data)?;
        Ok(Self::new(Box::new(imem), Box::new(dmem)))
    }
}

impl fmt::Debug for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("System").finish_non_exhaustive()
    }
}
