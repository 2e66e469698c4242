//! Word-addressed block memory.
//!
//! This module implements the memory backing instruction and data memory. It provides:
//! 1. **Storage:** A fixed number of 32-bit words, zero-initialised.
//! 2. **Addressing:** Word addresses wrap modulo the depth, as truncated
//!    address lines would.
//! 3. **Loading:** Bulk placement of a program or data image at word 0.

use crate::common::error::{Result, SimError};
use crate::soc::traits::WordMemory;

/// Fixed-depth word memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    words: Vec<u32>,
}

impl Memory {
    /// Creates a zeroed memory.
    ///
    /// # Arguments
    ///
    /// * `depth` - Number of 32-bit words; a depth of 0 is raised to 1.
    pub fn new(depth: usize) -> Self {
        Self {
            words: vec![0; depth.max(1)],
        }
    }

    /// Creates a memory of `depth` words holding `image` from word 0.
    ///
    /// # Returns
    ///
    /// `SimError::ImageTooLarge` if the image does not fit.
    pub fn with_image(depth: usize, image: &[u32]) -> Result<Self> {
        let mut mem = Self::new(depth);
        mem.load(image)?;
        Ok(mem)
    }

    /// Copies `image` into memory starting at word 0.
    ///
    /// # Returns
    ///
    /// `SimError::ImageTooLarge` if the image holds more words than the memory.
    pub fn load(&mut self, image: &[u32]) -> Result<()> {
        if image.len() > self.words.len() {
            return Err(SimError::ImageTooLarge {
                words: image.len(),
                capacity: self.words.len(),
            });
        }
        self.words[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Number of words in the memory.
    pub fn depth(&self) -> usize {
        self.words.len()
    }

    /// Returns the memory contents.
    pub fn as_slice(&self) -> &[u32] {
        &self.words
    }

    fn index(&self, word_address: u32) -> usize {
        word_address as usize % self.words.len()
    }
}

impl WordMemory for Memory {
    fn read_word(&self, word_address: u32) -> u32 {
        self.words[self.index(word_address)]
    }

    fn write_word(&mut self, word_address: u32, value: u32, enable: bool) {
        if enable {
            let idx = self.index(word_address);
            self.words[idx] = value;
        }
    }
}
