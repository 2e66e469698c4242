//! Configuration system for the datapath model.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation. It provides:
//! 1. **Defaults:** Baseline machine constants (reset vector, debug register, memory depths).
//! 2. **Structures:** Hierarchical config for general and memory settings.
//! 3. **Validation:** Rejection of configurations no datapath instance could realise.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.

use serde::Deserialize;

use crate::common::constants::{
    DEFAULT_DEBUG_REG, DEFAULT_DMEM_WORDS, DEFAULT_IMEM_WORDS, NUM_REGISTERS,
};
use crate::common::error::{Result, SimError};

/// Default configuration constants for the model.
mod defaults {
    /// Program-counter value after reset.
    pub const RESET_PC: u32 = 0;
}

/// Root configuration structure containing all simulation settings.
///
/// # Examples
///
/// ```
/// use riscy_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.general.debug_reg, 2);
/// assert_eq!(config.memory.imem_words, 1024);
/// ```
///
/// Deserializing from JSON; absent fields keep their defaults:
///
/// ```
/// use riscy_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "debug_reg": 5 },
///     "memory": { "dmem_words": 64 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.debug_reg, 5);
/// assert_eq!(config.general.reset_pc, 0);
/// assert_eq!(config.memory.dmem_words, 64);
/// assert_eq!(config.memory.imem_words, 1024);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Instruction and data memory geometry
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a configuration from a JSON document.
    ///
    /// # Arguments
    ///
    /// * `json` - The JSON text to parse.
    ///
    /// # Returns
    ///
    /// The validated configuration, or `SimError::ConfigParse` /
    /// `SimError::InvalidConfig` when the document is malformed or impossible.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration describes a realisable machine.
    ///
    /// The diagnostic register must lie inside the register file, and both
    /// memories must hold at least one word.
    pub fn validate(&self) -> Result<()> {
        if self.general.debug_reg >= NUM_REGISTERS {
            return Err(SimError::InvalidConfig(format!(
                "debug_reg {} is outside x0-x{}",
                self.general.debug_reg,
                NUM_REGISTERS - 1
            )));
        }
        if self.memory.imem_words == 0 {
            return Err(SimError::InvalidConfig(
                "imem_words must be at least 1".to_string(),
            ));
        }
        if self.memory.dmem_words == 0 {
            return Err(SimError::InvalidConfig(
                "dmem_words must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// General simulation settings and options.
///
/// Contains the per-tick tracing switch, the reset vector and the register
/// exposed on the diagnostic read port.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `tracing` event with the disassembled instruction every tick
    #[serde(default)]
    pub trace_instructions: bool,

    /// Program-counter value after reset
    #[serde(default = "GeneralConfig::default_reset_pc")]
    pub reset_pc: u32,

    /// Register observed by the diagnostic read port
    #[serde(default = "GeneralConfig::default_debug_reg")]
    pub debug_reg: usize,
}

impl GeneralConfig {
    /// Returns the default reset vector.
    const fn default_reset_pc() -> u32 {
        defaults::RESET_PC
    }

    /// Returns the default diagnostic register (`x2`).
    const fn default_debug_reg() -> usize {
        DEFAULT_DEBUG_REG
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            reset_pc: defaults::RESET_PC,
            debug_reg: DEFAULT_DEBUG_REG,
        }
    }
}

/// Instruction and data memory geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Instruction memory depth in 32-bit words
    #[serde(default = "MemoryConfig::default_imem_words")]
    pub imem_words: usize,

    /// Data memory depth in 32-bit words
    #[serde(default = "MemoryConfig::default_dmem_words")]
    pub dmem_words: usize,
}

impl MemoryConfig {
    /// Returns the default instruction memory depth.
    const fn default_imem_words() -> usize {
        DEFAULT_IMEM_WORDS
    }

    /// Returns the default data memory depth.
    const fn default_dmem_words() -> usize {
        DEFAULT_DMEM_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            imem_words: DEFAULT_IMEM_WORDS,
            dmem_words: DEFAULT_DMEM_WORDS,
        }
    }
}
