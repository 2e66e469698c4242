//! Common utilities and types used throughout the datapath model.
//!
//! This module provides building blocks shared by every component. It includes:
//! 1. **Constants:** Instruction stride, register geometry, and memory defaults.
//! 2. **Error Handling:** The error type for loader, configuration and simulator surfaces.

/// Common constants used throughout the model.
pub mod constants;

/// Error types for the outer (non-datapath) surfaces.
pub mod error;

pub use constants::{INSTRUCTION_BYTES, NUM_REGISTERS};
pub use error::{Result, SimError};
