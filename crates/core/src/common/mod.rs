//! Common types and constants used throughout the x64lite simulator.
//!
//! This module provides fundamental building blocks shared across all
//! components. It includes:
//! 1. **Constants:** The address window, halt sentinel, instruction slot
//!    size, and register count.
//! 2. **Error Handling:** The assembly-time and execution-time fault
//!    taxonomies.

/// Fixed architectural constants.
pub mod constants;

/// Assembly and execution error types.
pub mod error;

pub use constants::{HALT_ADDR, INS_SLOTS, MEM_BOT, MEM_SIZE, MEM_TOP};
pub use error::{AsmError, VmError};
