//! Machine state and execution engine.
//!
//! This module contains everything that makes up one simulated machine:
//! the register file, the condition flags, the symbolic-byte memory and its
//! codec, and the fetch-decode-execute engine that steps the whole thing.

/// Conversions between values and their symbolic-byte representation.
pub mod codec;

/// Condition flags and condition-code evaluation.
pub mod flags;

/// Machine container and the fetch-decode-execute engine.
pub mod machine;

/// Symbolic-byte memory model.
pub mod mem;

/// Architectural register file.
pub mod regfile;

pub use flags::Flags;
pub use machine::Machine;
pub use mem::{Memory, SByte};
pub use regfile::RegFile;
