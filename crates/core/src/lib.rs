//! x64lite simulator library.
//!
//! This crate implements a simulator, assembler, and loader for x64lite, a
//! tiny 64-bit subset of x86-64. It provides the following:
//! 1. **Machine state:** A 17-slot register file (`rax`…`r15` plus `rip`),
//!    the `OF`/`SF`/`ZF` condition flags, and a flat symbolic-byte memory.
//! 2. **ISA:** The abstract instruction representation (opcodes, operands,
//!    condition codes, labeled program elements).
//! 3. **Execution:** A fetch-decode-execute engine with exact x86-style flag
//!    semantics for arithmetic, logic, shifts, and compares.
//! 4. **Assembly:** A two-pass assembler that lays out text/data segments,
//!    resolves labels, and emits a relocated executable image.
//! 5. **Simulation:** A loader that materializes an image into an initial
//!    machine and a run loop that steps it to the halt sentinel.
//!
//! Programs are built as in-memory [`isa::program::Prog`] values; there is no
//! textual assembly parser or file I/O in this crate.

/// Common constants and error types (address window, fault taxonomy).
pub mod common;
/// Simulation configuration (run parameters; deserialize from JSON or use defaults).
pub mod config;
/// Machine state and execution engine (registers, flags, memory, codec, step loop).
pub mod core;
/// Instruction set (registers, opcodes, operands, program representation).
pub mod isa;
/// Two-pass assembler and executable image.
pub mod asm;
/// Loader and simulator run loop.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Run configuration; use `SimConfig::default()` or deserialize from JSON.
pub use crate::config::SimConfig;
/// Main machine type; owns registers, flags, memory, and stats.
pub use crate::core::machine::Machine;
/// Assembles a program into a relocated executable image.
pub use crate::asm::assembler::assemble;
/// Materializes an executable image into an initial machine state.
pub use crate::sim::loader::load;
/// Top-level simulator; steps a machine until the halt sentinel.
pub use crate::sim::simulator::Simulator;
