//! Assembly and execution fault definitions.
//!
//! This module defines the two error domains of the simulator:
//! 1. **Assembly faults:** Symbol-table violations detected while turning a
//!    program into an executable image. Reported before anything executes.
//! 2. **Execution faults:** Address-space, decode, and operand-shape
//!    violations raised by a single machine step.
//!
//! All faults are fatal to the operation that raised them; nothing in the
//! core retries or silently recovers. Each variant carries enough context
//! (address, label, rendered instruction) to diagnose the failure.

use thiserror::Error;

/// Faults raised while assembling a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AsmError {
    /// The same label is defined by two program elements.
    #[error("redefined symbol: {0}")]
    RedefinedSymbol(String),

    /// An operand or data quad references a label with no definition,
    /// or the entry label is missing from the program.
    #[error("undefined symbol: {0}")]
    UndefinedSymbol(String),

    /// The codec was asked to serialize a value that still holds a label.
    ///
    /// Resolution runs before emission, so this is an internal invariant
    /// violation rather than a user-facing condition.
    #[error("cannot serialize unresolved label: {0}")]
    UnresolvedLabel(String),
}

/// Faults raised while executing a machine step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    /// A memory access fell outside the `[MEM_BOT, MEM_TOP)` window.
    #[error("address out of range: {addr:#x}")]
    AddressFault {
        /// The faulting address.
        addr: i64,
    },

    /// An instruction fetch landed on a continuation filler or a data byte
    /// instead of an instruction head.
    #[error("fetch through non-instruction slot at {addr:#x}")]
    FetchFault {
        /// The address of the non-head slot.
        addr: i64,
    },

    /// The opcode/operand-shape combination is not part of the ISA.
    #[error("unimplemented instruction: {ins}")]
    DecodeFault {
        /// Rendering of the offending instruction.
        ins: String,
    },

    /// An operation was applied to an operand kind it does not support,
    /// e.g. writing to an immediate or shifting by a non-`rcx` register.
    #[error("malformed operand for {opcode}: {operand}")]
    MalformedOperand {
        /// Mnemonic of the instruction.
        opcode: String,
        /// Rendering of the offending operand.
        operand: String,
    },

    /// An operand still carried a symbolic label at execution time.
    ///
    /// The assembler resolves every label before emission, so hitting this
    /// means the program bypassed assembly.
    #[error("unresolved label in operand: {label}")]
    UnresolvedLabel {
        /// The unresolved label name.
        label: String,
    },

    /// The configured step limit was exceeded before the machine halted.
    #[error("step limit of {limit} instructions exceeded")]
    StepLimitExceeded {
        /// The configured limit.
        limit: u64,
    },
}
