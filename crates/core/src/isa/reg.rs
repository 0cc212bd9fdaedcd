//! Architectural register names.
//!
//! x64lite has 16 general-purpose 64-bit registers plus the instruction
//! pointer. Each register has a fixed index into the register file; the
//! mapping is part of the architecture, not an implementation detail.

use std::fmt;

/// An architectural register.
///
/// The general-purpose registers occupy indices 0–15; `rip` is index 16.
/// `rsp` is the stack pointer by convention (`pushq`/`popq`/`callq`/`retq`
/// address memory through it) and `rcx` is the only register a shift amount
/// may come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg {
    /// Accumulator; holds the program result when the machine halts.
    Rax,
    /// General purpose.
    Rbx,
    /// Counter; the only register operand accepted as a shift amount.
    Rcx,
    /// General purpose.
    Rdx,
    /// General purpose.
    Rsi,
    /// General purpose.
    Rdi,
    /// Frame pointer by convention.
    Rbp,
    /// Stack pointer.
    Rsp,
    /// General purpose.
    R08,
    /// General purpose.
    R09,
    /// General purpose.
    R10,
    /// General purpose.
    R11,
    /// General purpose.
    R12,
    /// General purpose.
    R13,
    /// General purpose.
    R14,
    /// General purpose.
    R15,
    /// Instruction pointer.
    Rip,
}

impl Reg {
    /// Returns the fixed register-file index for this register.
    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Reg::Rax => 0,
            Reg::Rbx => 1,
            Reg::Rcx => 2,
            Reg::Rdx => 3,
            Reg::Rsi => 4,
            Reg::Rdi => 5,
            Reg::Rbp => 6,
            Reg::Rsp => 7,
            Reg::R08 => 8,
            Reg::R09 => 9,
            Reg::R10 => 10,
            Reg::R11 => 11,
            Reg::R12 => 12,
            Reg::R13 => 13,
            Reg::R14 => 14,
            Reg::R15 => 15,
            Reg::Rip => 16,
        }
    }

    /// Returns the assembly name of this register, without the `%` sigil.
    pub fn name(self) -> &'static str {
        match self {
            Reg::Rax => "rax",
            Reg::Rbx => "rbx",
            Reg::Rcx => "rcx",
            Reg::Rdx => "rdx",
            Reg::Rsi => "rsi",
            Reg::Rdi => "rdi",
            Reg::Rbp => "rbp",
            Reg::Rsp => "rsp",
            Reg::R08 => "r8",
            Reg::R09 => "r9",
            Reg::R10 => "r10",
            Reg::R11 => "r11",
            Reg::R12 => "r12",
            Reg::R13 => "r13",
            Reg::R14 => "r14",
            Reg::R15 => "r15",
            Reg::Rip => "rip",
        }
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.name())
    }
}
