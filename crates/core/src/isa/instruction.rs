//! Instruction, operand, and condition-code definitions.
//!
//! An [`Ins`] is an opcode plus an ordered operand list; there is no binary
//! encoding at this level. The `Display` impls render AT&T-style assembly
//! and are used for fault diagnostics and trace output.

use std::fmt;

use super::reg::Reg;

/// An immediate value: a literal quad or a not-yet-resolved label.
///
/// Labels only survive until assembly; resolution replaces every `Lbl` with
/// the `Lit` of its address before anything is serialized or executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Imm {
    /// A 64-bit literal.
    Lit(i64),
    /// A symbolic label reference.
    Lbl(String),
}

/// An instruction operand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    /// Immediate literal or label.
    Imm(Imm),
    /// Register contents.
    Reg(Reg),
    /// Indirect: memory at a literal address, `imm`.
    Ind1(Imm),
    /// Indirect: memory at the address held in a register, `(reg)`.
    Ind2(Reg),
    /// Indirect: memory at register plus literal offset, `imm(reg)`.
    Ind3(Imm, Reg),
}

impl Operand {
    /// Returns true if this operand addresses memory.
    pub fn is_indirect(&self) -> bool {
        matches!(self, Operand::Ind1(_) | Operand::Ind2(_) | Operand::Ind3(..))
    }
}

/// A condition code, interpreted against the `OF`/`SF`/`ZF` flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond {
    /// Equal: `ZF`.
    Eq,
    /// Not equal: `¬ZF`.
    Neq,
    /// Signed greater: `¬ZF ∧ (SF = OF)`.
    Gt,
    /// Signed greater-or-equal: `SF = OF`.
    Ge,
    /// Signed less: `SF ≠ OF`.
    Lt,
    /// Signed less-or-equal: `ZF ∨ (SF ≠ OF)`.
    Le,
}

impl Cond {
    /// Returns the mnemonic suffix for this condition (`e`, `ne`, `g`, …).
    pub fn suffix(self) -> &'static str {
        match self {
            Cond::Eq => "e",
            Cond::Neq => "ne",
            Cond::Gt => "g",
            Cond::Ge => "ge",
            Cond::Lt => "l",
            Cond::Le => "le",
        }
    }
}

/// An instruction opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opcode {
    /// Copy source to destination. No flags.
    Movq,
    /// Decrement `rsp` by 8, store source at the new `rsp`.
    Pushq,
    /// Load the quad at `rsp` into the destination, increment `rsp` by 8.
    Popq,
    /// Store the *computed address* of an indirect operand. No flags.
    Leaq,
    /// Increment by one (checked).
    Incq,
    /// Decrement by one (checked).
    Decq,
    /// Two's-complement negation (checked).
    Negq,
    /// Bitwise complement.
    Notq,
    /// Checked addition.
    Addq,
    /// Checked subtraction.
    Subq,
    /// Checked signed multiplication.
    Imulq,
    /// Bitwise exclusive or.
    Xorq,
    /// Bitwise or.
    Orq,
    /// Bitwise and.
    Andq,
    /// Left shift.
    Shlq,
    /// Arithmetic right shift.
    Sarq,
    /// Logical right shift.
    Shrq,
    /// Unconditional jump.
    Jmp,
    /// Conditional jump.
    J(Cond),
    /// Compare destination minus source; sets flags only.
    Cmpq,
    /// Set the low byte of the destination to 0/1 per condition. No flags.
    Set(Cond),
    /// Push the return address and jump.
    Callq,
    /// Pop the return address into `rip`.
    Retq,
}

impl Opcode {
    /// Returns the AT&T mnemonic for this opcode.
    pub fn mnemonic(self) -> String {
        match self {
            Opcode::Movq => "movq".into(),
            Opcode::Pushq => "pushq".into(),
            Opcode::Popq => "popq".into(),
            Opcode::Leaq => "leaq".into(),
            Opcode::Incq => "incq".into(),
            Opcode::Decq => "decq".into(),
            Opcode::Negq => "negq".into(),
            Opcode::Notq => "notq".into(),
            Opcode::Addq => "addq".into(),
            Opcode::Subq => "subq".into(),
            Opcode::Imulq => "imulq".into(),
            Opcode::Xorq => "xorq".into(),
            Opcode::Orq => "orq".into(),
            Opcode::Andq => "andq".into(),
            Opcode::Shlq => "shlq".into(),
            Opcode::Sarq => "sarq".into(),
            Opcode::Shrq => "shrq".into(),
            Opcode::Jmp => "jmp".into(),
            Opcode::J(c) => format!("j{}", c.suffix()),
            Opcode::Cmpq => "cmpq".into(),
            Opcode::Set(c) => format!("set{}", c.suffix()),
            Opcode::Callq => "callq".into(),
            Opcode::Retq => "retq".into(),
        }
    }
}

/// A single instruction: an opcode and its ordered operand list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ins {
    /// The operation to perform.
    pub opcode: Opcode,
    /// The operand list; its required shape depends on the opcode.
    pub operands: Vec<Operand>,
}

impl Ins {
    /// Creates an instruction from an opcode and operand list.
    pub fn new(opcode: Opcode, operands: Vec<Operand>) -> Self {
        Self { opcode, operands }
    }
}

impl fmt::Display for Imm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Imm::Lit(q) => write!(f, "{q}"),
            Imm::Lbl(l) => write!(f, "{l}"),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Imm(i) => write!(f, "${i}"),
            Operand::Reg(r) => write!(f, "{r}"),
            Operand::Ind1(i) => write!(f, "{i}"),
            Operand::Ind2(r) => write!(f, "({r})"),
            Operand::Ind3(i, r) => write!(f, "{i}({r})"),
        }
    }
}

impl fmt::Display for Ins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode.mnemonic())?;
        for (n, op) in self.operands.iter().enumerate() {
            if n == 0 {
                write!(f, " {op}")?;
            } else {
                write!(f, ", {op}")?;
            }
        }
        Ok(())
    }
}
