//! Instruction Set Architecture (ISA) definitions.
//!
//! Contains the abstract representation of x64lite programs: registers,
//! condition codes, opcodes, operands, and labeled program elements. This is
//! the already-parsed input representation the assembler consumes; there is
//! no textual syntax here.
//!
//! # Instruction groups
//!
//! * data movement: `movq`, `pushq`, `popq`, `leaq`
//! * arithmetic: `incq`, `decq`, `negq`, `addq`, `subq`, `imulq`
//! * logic: `notq`, `andq`, `orq`, `xorq`
//! * shifts: `shlq`, `sarq`, `shrq`
//! * flags and branches: `cmpq`, `set<cc>`, `jmp`, `j<cc>`, `callq`, `retq`

/// Opcode, operand, condition-code, and instruction definitions.
pub mod instruction;

/// Labeled program elements (text and data blocks).
pub mod program;

/// Architectural register names and index mappings.
pub mod reg;

pub use instruction::{Cond, Imm, Ins, Opcode, Operand};
pub use program::{Asm, Data, Elem, Prog};
pub use reg::Reg;
