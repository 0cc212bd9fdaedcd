//! Labeled program elements.
//!
//! A program is an ordered sequence of named elements, each either a code
//! block or a data block. Element order is meaningful: the assembler lays
//! out all code blocks first, in program order, followed by all data blocks.

use std::fmt;

use super::instruction::{Imm, Ins};

/// One datum in a data block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Data {
    /// A text literal, stored with a trailing NUL terminator
    /// (`len + 1` bytes).
    Asciz(String),
    /// A 64-bit literal or label reference (8 bytes).
    Quad(Imm),
}

impl Data {
    /// Returns the number of memory slots this datum occupies.
    pub fn size(&self) -> usize {
        match self {
            Data::Asciz(s) => s.len() + 1,
            Data::Quad(_) => crate::common::constants::QUAD_BYTES,
        }
    }
}

/// The body of a program element: code or data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Asm {
    /// An ordered sequence of instructions.
    Text(Vec<Ins>),
    /// An ordered sequence of data directives.
    Data(Vec<Data>),
}

/// A named program element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Elem {
    /// The label this element defines.
    pub label: String,
    /// Visibility flag carried from the source representation; only the
    /// entry symbol is required to be global.
    pub global: bool,
    /// The element body.
    pub asm: Asm,
}

impl Elem {
    /// Creates a code element.
    pub fn text(label: impl Into<String>, global: bool, ins: Vec<Ins>) -> Self {
        Self {
            label: label.into(),
            global,
            asm: Asm::Text(ins),
        }
    }

    /// Creates a data element.
    pub fn data(label: impl Into<String>, global: bool, data: Vec<Data>) -> Self {
        Self {
            label: label.into(),
            global,
            asm: Asm::Data(data),
        }
    }
}

/// A whole program: the ordered element list.
pub type Prog = Vec<Elem>;

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Data::Asciz(s) => write!(f, ".asciz {s:?}"),
            Data::Quad(i) => write!(f, ".quad {i}"),
        }
    }
}
