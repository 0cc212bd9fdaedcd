//! Executable image definition.

use crate::core::mem::SByte;

/// A relocated executable image.
///
/// Produced once by [`crate::asm::assembler::assemble`] and consumed once by
/// [`crate::sim::loader::load`]; immutable in between. Persistence and
/// packaging are external concerns; this is purely an in-memory structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecImage {
    /// Absolute address of the entry label.
    pub entry: i64,
    /// Base address of the text segment.
    pub text_pos: i64,
    /// Base address of the data segment.
    pub data_pos: i64,
    /// Fully resolved text-segment contents.
    pub text_seg: Vec<SByte>,
    /// Fully resolved data-segment contents.
    pub data_seg: Vec<SByte>,
}
