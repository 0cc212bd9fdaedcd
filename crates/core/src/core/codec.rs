//! Symbolic-byte codec.
//!
//! Pure, stateless conversions between values and their representation in
//! simulated memory:
//! 1. **Quads:** 64-bit integers scatter/gather to eight raw bytes,
//!    little-endian, reconstructed bit-for-bit.
//! 2. **Strings:** Text becomes its bytes plus an explicit NUL terminator
//!    (encoded length = text length + 1).
//! 3. **Instructions:** One head slot carrying the decoded instruction plus
//!    three continuation fillers.
//!
//! By the time this codec runs, assembly resolution must already have
//! replaced every label with a concrete address; serializing a value that
//! still holds a label is an [`AsmError::UnresolvedLabel`] fault.

use crate::common::constants::QUAD_BYTES;
use crate::common::error::AsmError;
use crate::isa::instruction::{Imm, Ins, Operand};
use crate::isa::program::Data;

use super::mem::SByte;

/// Encodes a 64-bit value as eight little-endian raw bytes.
pub fn sbytes_of_quad(val: i64) -> [SByte; QUAD_BYTES] {
    val.to_le_bytes().map(SByte::Byte)
}

/// Reconstructs a 64-bit value from eight consecutive memory slots.
///
/// Instruction heads and fillers contribute zero bytes; raw bytes
/// contribute their value. The result is bit-for-bit identical to what
/// [`sbytes_of_quad`] encoded.
///
/// # Panics
///
/// Panics if `cells` holds fewer than eight slots; callers validate the
/// range before slicing.
pub fn quad_of_sbytes(cells: &[SByte]) -> i64 {
    let mut bytes = [0u8; QUAD_BYTES];
    for (out, cell) in bytes.iter_mut().zip(cells) {
        if let SByte::Byte(b) = cell {
            *out = *b;
        }
    }
    i64::from_le_bytes(bytes)
}

/// Encodes a string as its bytes followed by a NUL terminator.
pub fn sbytes_of_string(text: &str) -> Vec<SByte> {
    text.bytes().chain(std::iter::once(0)).map(SByte::Byte).collect()
}

/// Encodes an instruction as one head slot plus three fillers.
///
/// # Errors
///
/// Returns [`AsmError::UnresolvedLabel`] if any operand still carries a
/// symbolic label.
pub fn sbytes_of_ins(ins: &Ins) -> Result<[SByte; 4], AsmError> {
    for op in &ins.operands {
        if let Some(label) = operand_label(op) {
            return Err(AsmError::UnresolvedLabel(label.to_string()));
        }
    }
    Ok([
        SByte::Ins(ins.clone()),
        SByte::Frag,
        SByte::Frag,
        SByte::Frag,
    ])
}

/// Encodes one data directive.
///
/// # Errors
///
/// Returns [`AsmError::UnresolvedLabel`] for a quad that still carries a
/// label.
pub fn sbytes_of_data(data: &Data) -> Result<Vec<SByte>, AsmError> {
    match data {
        Data::Asciz(s) => Ok(sbytes_of_string(s)),
        Data::Quad(Imm::Lit(q)) => Ok(sbytes_of_quad(*q).to_vec()),
        Data::Quad(Imm::Lbl(l)) => Err(AsmError::UnresolvedLabel(l.clone())),
    }
}

/// Returns the label held by an operand, if any.
fn operand_label(op: &Operand) -> Option<&str> {
    match op {
        Operand::Imm(Imm::Lbl(l)) | Operand::Ind1(Imm::Lbl(l)) | Operand::Ind3(Imm::Lbl(l), _) => {
            Some(l)
        }
        _ => None,
    }
}
