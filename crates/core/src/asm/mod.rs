//! Two-pass assembler.
//!
//! Transforms a labeled program into a relocated executable image: pass one
//! sizes every block and binds each label to its absolute address, pass two
//! substitutes labels into operands and serializes both segments.

/// Layout, resolution, and emission passes.
pub mod assembler;

/// The executable image produced by assembly.
pub mod image;

pub use assembler::assemble;
pub use image::ExecImage;
