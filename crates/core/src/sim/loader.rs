//! Image loader and initial machine setup.
//!
//! This module materializes an executable image into a runnable machine. It
//! performs:
//! 1. **Segment placement:** Text bytes at the image's text base, data bytes
//!    at the data base, over a fresh zero-initialized memory.
//! 2. **Halt trampoline:** The halt sentinel's byte pattern is written at
//!    the last quad of the address window, so a top-level `retq` (or a jump
//!    through that word) lands on the sentinel and halts the machine.
//! 3. **Register setup:** `rip` = entry address, `rsp` = last 8-byte-aligned
//!    word of the window, all other registers zero, all flags cleared.

use crate::asm::image::ExecImage;
use crate::common::constants::{HALT_ADDR, MEM_TOP, QUAD_BYTES};
use crate::core::machine::Machine;
use crate::isa::reg::Reg;

/// Materializes an executable image into an initial machine state.
///
/// Each call produces an independent machine; nothing is shared across
/// loads.
///
/// # Panics
///
/// Panics if a segment does not fit the address window. Assembled images
/// always fit; an image that does not is a fatal configuration error, not a
/// recoverable condition.
pub fn load(image: &ExecImage) -> Machine {
    let mut machine = Machine::new();

    machine
        .mem
        .write_slice(image.text_pos, &image.text_seg)
        .unwrap_or_else(|e| panic!("text segment does not fit the address window: {e}"));
    machine
        .mem
        .write_slice(image.data_pos, &image.data_seg)
        .unwrap_or_else(|e| panic!("data segment does not fit the address window: {e}"));

    // Halt trampoline at the last quad of the window.
    let last_quad = MEM_TOP - QUAD_BYTES as i64;
    machine
        .mem
        .write_quad(last_quad, HALT_ADDR)
        .unwrap_or_else(|e| panic!("halt trampoline write failed: {e}"));

    machine.regs.write(Reg::Rip, image.entry);
    machine.regs.write(Reg::Rsp, last_quad);
    machine
}
