//! Architectural register file.
//!
//! Maintains the 17 sixty-four-bit register slots (16 general-purpose
//! registers plus `rip`), addressed through the fixed [`Reg`] index mapping.
//! Unlike hardware register files there is no hardwired-zero slot; every
//! register is freely readable and writable.

use crate::common::constants::NUM_REGS;
use crate::isa::reg::Reg;

/// The register file: an ordered fixed-size bank of `i64` slots.
///
/// Owned exclusively by one [`crate::core::machine::Machine`]; nothing else
/// ever holds a mutable handle to it.
#[derive(Clone, Debug)]
pub struct RegFile {
    regs: [i64; NUM_REGS],
}

impl RegFile {
    /// Creates a register file with every slot initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register value.
    #[inline(always)]
    pub fn read(&self, reg: Reg) -> i64 {
        self.regs[reg.index()]
    }

    /// Writes a register value.
    #[inline(always)]
    pub fn write(&mut self, reg: Reg, val: i64) {
        self.regs[reg.index()] = val;
    }

    /// Dumps the contents of all registers to stderr.
    ///
    /// Useful for debugging a machine mid-run.
    pub fn dump(&self) {
        const ORDER: [Reg; NUM_REGS] = [
            Reg::Rax,
            Reg::Rbx,
            Reg::Rcx,
            Reg::Rdx,
            Reg::Rsi,
            Reg::Rdi,
            Reg::Rbp,
            Reg::Rsp,
            Reg::R08,
            Reg::R09,
            Reg::R10,
            Reg::R11,
            Reg::R12,
            Reg::R13,
            Reg::R14,
            Reg::R15,
            Reg::Rip,
        ];
        for reg in ORDER {
            eprintln!("{:>4} = {:#018x}", reg.name(), self.read(reg));
        }
    }
}

impl Default for RegFile {
    fn default() -> Self {
        Self::new()
    }
}
