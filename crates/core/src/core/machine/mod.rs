//! Machine container and step orchestration.
//!
//! This module defines the central [`Machine`] structure holding the entire
//! simulated processor state. It coordinates the following:
//! 1. **State Ownership:** Exactly one register file, one flags record, and
//!    one memory per machine; nothing shares them.
//! 2. **Stepping:** The atomic fetch → advance → execute transition.
//! 3. **Statistics:** Retired-instruction and memory-traffic counters.

/// Operand evaluation and per-instruction semantics.
pub mod execution;

use tracing::trace;

use crate::common::constants::INS_SLOTS;
use crate::common::error::VmError;
use crate::isa::reg::Reg;
use crate::stats::SimStats;

use super::flags::Flags;
use super::mem::Memory;
use super::regfile::RegFile;

/// One simulated machine: registers, flags, memory, and statistics.
///
/// A machine is produced by [`crate::sim::loader::load`] and owned
/// exclusively by the caller driving the run loop; each load produces an
/// independent allocation, so no state is shared across runs.
#[derive(Clone, Debug)]
pub struct Machine {
    /// The architectural register file (16 GPRs plus `rip`).
    pub regs: RegFile,
    /// The `OF`/`SF`/`ZF` condition flags.
    pub flags: Flags,
    /// The symbolic-byte memory.
    pub mem: Memory,
    /// Execution statistics.
    pub stats: SimStats,
}

impl Machine {
    /// Creates a machine with zeroed registers, cleared flags, and zeroed
    /// memory.
    pub fn new() -> Self {
        Self {
            regs: RegFile::new(),
            flags: Flags::new(),
            mem: Memory::new(),
            stats: SimStats::new(),
        }
    }

    /// Executes one atomic machine step.
    ///
    /// Reads `rip`, fetches the instruction head at that address, advances
    /// `rip` by the fixed instruction slot size, then executes the
    /// instruction (which may overwrite `rip` again for control flow).
    ///
    /// # Errors
    ///
    /// Propagates any [`VmError`] raised by the fetch or by the instruction
    /// semantics; the step has no effect beyond the point of the fault.
    pub fn step(&mut self) -> Result<(), VmError> {
        let rip = self.regs.read(Reg::Rip);
        let ins = self.mem.fetch(rip)?.clone();
        self.regs.write(Reg::Rip, rip.wrapping_add(INS_SLOTS));
        trace!(rip = format_args!("{rip:#x}"), %ins, "step");
        self.execute(&ins)
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
