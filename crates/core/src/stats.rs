//! Execution statistics collection and reporting.
//!
//! Tracks coarse counters for one machine's run: retired instructions,
//! memory traffic, and stack operations. Updated by the execution engine
//! and reported through the simulator.

use std::fmt;

/// Execution statistics for one machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,
    /// Number of 64-bit memory reads performed by operands and pops.
    pub mem_reads: u64,
    /// Number of memory writes performed by operands, pushes, and `set<cc>`.
    pub mem_writes: u64,
    /// Number of `pushq`/`callq` stack pushes.
    pub stack_pushes: u64,
    /// Number of `popq`/`retq` stack pops.
    pub stack_pops: u64,
}

impl SimStats {
    /// Creates a zeroed statistics record.
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "instructions retired: {}", self.instructions_retired)?;
        writeln!(f, "memory reads:         {}", self.mem_reads)?;
        writeln!(f, "memory writes:        {}", self.mem_writes)?;
        writeln!(f, "stack pushes:         {}", self.stack_pushes)?;
        write!(f, "stack pops:           {}", self.stack_pops)
    }
}
