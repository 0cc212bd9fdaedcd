//! Simulator run loop.
//!
//! Owns one machine and steps it until the instruction pointer reaches the
//! halt sentinel, returning the accumulator as the program result. The
//! engine itself has no timeout; a program that never reaches the sentinel
//! runs forever unless the caller configures a step limit.

use crate::common::constants::HALT_ADDR;
use crate::common::error::VmError;
use crate::config::SimConfig;
use crate::core::machine::Machine;
use crate::isa::reg::Reg;
use crate::stats::SimStats;

/// Top-level simulator: one machine plus run parameters.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// The machine being driven; owned exclusively by this simulator.
    pub machine: Machine,
    config: SimConfig,
}

impl Simulator {
    /// Creates a simulator over a loaded machine with default run
    /// parameters.
    pub fn new(machine: Machine) -> Self {
        Self::with_config(machine, SimConfig::default())
    }

    /// Creates a simulator with explicit run parameters.
    pub fn with_config(machine: Machine, config: SimConfig) -> Self {
        Self { machine, config }
    }

    /// Runs the machine to the halt sentinel and returns the accumulator.
    ///
    /// # Errors
    ///
    /// Propagates any [`VmError`] raised by a step, or
    /// [`VmError::StepLimitExceeded`] when a configured step limit runs out
    /// before the machine halts.
    pub fn run(&mut self) -> Result<i64, VmError> {
        let mut steps: u64 = 0;
        while self.machine.regs.read(Reg::Rip) != HALT_ADDR {
            if let Some(limit) = self.config.max_steps {
                if steps == limit {
                    return Err(VmError::StepLimitExceeded { limit });
                }
            }
            self.machine.step()?;
            steps += 1;
            if self.config.trace {
                self.machine.regs.dump();
            }
        }
        Ok(self.machine.regs.read(Reg::Rax))
    }

    /// Returns the execution statistics collected so far.
    pub fn stats(&self) -> &SimStats {
        &self.machine.stats
    }
}
