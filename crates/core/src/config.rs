//! Configuration for simulator runs.
//!
//! This module defines the run-parameter structure consumed by the
//! simulator. It covers only how a run is driven (tracing, step bounds);
//! the architectural constants — address window, halt sentinel, instruction
//! slot size, register count — are fixed in [`crate::common::constants`]
//! and deliberately not configurable.
//!
//! Configuration is supplied as JSON or built with `SimConfig::default()`.

use serde::Deserialize;

/// Default run parameters.
mod defaults {
    /// Instruction tracing is off unless requested.
    pub const TRACE: bool = false;

    /// Step bound applied when a limit is requested without a count.
    ///
    /// Large enough for any terminating test program while still bounding
    /// an accidental infinite loop in well under a second.
    pub const MAX_STEPS: u64 = 10_000_000;
}

/// Run parameters for one simulation.
///
/// # Example
///
/// ```
/// use x64lite_core::SimConfig;
///
/// let config: SimConfig = serde_json::from_str(r#"{ "max_steps": 1000 }"#).unwrap();
/// assert_eq!(config.max_steps, Some(1000));
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct SimConfig {
    /// Dump the register file to stderr after every step.
    #[serde(default)]
    pub trace: bool,

    /// Abort the run with a step-limit fault after this many instructions.
    ///
    /// `None` runs without a bound: an infinite loop in the simulated
    /// program then runs forever, per the execution model.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

impl SimConfig {
    /// Returns a bounded configuration using the default step limit.
    pub fn bounded() -> Self {
        Self {
            trace: defaults::TRACE,
            max_steps: Some(defaults::MAX_STEPS),
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trace: defaults::TRACE,
            max_steps: None,
        }
    }
}
