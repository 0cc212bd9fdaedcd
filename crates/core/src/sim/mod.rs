//! Loading and simulation.
//!
//! Provides the loader that materializes an executable image into an
//! initial machine state and the run loop that steps the machine until the
//! instruction pointer reaches the halt sentinel.

/// Image loading and initial machine state.
pub mod loader;

/// The simulator run loop.
pub mod simulator;

pub use loader::load;
pub use simulator::Simulator;
