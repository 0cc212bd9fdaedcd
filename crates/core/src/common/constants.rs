//! Fixed architectural constants.
//!
//! These values define the x64lite machine and are not configurable at
//! runtime: the simulated address window, the halt sentinel, the instruction
//! slot size, and the register count. Run-time parameters (tracing, step
//! limits) live in [`crate::config`] instead.

/// Lowest valid simulated address (inclusive).
pub const MEM_BOT: i64 = 0x0040_0000;

/// Size of the simulated address window in bytes (64 KiB).
pub const MEM_SIZE: usize = 0x1_0000;

/// One past the highest valid simulated address (exclusive).
pub const MEM_TOP: i64 = MEM_BOT + MEM_SIZE as i64;

/// Number of memory slots occupied by one instruction.
///
/// Every instruction occupies exactly four slots (one head, three
/// continuation fillers) regardless of what a real encoding would need.
/// This keeps instruction fetch O(1) and address arithmetic trivial while
/// code and data still share one flat address space.
pub const INS_SLOTS: i64 = 4;

/// Number of architectural registers (16 general-purpose plus `rip`).
pub const NUM_REGS: usize = 17;

/// The halt sentinel address.
///
/// Lies outside the address window; execution stops when `rip` reaches it.
/// The loader also plants this value at the last quad of the window so a
/// top-level `retq` pops it and halts the machine.
pub const HALT_ADDR: i64 = 0xfdead;

/// Width of a machine word in bytes.
pub const QUAD_BYTES: usize = 8;

/// Label conventionally designating the program entry point.
pub const ENTRY_LABEL: &str = "main";
