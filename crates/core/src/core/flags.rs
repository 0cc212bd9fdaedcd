//! Condition flags and condition-code evaluation.
//!
//! x64lite has three independent condition flags: overflow (`OF`), sign
//! (`SF`), and zero (`ZF`). They are mutated only by the instructions
//! documented to set flags, and read back by `set<cc>` and `j<cc>` through
//! [`Flags::satisfies`].

use crate::isa::instruction::Cond;

/// The three condition flags.
///
/// Owned exclusively by one machine; each step may overwrite some, all, or
/// none of the flags depending on the instruction executed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// Overflow flag: the last flag-setting operation overflowed signed
    /// 64-bit arithmetic.
    pub fo: bool,
    /// Sign flag: the last flag-setting result was negative.
    pub fs: bool,
    /// Zero flag: the last flag-setting result was zero.
    pub fz: bool,
}

impl Flags {
    /// Creates a flags record with all flags cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets all three flags from a checked-arithmetic outcome.
    #[inline]
    pub fn set_arith(&mut self, value: i64, overflow: bool) {
        self.fo = overflow;
        self.fs = value < 0;
        self.fz = value == 0;
    }

    /// Sets the flags for a logical result: `OF` cleared, `SF`/`ZF` from
    /// the value.
    #[inline]
    pub fn set_logic(&mut self, value: i64) {
        self.fo = false;
        self.fs = value < 0;
        self.fz = value == 0;
    }

    /// Evaluates a condition code against the current flags.
    ///
    /// The signed comparisons follow the standard x86 interpretation. In
    /// particular `Lt` is `SF ≠ OF` with no zero-flag gate: a subtraction
    /// that overflows reports "less" purely through the sign/overflow
    /// disagreement, whatever `ZF` says.
    pub fn satisfies(&self, cond: Cond) -> bool {
        match cond {
            Cond::Eq => self.fz,
            Cond::Neq => !self.fz,
            Cond::Gt => !self.fz && self.fs == self.fo,
            Cond::Ge => self.fs == self.fo,
            Cond::Lt => self.fs != self.fo,
            Cond::Le => self.fz || self.fs != self.fo,
        }
    }
}
