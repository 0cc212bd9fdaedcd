//! Condition-flag and condition-code tests.
//!
//! Pins the full condition table, including the regression case for the
//! signed `lt` interpretation: `lt ⇔ SF ≠ OF`, with no zero-flag gate.

use x64lite_core::core::flags::Flags;
use x64lite_core::isa::instruction::Cond;

fn flags(fo: bool, fs: bool, fz: bool) -> Flags {
    Flags { fo, fs, fz }
}

#[test]
fn eq_follows_zero_flag() {
    assert!(flags(false, false, true).satisfies(Cond::Eq));
    assert!(!flags(true, true, false).satisfies(Cond::Eq));
}

#[test]
fn neq_is_the_complement_of_eq() {
    assert!(flags(false, false, false).satisfies(Cond::Neq));
    assert!(!flags(false, false, true).satisfies(Cond::Neq));
}

#[test]
fn gt_needs_nonzero_and_sign_agreement() {
    assert!(flags(false, false, false).satisfies(Cond::Gt));
    assert!(flags(true, true, false).satisfies(Cond::Gt));
    assert!(!flags(false, false, true).satisfies(Cond::Gt));
    assert!(!flags(true, false, false).satisfies(Cond::Gt));
}

#[test]
fn ge_is_sign_agreement_alone() {
    assert!(flags(false, false, true).satisfies(Cond::Ge));
    assert!(flags(true, true, false).satisfies(Cond::Ge));
    assert!(!flags(true, false, false).satisfies(Cond::Ge));
    assert!(!flags(false, true, false).satisfies(Cond::Ge));
}

#[test]
fn lt_is_sign_disagreement() {
    assert!(flags(true, false, false).satisfies(Cond::Lt));
    assert!(flags(false, true, false).satisfies(Cond::Lt));
    assert!(!flags(false, false, false).satisfies(Cond::Lt));
    assert!(!flags(true, true, false).satisfies(Cond::Lt));
}

// Regression: the zero flag plays no part in `lt`. With SF = OF and ZF set,
// `lt` is false; with SF ≠ OF and ZF set, `lt` is still true.
#[test]
fn lt_ignores_zero_flag() {
    assert!(!flags(true, true, true).satisfies(Cond::Lt));
    assert!(!flags(false, false, true).satisfies(Cond::Lt));
    assert!(flags(true, false, true).satisfies(Cond::Lt));
    assert!(flags(false, true, true).satisfies(Cond::Lt));
}

#[test]
fn le_is_zero_or_sign_disagreement() {
    assert!(flags(false, false, true).satisfies(Cond::Le));
    assert!(flags(true, false, false).satisfies(Cond::Le));
    assert!(!flags(false, false, false).satisfies(Cond::Le));
    assert!(!flags(true, true, false).satisfies(Cond::Le));
}

#[test]
fn arithmetic_flag_setting() {
    let mut f = Flags::new();
    f.set_arith(0, false);
    assert_eq!(f, flags(false, false, true));
    f.set_arith(-5, true);
    assert_eq!(f, flags(true, true, false));
}

#[test]
fn logical_flag_setting_clears_overflow() {
    let mut f = flags(true, false, false);
    f.set_logic(-1);
    assert_eq!(f, flags(false, true, false));
}
