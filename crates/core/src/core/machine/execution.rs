//! Instruction semantics.
//!
//! This module implements operand evaluation and the per-opcode execution
//! rules, including the exact flag-setting behavior:
//! 1. **Arithmetic** (`incq decq negq addq subq imulq`): checked 64-bit
//!    signed arithmetic; `OF` = overflow report, `SF`/`ZF` from the result.
//! 2. **Logic** (`notq andq orq xorq`): `OF` cleared, `SF`/`ZF` from the
//!    result.
//! 3. **Shifts** (`shlq sarq shrq`): flags untouched for amount 0; `OF`
//!    updated only for amount 1, with op-specific rules.
//! 4. **Control flow and data movement:** no flag effects.

use crate::common::error::VmError;
use crate::common::constants::QUAD_BYTES;
use crate::isa::instruction::{Imm, Ins, Opcode, Operand};
use crate::isa::reg::Reg;

use super::Machine;

/// Shift amounts are masked to 6 bits, as 64-bit x86 masks its count.
const SHAMT_MASK: u32 = 0x3f;

/// The three shift variants, for the shared shift path.
#[derive(Clone, Copy)]
enum Shift {
    Left,
    ArithRight,
    LogicRight,
}

impl Machine {
    /// Executes a single decoded instruction against the machine state.
    ///
    /// # Errors
    ///
    /// * [`VmError::DecodeFault`] for any opcode/operand-shape combination
    ///   outside the ISA.
    /// * [`VmError::MalformedOperand`] when an operation is applied to an
    ///   operand kind it does not support (writing an immediate, a
    ///   non-indirect `leaq` source, a shift amount that is neither an
    ///   immediate nor `rcx`).
    /// * [`VmError::UnresolvedLabel`] when an operand still carries a label.
    /// * [`VmError::AddressFault`] for out-of-window memory operands.
    pub fn execute(&mut self, ins: &Ins) -> Result<(), VmError> {
        self.stats.instructions_retired += 1;
        let opc = ins.opcode;
        match (opc, ins.operands.as_slice()) {
            (Opcode::Movq, [src, dst]) => {
                let v = self.read_src(opc, src)?;
                self.write_dst(opc, dst, v)
            }
            (Opcode::Pushq, [src]) => {
                let v = self.read_src(opc, src)?;
                self.push(v)
            }
            (Opcode::Popq, [dst]) => {
                let v = self.pop()?;
                self.write_dst(opc, dst, v)
            }
            (Opcode::Leaq, [src, dst]) => {
                // The computed address is stored, never dereferenced.
                let addr = self.addr_of(opc, src)?;
                self.write_dst(opc, dst, addr)
            }

            (Opcode::Incq, [dst]) => self.unary_arith(opc, dst, |v| v.overflowing_add(1)),
            (Opcode::Decq, [dst]) => self.unary_arith(opc, dst, |v| v.overflowing_sub(1)),
            (Opcode::Negq, [dst]) => self.unary_arith(opc, dst, i64::overflowing_neg),
            (Opcode::Addq, [src, dst]) => self.binary_arith(opc, src, dst, i64::overflowing_add),
            (Opcode::Subq, [src, dst]) => self.binary_arith(opc, src, dst, i64::overflowing_sub),
            (Opcode::Imulq, [src, dst]) => self.binary_arith(opc, src, dst, i64::overflowing_mul),

            (Opcode::Notq, [dst]) => {
                let v = self.read_src(opc, dst)?;
                let r = !v;
                self.flags.set_logic(r);
                self.write_dst(opc, dst, r)
            }
            (Opcode::Andq, [src, dst]) => self.binary_logic(opc, src, dst, |d, s| d & s),
            (Opcode::Orq, [src, dst]) => self.binary_logic(opc, src, dst, |d, s| d | s),
            (Opcode::Xorq, [src, dst]) => self.binary_logic(opc, src, dst, |d, s| d ^ s),

            (Opcode::Shlq, [amt, dst]) => self.shift(opc, Shift::Left, amt, dst),
            (Opcode::Sarq, [amt, dst]) => self.shift(opc, Shift::ArithRight, amt, dst),
            (Opcode::Shrq, [amt, dst]) => self.shift(opc, Shift::LogicRight, amt, dst),

            (Opcode::Cmpq, [src1, src2]) => {
                let s = self.read_src(opc, src1)?;
                let d = self.read_src(opc, src2)?;
                let (r, overflow) = d.overflowing_sub(s);
                self.flags.set_arith(r, overflow);
                Ok(())
            }
            (Opcode::Set(cond), [dst]) => {
                let bit = i64::from(self.flags.satisfies(cond));
                match dst {
                    Operand::Reg(r) => {
                        let v = self.regs.read(*r);
                        self.regs.write(*r, (v & !0xff) | bit);
                        Ok(())
                    }
                    ind if ind.is_indirect() => {
                        let addr = self.addr_of(opc, ind)?;
                        self.stats.mem_writes += 1;
                        self.mem.write_byte(addr, bit as u8)
                    }
                    other => Err(malformed(opc, other)),
                }
            }

            (Opcode::Jmp, [src]) => {
                let target = self.read_src(opc, src)?;
                self.regs.write(Reg::Rip, target);
                Ok(())
            }
            (Opcode::J(cond), [src]) => {
                let target = self.read_src(opc, src)?;
                if self.flags.satisfies(cond) {
                    self.regs.write(Reg::Rip, target);
                }
                Ok(())
            }
            (Opcode::Callq, [src]) => {
                let target = self.read_src(opc, src)?;
                let ret = self.regs.read(Reg::Rip);
                self.push(ret)?;
                self.regs.write(Reg::Rip, target);
                Ok(())
            }
            (Opcode::Retq, []) => {
                let ret = self.pop()?;
                self.regs.write(Reg::Rip, ret);
                Ok(())
            }

            _ => Err(VmError::DecodeFault {
                ins: ins.to_string(),
            }),
        }
    }

    /// Evaluates a source operand to its 64-bit value.
    fn read_src(&mut self, opc: Opcode, op: &Operand) -> Result<i64, VmError> {
        match op {
            Operand::Imm(Imm::Lit(q)) => Ok(*q),
            Operand::Imm(Imm::Lbl(l)) => Err(VmError::UnresolvedLabel { label: l.clone() }),
            Operand::Reg(r) => Ok(self.regs.read(*r)),
            _ => {
                let addr = self.addr_of(opc, op)?;
                self.stats.mem_reads += 1;
                self.mem.read_quad(addr)
            }
        }
    }

    /// Writes a value through a destination operand.
    ///
    /// The store target of an indirect destination is the operand's single
    /// computed effective address, the same address a read of the operand
    /// would use; the held value is never treated as a second-level pointer.
    fn write_dst(&mut self, opc: Opcode, op: &Operand, val: i64) -> Result<(), VmError> {
        match op {
            Operand::Reg(r) => {
                self.regs.write(*r, val);
                Ok(())
            }
            ind if ind.is_indirect() => {
                let addr = self.addr_of(opc, ind)?;
                self.stats.mem_writes += 1;
                self.mem.write_quad(addr, val)
            }
            imm => Err(malformed(opc, imm)),
        }
    }

    /// Computes the effective address of an indirect operand.
    fn addr_of(&self, opc: Opcode, op: &Operand) -> Result<i64, VmError> {
        match op {
            Operand::Ind1(Imm::Lit(q)) => Ok(*q),
            Operand::Ind2(r) => Ok(self.regs.read(*r)),
            Operand::Ind3(Imm::Lit(q), r) => Ok(self.regs.read(*r).wrapping_add(*q)),
            Operand::Ind1(Imm::Lbl(l)) | Operand::Ind3(Imm::Lbl(l), _) => {
                Err(VmError::UnresolvedLabel { label: l.clone() })
            }
            direct => Err(malformed(opc, direct)),
        }
    }

    /// Shared unary checked-arithmetic path.
    fn unary_arith(
        &mut self,
        opc: Opcode,
        dst: &Operand,
        f: impl Fn(i64) -> (i64, bool),
    ) -> Result<(), VmError> {
        let v = self.read_src(opc, dst)?;
        let (r, overflow) = f(v);
        self.flags.set_arith(r, overflow);
        self.write_dst(opc, dst, r)
    }

    /// Shared binary checked-arithmetic path: `dst = f(dst, src)`.
    fn binary_arith(
        &mut self,
        opc: Opcode,
        src: &Operand,
        dst: &Operand,
        f: impl Fn(i64, i64) -> (i64, bool),
    ) -> Result<(), VmError> {
        let s = self.read_src(opc, src)?;
        let d = self.read_src(opc, dst)?;
        let (r, overflow) = f(d, s);
        self.flags.set_arith(r, overflow);
        self.write_dst(opc, dst, r)
    }

    /// Shared binary logical path: `dst = f(dst, src)`, `OF` cleared.
    fn binary_logic(
        &mut self,
        opc: Opcode,
        src: &Operand,
        dst: &Operand,
        f: impl Fn(i64, i64) -> i64,
    ) -> Result<(), VmError> {
        let s = self.read_src(opc, src)?;
        let d = self.read_src(opc, dst)?;
        let r = f(d, s);
        self.flags.set_logic(r);
        self.write_dst(opc, dst, r)
    }

    /// Shared shift path.
    ///
    /// The shift amount must be an immediate literal or the `rcx` register.
    /// Flags are untouched when the masked amount is zero; `SF`/`ZF` follow
    /// the result otherwise. `OF` is updated only when the amount is exactly
    /// one: arithmetic-right clears it, left sets it when the two most
    /// significant pre-shift bits differ, logical-right sets it to the
    /// pre-shift sign bit. For larger amounts `OF` keeps its prior value.
    fn shift(
        &mut self,
        opc: Opcode,
        kind: Shift,
        amt_op: &Operand,
        dst: &Operand,
    ) -> Result<(), VmError> {
        let amt = match amt_op {
            Operand::Imm(Imm::Lit(q)) => *q,
            Operand::Imm(Imm::Lbl(l)) => {
                return Err(VmError::UnresolvedLabel { label: l.clone() });
            }
            Operand::Reg(Reg::Rcx) => self.regs.read(Reg::Rcx),
            other => return Err(malformed(opc, other)),
        };
        let amt = (amt as u32) & SHAMT_MASK;

        let v = self.read_src(opc, dst)?;
        let r = match kind {
            Shift::Left => v.wrapping_shl(amt),
            Shift::ArithRight => v.wrapping_shr(amt),
            Shift::LogicRight => ((v as u64).wrapping_shr(amt)) as i64,
        };

        if amt != 0 {
            if amt == 1 {
                self.flags.fo = match kind {
                    Shift::ArithRight => false,
                    Shift::Left => ((v >> 63) & 1) != ((v >> 62) & 1),
                    Shift::LogicRight => v < 0,
                };
            }
            self.flags.fs = r < 0;
            self.flags.fz = r == 0;
        }
        self.write_dst(opc, dst, r)
    }

    /// Pushes a quad: decrements `rsp` by 8, stores at the new `rsp`.
    fn push(&mut self, val: i64) -> Result<(), VmError> {
        let rsp = self.regs.read(Reg::Rsp).wrapping_sub(QUAD_BYTES as i64);
        self.regs.write(Reg::Rsp, rsp);
        self.stats.stack_pushes += 1;
        self.stats.mem_writes += 1;
        self.mem.write_quad(rsp, val)
    }

    /// Pops a quad: loads at the current `rsp`, then increments `rsp` by 8.
    fn pop(&mut self) -> Result<i64, VmError> {
        let rsp = self.regs.read(Reg::Rsp);
        let val = self.mem.read_quad(rsp)?;
        self.regs.write(Reg::Rsp, rsp.wrapping_add(QUAD_BYTES as i64));
        self.stats.stack_pops += 1;
        self.stats.mem_reads += 1;
        Ok(val)
    }
}

/// Builds the malformed-operand fault for an opcode/operand pair.
fn malformed(opc: Opcode, op: &Operand) -> VmError {
    VmError::MalformedOperand {
        opcode: opc.mnemonic(),
        operand: op.to_string(),
    }
}
