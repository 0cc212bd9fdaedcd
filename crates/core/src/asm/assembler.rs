//! Assembly passes.
//!
//! Assembly is a single-shot, non-incremental transform in two passes:
//! 1. **Layout:** Size every block (instructions cost four slots each, a
//!    terminated string costs `len + 1` bytes, a quad costs eight) and bind
//!    every label to an absolute address. All code blocks are laid out
//!    first, contiguous from the bottom of the address window in program
//!    order; all data blocks follow, contiguous immediately after.
//! 2. **Resolution and emission:** Substitute every label reference in every
//!    operand and data quad with its resolved address, then serialize the
//!    blocks through the symbolic-byte codec into the two segments.
//!
//! Both passes are pure over the input program; the symbol table is built
//! by a fold and consumed once, never reused across assemblies.

use std::collections::HashMap;

use tracing::debug;

use crate::common::constants::{ENTRY_LABEL, INS_SLOTS, MEM_BOT};
use crate::common::error::AsmError;
use crate::core::codec;
use crate::isa::instruction::{Imm, Ins, Operand};
use crate::isa::program::{Asm, Data, Elem, Prog};

use super::image::ExecImage;

/// Label-to-address bindings produced by the layout pass.
type SymbolTable = HashMap<String, i64>;

/// Assembles a program into a relocated executable image.
///
/// # Errors
///
/// * [`AsmError::RedefinedSymbol`] when two elements define the same label.
/// * [`AsmError::UndefinedSymbol`] when any operand or data quad references
///   a label with no definition, or when the program has no
///   `main`-labeled element.
/// * [`AsmError::UnresolvedLabel`] only on an internal invariant violation
///   (the codec seeing a label that resolution should have substituted).
pub fn assemble(prog: &Prog) -> Result<ExecImage, AsmError> {
    let text_total: i64 = prog
        .iter()
        .filter_map(|elem| match &elem.asm {
            Asm::Text(_) => Some(block_size(&elem.asm)),
            Asm::Data(_) => None,
        })
        .sum();
    let text_pos = MEM_BOT;
    let data_pos = MEM_BOT + text_total;

    let symbols = layout(prog, text_pos, data_pos)?;
    let entry = lookup(&symbols, ENTRY_LABEL)?;
    debug!(
        entry = format_args!("{entry:#x}"),
        text_pos = format_args!("{text_pos:#x}"),
        data_pos = format_args!("{data_pos:#x}"),
        "layout complete"
    );

    let mut text_seg = Vec::new();
    let mut data_seg = Vec::new();
    for elem in prog {
        match &elem.asm {
            Asm::Text(instrs) => {
                for ins in instrs {
                    let resolved = resolve_ins(ins, &symbols)?;
                    text_seg.extend(codec::sbytes_of_ins(&resolved)?);
                }
            }
            Asm::Data(data) => {
                for datum in data {
                    let resolved = resolve_data(datum, &symbols)?;
                    data_seg.extend(codec::sbytes_of_data(&resolved)?);
                }
            }
        }
    }

    Ok(ExecImage {
        entry,
        text_pos,
        data_pos,
        text_seg,
        data_seg,
    })
}

/// Returns a block's size in memory slots.
fn block_size(asm: &Asm) -> i64 {
    match asm {
        Asm::Text(instrs) => instrs.len() as i64 * INS_SLOTS,
        Asm::Data(data) => data.iter().map(|d| d.size() as i64).sum(),
    }
}

/// Pass one: fold the program into a symbol table.
///
/// Walks the elements in program order, assigning each label the running
/// base of its region and advancing that base by the block's size.
fn layout(prog: &Prog, text_pos: i64, data_pos: i64) -> Result<SymbolTable, AsmError> {
    let folded = prog.iter().try_fold(
        (SymbolTable::new(), text_pos, data_pos),
        |(mut symbols, text_base, data_base), elem: &Elem| {
            if symbols.contains_key(&elem.label) {
                return Err(AsmError::RedefinedSymbol(elem.label.clone()));
            }
            let size = block_size(&elem.asm);
            let (addr, next) = match &elem.asm {
                Asm::Text(_) => (text_base, (text_base + size, data_base)),
                Asm::Data(_) => (data_base, (text_base, data_base + size)),
            };
            debug!(label = %elem.label, addr = format_args!("{addr:#x}"), size, "bind symbol");
            let _ = symbols.insert(elem.label.clone(), addr);
            Ok((symbols, next.0, next.1))
        },
    )?;
    Ok(folded.0)
}

/// Looks a label up in the symbol table.
fn lookup(symbols: &SymbolTable, label: &str) -> Result<i64, AsmError> {
    symbols
        .get(label)
        .copied()
        .ok_or_else(|| AsmError::UndefinedSymbol(label.to_string()))
}

/// Substitutes a label immediate with its resolved address.
fn resolve_imm(imm: &Imm, symbols: &SymbolTable) -> Result<Imm, AsmError> {
    match imm {
        Imm::Lit(q) => Ok(Imm::Lit(*q)),
        Imm::Lbl(l) => lookup(symbols, l).map(Imm::Lit),
    }
}

/// Resolves every label reference inside an operand.
fn resolve_operand(op: &Operand, symbols: &SymbolTable) -> Result<Operand, AsmError> {
    Ok(match op {
        Operand::Imm(imm) => Operand::Imm(resolve_imm(imm, symbols)?),
        Operand::Reg(r) => Operand::Reg(*r),
        Operand::Ind1(imm) => Operand::Ind1(resolve_imm(imm, symbols)?),
        Operand::Ind2(r) => Operand::Ind2(*r),
        Operand::Ind3(imm, r) => Operand::Ind3(resolve_imm(imm, symbols)?, *r),
    })
}

/// Resolves every label reference inside an instruction.
fn resolve_ins(ins: &Ins, symbols: &SymbolTable) -> Result<Ins, AsmError> {
    let operands = ins
        .operands
        .iter()
        .map(|op| resolve_operand(op, symbols))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Ins::new(ins.opcode, operands))
}

/// Resolves a label reference inside a data directive.
fn resolve_data(data: &Data, symbols: &SymbolTable) -> Result<Data, AsmError> {
    match data {
        Data::Asciz(s) => Ok(Data::Asciz(s.clone())),
        Data::Quad(imm) => Ok(Data::Quad(resolve_imm(imm, symbols)?)),
    }
}
