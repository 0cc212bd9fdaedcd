//! Symbolic-byte memory model.
//!
//! Simulated memory maps the 64-bit address window `[MEM_BOT, MEM_TOP)` onto
//! a fixed-size backing store of symbolic bytes. It provides:
//! 1. **Address mapping:** Every access is validated against the window;
//!    out-of-range addresses fault and are never clamped or wrapped.
//! 2. **Tagged cells:** Each slot is an instruction head, a continuation
//!    filler, or a raw data byte; every access site matches on the tag.
//! 3. **Quad access:** 64-bit reads/writes gather/scatter eight consecutive
//!    slots little-endian.
//! 4. **Head-checked fetch:** Instruction fetch additionally requires the
//!    addressed slot to be an instruction head.

use crate::common::constants::{MEM_BOT, MEM_SIZE, MEM_TOP, QUAD_BYTES};
use crate::common::error::VmError;
use crate::isa::instruction::Ins;

use super::codec;

/// One memory cell.
///
/// Every instruction occupies exactly four consecutive slots: one `Ins`
/// head carrying the decoded instruction, then three `Frag` fillers with no
/// independently meaningful value. Everything else is a raw `Byte`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SByte {
    /// Instruction head: the first slot of an instruction.
    Ins(Ins),
    /// Continuation filler: slots 2–4 of an instruction.
    Frag,
    /// A raw 8-bit data byte.
    Byte(u8),
}

/// The simulated memory: a fixed `MEM_SIZE` backing store of [`SByte`]s.
#[derive(Clone, Debug)]
pub struct Memory {
    cells: Vec<SByte>,
}

impl Memory {
    /// Creates a memory with every slot zeroed (`Byte(0)`).
    pub fn new() -> Self {
        Self {
            cells: vec![SByte::Byte(0); MEM_SIZE],
        }
    }

    /// Maps a simulated address to a backing-store index.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::AddressFault`] when the address lies outside
    /// `[MEM_BOT, MEM_TOP)`. The fault is raised, never clamped or wrapped.
    #[inline]
    pub fn map(addr: i64) -> Result<usize, VmError> {
        if (MEM_BOT..MEM_TOP).contains(&addr) {
            Ok((addr - MEM_BOT) as usize)
        } else {
            Err(VmError::AddressFault { addr })
        }
    }

    /// Reads the 64-bit value stored little-endian in the eight slots
    /// starting at `addr`.
    ///
    /// Instruction heads and fillers read as zero bytes, so data reads are
    /// total once the address range is valid.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::AddressFault`] if any of the eight slots falls
    /// outside the window.
    pub fn read_quad(&self, addr: i64) -> Result<i64, VmError> {
        let base = Self::map(addr)?;
        let _ = Self::map(addr + QUAD_BYTES as i64 - 1)?;
        Ok(codec::quad_of_sbytes(&self.cells[base..base + QUAD_BYTES]))
    }

    /// Overwrites the eight slots starting at `addr` with the little-endian
    /// bytes of `val`.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::AddressFault`] if any of the eight slots falls
    /// outside the window.
    pub fn write_quad(&mut self, addr: i64, val: i64) -> Result<(), VmError> {
        let base = Self::map(addr)?;
        let _ = Self::map(addr + QUAD_BYTES as i64 - 1)?;
        self.cells[base..base + QUAD_BYTES].clone_from_slice(&codec::sbytes_of_quad(val));
        Ok(())
    }

    /// Reads the single raw byte at `addr` (non-data slots read as zero).
    ///
    /// # Errors
    ///
    /// Returns [`VmError::AddressFault`] when `addr` is out of range.
    pub fn read_byte(&self, addr: i64) -> Result<u8, VmError> {
        let idx = Self::map(addr)?;
        Ok(match &self.cells[idx] {
            SByte::Byte(b) => *b,
            SByte::Ins(_) | SByte::Frag => 0,
        })
    }

    /// Overwrites the single slot at `addr` with a raw data byte.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::AddressFault`] when `addr` is out of range.
    pub fn write_byte(&mut self, addr: i64, byte: u8) -> Result<(), VmError> {
        let idx = Self::map(addr)?;
        self.cells[idx] = SByte::Byte(byte);
        Ok(())
    }

    /// Fetches the instruction whose head occupies the slot at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::AddressFault`] when `addr` is out of range, or
    /// [`VmError::FetchFault`] when the slot holds a continuation filler or
    /// a raw data byte instead of an instruction head.
    pub fn fetch(&self, addr: i64) -> Result<&Ins, VmError> {
        let idx = Self::map(addr)?;
        match &self.cells[idx] {
            SByte::Ins(ins) => Ok(ins),
            SByte::Frag | SByte::Byte(_) => Err(VmError::FetchFault { addr }),
        }
    }

    /// Copies a segment of symbolic bytes into memory starting at `addr`.
    ///
    /// Used by the loader to materialize executable-image segments.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::AddressFault`] when the segment does not fit the
    /// window.
    pub fn write_slice(&mut self, addr: i64, seg: &[SByte]) -> Result<(), VmError> {
        if seg.is_empty() {
            return Ok(());
        }
        let base = Self::map(addr)?;
        let _ = Self::map(addr + seg.len() as i64 - 1)?;
        self.cells[base..base + seg.len()].clone_from_slice(seg);
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
