//! Symbolic-byte codec tests.
//!
//! Covers the §-style universal properties: every 64-bit value round-trips
//! through its byte encoding bit-for-bit, and every string encodes to its
//! bytes plus exactly one NUL terminator.

use proptest::prelude::*;

use x64lite_core::common::error::AsmError;
use x64lite_core::core::codec::{
    quad_of_sbytes, sbytes_of_data, sbytes_of_ins, sbytes_of_quad, sbytes_of_string,
};
use x64lite_core::core::mem::SByte;
use x64lite_core::isa::instruction::{Imm, Ins, Opcode, Operand};
use x64lite_core::isa::program::Data;
use x64lite_core::isa::reg::Reg;

proptest! {
    #[test]
    fn quad_round_trips(v in any::<i64>()) {
        let cells = sbytes_of_quad(v);
        prop_assert_eq!(quad_of_sbytes(&cells), v);
    }

    #[test]
    fn string_encoding_is_len_plus_one(s in "[a-zA-Z0-9 ]{0,64}") {
        let cells = sbytes_of_string(&s);
        prop_assert_eq!(cells.len(), s.len() + 1);
        prop_assert_eq!(cells.last(), Some(&SByte::Byte(0)));
    }
}

#[test]
fn quad_encoding_is_little_endian() {
    let cells = sbytes_of_quad(0x0102_0304_0506_0708);
    assert_eq!(cells[0], SByte::Byte(0x08));
    assert_eq!(cells[7], SByte::Byte(0x01));
}

#[test]
fn string_bytes_precede_terminator() {
    let cells = sbytes_of_string("hi");
    assert_eq!(
        cells,
        vec![SByte::Byte(b'h'), SByte::Byte(b'i'), SByte::Byte(0)]
    );
}

#[test]
fn negative_quad_round_trips_exactly() {
    // No sign-extension surprises: -1 is eight 0xff bytes.
    let cells = sbytes_of_quad(-1);
    assert!(cells.iter().all(|c| *c == SByte::Byte(0xff)));
    assert_eq!(quad_of_sbytes(&cells), -1);
}

#[test]
fn non_data_slots_read_as_zero() {
    let mut cells = sbytes_of_quad(-1).to_vec();
    cells[3] = SByte::Frag;
    let expected = i64::from_le_bytes([0xff, 0xff, 0xff, 0, 0xff, 0xff, 0xff, 0xff]);
    assert_eq!(quad_of_sbytes(&cells), expected);
}

#[test]
fn instruction_encodes_to_head_and_three_fillers() {
    let ins = Ins::new(
        Opcode::Movq,
        vec![Operand::Imm(Imm::Lit(3)), Operand::Reg(Reg::Rax)],
    );
    let cells = sbytes_of_ins(&ins).unwrap();
    assert!(matches!(cells[0], SByte::Ins(_)));
    assert_eq!(cells[1], SByte::Frag);
    assert_eq!(cells[2], SByte::Frag);
    assert_eq!(cells[3], SByte::Frag);
}

#[test]
fn instruction_with_label_is_a_codec_fault() {
    let ins = Ins::new(
        Opcode::Jmp,
        vec![Operand::Imm(Imm::Lbl("loop".to_string()))],
    );
    assert_eq!(
        sbytes_of_ins(&ins),
        Err(AsmError::UnresolvedLabel("loop".to_string()))
    );
}

#[test]
fn indirect_label_operand_is_a_codec_fault() {
    let ins = Ins::new(
        Opcode::Movq,
        vec![
            Operand::Ind3(Imm::Lbl("table".to_string()), Reg::Rbx),
            Operand::Reg(Reg::Rax),
        ],
    );
    assert_eq!(
        sbytes_of_ins(&ins),
        Err(AsmError::UnresolvedLabel("table".to_string()))
    );
}

#[test]
fn data_quad_literal_costs_eight_bytes() {
    let cells = sbytes_of_data(&Data::Quad(Imm::Lit(7))).unwrap();
    assert_eq!(cells.len(), 8);
}

#[test]
fn data_quad_label_is_a_codec_fault() {
    assert_eq!(
        sbytes_of_data(&Data::Quad(Imm::Lbl("x".to_string()))),
        Err(AsmError::UnresolvedLabel("x".to_string()))
    );
}
