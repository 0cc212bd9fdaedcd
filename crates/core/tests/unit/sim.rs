//! Loader and simulator tests.
//!
//! Checks the loaded initial state and runs small programs end to end
//! through assemble → load → run.

use x64lite_core::common::constants::{HALT_ADDR, INS_SLOTS, MEM_BOT, MEM_TOP};
use x64lite_core::common::error::VmError;
use x64lite_core::isa::instruction::{Cond, Imm, Opcode, Operand};
use x64lite_core::isa::program::Data;
use x64lite_core::isa::reg::Reg;
use x64lite_core::{SimConfig, Simulator};

use crate::common::{assemble_and_load, data, imm, ins, lbl, main_text, reg, run_prog, text};

#[test]
fn loader_establishes_the_initial_state() {
    let prog = vec![main_text(vec![ins(Opcode::Retq, vec![])])];
    let machine = assemble_and_load(&prog);

    assert_eq!(machine.regs.read(Reg::Rip), MEM_BOT);
    assert_eq!(machine.regs.read(Reg::Rsp), MEM_TOP - 8);
    assert_eq!(machine.mem.read_quad(MEM_TOP - 8), Ok(HALT_ADDR));
    assert_eq!(machine.regs.read(Reg::Rax), 0);
    assert!(!machine.flags.fo && !machine.flags.fs && !machine.flags.fz);
}

#[test]
fn top_level_ret_pops_the_halt_sentinel() {
    let prog = vec![main_text(vec![
        ins(Opcode::Movq, vec![imm(7), reg(Reg::Rax)]),
        ins(Opcode::Retq, vec![]),
    ])];
    let (result, machine) = run_prog(&prog);
    assert_eq!(result, 7);
    // The final ret consumed the trampoline word.
    assert_eq!(machine.regs.read(Reg::Rsp), MEM_TOP);
}

#[test]
fn three_plus_four_is_seven() {
    let prog = vec![main_text(vec![
        ins(Opcode::Movq, vec![imm(3), reg(Reg::Rax)]),
        ins(Opcode::Movq, vec![imm(4), reg(Reg::Rbx)]),
        ins(Opcode::Addq, vec![reg(Reg::Rbx), reg(Reg::Rax)]),
        ins(Opcode::Jmp, vec![imm(HALT_ADDR)]),
    ])];
    assert_eq!(run_prog(&prog).0, 7);
}

#[test]
fn call_returns_to_the_following_instruction() {
    let prog = vec![
        main_text(vec![
            ins(Opcode::Callq, vec![lbl("forty_one")]),
            ins(Opcode::Incq, vec![reg(Reg::Rax)]),
            ins(Opcode::Retq, vec![]),
        ]),
        text(
            "forty_one",
            vec![
                ins(Opcode::Movq, vec![imm(41), reg(Reg::Rax)]),
                ins(Opcode::Retq, vec![]),
            ],
        ),
    ];
    let (result, machine) = run_prog(&prog);
    assert_eq!(result, 42);
    assert_eq!(machine.regs.read(Reg::Rsp), MEM_TOP);
}

#[test]
fn conditional_loop_sums_a_countdown() {
    // rax = 5 + 4 + 3 + 2 + 1
    let prog = vec![
        main_text(vec![
            ins(Opcode::Xorq, vec![reg(Reg::Rax), reg(Reg::Rax)]),
            ins(Opcode::Movq, vec![imm(5), reg(Reg::Rbx)]),
            ins(Opcode::Jmp, vec![lbl("loop")]),
        ]),
        text(
            "loop",
            vec![
                ins(Opcode::Addq, vec![reg(Reg::Rbx), reg(Reg::Rax)]),
                ins(Opcode::Decq, vec![reg(Reg::Rbx)]),
                ins(Opcode::J(Cond::Neq), vec![lbl("loop")]),
                ins(Opcode::Retq, vec![]),
            ],
        ),
    ];
    assert_eq!(run_prog(&prog).0, 15);
}

#[test]
fn label_load_reads_an_assembled_quad() {
    let prog = vec![
        main_text(vec![
            ins(
                Opcode::Movq,
                vec![
                    Operand::Ind1(Imm::Lbl("answer".to_string())),
                    reg(Reg::Rax),
                ],
            ),
            ins(Opcode::Retq, vec![]),
        ]),
        data("answer", vec![Data::Quad(Imm::Lit(42))]),
    ];
    assert_eq!(run_prog(&prog).0, 42);
}

#[test]
fn asciz_bytes_land_in_the_data_segment() {
    let prog = vec![
        main_text(vec![ins(Opcode::Retq, vec![])]),
        data("msg", vec![Data::Asciz("hi".to_string())]),
    ];
    let machine = assemble_and_load(&prog);

    let msg = MEM_BOT + INS_SLOTS;
    assert_eq!(machine.mem.read_byte(msg), Ok(b'h'));
    assert_eq!(machine.mem.read_byte(msg + 1), Ok(b'i'));
    assert_eq!(machine.mem.read_byte(msg + 2), Ok(0));
}

#[test]
fn infinite_loop_hits_the_step_limit() {
    let prog = vec![main_text(vec![ins(Opcode::Jmp, vec![lbl("main")])])];
    let machine = assemble_and_load(&prog);
    let mut sim = Simulator::with_config(
        machine,
        SimConfig {
            trace: false,
            max_steps: Some(10),
        },
    );
    assert_eq!(sim.run(), Err(VmError::StepLimitExceeded { limit: 10 }));
}

#[test]
fn jumping_into_data_is_a_fetch_fault() {
    let prog = vec![
        main_text(vec![ins(Opcode::Jmp, vec![lbl("blob")])]),
        data("blob", vec![Data::Quad(Imm::Lit(1))]),
    ];
    let machine = assemble_and_load(&prog);
    let mut sim = Simulator::with_config(machine, SimConfig::bounded());
    assert_eq!(
        sim.run(),
        Err(VmError::FetchFault {
            addr: MEM_BOT + INS_SLOTS
        })
    );
}

#[test]
fn run_collects_execution_statistics() {
    let prog = vec![main_text(vec![
        ins(Opcode::Pushq, vec![imm(1)]),
        ins(Opcode::Popq, vec![reg(Reg::Rax)]),
        ins(Opcode::Retq, vec![]),
    ])];
    let (_, machine) = run_prog(&prog);

    assert_eq!(machine.stats.instructions_retired, 3);
    assert_eq!(machine.stats.stack_pushes, 1);
    // popq plus the final retq both pop.
    assert_eq!(machine.stats.stack_pops, 2);
    assert_eq!(machine.stats.mem_writes, 1);
    assert_eq!(machine.stats.mem_reads, 2);
}
