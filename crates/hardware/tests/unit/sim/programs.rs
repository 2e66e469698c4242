//! # Built-in Program Tests

use riscy_core::isa::disasm::disassemble;
use riscy_core::sim::programs::counter_loop;

#[test]
fn counter_loop_disassembles_as_expected() {
    let [first, second] = counter_loop(2, 5);
    assert_eq!(disassemble(first), "addi x2, x2, 1");
    assert_eq!(disassemble(second), "jal x5, -4");
}

#[test]
fn counter_loop_registers_are_parameters() {
    let [first, second] = counter_loop(10, 1);
    assert_eq!(disassemble(first), "addi x10, x10, 1");
    assert_eq!(disassemble(second), "jal x1, -4");
}
