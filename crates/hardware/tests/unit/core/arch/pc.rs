//! # Program Counter Tests

use riscy_core::core::arch::pc::ProgramCounter;

#[test]
fn reset_state() {
    let pc = ProgramCounter::default();
    assert_eq!(pc.next_fetch_address(), 0);
    assert_eq!(pc.incremented(), 4);
}

#[test]
fn ten_sequential_ticks_step_by_four() {
    let mut pc = ProgramCounter::default();
    let mut seen = Vec::new();
    for _ in 0..10 {
        pc.clock(false, 0xFFFF_FFFF);
        seen.push(pc.next_fetch_address());
    }
    assert_eq!(seen, vec![4, 8, 12, 16, 20, 24, 28, 32, 36, 40]);
}

#[test]
fn load_takes_effect_on_the_very_next_fetch() {
    let mut pc = ProgramCounter::default();
    pc.clock(true, 0xdead_beef);
    assert_eq!(pc.next_fetch_address(), 0xdead_beef);
    assert_eq!(pc.incremented(), 0xdead_beef_u32.wrapping_add(4));
    pc.clock(false, 0);
    assert_eq!(pc.next_fetch_address(), 0xdead_bef3);
}

#[test]
fn incremented_wraps_at_top_of_address_space() {
    let mut pc = ProgramCounter::new(0xFFFF_FFFC);
    assert_eq!(pc.incremented(), 0);
    pc.clock(false, 0);
    assert_eq!(pc.next_fetch_address(), 0);
}

#[test]
fn reset_vector_is_honoured() {
    let pc = ProgramCounter::new(0x100);
    assert_eq!(pc.next_fetch_address(), 0x100);
    assert_eq!(pc.incremented(), 0x104);
}
