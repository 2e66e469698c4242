//! ALU Shift Operation Tests.
//!
//! The value shifted is operand `b`; the amount is the low 5 bits of `a`.

use proptest::prelude::*;
use rstest::rstest;

use riscy_core::core::datapath::signals::AluOp;
use riscy_core::core::units::alu::Alu;

// ─── Constants ───────────────────────────────────────────────────────────────

const SRA_INPUT: u32 = 0b1000_1111_0000_1111_0000_1111_0000_1111;
const SRA_BY_ONE: u32 = 0b1100_0111_1000_0111_1000_0111_1000_0111;

// ═════════════════════════════════════════════════════════════════════════════
//  SLL
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(0, 0xDEAD_BEEF, 0xDEAD_BEEF)]
#[case(1, 1, 2)]
#[case(31, 1, 0x8000_0000)]
#[case(4, 0xFFFF_FFFF, 0xFFFF_FFF0)]
fn sll_vectors(#[case] shamt: u32, #[case] value: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(AluOp::Sll, shamt, value), expected);
}

// ═════════════════════════════════════════════════════════════════════════════
//  SRL
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(0, 0x8000_0000, 0x8000_0000)]
#[case(1, 0x8000_0000, 0x4000_0000)]
#[case(31, 0x8000_0000, 1)]
#[case(4, 0xFFFF_FFFF, 0x0FFF_FFFF)]
fn srl_zero_fills(#[case] shamt: u32, #[case] value: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(AluOp::Srl, shamt, value), expected);
}

// ═════════════════════════════════════════════════════════════════════════════
//  SRA
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn sra_sign_extends_reference_pattern() {
    assert_eq!(Alu::execute(AluOp::Sra, 1, SRA_INPUT), SRA_BY_ONE);
}

#[rstest]
#[case(31, 0x8000_0000, 0xFFFF_FFFF)]
#[case(4, 0x8000_0000, 0xF800_0000)]
#[case(4, 0x7FFF_FFFF, 0x07FF_FFFF)]
#[case(0, 0x8000_0001, 0x8000_0001)]
fn sra_vectors(#[case] shamt: u32, #[case] value: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(AluOp::Sra, shamt, value), expected);
}

// ─── Shift amount masking ────────────────────────────────────────────────────

#[rstest]
#[case(AluOp::Sll)]
#[case(AluOp::Srl)]
#[case(AluOp::Sra)]
fn only_low_five_bits_of_a_are_used(#[case] op: AluOp) {
    // 0xFFFF_FFE3 & 0x1F == 3
    assert_eq!(
        Alu::execute(op, 0xFFFF_FFE3, 0x8000_00F0),
        Alu::execute(op, 3, 0x8000_00F0)
    );
    // 32 masks to 0: value unchanged
    assert_eq!(Alu::execute(op, 32, 0x8000_00F0), 0x8000_00F0);
}

proptest! {
    #[test]
    fn shifts_match_reference(a in any::<u32>(), b in any::<u32>()) {
        let sh = a & 0x1F;
        prop_assert_eq!(Alu::execute(AluOp::Sll, a, b), b << sh);
        prop_assert_eq!(Alu::execute(AluOp::Srl, a, b), b >> sh);
        prop_assert_eq!(Alu::execute(AluOp::Sra, a, b), ((b as i32) >> sh) as u32);
    }
}
