//! ALU Operation Encoding Tests.
//!
//! The 3-bit encoding and the behaviour for undefined encodings.

use rstest::rstest;

use riscy_core::core::datapath::signals::AluOp;
use riscy_core::core::units::alu::Alu;

#[rstest]
#[case(0, AluOp::Add)]
#[case(1, AluOp::Sub)]
#[case(2, AluOp::And)]
#[case(3, AluOp::Or)]
#[case(4, AluOp::Xor)]
#[case(5, AluOp::Sll)]
#[case(6, AluOp::Srl)]
#[case(7, AluOp::Sra)]
fn encoding_table(#[case] bits: u8, #[case] op: AluOp) {
    assert_eq!(AluOp::from_bits(bits), Some(op));
    assert_eq!(op.bits(), bits);
}

#[test]
fn all_lists_operations_in_encoding_order() {
    for (i, op) in AluOp::ALL.iter().enumerate() {
        assert_eq!(usize::from(op.bits()), i);
    }
}

#[test]
fn undefined_encodings_resolve_to_none() {
    for bits in 8..=u8::MAX {
        assert_eq!(AluOp::from_bits(bits), None);
    }
}

#[test]
fn execute_encoded_matches_execute() {
    for op in AluOp::ALL {
        assert_eq!(
            Alu::execute_encoded(op.bits(), 3, 0x8000_0010),
            Alu::execute(op, 3, 0x8000_0010)
        );
    }
}

#[test]
fn undefined_encoding_yields_zero() {
    assert_eq!(Alu::execute_encoded(8, 0xFFFF_FFFF, 0xFFFF_FFFF), 0);
    assert_eq!(Alu::execute_encoded(0xFF, 1, 1), 0);
}
