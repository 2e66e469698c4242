//! # Statistics Tests
//!
//! Instruction-mix counting from control bundles and report rendering.

use pretty_assertions::assert_eq;

use riscy_core::core::datapath::stages::InstructionDecoder;
use riscy_core::isa::encode::{addi, jal, lw};
use riscy_core::sim::programs::counter_loop;
use riscy_core::stats::SimStats;

use crate::common::harness::TestContext;

/// `addi x0, x0, 0` still counts as an ALU instruction: the write is
/// dropped by the register file, not the decoder.
#[test]
fn record_classifies_by_bundle() {
    let mut stats = SimStats::default();
    for inst in [addi(1, 1, 1), jal(0, 4), lw(1, 0, 0), 0xFFFF_FFFF, addi(0, 0, 0)] {
        stats.record(&InstructionDecoder::decode(inst));
    }
    assert_eq!(
        stats,
        SimStats {
            ticks: 5,
            instructions_retired: 5,
            inst_alu: 2,
            inst_load: 1,
            inst_jump: 1,
            inst_nop: 1,
        }
    );
}

#[test]
fn counter_loop_mix_is_half_alu_half_jump() {
    let mut ctx = TestContext::new(&counter_loop(2, 5));
    ctx.run(20);
    let stats = &ctx.cpu().stats;
    assert_eq!(stats.ticks, 20);
    assert_eq!(stats.inst_alu, 10);
    assert_eq!(stats.inst_jump, 10);
    assert_eq!(stats.inst_load, 0);
    assert_eq!(stats.inst_nop, 0);
}

#[test]
fn report_sections_can_be_selected() {
    let mut ctx = TestContext::new(&counter_loop(2, 5));
    ctx.run(4);
    let stats = &ctx.cpu().stats;

    let full = stats.to_string();
    assert!(full.contains("sim_ticks                4"), "{full}");
    assert!(full.contains("op.jump                2 (50.00%)"), "{full}");

    let summary = stats.render_sections(&["summary".to_string()]);
    assert!(summary.contains("sim_insts"));
    assert!(!summary.contains("INSTRUCTION MIX"));
}

#[test]
fn empty_run_report_does_not_divide_by_zero() {
    let report = SimStats::default().to_string();
    assert!(report.contains("op.alu                 0 (0.00%)"), "{report}");
}

#[test]
fn serializes_to_json() {
    let mut stats = SimStats::default();
    stats.record(&InstructionDecoder::decode(addi(1, 1, 1)));
    let json: serde_json::Value = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["ticks"], 1);
    assert_eq!(json["inst_alu"], 1);
    assert_eq!(json["inst_nop"], 0);
}
