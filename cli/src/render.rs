//! Plain-text rendering of staged operands and transcript entries.
//!
//! Mirrors the original page's layout: operands carry P1, P2, … position
//! labels, results lead with the computed expression, and explanation steps
//! render hierarchically (primary flush, sub indented, plain bulleted).

use polycalc_types::{
    Operand, ResultEntry, Step, StepKind, Transcript, TranscriptEntry, position_label,
};

pub fn print_staged(operands: &[Operand]) {
    if operands.is_empty() {
        println!("No operands staged.");
        return;
    }
    for (index, operand) in operands.iter().enumerate() {
        println!("  {}: {operand}", position_label(index));
    }
}

pub fn print_transcript(transcript: &Transcript) {
    if transcript.is_empty() {
        println!("Transcript is empty.");
        return;
    }
    for entry in transcript.entries() {
        print_entry(entry);
    }
}

pub fn print_entry(entry: &TranscriptEntry) {
    match entry {
        TranscriptEntry::Request(request) => {
            println!("\n>> {}", request.echo_line());
        }
        TranscriptEntry::Result(result) => print_result(result),
    }
}

fn print_result(result: &ResultEntry) {
    println!("\n[{}]", result.operation().display_name());
    for (index, operand) in result.operands().iter().enumerate() {
        println!("  {}: {operand}", position_label(index));
    }
    println!("  = {}", result.result_expression());
    for step in result.steps() {
        print_step(step);
    }
}

fn print_step(step: &Step) {
    match step.kind() {
        StepKind::Primary => println!("  ◆ {}", step.text()),
        StepKind::Sub => println!("      ▶ {}", step.text()),
        StepKind::Plain => println!("    • {}", step.text()),
    }
}
