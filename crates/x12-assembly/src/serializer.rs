//! Serializer (spec.md §4.8): walks a validated `TransactionModel` in
//! schema order and renders it back to X12 octets.
//!
//! Reuses `x12_types::RawSegment::to_raw_string` for the actual
//! element/component/repetition joining and trailing-empty-element
//! trimming rather than re-deriving it (that logic already satisfies the
//! byte-exactness contract).

use x12_schema::segment::{OwnedElement, OwnedSegment};
use x12_types::{Delimiters, RawElement, RawSegment, SegmentPosition};

use crate::model::{AssembledLoop, LoopInstance, TransactionModel};

/// Flattens a transaction model's loop tree into its document-order
/// segment sequence, ST and SE included.
pub fn flatten(model: &TransactionModel) -> Vec<OwnedSegment> {
    let mut out = Vec::new();
    out.push(st_segment(model));
    for assembled_loop in &model.loops {
        flatten_loop(assembled_loop, &mut out);
    }
    out.push(se_segment(model, out.len() as u32 + 1));
    out
}

fn flatten_loop(assembled_loop: &AssembledLoop, out: &mut Vec<OwnedSegment>) {
    for instance in &assembled_loop.instances {
        flatten_instance(instance, out);
    }
}

fn flatten_instance(instance: &LoopInstance, out: &mut Vec<OwnedSegment>) {
    out.extend(instance.segments.iter().cloned());
    for child in &instance.child_loops {
        flatten_loop(child, out);
    }
}

fn st_segment(model: &TransactionModel) -> OwnedSegment {
    let mut elements = vec![
        OwnedElement::scalar(model.transaction_code.clone()),
        OwnedElement::scalar(model.control_number.clone()),
    ];
    if !model.implementation_version.is_empty() {
        elements.push(OwnedElement::scalar(model.implementation_version.clone()));
    }
    OwnedSegment {
        id: "ST".to_string(),
        elements,
        segment_number: 0,
    }
}

fn se_segment(model: &TransactionModel, segment_count: u32) -> OwnedSegment {
    OwnedSegment {
        id: "SE".to_string(),
        elements: vec![
            OwnedElement::scalar(segment_count.to_string()),
            OwnedElement::scalar(model.control_number.clone()),
        ],
        segment_number: 0,
    }
}

/// Renders a transaction model's segments as X12 text, one segment per
/// line (segments are joined by the terminator followed by `\n`, matching
/// the common convention of readable-but-valid X12 output).
pub fn serialize(model: &TransactionModel, delimiters: &Delimiters) -> String {
    let segments = flatten(model);
    let terminator = delimiters.terminator as char;
    let mut out = String::new();
    for segment in &segments {
        out.push_str(&to_raw_string(segment, delimiters));
        out.push(terminator);
        out.push('\n');
    }
    out
}

fn to_raw_string(segment: &OwnedSegment, delimiters: &Delimiters) -> String {
    let elements: Vec<RawElement> = segment
        .elements
        .iter()
        .map(|e: &OwnedElement| RawElement {
            repetitions: e
                .repetitions
                .iter()
                .map(|rep| rep.iter().map(|s| s.as_str()).collect())
                .collect(),
        })
        .collect();
    let raw = RawSegment::new(&segment.id, elements, SegmentPosition::new(segment.segment_number, 0, 0));
    raw.to_raw_string(delimiters)
}
