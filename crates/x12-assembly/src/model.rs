//! Transaction Model (spec.md §3, §4.6): a tree rooted at a transaction
//! type, with zero or more named loops forming a DAG of parent -> child
//! lists. Generalizes the teacher's `AssembledTree`/`AssembledGroup`
//! group-shaped tree to X12 loops.

use serde::{Deserialize, Serialize};
use x12_schema::segment::OwnedSegment;

/// One repetition of a named loop.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoopInstance {
    pub segments: Vec<OwnedSegment>,
    pub child_loops: Vec<AssembledLoop>,
}

impl LoopInstance {
    /// Find the first segment with the given tag in this loop instance
    /// (not recursing into child loops).
    pub fn segment(&self, tag: &str) -> Option<&OwnedSegment> {
        self.segments.iter().find(|s| s.is(tag))
    }

    pub fn child_loop(&self, name: &str) -> Option<&AssembledLoop> {
        self.child_loops.iter().find(|l| l.loop_name == name)
    }
}

/// A named loop and all of its repetitions (one repetition for
/// `Cardinality::One`/`Optional`, any number for `Cardinality::Repeating`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssembledLoop {
    pub loop_name: String,
    pub instances: Vec<LoopInstance>,
}

/// A fully assembled, closed transaction set (spec.md §3 "Transaction Model").
///
/// Built empty on ST by the Loop Dispatcher, mutated as segments stream
/// in, frozen on SE. ST and SE themselves are envelope segments owned by
/// the Interchange Framer (spec.md §4.9), not part of the loop tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionModel {
    pub transaction_code: String,
    pub implementation_version: String,
    pub control_number: String,
    /// SE's declared segment count (SE01), if the segment typed cleanly.
    pub segment_count_expected: Option<i64>,
    /// Actual count of segments from ST through SE inclusive, counted by the framer.
    pub segment_count_actual: u32,
    pub loops: Vec<AssembledLoop>,
}

impl TransactionModel {
    pub fn top_loop(&self, name: &str) -> Option<&AssembledLoop> {
        self.loops.iter().find(|l| l.loop_name == name)
    }
}
