//! Per-loop schemas: segment slots and child loop cardinalities (spec.md §4.3).

use crate::segment_schema::SegmentSchema;

/// How many times a loop or segment slot may occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Exactly one occurrence.
    One,
    /// Zero or one occurrence.
    Optional,
    /// Zero or more occurrences.
    Repeating,
}

/// Schema for one loop: its segment slots and child loops.
#[derive(Debug, Clone)]
pub struct LoopSchema {
    pub name: &'static str,
    pub cardinality: Cardinality,
    pub segments: &'static [SegmentSchema],
    pub child_loops: &'static [LoopSchema],
}

impl LoopSchema {
    pub const fn new(
        name: &'static str,
        cardinality: Cardinality,
        segments: &'static [SegmentSchema],
        child_loops: &'static [LoopSchema],
    ) -> Self {
        Self {
            name,
            cardinality,
            segments,
            child_loops,
        }
    }

    /// Looks up the schema for a segment id directly owned by this loop
    /// (not recursing into child loops).
    pub fn segment_schema(&self, segment_id: &str) -> Option<&'static SegmentSchema> {
        self.segments.iter().find(|s| s.segment_id.eq_ignore_ascii_case(segment_id))
    }
}
