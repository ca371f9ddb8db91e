//! Segment-tag and qualifier predicates used by the loop dispatcher.

use x12_schema::segment::OwnedSegment;

/// Case-insensitive segment tag comparison.
pub fn matches_segment_tag(segment_tag: &str, expected_tag: &str) -> bool {
    segment_tag.eq_ignore_ascii_case(expected_tag)
}

/// Compares a qualifier value after trimming surrounding whitespace.
pub fn matches_qualifier(actual: &str, expected: &str) -> bool {
    actual.trim() == expected.trim()
}

/// Does `segment` match `expected_tag`, and (if given) does its first
/// element equal `expected_qualifier`?
pub fn matches_node(segment: &OwnedSegment, expected_tag: &str, expected_qualifier: Option<&str>) -> bool {
    if !matches_segment_tag(&segment.id, expected_tag) {
        return false;
    }
    match expected_qualifier {
        Some(q) => matches_qualifier(segment.get_element(0), q),
        None => true,
    }
}
