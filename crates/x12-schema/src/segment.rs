//! Owned X12 segment — a crate-independent segment representation.
//!
//! `OwnedSegment` stores parsed X12 segment data as owned `String`s, three
//! levels deep (element, repetition, component) to mirror
//! `x12_types::RawElement`. It lives in `x12-schema` so that schema tables
//! and the assembly machinery can reference it without circular
//! dependencies.

use serde::{Deserialize, Serialize};

/// An owned version of a parsed X12 segment.
///
/// Used by the owned-data chunked reader and the transaction model: pass 1
/// collects segments into this type, pass 2 consumes them guided by the
/// schema registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedSegment {
    /// Segment identifier (e.g., "NM1", "HL", "DTP").
    pub id: String,
    /// Elements, each a list of repetitions, each repetition a list of
    /// components. `elements[i].repetitions[r][c]` = component `c` of
    /// repetition `r` of element `i`.
    pub elements: Vec<OwnedElement>,
    /// 1-based segment number within the transaction set.
    pub segment_number: u32,
}

/// Owned counterpart of `x12_types::RawElement`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OwnedElement {
    pub repetitions: Vec<Vec<String>>,
}

impl OwnedElement {
    pub fn scalar(value: impl Into<String>) -> Self {
        Self {
            repetitions: vec![vec![value.into()]],
        }
    }

    pub fn as_str(&self) -> &str {
        self.repetitions
            .first()
            .and_then(|r| r.first())
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn components(&self) -> &[String] {
        self.repetitions.first().map_or(&[], |r| r.as_slice())
    }
}

impl<'a> From<&x12_types::RawElement<'a>> for OwnedElement {
    fn from(raw: &x12_types::RawElement<'a>) -> Self {
        Self {
            repetitions: raw
                .repetitions()
                .iter()
                .map(|rep| rep.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }
}

impl<'a> From<&x12_types::RawSegment<'a>> for OwnedSegment {
    fn from(raw: &x12_types::RawSegment<'a>) -> Self {
        Self {
            id: raw.id.to_string(),
            elements: raw.elements.iter().map(OwnedElement::from).collect(),
            segment_number: raw.position.segment_number,
        }
    }
}

impl OwnedSegment {
    /// Gets the first component of the first repetition of element at
    /// `index`, or empty string if missing.
    pub fn get_element(&self, index: usize) -> &str {
        self.elements.get(index).map_or("", OwnedElement::as_str)
    }

    /// Gets a specific component within the first repetition of an element,
    /// or empty string if missing.
    pub fn get_component(&self, element_index: usize, component_index: usize) -> &str {
        self.elements
            .get(element_index)
            .and_then(|e| e.components().get(component_index))
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Checks if the segment has the given ID (case-insensitive).
    pub fn is(&self, segment_id: &str) -> bool {
        self.id.eq_ignore_ascii_case(segment_id)
    }
}
