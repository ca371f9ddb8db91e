use crate::SegmentPosition;

/// A single X12 data element, borrowed from the input buffer.
///
/// An element is zero or more *repetitions* (split by the repetition
/// separator), each of which is zero or more *components* (split by the
/// component separator). A plain scalar element is the common case of
/// exactly one repetition with exactly one component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawElement<'a> {
    pub repetitions: Vec<Vec<&'a str>>,
}

impl<'a> RawElement<'a> {
    /// Builds a scalar element from a single string (no repetition, no
    /// composite structure).
    pub fn scalar(value: &'a str) -> Self {
        Self {
            repetitions: vec![vec![value]],
        }
    }

    /// `true` if the element carries no data at all.
    pub fn is_empty(&self) -> bool {
        self.repetitions.is_empty() || self.repetitions.iter().all(|r| r.iter().all(|c| c.is_empty()))
    }

    /// The first component of the first repetition, or empty string if
    /// absent. Convenience accessor for the common non-repeating,
    /// non-composite case.
    pub fn as_str(&self) -> &'a str {
        self.repetitions
            .first()
            .and_then(|r| r.first())
            .copied()
            .unwrap_or("")
    }

    /// Components of the first repetition.
    pub fn components(&self) -> &[&'a str] {
        self.repetitions.first().map_or(&[], |r| r.as_slice())
    }

    /// All repetitions, each a list of components.
    pub fn repetitions(&self) -> &[Vec<&'a str>] {
        &self.repetitions
    }
}

/// A parsed X12 segment that borrows from the input buffer.
///
/// Zero-copy: all string data references the original input. A segment
/// like `NM1*PR*2*ABC COMPANY*****PI*842610001` has:
/// - `id`: `"NM1"`
/// - `elements[0]`: scalar `"PR"`
/// - `elements[6]`: scalar `"PI"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSegment<'a> {
    pub id: &'a str,
    pub elements: Vec<RawElement<'a>>,
    pub position: SegmentPosition,
}

impl<'a> RawSegment<'a> {
    pub fn new(id: &'a str, elements: Vec<RawElement<'a>>, position: SegmentPosition) -> Self {
        Self {
            id,
            elements,
            position,
        }
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Scalar value of the element at `index`, or empty string if missing.
    pub fn get_element(&self, index: usize) -> &'a str {
        self.elements.get(index).map_or("", RawElement::as_str)
    }

    /// Component `component_index` of the first repetition of element
    /// `element_index`, or empty string if missing.
    pub fn get_component(&self, element_index: usize, component_index: usize) -> &'a str {
        self.elements
            .get(element_index)
            .and_then(|e| e.components().get(component_index))
            .copied()
            .unwrap_or("")
    }

    pub fn is(&self, segment_id: &str) -> bool {
        self.id.eq_ignore_ascii_case(segment_id)
    }

    /// Reconstruct the raw segment text (without the terminator) using the
    /// given delimiters, dropping trailing empty elements per the
    /// serializer's byte-exactness contract.
    pub fn to_raw_string(&self, delimiters: &crate::Delimiters) -> String {
        let elem_sep = delimiters.element as char;
        let comp_sep = delimiters.component as char;
        let rep_sep = delimiters.repetition as char;

        let mut rendered: Vec<String> = self
            .elements
            .iter()
            .map(|element| {
                element
                    .repetitions
                    .iter()
                    .map(|components| components.join(&comp_sep.to_string()))
                    .collect::<Vec<_>>()
                    .join(&rep_sep.to_string())
            })
            .collect();

        while matches!(rendered.last(), Some(s) if s.is_empty()) {
            rendered.pop();
        }

        let mut result = self.id.to_string();
        for piece in rendered {
            result.push(elem_sep);
            result.push_str(&piece);
        }
        result
    }
}

impl<'a> std::fmt::Display for RawSegment<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_raw_string(&crate::Delimiters::default()))
    }
}
