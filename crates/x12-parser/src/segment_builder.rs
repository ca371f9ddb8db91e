use x12_types::{Delimiters, RawElement, RawSegment, SegmentPosition};

use crate::Tokenizer;

/// Builds [`RawSegment`] instances from tokenized segment strings.
///
/// Takes a segment string (e.g. `"NM1*71^72*2*ABC"`) and splits it into a
/// segment ID plus elements, each element further split into repetitions
/// and each repetition into components.
pub struct SegmentBuilder {
    tokenizer: Tokenizer,
}

impl SegmentBuilder {
    pub fn new(delimiters: Delimiters) -> Self {
        Self {
            tokenizer: Tokenizer::new(delimiters),
        }
    }

    /// Parses a raw segment string (without its terminator) into a
    /// [`RawSegment`]. Returns `None` if the segment string is empty.
    pub fn build<'a>(&self, segment_str: &'a str, position: SegmentPosition) -> Option<RawSegment<'a>> {
        if segment_str.is_empty() {
            return None;
        }

        let mut element_iter = self.tokenizer.tokenize_elements(segment_str);

        let id = element_iter.next()?;
        if id.is_empty() {
            return None;
        }

        let mut elements = Vec::new();
        for element_str in element_iter {
            let repetitions: Vec<Vec<&'a str>> = self
                .tokenizer
                .tokenize_repetitions(element_str)
                .map(|rep| self.tokenizer.tokenize_components(rep).collect())
                .collect();
            elements.push(RawElement { repetitions });
        }

        Some(RawSegment::new(id, elements, position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(n: u32, offset: usize) -> SegmentPosition {
        SegmentPosition::new(n, offset, 1)
    }

    #[test]
    fn test_build_simple_segment() {
        let builder = SegmentBuilder::new(Delimiters::default());
        let seg = builder.build("ST*270*0001", pos(1, 0)).unwrap();

        assert_eq!(seg.id, "ST");
        assert_eq!(seg.element_count(), 2);
        assert_eq!(seg.get_element(0), "270");
        assert_eq!(seg.get_element(1), "0001");
    }

    #[test]
    fn test_build_composite_element() {
        let builder = SegmentBuilder::new(Delimiters::default());
        let seg = builder.build("SVC*HC:99213*500", pos(5, 100)).unwrap();

        assert_eq!(seg.id, "SVC");
        assert_eq!(seg.get_component(0, 0), "HC");
        assert_eq!(seg.get_component(0, 1), "99213");
        assert_eq!(seg.get_element(1), "500");
    }

    #[test]
    fn test_build_repeating_element() {
        let builder = SegmentBuilder::new(Delimiters::default());
        let seg = builder.build("NM1*71^72*2", pos(3, 50)).unwrap();

        assert_eq!(seg.elements[0].repetitions().len(), 2);
        assert_eq!(seg.elements[0].repetitions()[0], vec!["71"]);
        assert_eq!(seg.elements[0].repetitions()[1], vec!["72"]);
    }

    #[test]
    fn test_build_segment_no_elements() {
        let builder = SegmentBuilder::new(Delimiters::default());
        let seg = builder.build("SE", pos(1, 0)).unwrap();

        assert_eq!(seg.id, "SE");
        assert_eq!(seg.element_count(), 0);
    }

    #[test]
    fn test_build_empty_input() {
        let builder = SegmentBuilder::new(Delimiters::default());
        assert!(builder.build("", pos(1, 0)).is_none());
    }

    #[test]
    fn test_build_preserves_position() {
        let builder = SegmentBuilder::new(Delimiters::default());
        let seg = builder.build("BGM*E03*DOC001", pos(2, 42)).unwrap();

        assert_eq!(seg.position.segment_number, 2);
        assert_eq!(seg.position.byte_offset, 42);
        assert_eq!(seg.position.transaction_number, 1);
    }

    #[test]
    fn test_build_dtp_segment() {
        let builder = SegmentBuilder::new(Delimiters::default());
        let seg = builder.build("DTP*291*D8*20060501", pos(10, 300)).unwrap();

        assert_eq!(seg.id, "DTP");
        assert_eq!(seg.get_element(0), "291");
        assert_eq!(seg.get_element(1), "D8");
        assert_eq!(seg.get_element(2), "20060501");
    }
}
