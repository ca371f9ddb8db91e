#[cfg(test)]
use x12_types::Control;
use x12_types::{Delimiters, RawSegment, SegmentPosition, ISA_LENGTH};

use crate::config::ParserConfig;
use crate::error::TokenizeError;
use crate::handler::X12Handler;
use crate::segment_builder::SegmentBuilder as SegBuilder;
use crate::tokenizer::Tokenizer;

/// Streaming X12 parser over an in-memory byte slice.
///
/// Tokenizes the input into segments and routes them to an
/// [`X12Handler`], probing delimiters from the ISA header first (spec.md
/// §4.1). Unlike EDIFACT's optional UNA, the ISA header is mandatory: a
/// missing or truncated header is a fatal [`TokenizeError::MalformedInterchange`].
pub struct X12StreamParser;

impl X12StreamParser {
    /// Parse an X12 interchange from a byte slice, using default [`ParserConfig`] tunables.
    ///
    /// 1. Probes the ISA header for delimiters (fails fast if absent).
    /// 2. Tokenizes the full input into segments.
    /// 3. Routes each segment to the handler, tracking envelope nesting.
    /// 4. Stops if the handler returns `Control::Stop`.
    pub fn parse(input: &[u8], handler: &mut dyn X12Handler) -> Result<(), TokenizeError> {
        Self::parse_with_config(input, &ParserConfig::default(), handler)
    }

    /// Parse an X12 interchange from a byte slice with explicit [`ParserConfig`] tunables.
    ///
    /// When `config.strict_whitespace` is set, whitespace adjacent to a segment
    /// terminator is rejected rather than silently absorbed.
    pub fn parse_with_config(input: &[u8], config: &ParserConfig, handler: &mut dyn X12Handler) -> Result<(), TokenizeError> {
        if input.len() < ISA_LENGTH || &input[0..3] != b"ISA" {
            return Err(TokenizeError::MalformedInterchange {
                offset: 0,
                reason: "input does not begin with a 106-octet ISA header".to_string(),
            });
        }

        let delimiters = Delimiters::from_isa(&input[0..ISA_LENGTH]).map_err(|e| {
            TokenizeError::MalformedInterchange {
                offset: 0,
                reason: e.to_string(),
            }
        })?;
        handler.on_delimiters(&delimiters);

        if config.strict_whitespace {
            Self::check_strict_whitespace(&input[ISA_LENGTH..], delimiters.terminator, ISA_LENGTH)?;
        }

        let tokenizer = Tokenizer::new(delimiters);
        let seg_builder = SegBuilder::new(delimiters);

        // Detect whether the tokenizer consumed input without a trailing
        // terminator — that is a truncated final segment, not a clean EOF.
        let ends_cleanly = input
            .iter()
            .rposition(|&b| !matches!(b, b'\r' | b'\n' | b' ' | b'\t'))
            .map(|last| input[last] == delimiters.terminator)
            .unwrap_or(true);

        let mut segment_number: u32 = 0;
        let mut transaction_number: u32 = 0;
        let mut byte_offset = 0usize;
        let mut segments: Vec<&str> = tokenizer.tokenize_segments(input).collect();

        if !ends_cleanly {
            // The last yielded piece has no terminator; surface it as a
            // truncation rather than silently accepting it.
            segments.pop();
            return if segments.is_empty() {
                Err(TokenizeError::TruncatedSegment { offset: 0 })
            } else {
                Self::drive(
                    &segments,
                    &tokenizer,
                    &seg_builder,
                    handler,
                    &mut segment_number,
                    &mut transaction_number,
                    &mut byte_offset,
                )
                .and(Err(TokenizeError::TruncatedSegment { offset: input.len() }))
            };
        }

        Self::drive(
            &segments,
            &tokenizer,
            &seg_builder,
            handler,
            &mut segment_number,
            &mut transaction_number,
            &mut byte_offset,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn drive(
        segments: &[&str],
        _tokenizer: &Tokenizer,
        seg_builder: &SegBuilder,
        handler: &mut dyn X12Handler,
        segment_number: &mut u32,
        transaction_number: &mut u32,
        byte_offset: &mut usize,
    ) -> Result<(), TokenizeError> {
        for segment_str in segments {
            *segment_number += 1;

            let Some(raw_segment) =
                seg_builder.build(segment_str, SegmentPosition::new(*segment_number, *byte_offset, *transaction_number))
            else {
                *byte_offset += segment_str.len() + 1;
                continue;
            };

            let id_upper = raw_segment.id.to_ascii_uppercase();

            if id_upper == "ST" {
                *transaction_number += 1;
            }

            let effective_transaction_number = if matches!(id_upper.as_str(), "ISA" | "IEA" | "GS" | "GE") {
                0
            } else {
                *transaction_number
            };
            let position = SegmentPosition::new(*segment_number, *byte_offset, effective_transaction_number);
            let raw_segment = RawSegment::new(raw_segment.id, raw_segment.elements, position);

            match id_upper.as_str() {
                "ISA" => {
                    if handler.on_interchange_start(&raw_segment).should_stop() {
                        return Ok(());
                    }
                }
                "GS" => {
                    if handler.on_group_start(&raw_segment).should_stop() {
                        return Ok(());
                    }
                }
                "ST" => {
                    if handler.on_transaction_start(&raw_segment).should_stop() {
                        return Ok(());
                    }
                }
                "SE" => handler.on_transaction_end(&raw_segment),
                "GE" => handler.on_group_end(&raw_segment),
                "IEA" => handler.on_interchange_end(&raw_segment),
                _ => {}
            }

            if handler.on_segment(&raw_segment).should_stop() {
                return Ok(());
            }

            *byte_offset += segment_str.len() + 1;
        }

        Ok(())
    }

    /// Rejects whitespace (space/tab/CR/LF) immediately before or after a
    /// segment terminator, which `Tokenizer` would otherwise silently absorb.
    fn check_strict_whitespace(body: &[u8], terminator: u8, base_offset: usize) -> Result<(), TokenizeError> {
        let is_ws = |b: u8| matches!(b, b' ' | b'\t' | b'\r' | b'\n');

        let mut start = 0usize;
        for (i, &b) in body.iter().enumerate() {
            if b != terminator {
                continue;
            }
            if i > start && is_ws(body[i - 1]) {
                return Err(TokenizeError::StrictWhitespaceViolation {
                    offset: base_offset + i - 1,
                });
            }
            let mut next = i + 1;
            while next < body.len() && is_ws(body[next]) {
                if body[next] != b'\r' && body[next] != b'\n' {
                    return Err(TokenizeError::StrictWhitespaceViolation { offset: base_offset + next });
                }
                next += 1;
            }
            start = i + 1;
        }

        Ok(())
    }

    /// Reads an X12 interchange from an arbitrary [`std::io::Read`] source in
    /// `config.chunk_size` increments, accumulating into a single buffer
    /// bounded by `config.max_buffer_size`, then parses the fully buffered
    /// content.
    ///
    /// `RawSegment`/`RawElement` borrow from the full input slice, so the
    /// interchange must stay resident in memory regardless of how it is
    /// read; this bounds how much memory a hostile or runaway source can
    /// force the process to hold rather than streaming segment-at-a-time.
    pub fn parse_reader<R: std::io::Read>(
        mut reader: R,
        config: &ParserConfig,
        handler: &mut dyn X12Handler,
    ) -> Result<(), TokenizeError> {
        let mut buffer = Vec::new();
        let mut chunk = vec![0u8; config.chunk_size.max(1)];

        loop {
            let read = reader.read(&mut chunk)?;
            if read == 0 {
                break;
            }
            if buffer.len() + read > config.max_buffer_size {
                return Err(TokenizeError::BufferLimitExceeded {
                    limit: config.max_buffer_size,
                });
            }
            buffer.extend_from_slice(&chunk[..read]);
        }

        Self::parse_with_config(&buffer, config, handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct EventCollector {
        events: RefCell<Vec<String>>,
    }

    impl EventCollector {
        fn new() -> Self {
            Self {
                events: RefCell::new(Vec::new()),
            }
        }

        fn events(&self) -> Vec<String> {
            self.events.borrow().clone()
        }
    }

    impl X12Handler for EventCollector {
        fn on_delimiters(&mut self, _d: &Delimiters) {
            self.events.borrow_mut().push("DELIMITERS".to_string());
        }

        fn on_interchange_start(&mut self, isa: &RawSegment) -> Control {
            self.events
                .borrow_mut()
                .push(format!("INTERCHANGE_START({})", isa.id));
            Control::Continue
        }

        fn on_transaction_start(&mut self, st: &RawSegment) -> Control {
            self.events
                .borrow_mut()
                .push(format!("TRANSACTION_START(code={})", st.get_element(0)));
            Control::Continue
        }

        fn on_segment(&mut self, seg: &RawSegment) -> Control {
            self.events.borrow_mut().push(format!("SEGMENT({})", seg.id));
            Control::Continue
        }

        fn on_transaction_end(&mut self, _se: &RawSegment) {
            self.events.borrow_mut().push("TRANSACTION_END".to_string());
        }

        fn on_interchange_end(&mut self, _iea: &RawSegment) {
            self.events.borrow_mut().push("INTERCHANGE_END".to_string());
        }
    }

    fn isa_header(term: u8) -> String {
        let mut isa = vec![b' '; ISA_LENGTH];
        isa[0..3].copy_from_slice(b"ISA");
        isa[3] = b'*';
        isa[82] = b'^';
        isa[104] = b':';
        isa[105] = term;
        String::from_utf8(isa).unwrap()
    }

    #[test]
    fn test_parse_minimal_interchange() {
        let input = format!(
            "{}GS*HS*SENDER*RECEIVER*20060501*1319*1*X*005010~ST*270*0001~BGM~SE*3*0001~GE*1*1~IEA*1*000000001~",
            isa_header(b'~')
        );

        let mut handler = EventCollector::new();
        X12StreamParser::parse(input.as_bytes(), &mut handler).unwrap();

        let events = handler.events();
        assert_eq!(events[0], "DELIMITERS");
        assert_eq!(events[1], "INTERCHANGE_START(ISA)");
        assert_eq!(events[2], "SEGMENT(ISA)");
        assert_eq!(events[3], "SEGMENT(GS)");
        assert_eq!(events[4], "TRANSACTION_START(code=270)");
        assert_eq!(events[5], "SEGMENT(ST)");
        assert_eq!(events[6], "SEGMENT(BGM)");
        assert_eq!(events[7], "TRANSACTION_END");
        assert_eq!(events[8], "SEGMENT(SE)");
        assert!(events.contains(&"INTERCHANGE_END".to_string()));
    }

    #[test]
    fn test_parse_missing_isa_is_malformed() {
        let mut handler = EventCollector::new();
        let err = X12StreamParser::parse(b"GS*HS*~", &mut handler).unwrap_err();
        assert!(matches!(err, TokenizeError::MalformedInterchange { .. }));
    }

    #[test]
    fn test_parse_handler_stops_early() {
        struct StopOnBgm {
            segments_seen: Vec<String>,
        }
        impl X12Handler for StopOnBgm {
            fn on_segment(&mut self, seg: &RawSegment) -> Control {
                self.segments_seen.push(seg.id.to_string());
                if seg.is("BGM") {
                    Control::Stop
                } else {
                    Control::Continue
                }
            }
        }

        let input = format!("{}GS*HS~ST*270*0001~BGM~DTM*291*20060501~SE*4*0001~", isa_header(b'~'));
        let mut handler = StopOnBgm {
            segments_seen: Vec::new(),
        };
        X12StreamParser::parse(input.as_bytes(), &mut handler).unwrap();

        assert_eq!(handler.segments_seen, vec!["ISA", "GS", "ST", "BGM"]);
    }

    #[test]
    fn test_parse_transaction_numbering() {
        struct PositionTracker {
            positions: Vec<(String, u32)>,
        }
        impl X12Handler for PositionTracker {
            fn on_segment(&mut self, seg: &RawSegment) -> Control {
                self.positions.push((seg.id.to_string(), seg.position.transaction_number));
                Control::Continue
            }
        }

        let input = format!(
            "{}GS*HS~ST*270*0001~BGM~SE*3*0001~ST*270*0002~BGM~SE*3*0002~GE*2*1~IEA*1*1~",
            isa_header(b'~')
        );
        let mut handler = PositionTracker { positions: Vec::new() };
        X12StreamParser::parse(input.as_bytes(), &mut handler).unwrap();

        assert_eq!(handler.positions[0], ("ISA".to_string(), 0));
        assert_eq!(handler.positions[2], ("ST".to_string(), 1));
        assert_eq!(handler.positions[3], ("BGM".to_string(), 1));
        let second_st = handler.positions.iter().filter(|(id, _)| id == "ST").nth(1).unwrap();
        assert_eq!(second_st.1, 2);
    }

    #[test]
    fn test_parse_truncated_segment() {
        let mut handler = EventCollector::new();
        let input = format!("{}GS*HS~ST*270", isa_header(b'~'));
        let err = X12StreamParser::parse(input.as_bytes(), &mut handler).unwrap_err();
        assert!(matches!(err, TokenizeError::TruncatedSegment { .. }));
    }

    #[test]
    fn test_parse_with_config_default_matches_parse() {
        let input = format!(
            "{}GS*HS*SENDER*RECEIVER*20060501*1319*1*X*005010~ST*270*0001~BGM~SE*3*0001~GE*1*1~IEA*1*000000001~",
            isa_header(b'~')
        );
        let mut handler = EventCollector::new();
        X12StreamParser::parse_with_config(input.as_bytes(), &ParserConfig::default(), &mut handler).unwrap();
        assert_eq!(handler.events()[1], "INTERCHANGE_START(ISA)");
    }

    #[test]
    fn test_strict_whitespace_rejects_trailing_space_before_terminator() {
        let input = format!("{}GS*HS ~ST*270*0001~BGM~SE*3*0001~", isa_header(b'~'));
        let mut handler = EventCollector::new();
        let config = ParserConfig {
            strict_whitespace: true,
            ..ParserConfig::default()
        };
        let err = X12StreamParser::parse_with_config(input.as_bytes(), &config, &mut handler).unwrap_err();
        assert!(matches!(err, TokenizeError::StrictWhitespaceViolation { .. }));
    }

    #[test]
    fn test_strict_whitespace_allows_clean_input() {
        let input = format!(
            "{}GS*HS*SENDER*RECEIVER*20060501*1319*1*X*005010~ST*270*0001~BGM~SE*3*0001~GE*1*1~IEA*1*000000001~",
            isa_header(b'~')
        );
        let mut handler = EventCollector::new();
        let config = ParserConfig {
            strict_whitespace: true,
            ..ParserConfig::default()
        };
        X12StreamParser::parse_with_config(input.as_bytes(), &config, &mut handler).unwrap();
    }

    #[test]
    fn test_lenient_mode_absorbs_whitespace_between_segments() {
        let input = format!("{}GS*HS~\nST*270*0001~BGM~SE*3*0001~", isa_header(b'~'));
        let mut handler = EventCollector::new();
        X12StreamParser::parse(input.as_bytes(), &mut handler).unwrap();
        assert!(handler.events().contains(&"SEGMENT(ST)".to_string()));
    }

    #[test]
    fn test_parse_reader_matches_parse() {
        let input = format!(
            "{}GS*HS*SENDER*RECEIVER*20060501*1319*1*X*005010~ST*270*0001~BGM~SE*3*0001~GE*1*1~IEA*1*000000001~",
            isa_header(b'~')
        );
        let mut handler = EventCollector::new();
        let config = ParserConfig {
            chunk_size: 7,
            ..ParserConfig::default()
        };
        X12StreamParser::parse_reader(input.as_bytes(), &config, &mut handler).unwrap();
        assert_eq!(handler.events()[1], "INTERCHANGE_START(ISA)");
        assert!(handler.events().contains(&"TRANSACTION_END".to_string()));
    }

    #[test]
    fn test_parse_reader_enforces_buffer_limit() {
        let input = format!(
            "{}GS*HS*SENDER*RECEIVER*20060501*1319*1*X*005010~ST*270*0001~BGM~SE*3*0001~GE*1*1~IEA*1*000000001~",
            isa_header(b'~')
        );
        let mut handler = EventCollector::new();
        let config = ParserConfig {
            chunk_size: 16,
            max_buffer_size: 32,
            ..ParserConfig::default()
        };
        let err = X12StreamParser::parse_reader(input.as_bytes(), &config, &mut handler).unwrap_err();
        assert!(matches!(err, TokenizeError::BufferLimitExceeded { .. }));
    }

    mod fuzz {
        use super::*;
        use proptest::prelude::*;

        struct FuzzHandler {
            segment_count: usize,
        }

        impl X12Handler for FuzzHandler {
            fn on_segment(&mut self, _seg: &RawSegment) -> Control {
                self.segment_count += 1;
                if self.segment_count > 10_000 {
                    Control::Stop
                } else {
                    Control::Continue
                }
            }
        }

        proptest! {
            #[test]
            fn parser_never_panics_on_arbitrary_input(input in proptest::collection::vec(any::<u8>(), 0..1024)) {
                let mut handler = FuzzHandler { segment_count: 0 };
                let _ = X12StreamParser::parse(&input, &mut handler);
            }

            #[test]
            fn parser_never_panics_on_ascii_input(input in "[A-Z0-9*:^~ \n\r]{0,512}") {
                let mut handler = FuzzHandler { segment_count: 0 };
                let _ = X12StreamParser::parse(input.as_bytes(), &mut handler);
            }
        }
    }
}
