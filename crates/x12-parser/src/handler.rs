use x12_types::{Control, Delimiters, RawSegment};

use crate::TokenizeError;

/// Trait for handling X12 tokenization events.
///
/// All methods have default no-op implementations, so implementors only
/// need to override the callbacks they care about. Mirrors the envelope
/// nesting in spec.md §3: Interchange (ISA/IEA) > Functional group (GS/GE)
/// > Transaction set (ST/SE).
pub trait X12Handler {
    /// Called once delimiters are probed from the ISA header.
    fn on_delimiters(&mut self, _delimiters: &Delimiters) {}

    /// Called when an interchange begins (ISA segment).
    fn on_interchange_start(&mut self, _isa: &RawSegment) -> Control {
        Control::Continue
    }

    /// Called when a functional group begins (GS segment).
    fn on_group_start(&mut self, _gs: &RawSegment) -> Control {
        Control::Continue
    }

    /// Called when a transaction set begins (ST segment).
    fn on_transaction_start(&mut self, _st: &RawSegment) -> Control {
        Control::Continue
    }

    /// Called for every segment in the interchange, including envelope
    /// segments (ISA, GS, ST, SE, GE, IEA).
    fn on_segment(&mut self, _segment: &RawSegment) -> Control {
        Control::Continue
    }

    /// Called when a transaction set ends (SE segment).
    fn on_transaction_end(&mut self, _se: &RawSegment) {}

    /// Called when a functional group ends (GE segment).
    fn on_group_end(&mut self, _ge: &RawSegment) {}

    /// Called when an interchange ends (IEA segment).
    fn on_interchange_end(&mut self, _iea: &RawSegment) {}

    /// Called when a tokenization error occurs. Return `Control::Continue`
    /// to attempt recovery, or `Control::Stop` to abort.
    fn on_error(&mut self, _error: TokenizeError) -> Control {
        Control::Stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use x12_types::SegmentPosition;

    struct RecordingHandler {
        events: Vec<String>,
    }

    impl RecordingHandler {
        fn new() -> Self {
            Self { events: Vec::new() }
        }
    }

    impl X12Handler for RecordingHandler {
        fn on_delimiters(&mut self, _delimiters: &Delimiters) {
            self.events.push("delimiters".to_string());
        }

        fn on_interchange_start(&mut self, isa: &RawSegment) -> Control {
            self.events.push(format!("interchange_start({})", isa.id));
            Control::Continue
        }

        fn on_transaction_start(&mut self, st: &RawSegment) -> Control {
            self.events.push(format!("transaction_start({})", st.id));
            Control::Continue
        }

        fn on_segment(&mut self, segment: &RawSegment) -> Control {
            self.events.push(format!("segment({})", segment.id));
            Control::Continue
        }
    }

    #[test]
    fn test_default_handler_compiles() {
        struct EmptyHandler;
        impl X12Handler for EmptyHandler {}

        let mut handler = EmptyHandler;
        let pos = SegmentPosition::new(1, 0, 0);
        let seg = RawSegment::new("ISA", vec![], pos);

        handler.on_delimiters(&Delimiters::default());
        assert_eq!(handler.on_interchange_start(&seg), Control::Continue);
        assert_eq!(handler.on_transaction_start(&seg), Control::Continue);
        assert_eq!(handler.on_segment(&seg), Control::Continue);
        handler.on_transaction_end(&seg);
        handler.on_interchange_end(&seg);
    }

    #[test]
    fn test_recording_handler() {
        let mut handler = RecordingHandler::new();
        let pos = SegmentPosition::new(1, 0, 0);

        handler.on_delimiters(&Delimiters::default());
        handler.on_interchange_start(&RawSegment::new("ISA", vec![], pos));
        handler.on_segment(&RawSegment::new("ISA", vec![], pos));

        assert_eq!(handler.events.len(), 3);
        assert_eq!(handler.events[0], "delimiters");
        assert_eq!(handler.events[1], "interchange_start(ISA)");
        assert_eq!(handler.events[2], "segment(ISA)");
    }

    #[test]
    fn test_handler_stop_control() {
        struct StopOnSecondSegment {
            count: usize,
        }
        impl X12Handler for StopOnSecondSegment {
            fn on_segment(&mut self, _segment: &RawSegment) -> Control {
                self.count += 1;
                if self.count >= 2 {
                    Control::Stop
                } else {
                    Control::Continue
                }
            }
        }

        let mut handler = StopOnSecondSegment { count: 0 };
        let pos = SegmentPosition::new(1, 0, 1);

        assert_eq!(
            handler.on_segment(&RawSegment::new("HL", vec![], pos)),
            Control::Continue
        );
        assert_eq!(
            handler.on_segment(&RawSegment::new("NM1", vec![], pos)),
            Control::Stop
        );
    }
}
