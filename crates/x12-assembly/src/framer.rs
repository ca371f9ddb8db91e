//! Interchange Framer (spec.md §4.9): walks the ISA > GS > ST > SE > GE >
//! IEA envelope nesting via the streaming tokenizer and slices the flat
//! segment stream into one [`FramedTransaction`] per ST..SE pair.
//!
//! This is purely structural — it does not touch the schema registry or
//! the loop dispatcher. Binding a `FramedTransaction` to a
//! `TransactionSchema` and assembling its `TransactionModel` is
//! `engine`'s job (spec.md §4.4-§4.6), so that a caller who only wants
//! segment boundaries (the CLI's `-s` mode) can stop here.

use x12_parser::{X12Handler, X12StreamParser, TokenizeError};
use x12_schema::segment::OwnedSegment;
use x12_types::{Control, Delimiters, RawSegment};

/// One transaction set (ST..SE), with envelope bookkeeping the engine
/// needs to populate `TransactionModel` but that isn't part of the loop
/// tree itself.
#[derive(Debug, Clone)]
pub struct FramedTransaction {
    pub transaction_code: String,
    pub implementation_version: String,
    pub control_number: String,
    /// SE01, parsed as an integer if it typed cleanly.
    pub segment_count_expected: Option<i64>,
    /// Count of segments from ST through SE inclusive.
    pub segment_count_actual: u32,
    /// Body segments strictly between ST and SE (ST/SE excluded).
    pub segments: Vec<OwnedSegment>,
}

/// Delimiters plus every transaction set found in the interchange.
#[derive(Debug, Clone)]
pub struct FramedInterchange {
    pub delimiters: Delimiters,
    pub transactions: Vec<FramedTransaction>,
}

/// Tokenizes `input` and slices it into framed transaction sets.
pub fn frame(input: &[u8]) -> Result<FramedInterchange, TokenizeError> {
    let mut handler = FramingHandler::default();
    X12StreamParser::parse(input, &mut handler)?;
    Ok(FramedInterchange {
        delimiters: handler.delimiters,
        transactions: handler.transactions,
    })
}

#[derive(Default)]
struct FramingHandler {
    delimiters: Delimiters,
    pending_code: String,
    pending_version: String,
    pending_control_number: String,
    current_segments: Vec<OwnedSegment>,
    transactions: Vec<FramedTransaction>,
}

impl X12Handler for FramingHandler {
    fn on_delimiters(&mut self, delimiters: &Delimiters) {
        self.delimiters = *delimiters;
    }

    fn on_transaction_start(&mut self, st: &RawSegment) -> Control {
        self.pending_code = st.get_element(0).to_string();
        self.pending_version = st.get_element(2).to_string();
        self.pending_control_number = st.get_element(1).to_string();
        self.current_segments = Vec::new();
        Control::Continue
    }

    fn on_segment(&mut self, segment: &RawSegment) -> Control {
        if segment.position.transaction_number == 0 {
            return Control::Continue;
        }
        let id = segment.id.to_ascii_uppercase();
        if id == "ST" || id == "SE" {
            return Control::Continue;
        }
        self.current_segments.push(OwnedSegment::from(segment));
        Control::Continue
    }

    fn on_transaction_end(&mut self, se: &RawSegment) {
        let segment_count_expected = se.get_element(0).parse::<i64>().ok();
        let segment_count_actual = self.current_segments.len() as u32 + 2;
        self.transactions.push(FramedTransaction {
            transaction_code: std::mem::take(&mut self.pending_code),
            implementation_version: std::mem::take(&mut self.pending_version),
            control_number: std::mem::take(&mut self.pending_control_number),
            segment_count_expected,
            segment_count_actual,
            segments: std::mem::take(&mut self.current_segments),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn isa_header(term: u8) -> String {
        let mut isa = vec![b' '; x12_types::ISA_LENGTH];
        isa[0..3].copy_from_slice(b"ISA");
        isa[3] = b'*';
        isa[82] = b'^';
        isa[104] = b':';
        isa[105] = term;
        String::from_utf8(isa).unwrap()
    }

    #[test]
    fn test_frame_single_transaction() {
        let input = format!(
            "{}GS*HS*SENDER*RECEIVER*20060501*1319*1*X*005010~ST*270*0001*005010X279A1~HL*1**20*1~SE*3*0001~GE*1*1~IEA*1*000000001~",
            isa_header(b'~')
        );
        let framed = frame(input.as_bytes()).unwrap();
        assert_eq!(framed.transactions.len(), 1);
        let txn = &framed.transactions[0];
        assert_eq!(txn.transaction_code, "270");
        assert_eq!(txn.implementation_version, "005010X279A1");
        assert_eq!(txn.control_number, "0001");
        assert_eq!(txn.segment_count_expected, Some(3));
        assert_eq!(txn.segment_count_actual, 3);
        assert_eq!(txn.segments.len(), 1);
        assert_eq!(txn.segments[0].id, "HL");
    }

    #[test]
    fn test_frame_multiple_transactions_in_one_group() {
        let input = format!(
            "{}GS*HS~ST*270*0001~HL*1~SE*3*0001~ST*270*0002~HL*1~SE*3*0002~GE*2*1~IEA*1*1~",
            isa_header(b'~')
        );
        let framed = frame(input.as_bytes()).unwrap();
        assert_eq!(framed.transactions.len(), 2);
        assert_eq!(framed.transactions[0].control_number, "0001");
        assert_eq!(framed.transactions[1].control_number, "0002");
    }

    #[test]
    fn test_frame_propagates_tokenize_error() {
        let err = frame(b"GS*HS~").unwrap_err();
        assert!(matches!(err, TokenizeError::MalformedInterchange { .. }));
    }

    #[test]
    fn test_frame_custom_delimiters() {
        let mut isa = vec![b' '; x12_types::ISA_LENGTH];
        isa[0..3].copy_from_slice(b"ISA");
        isa[3] = b'|';
        isa[82] = b'^';
        isa[104] = b':';
        isa[105] = b'?';
        let header = String::from_utf8(isa).unwrap();
        let input = format!("{header}GS|HS?ST|270|0001?HL|1?SE|3|0001?GE|1|1?IEA|1|1?");
        let framed = frame(input.as_bytes()).unwrap();
        assert_eq!(framed.delimiters.element, b'|');
        assert_eq!(framed.delimiters.terminator, b'?');
        assert_eq!(framed.transactions.len(), 1);
    }
}
