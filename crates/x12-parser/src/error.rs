use x12_types::SegmentPosition;

/// Errors raised by the delimiter probe and segment tokenizer.
///
/// This is the structural-error layer (spec.md §7, items 1-2): failures the
/// tokenizer itself can detect, before any schema or typing is involved.
#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
    /// The ISA header is missing, too short, or does not start with `ISA`.
    #[error("malformed interchange header at byte {offset}: {reason}")]
    MalformedInterchange { offset: usize, reason: String },

    /// EOF arrived in the middle of a segment (no terminator seen).
    #[error("truncated segment at byte {offset}")]
    TruncatedSegment { offset: usize },

    /// The input contains invalid UTF-8.
    #[error("invalid UTF-8 at byte {offset}: {source}")]
    InvalidUtf8 {
        offset: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    /// A segment ID could not be determined (empty segment between
    /// terminators).
    #[error("empty segment ID at byte {offset}")]
    EmptySegmentId { offset: usize },

    /// Handler returned `Control::Stop`.
    #[error("parsing stopped by handler at {position}")]
    StoppedByHandler { position: SegmentPosition },

    /// I/O failure reading the underlying source.
    #[error("I/O error reading X12 source: {0}")]
    Io(#[from] std::io::Error),

    /// Whitespace found between segments while `ParserConfig::strict_whitespace`
    /// is enabled.
    #[error("unexpected whitespace between segments at byte {offset}")]
    StrictWhitespaceViolation { offset: usize },

    /// `parse_reader` accumulated more than `ParserConfig::max_buffer_size`
    /// bytes without completing the interchange.
    #[error("input exceeded the configured buffer limit of {limit} bytes")]
    BufferLimitExceeded { limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_error_display_malformed() {
        let err = TokenizeError::MalformedInterchange {
            offset: 0,
            reason: "missing ISA prefix".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed interchange header at byte 0: missing ISA prefix"
        );
    }

    #[test]
    fn test_tokenize_error_display_truncated() {
        let err = TokenizeError::TruncatedSegment { offset: 42 };
        assert_eq!(err.to_string(), "truncated segment at byte 42");
    }

    #[test]
    fn test_tokenize_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TokenizeError>();
    }
}
