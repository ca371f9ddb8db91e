//! Parser configuration (spec.md §9 Open Question on whitespace strictness;
//! grounded on `09ff0a84_..._reviver-edi_parser.rs`'s `ParserConfig` and
//! `zahash-x12/host`'s `ChunkedParseConfig` buffer-doubling scheme).

/// Tunables for [`crate::X12StreamParser`].
///
/// The CLI and HTTP shim construct this from defaults; there is no
/// file-based configuration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Read increment used by [`crate::X12StreamParser::parse_reader`].
    pub chunk_size: usize,
    /// When `true`, whitespace between segments is rejected instead of
    /// absorbed (resolves spec.md §9's Open Question; default `false`).
    pub strict_whitespace: bool,
    /// Upper bound on the buffer `parse_reader` accumulates before giving
    /// up with [`crate::error::TokenizeError::BufferLimitExceeded`].
    pub max_buffer_size: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1024 * 1024,
            strict_whitespace: false,
            max_buffer_size: 64 * 1024 * 1024,
        }
    }
}
