use x12_types::Delimiters;

/// Tokenizes raw X12 byte input into segment strings, and segment strings
/// further into elements, repetitions, and components.
///
/// Unlike EDIFACT, X12 has no release/escape character — delimiters are
/// fixed octets that never appear in data, so tokenization is pure
/// byte-splitting with whitespace absorption between segments (spec.md
/// §4.2).
pub struct Tokenizer {
    delimiters: Delimiters,
}

impl Tokenizer {
    pub fn new(delimiters: Delimiters) -> Self {
        Self { delimiters }
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Splits raw input on the segment terminator, trimming ASCII
    /// whitespace (space, tab, CR, LF) around each segment so that
    /// line breaks between segments are absorbed.
    pub fn tokenize_segments<'a>(&self, input: &'a [u8]) -> SegmentIter<'a> {
        SegmentIter {
            input,
            pos: 0,
            terminator: self.delimiters.terminator,
        }
    }

    /// Splits a segment string (without its terminator) on the element
    /// separator. The first yielded item is the segment ID.
    pub fn tokenize_elements<'a>(&self, segment: &'a str) -> SplitIter<'a> {
        SplitIter {
            input: segment,
            pos: 0,
            separator: self.delimiters.element as char,
        }
    }

    /// Splits an element string on the repetition separator.
    pub fn tokenize_repetitions<'a>(&self, element: &'a str) -> SplitIter<'a> {
        SplitIter {
            input: element,
            pos: 0,
            separator: self.delimiters.repetition as char,
        }
    }

    /// Splits a repetition instance on the component separator.
    pub fn tokenize_components<'a>(&self, repetition: &'a str) -> SplitIter<'a> {
        SplitIter {
            input: repetition,
            pos: 0,
            separator: self.delimiters.component as char,
        }
    }
}

/// Iterator over segments in raw X12 input bytes.
pub struct SegmentIter<'a> {
    input: &'a [u8],
    pos: usize,
    terminator: u8,
}

fn is_ws(b: u8) -> bool {
    b == b'\r' || b == b'\n' || b == b' ' || b == b'\t'
}

impl<'a> Iterator for SegmentIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.input.len() && is_ws(self.input[self.pos]) {
            self.pos += 1;
        }

        if self.pos >= self.input.len() {
            return None;
        }

        let start = self.pos;
        let mut i = self.pos;

        while i < self.input.len() {
            if self.input[i] == self.terminator {
                let raw = &self.input[start..i];
                self.pos = i + 1;
                let trimmed = trim_ws(raw);
                if trimmed.is_empty() {
                    return self.next();
                }
                return Some(trimmed);
            }
            i += 1;
        }

        // No terminator before EOF: remaining bytes, if non-whitespace,
        // are a truncated segment. Callers distinguish this case by
        // checking whether the tokenizer consumed all input without a
        // trailing terminator.
        if start < self.input.len() {
            let raw = &self.input[start..];
            self.pos = self.input.len();
            let trimmed = trim_ws(raw);
            if trimmed.is_empty() {
                return None;
            }
            return Some(trimmed);
        }

        None
    }
}

fn trim_ws(bytes: &[u8]) -> &str {
    let s = std::str::from_utf8(bytes).unwrap_or("");
    s.trim_matches(|c: char| c == '\r' || c == '\n' || c == ' ' || c == '\t')
}

/// Generic single-byte-separator splitter shared by the element,
/// repetition, and component levels.
pub struct SplitIter<'a> {
    input: &'a str,
    pos: usize,
    separator: char,
}

impl<'a> Iterator for SplitIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.input.len() {
            return None;
        }

        let start = self.pos;
        let bytes = self.input.as_bytes();
        let mut i = self.pos;

        while i < bytes.len() {
            if bytes[i] as char == self.separator {
                let piece = &self.input[start..i];
                self.pos = i + 1;
                return Some(piece);
            }
            i += 1;
        }

        if start <= self.input.len() {
            let piece = &self.input[start..];
            self.pos = self.input.len() + 1;
            return Some(piece);
        }

        None
    }
}
