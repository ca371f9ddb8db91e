/// Error when probing the ISA interchange header for delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsaParseError {
    /// The ISA header must be exactly 106 octets.
    InvalidLength { expected: usize, actual: usize },
    /// The header must start with `ISA`.
    InvalidPrefix,
}

impl std::fmt::Display for IsaParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "ISA header must be exactly {expected} octets, got {actual}")
            }
            Self::InvalidPrefix => write!(f, "ISA header must start with 'ISA'"),
        }
    }
}

impl std::error::Error for IsaParseError {}

/// X12 delimiter octets.
///
/// Four characters shape every segment downstream of the interchange
/// header: the element separator, the component (sub-element) separator,
/// the repetition separator, and the segment terminator. Unlike EDIFACT's
/// UNA, X12 never declares these via a short prefixed advice segment —
/// they are recovered from fixed byte offsets within the 106-octet ISA
/// segment itself (see [`Delimiters::from_isa`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiters {
    /// Data element separator (ISA offset 3; default `*`).
    pub element: u8,
    /// Component (sub-element) separator (ISA offset 104; default `:`).
    pub component: u8,
    /// Repetition separator (ISA11, inside the fixed header; default `^`).
    pub repetition: u8,
    /// Segment terminator (ISA offset 105; default `~`).
    pub terminator: u8,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Length in octets of the fixed-width ISA interchange header.
pub const ISA_LENGTH: usize = 106;

impl Delimiters {
    /// Standard X12 delimiters used when no ISA header has been probed yet.
    pub const STANDARD: Self = Self {
        element: b'*',
        component: b':',
        repetition: b'^',
        terminator: b'~',
    };

    /// Probe delimiters from a 106-octet ISA interchange header.
    ///
    /// Extracts the element separator from offset 3, the repetition
    /// separator from ISA11 (the last field of the fixed-width header,
    /// immediately preceding the component separator), the component
    /// separator from offset 104, and the segment terminator from offset
    /// 105.
    ///
    /// # Errors
    ///
    /// Returns an error if `isa` is not exactly [`ISA_LENGTH`] octets or
    /// does not start with `ISA`.
    pub fn from_isa(isa: &[u8]) -> Result<Self, IsaParseError> {
        if isa.len() != ISA_LENGTH {
            return Err(IsaParseError::InvalidLength {
                expected: ISA_LENGTH,
                actual: isa.len(),
            });
        }

        if &isa[0..3] != b"ISA" {
            return Err(IsaParseError::InvalidPrefix);
        }

        Ok(Self {
            element: isa[3],
            repetition: isa[82],
            component: isa[104],
            terminator: isa[105],
        })
    }

    /// Detect delimiters from the start of an interchange.
    ///
    /// Returns `(probed, delimiters)` where `probed` is `false` (and
    /// [`Self::STANDARD`] is returned) when the input is too short or does
    /// not begin with `ISA` — the caller decides whether that is fatal.
    pub fn detect(input: &[u8]) -> (bool, Self) {
        if input.len() >= ISA_LENGTH && &input[0..3] == b"ISA" {
            match Self::from_isa(&input[0..ISA_LENGTH]) {
                Ok(d) => (true, d),
                Err(_) => (false, Self::default()),
            }
        } else {
            (false, Self::default())
        }
    }
}

impl std::fmt::Display for Delimiters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "element={} component={} repetition={} terminator={}",
            self.element as char, self.component as char, self.repetition as char, self.terminator as char,
        )
    }
}
