//! Element schema and typed value coercion (spec.md §4.4).

use serde::{Deserialize, Serialize};

/// The type an element's raw string is coerced to per its segment schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    /// Alphanumeric string, length-checked.
    AlphaNumeric,
    /// Code value, optionally checked against an enumerated domain.
    Id,
    /// Integer with `n` implied decimal digits (N0...N9).
    Numeric { decimals: u8 },
    /// Decimal with an implied scale (R).
    Decimal,
    /// Calendar date (DT): `YYYYMMDD` or `YYMMDD`.
    Date,
    /// Time of day (TM): `HHMM` or `HHMMSS`.
    Time,
}

/// A typed element value, produced by [`type_element`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypedValue {
    String(String),
    Integer(i64),
    Decimal { mantissa: i64, scale: u8 },
    Date { year: i32, month: u8, day: u8 },
    Time { hour: u8, minute: u8, second: u8 },
}

/// Schema for a single element slot within a segment.
#[derive(Debug, Clone)]
pub struct ElementSchema {
    pub name: &'static str,
    pub element_type: ElementType,
    pub required: bool,
    pub min_length: usize,
    pub max_length: usize,
    pub enum_values: Option<&'static [&'static str]>,
}

impl ElementSchema {
    pub const fn an(name: &'static str, required: bool, min_length: usize, max_length: usize) -> Self {
        Self {
            name,
            element_type: ElementType::AlphaNumeric,
            required,
            min_length,
            max_length,
            enum_values: None,
        }
    }

    pub const fn id(name: &'static str, required: bool, values: &'static [&'static str]) -> Self {
        Self {
            name,
            element_type: ElementType::Id,
            required,
            min_length: 1,
            max_length: 3,
            enum_values: Some(values),
        }
    }

    pub const fn numeric(name: &'static str, required: bool, decimals: u8) -> Self {
        Self {
            name,
            element_type: ElementType::Numeric { decimals },
            required,
            min_length: 1,
            max_length: 18,
            enum_values: None,
        }
    }

    pub const fn decimal(name: &'static str, required: bool) -> Self {
        Self {
            name,
            element_type: ElementType::Decimal,
            required,
            min_length: 1,
            max_length: 18,
            enum_values: None,
        }
    }

    pub const fn date(name: &'static str, required: bool) -> Self {
        Self {
            name,
            element_type: ElementType::Date,
            required,
            min_length: 6,
            max_length: 8,
            enum_values: None,
        }
    }

    pub const fn time(name: &'static str, required: bool) -> Self {
        Self {
            name,
            element_type: ElementType::Time,
            required,
            min_length: 4,
            max_length: 6,
            enum_values: None,
        }
    }
}

/// Error coercing a raw element string to its typed value.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ElementTypeError {
    #[error("segment {segment_id} element {element_ordinal}: value '{raw_value}' is not a valid {expected_type} (expected {expected})")]
    InvalidFormat {
        segment_id: String,
        element_ordinal: usize,
        raw_value: String,
        expected_type: &'static str,
        expected: &'static str,
    },
    #[error("segment {segment_id} element {element_ordinal}: required value is missing")]
    MissingRequired { segment_id: String, element_ordinal: usize },
    #[error("segment {segment_id} element {element_ordinal}: length {actual} out of range [{min}, {max}]")]
    LengthOutOfRange {
        segment_id: String,
        element_ordinal: usize,
        actual: usize,
        min: usize,
        max: usize,
    },
}

/// Error when a coded element's value is not in its enumerated domain.
#[derive(Debug, Clone, thiserror::Error)]
#[error("segment {segment_id} element {element_ordinal}: value '{raw_value}' is not a recognized code")]
pub struct EnumDomainError {
    pub segment_id: String,
    pub element_ordinal: usize,
    pub raw_value: String,
}

/// Coerces a raw element string to its typed value per `schema`.
///
/// `segment_id`/`element_ordinal` are carried only for error reporting.
pub fn type_element(
    raw_value: &str,
    schema: &ElementSchema,
    segment_id: &str,
    element_ordinal: usize,
) -> Result<Option<TypedValue>, ElementTypeError> {
    if raw_value.is_empty() {
        if schema.required {
            return Err(ElementTypeError::MissingRequired {
                segment_id: segment_id.to_string(),
                element_ordinal,
            });
        }
        return Ok(None);
    }

    if raw_value.len() < schema.min_length || raw_value.len() > schema.max_length {
        return Err(ElementTypeError::LengthOutOfRange {
            segment_id: segment_id.to_string(),
            element_ordinal,
            actual: raw_value.len(),
            min: schema.min_length,
            max: schema.max_length,
        });
    }

    let value = match schema.element_type {
        ElementType::AlphaNumeric | ElementType::Id => TypedValue::String(raw_value.to_string()),
        ElementType::Numeric { decimals } => {
            let n: i64 = raw_value.parse().map_err(|_| ElementTypeError::InvalidFormat {
                segment_id: segment_id.to_string(),
                element_ordinal,
                raw_value: raw_value.to_string(),
                expected_type: "integer",
                expected: "N0..N9",
            })?;
            if decimals == 0 {
                TypedValue::Integer(n)
            } else {
                TypedValue::Decimal { mantissa: n, scale: decimals }
            }
        }
        ElementType::Decimal => parse_decimal(raw_value, segment_id, element_ordinal)?,
        ElementType::Date => parse_date(raw_value, segment_id, element_ordinal)?,
        ElementType::Time => parse_time(raw_value, segment_id, element_ordinal)?,
    };

    Ok(Some(value))
}

/// Checks a raw value against an element's enumerated domain, if any.
pub fn check_enum_domain(
    raw_value: &str,
    schema: &ElementSchema,
    segment_id: &str,
    element_ordinal: usize,
) -> Result<(), EnumDomainError> {
    if let Some(values) = schema.enum_values {
        if !raw_value.is_empty() && !values.contains(&raw_value) {
            return Err(EnumDomainError {
                segment_id: segment_id.to_string(),
                element_ordinal,
                raw_value: raw_value.to_string(),
            });
        }
    }
    Ok(())
}

fn parse_decimal(raw: &str, segment_id: &str, ordinal: usize) -> Result<TypedValue, ElementTypeError> {
    let invalid = || ElementTypeError::InvalidFormat {
        segment_id: segment_id.to_string(),
        element_ordinal: ordinal,
        raw_value: raw.to_string(),
        expected_type: "decimal",
        expected: "R",
    };

    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, raw),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, f),
        None => (unsigned, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part.chars().all(|c| c.is_ascii_digit()) || !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let int_value: i64 = if int_part.is_empty() { 0 } else { int_part.parse().map_err(|_| invalid())? };
    let scale = frac_part.len() as u8;
    let frac_value: i64 = if frac_part.is_empty() { 0 } else { frac_part.parse().map_err(|_| invalid())? };
    let mantissa = sign * (int_value * 10i64.pow(scale as u32) + frac_value);

    Ok(TypedValue::Decimal { mantissa, scale })
}

fn parse_date(raw: &str, segment_id: &str, ordinal: usize) -> Result<TypedValue, ElementTypeError> {
    let invalid = || ElementTypeError::InvalidFormat {
        segment_id: segment_id.to_string(),
        element_ordinal: ordinal,
        raw_value: raw.to_string(),
        expected_type: "date",
        expected: "YYYYMMDD or YYMMDD",
    };

    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let (year, month, day) = match raw.len() {
        8 => {
            let year: i32 = raw[0..4].parse().map_err(|_| invalid())?;
            let month: u8 = raw[4..6].parse().map_err(|_| invalid())?;
            let day: u8 = raw[6..8].parse().map_err(|_| invalid())?;
            (year, month, day)
        }
        6 => {
            let yy: i32 = raw[0..2].parse().map_err(|_| invalid())?;
            let year = if yy >= 70 { 1900 + yy } else { 2000 + yy };
            let month: u8 = raw[2..4].parse().map_err(|_| invalid())?;
            let day: u8 = raw[4..6].parse().map_err(|_| invalid())?;
            (year, month, day)
        }
        _ => return Err(invalid()),
    };

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }

    Ok(TypedValue::Date { year, month, day })
}

fn parse_time(raw: &str, segment_id: &str, ordinal: usize) -> Result<TypedValue, ElementTypeError> {
    let invalid = || ElementTypeError::InvalidFormat {
        segment_id: segment_id.to_string(),
        element_ordinal: ordinal,
        raw_value: raw.to_string(),
        expected_type: "time",
        expected: "HHMM or HHMMSS",
    };

    if !raw.chars().all(|c| c.is_ascii_digit()) || (raw.len() != 4 && raw.len() != 6) {
        return Err(invalid());
    }

    let hour: u8 = raw[0..2].parse().map_err(|_| invalid())?;
    let minute: u8 = raw[2..4].parse().map_err(|_| invalid())?;
    let second: u8 = if raw.len() == 6 { raw[4..6].parse().map_err(|_| invalid())? } else { 0 };

    if hour > 23 || minute > 59 || second > 59 {
        return Err(invalid());
    }

    Ok(TypedValue::Time { hour, minute, second })
}
