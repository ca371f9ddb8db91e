//! Fixed-point decimal arithmetic for exact monetary comparison (spec.md
//! §4.7: "Comparison is exact decimal"). Avoids floating point entirely so
//! that `charge - payment == sum(adjustments)` never suffers rounding
//! drift across differently-scaled R elements.

use x12_schema::element::{type_element, ElementSchema, TypedValue};

/// A decimal amount as `mantissa * 10^-scale`.
pub type Amount = (i64, u8);

/// Parses a raw R-typed element into an [`Amount`]. The segment registry
/// already validated element shape before a value reaches a validator, so
/// an empty or malformed amount is treated as zero rather than propagating
/// a typing error here.
pub fn parse_amount(raw: &str) -> Amount {
    let schema = ElementSchema::decimal("amount", false);
    match type_element(raw, &schema, "amount", 0) {
        Ok(Some(TypedValue::Decimal { mantissa, scale })) => (mantissa, scale),
        Ok(Some(TypedValue::Integer(n))) => (n, 0),
        _ => (0, 0),
    }
}

fn rescale(mantissa: i64, scale: u8, to_scale: u8) -> i64 {
    mantissa * 10i64.pow((to_scale - scale) as u32)
}

pub fn add(a: Amount, b: Amount) -> Amount {
    let scale = a.1.max(b.1);
    (rescale(a.0, a.1, scale) + rescale(b.0, b.1, scale), scale)
}

pub fn sub(a: Amount, b: Amount) -> Amount {
    add(a, (-b.0, b.1))
}

pub fn eq(a: Amount, b: Amount) -> bool {
    let scale = a.1.max(b.1);
    rescale(a.0, a.1, scale) == rescale(b.0, b.1, scale)
}

pub fn sum(amounts: impl IntoIterator<Item = Amount>) -> Amount {
    amounts.into_iter().fold((0, 0), add)
}

/// Renders an amount back to its decimal string form, for error messages.
pub fn format(amount: Amount) -> String {
    let (mantissa, scale) = amount;
    if scale == 0 {
        return mantissa.to_string();
    }
    let divisor = 10i64.pow(scale as u32);
    let whole = mantissa / divisor;
    let frac = (mantissa % divisor).abs();
    format!("{whole}.{frac:0width$}", width = scale as usize)
}
