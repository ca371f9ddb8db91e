//! Segment-mode and model-mode JSON rendering (spec.md §S.4).

use serde_json::{json, Map, Value};
use x12_types::Delimiters;

/// Tokenize-only segment dump (`-s`): each segment becomes an object keyed
/// by `{segment_id}{index:02}` per element, following the original CLI's
/// `f"{segment_name}{i:02}"` scheme.
pub fn segments(source: &[u8]) -> Result<Value, String> {
    let raw = x12_assembly::engine::parse_segments(source).map_err(|e| e.to_string())?;
    let rows = raw
        .iter()
        .map(|(id, elements)| {
            let mut row = Map::new();
            for (i, repetitions) in elements.iter().enumerate() {
                let key = format!("{id}{i:02}");
                let value = match repetitions.len() {
                    0 => Value::Null,
                    1 => Value::String(repetitions[0].clone()),
                    _ => Value::Array(repetitions.iter().cloned().map(Value::String).collect()),
                };
                row.insert(key, value);
            }
            Value::Object(row)
        })
        .collect();
    Ok(Value::Array(rows))
}

/// Parse-and-validate model dump (`-m`, the default): one JSON object per
/// transaction set, validated against its schema's registered validators.
pub fn models(source: &[u8], exclude_none: bool, include_delimiters: bool) -> Result<Value, String> {
    let framed = x12_assembly::framer::frame(source).map_err(|e| e.to_string())?;
    let results = x12_assembly::engine::parse(source).map_err(|e| e.to_string())?;

    let mut rows = Vec::with_capacity(results.len());
    for result in results {
        let model = result.map_err(|e| e.to_string())?;
        let schema = x12_schema::registry::lookup(&model.transaction_code, &model.implementation_version)
            .or_else(|| x12_schema::registry::lookup_any_version(&model.transaction_code))
            .ok_or_else(|| {
                format!(
                    "no schema registered for {} {}",
                    model.transaction_code, model.implementation_version
                )
            })?;
        x12_validation::validate(&model, schema.validators).map_err(|failure| {
            let details: Vec<String> = failure.errors().iter().map(|e| e.to_string()).collect();
            format!("validation failed: {}", details.join("; "))
        })?;

        let mut value = serde_json::to_value(&model).map_err(|e| e.to_string())?;
        if exclude_none {
            strip_nulls(&mut value);
        }
        if include_delimiters {
            if let Value::Object(ref mut map) = value {
                map.insert("delimiters".to_string(), delimiters_json(&framed.delimiters));
            }
        }
        rows.push(value);
    }
    Ok(Value::Array(rows))
}

fn delimiters_json(d: &Delimiters) -> Value {
    json!({
        "element": (d.element as char).to_string(),
        "component": (d.component as char).to_string(),
        "repetition": (d.repetition as char).to_string(),
        "terminator": (d.terminator as char).to_string(),
    })
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            for v in map.values_mut() {
                strip_nulls(v);
            }
        }
        Value::Array(items) => {
            for v in items.iter_mut() {
                strip_nulls(v);
            }
        }
        _ => {}
    }
}
