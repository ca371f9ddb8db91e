//! `POST /x12` (spec.md §6, §S.5): the single HTTP entry point.

use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use x12_assembly::{engine, model::TransactionModel};
use x12_schema::registry;

use crate::error::ApiError;

const RESPONSE_TYPE_HEADER: &str = "lfh-x12-response";

#[derive(Debug, Deserialize)]
pub struct X12Request {
    pub x12: String,
}

pub async fn post_x12(headers: HeaderMap, Json(request): Json<X12Request>) -> Result<Json<Vec<Value>>, ApiError> {
    let wants_segments = headers
        .get(RESPONSE_TYPE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("segments"))
        .unwrap_or(false);

    let body = if wants_segments { segments(&request.x12)? } else { models(&request.x12)? };
    Ok(Json(body))
}

fn segments(x12: &str) -> Result<Vec<Value>, ApiError> {
    let raw = engine::parse_segments(x12.as_bytes()).map_err(|_| ApiError::InvalidX12)?;
    Ok(raw
        .into_iter()
        .map(|(id, elements)| {
            let mut row = serde_json::Map::new();
            for (i, repetitions) in elements.into_iter().enumerate() {
                let key = format!("{id}{i:02}");
                let value = match repetitions.len() {
                    0 => Value::Null,
                    1 => Value::String(repetitions.into_iter().next().unwrap()),
                    _ => Value::Array(repetitions.into_iter().map(Value::String).collect()),
                };
                row.insert(key, value);
            }
            Value::Object(row)
        })
        .collect())
}

fn models(x12: &str) -> Result<Vec<Value>, ApiError> {
    let results = engine::parse(x12.as_bytes()).map_err(|_| ApiError::InvalidX12)?;
    results
        .into_iter()
        .map(|result| {
            let model = result.map_err(|_| ApiError::InvalidX12)?;
            validate(&model)?;
            serde_json::to_value(&model).map_err(|_| ApiError::InvalidX12)
        })
        .collect()
}

fn validate(model: &TransactionModel) -> Result<(), ApiError> {
    let schema = registry::lookup(&model.transaction_code, &model.implementation_version)
        .or_else(|| registry::lookup_any_version(&model.transaction_code))
        .ok_or(ApiError::InvalidX12)?;
    x12_validation::validate(model, schema.validators).map_err(|_| ApiError::InvalidX12)
}
