// ABOUTME: Versioned JSON envelope for persisted values and legacy migration
// ABOUTME: Bare pre-envelope values are treated as version 0 and upgraded on read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Local, TimeZone};
use fitlog_core::constants::{schema, storage_keys};
use fitlog_core::errors::{AppError, AppResult, ErrorCode};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Wrap `data` in the current schema envelope
///
/// # Errors
///
/// Returns `SerializationError` if `data` cannot be encoded
pub fn encode<T: Serialize + ?Sized>(data: &T) -> AppResult<String> {
    let payload = serde_json::to_value(data).map_err(encode_error)?;
    let mut envelope = Map::new();
    envelope.insert(
        schema::VERSION_FIELD.to_owned(),
        Value::from(schema::CURRENT_VERSION),
    );
    envelope.insert(schema::DATA_FIELD.to_owned(), payload);
    serde_json::to_string(&Value::Object(envelope)).map_err(encode_error)
}

fn encode_error(error: serde_json::Error) -> AppError {
    AppError::new(
        ErrorCode::SerializationError,
        format!("failed to encode value: {error}"),
    )
    .with_source(error)
}

/// Parse a stored value and return its payload upgraded to the current version
///
/// # Errors
///
/// Returns `CorruptData` if `raw` is not JSON, the envelope is malformed, or
/// the value was written by a newer schema version
pub fn decode(key: &str, raw: &str) -> AppResult<Value> {
    let parsed: Value = serde_json::from_str(raw)
        .map_err(|e| AppError::corrupt_data(key, format!("invalid JSON: {e}")))?;

    let (version, data) = split_envelope(key, parsed)?;
    if version > schema::CURRENT_VERSION {
        return Err(AppError::corrupt_data(
            key,
            format!(
                "written by schema version {version}, newest supported is {}",
                schema::CURRENT_VERSION
            ),
        ));
    }

    if version == schema::LEGACY_VERSION {
        debug!(key = key, "Migrating legacy value to current schema");
        return Ok(migrate_legacy(key, data));
    }
    Ok(data)
}

fn split_envelope(key: &str, parsed: Value) -> AppResult<(u32, Value)> {
    let Value::Object(mut object) = parsed else {
        return Ok((schema::LEGACY_VERSION, parsed));
    };
    if !object.contains_key(schema::VERSION_FIELD) {
        return Ok((schema::LEGACY_VERSION, Value::Object(object)));
    }

    let version = object
        .get(schema::VERSION_FIELD)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| AppError::corrupt_data(key, "schema version is not a number"))?;
    let data = object
        .remove(schema::DATA_FIELD)
        .ok_or_else(|| AppError::corrupt_data(key, "envelope has no data field"))?;
    Ok((version, data))
}

fn migrate_legacy(key: &str, data: Value) -> Value {
    if key != storage_keys::MEALS {
        return data;
    }
    let Value::Array(meals) = data else {
        return data;
    };

    let before = meals.len();
    let migrated: Vec<Value> = meals
        .into_iter()
        .filter_map(|meal| migrate_legacy_meal(meal, &Local))
        .collect();
    let dropped = before - migrated.len();
    if dropped > 0 {
        warn!(
            key = key,
            dropped = dropped,
            "Dropped legacy meals with no recoverable date"
        );
    }
    Value::Array(migrated)
}

/// Legacy meals may lack `date`; their id is the creation timestamp in
/// milliseconds, which supplies the calendar day in `zone`
fn migrate_legacy_meal<Tz: TimeZone>(meal: Value, zone: &Tz) -> Option<Value> {
    let Value::Object(mut fields) = meal else {
        return Some(meal);
    };
    if fields.get("date").is_some_and(Value::is_string) {
        return Some(Value::Object(fields));
    }

    let created = fields
        .get("id")
        .and_then(Value::as_i64)
        .and_then(DateTime::from_timestamp_millis)?;
    fields.insert(
        "date".to_owned(),
        Value::String(
            created
                .with_timezone(zone)
                .date_naive()
                .format("%Y-%m-%d")
                .to_string(),
        ),
    );
    Some(Value::Object(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_wraps_in_envelope() {
        let encoded = encode(&vec![1, 2, 3]).unwrap();
        let value: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value, json!({"schema_version": 1, "data": [1, 2, 3]}));
    }

    #[test]
    fn test_bare_value_is_legacy() {
        let data = decode("weights", r#"[{"date":"2024-03-01","value":72.5}]"#).unwrap();
        assert_eq!(data, json!([{"date": "2024-03-01", "value": 72.5}]));
    }

    #[test]
    fn test_newer_version_rejected() {
        let err = decode("weights", r#"{"schema_version":7,"data":[]}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::CorruptData);
    }

    #[test]
    fn test_legacy_meal_gets_date_from_id() {
        // 2024-03-04T12:00:00Z
        let raw = r#"[{"id":1709553600000,"name":"Oatmeal","calories":150,"type":"breakfast"},
                      {"name":"Orphan","calories":10,"type":"snack"}]"#;
        let data = decode("meals", raw).unwrap();
        let meals = data.as_array().unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0]["date"], json!("2024-03-04"));
    }

    #[test]
    fn test_legacy_meal_date_uses_local_day() {
        // 2024-03-04T23:30:00Z is already the morning of March 5th at +09:00
        let tokyo = chrono::FixedOffset::east_opt(9 * 3600).unwrap();
        let meal = json!({"id": 1_709_595_000_000_i64, "name": "Toast", "type": "breakfast"});

        let migrated = migrate_legacy_meal(meal.clone(), &tokyo).unwrap();
        assert_eq!(migrated["date"], json!("2024-03-05"));

        let migrated = migrate_legacy_meal(meal, &chrono::Utc).unwrap();
        assert_eq!(migrated["date"], json!("2024-03-04"));
    }

    #[test]
    fn test_garbage_is_corrupt() {
        let err = decode("meals", "not json at all").unwrap_err();
        assert_eq!(err.code, ErrorCode::CorruptData);
    }
}
