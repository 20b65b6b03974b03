//! Payload-to-record normalization

use std::sync::OnceLock;

use chrono::Utc;
use regex::Regex;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::catalog::EntitySpec;

use super::errors::{NormalizeError, NormalizeResult};

/// Plausible Brazilian tax id: 11 digits (CPF) or 14 digits (CNPJ)
fn tax_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d{11}|\d{14})$").expect("valid tax id pattern"))
}

/// Reduce a tax id to digits when the stripped form is a plausible
/// CPF/CNPJ; anything else is kept verbatim.
pub fn normalize_tax_id(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | '/' | ' '))
        .collect();

    if tax_id_pattern().is_match(&stripped) {
        stripped
    } else {
        raw.to_string()
    }
}

/// Copy every recognized alias of `payload` onto its canonical column.
/// Unrecognized keys are dropped. Natural-key values get tax-id
/// normalization so stored values agree with translated filters.
pub fn project_known(entity: &EntitySpec, payload: &Map<String, Value>) -> Map<String, Value> {
    let mut columns = Map::new();

    for (key, value) in payload {
        if let Some(field) = entity.map_field(key) {
            let value = if field.column == entity.natural_key {
                match value.as_str() {
                    Some(s) => Value::String(normalize_tax_id(s)),
                    None => value.clone(),
                }
            } else {
                value.clone()
            };
            columns.insert(field.column.to_string(), value);
        }
    }

    columns
}

/// Build the storage record for CreateRecord.
///
/// A caller-supplied `record_id` is kept only when it is a well-formed
/// UUID; otherwise the store generates one. Missing mandatory identity
/// fields reject the create (fail-closed, unlike filter translation).
pub fn normalize_for_create(
    entity: &EntitySpec,
    record_id: Option<&str>,
    payload: &Value,
) -> NormalizeResult<Value> {
    let payload = payload.as_object().ok_or(NormalizeError::NotAnObject)?;

    let mut record = project_known(entity, payload);
    record.retain(|column, _| {
        entity
            .field_by_column(column)
            .map(|f| f.createable)
            .unwrap_or(false)
    });

    if let Some(rid) = record_id {
        if Uuid::parse_str(rid).is_ok() {
            record.insert("id".to_string(), Value::String(rid.to_string()));
        }
    }

    for column in entity.required_columns() {
        let present = record.get(column).map(|v| !v.is_null()).unwrap_or(false);
        if !present {
            let name = entity
                .field_by_column(column)
                .map(|f| f.protocol_name)
                .unwrap_or(column);
            return Err(NormalizeError::MissingRequiredField(name.to_string()));
        }
    }

    let now = Utc::now().to_rfc3339();
    record.insert("created_at".to_string(), Value::String(now.clone()));
    record.insert("updated_at".to_string(), Value::String(now));

    Ok(Value::Object(record))
}

/// Build the change set for PatchRecord.
///
/// Only keys present in the payload are copied; `id` and `created_at` are
/// never overwritten; `updated_at` is always refreshed.
pub fn normalize_for_patch(entity: &EntitySpec, payload: &Value) -> NormalizeResult<Value> {
    let payload = payload.as_object().ok_or(NormalizeError::NotAnObject)?;

    let mut changes = project_known(entity, payload);
    changes.retain(|column, _| {
        entity
            .field_by_column(column)
            .map(|f| f.updateable)
            .unwrap_or(false)
    });

    changes.insert(
        "updated_at".to_string(),
        Value::String(Utc::now().to_rfc3339()),
    );

    Ok(Value::Object(changes))
}
