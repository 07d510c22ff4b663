// ABOUTME: Field format validation turning raw JSON values into typed statement parameters
// ABOUTME: Fails fast in schema order with a field-specific message per rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Field validator
//!
//! Every present field is checked against its [`FieldRule`] before any
//! store access happens. The first failure in schema order is returned.

use super::diff::FieldChange;
use super::schema::{EntitySchema, FieldRule, FieldSpec};
use crate::database_plugins::SqlValue;
use crate::errors::{AppError, AppResult, ErrorCode};
use chrono::{NaiveDate, NaiveTime};
use serde_json::{Map, Value};

/// A validated field ready to be bound
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Schema entry
    pub field: &'static FieldSpec,
    /// Typed parameter value
    pub value: SqlValue,
}

/// Validate an update diff
///
/// # Errors
///
/// Returns an invalid-input error for the first field, in schema order,
/// whose value breaks its rule
pub fn validate_changes(changes: &[FieldChange<'_>]) -> AppResult<Vec<Assignment>> {
    changes
        .iter()
        .map(|change| validate_field(change.field, change.value))
        .collect()
}

/// Validate a create payload
///
/// Creatable fields are walked in schema order; a required field that is
/// absent or `null` fails at its position, so earlier malformed fields are
/// reported first.
///
/// # Errors
///
/// Returns a missing-field error or an invalid-input error for the first
/// offending field
pub fn validate_new(
    schema: &EntitySchema,
    payload: &Map<String, Value>,
) -> AppResult<Vec<Assignment>> {
    let mut assignments = Vec::new();
    for field in schema.fields.iter().filter(|f| f.creatable) {
        match payload.get(field.key) {
            None | Some(Value::Null) if field.required => {
                return Err(missing(field, schema.messages.missing_fields));
            }
            None => {}
            Some(value) => assignments.push(validate_field(field, value)?),
        }
    }
    Ok(assignments)
}

/// Validate one present value
///
/// # Errors
///
/// Returns an invalid-input error when the value breaks the field's rule,
/// or a missing-field error for `null` on a non-nullable field
pub fn validate_field(field: &'static FieldSpec, value: &Value) -> AppResult<Assignment> {
    if value.is_null() {
        if field.nullable {
            return Ok(Assignment {
                field,
                value: null_for(field.rule),
            });
        }
        return Err(missing(field, None));
    }

    let parsed = match field.rule {
        FieldRule::Text { min_len } => value
            .as_str()
            .map(str::trim)
            .filter(|s| s.chars().count() >= min_len.max(1))
            .map(|s| SqlValue::Text(Some(s.to_owned()))),
        FieldRule::FreeText => value.as_str().map(|s| SqlValue::Text(Some(s.to_owned()))),
        FieldRule::Email => value
            .as_str()
            .map(str::trim)
            .filter(|s| is_valid_email(s))
            .map(|s| SqlValue::Text(Some(s.to_owned()))),
        FieldRule::Date => value
            .as_str()
            .and_then(parse_date)
            .map(|d| SqlValue::Date(Some(d))),
        FieldRule::TimeOfDay => value
            .as_str()
            .and_then(parse_time_of_day)
            .map(|t| SqlValue::Time(Some(t))),
        FieldRule::OneOf(allowed) => value
            .as_str()
            .filter(|s| allowed.contains(s))
            .map(|s| SqlValue::Text(Some(s.to_owned()))),
        FieldRule::Number => parse_number(value).map(|n| SqlValue::Real(Some(n))),
        FieldRule::Integer | FieldRule::ForeignKey(_) => {
            parse_integer(value).map(|n| SqlValue::Integer(Some(n)))
        }
        FieldRule::Boolean => value.as_bool().map(|b| SqlValue::Boolean(Some(b))),
    };

    parsed
        .map(|value| Assignment { field, value })
        .ok_or_else(|| AppError::invalid_field(field.key, invalid_message(field)))
}

fn missing(field: &FieldSpec, entity_message: Option<&str>) -> AppError {
    match field.missing_message.or(entity_message) {
        Some(message) => {
            AppError::new(ErrorCode::MissingRequiredField, message).with_field(field.key)
        }
        None => AppError::missing_field(field.key),
    }
}

fn invalid_message(field: &FieldSpec) -> String {
    if let Some(message) = field.invalid_message {
        return message.to_owned();
    }
    let key = field.key;
    match field.rule {
        FieldRule::Text { min_len } if min_len > 1 => {
            format!("{key} debe tener al menos {min_len} caracteres")
        }
        FieldRule::Text { .. } => format!("{key} no puede estar vacío"),
        FieldRule::FreeText => format!("{key} debe ser texto"),
        FieldRule::Email => format!("{key} debe ser un email válido"),
        FieldRule::Date => format!("{key} debe tener formato YYYY-MM-DD"),
        FieldRule::TimeOfDay => format!("{key} debe tener formato HH:MM"),
        FieldRule::OneOf(allowed) => {
            format!("{key} inválido. Valores válidos: {}", allowed.join(", "))
        }
        FieldRule::Number => format!("{key} debe ser un número"),
        FieldRule::Integer => format!("{key} debe ser un número entero"),
        FieldRule::Boolean => format!("{key} debe ser verdadero o falso"),
        FieldRule::ForeignKey(_) => format!("{key} inválido"),
    }
}

/// Typed `NULL` matching the column a rule writes to
const fn null_for(rule: FieldRule) -> SqlValue {
    match rule {
        FieldRule::Text { .. } | FieldRule::FreeText | FieldRule::Email | FieldRule::OneOf(_) => {
            SqlValue::Text(None)
        }
        FieldRule::Date => SqlValue::Date(None),
        FieldRule::TimeOfDay => SqlValue::Time(None),
        FieldRule::Number => SqlValue::Real(None),
        FieldRule::Integer | FieldRule::ForeignKey(_) => SqlValue::Integer(None),
        FieldRule::Boolean => SqlValue::Boolean(None),
    }
}

/// Strict `HH:MM`: two digits, colon, two digits, hour 0-23, minute 0-59
#[must_use]
pub fn parse_time_of_day(s: &str) -> Option<NaiveTime> {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    let digit = |b: u8| b.is_ascii_digit().then(|| u32::from(b - b'0'));
    let hour = digit(bytes[0])? * 10 + digit(bytes[1])?;
    let minute = digit(bytes[3])? * 10 + digit(bytes[4])?;
    if hour > 23 || minute > 59 {
        return None;
    }
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Strict `YYYY-MM-DD` calendar date
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Integer from a JSON integer, an integral float, or a numeric string
///
/// Anything with a fractional part or a non-numeric component is rejected.
#[must_use]
pub fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral(n: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    let in_range = n >= i64::MIN as f64 && n < i64::MAX as f64;
    (n.is_finite() && n.fract() == 0.0 && in_range).then(|| n as i64)
}

/// Finite number from a JSON number or a numeric string
#[must_use]
pub fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// Minimal shape check: one `@`, non-empty local part, dotted domain, no whitespace
#[must_use]
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty() && !tail.ends_with('.'))
}
