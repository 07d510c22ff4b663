// ABOUTME: Store abstraction layer for the gym server
// ABOUTME: Parameterized statement execution over SQLite and PostgreSQL backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Store Abstraction
//!
//! Every handler reaches the store through [`QueryExecutor`]: one SQL text
//! with positional `$n` placeholders and an ordered list of typed
//! parameters in, an ordered list of rows out. Each call acquires a pooled
//! connection, runs the statement and releases the connection when the
//! future completes, on success and on error alike.

use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use serde_json::{Map, Value};
use std::fmt;

/// Backend selection and construction
pub mod factory;
/// Table definitions for every backend
pub mod schema;
/// `SQLite` executor
pub mod sqlite;

/// `PostgreSQL` executor
#[cfg(feature = "postgresql")]
pub mod postgres;

/// One result row: column name to JSON scalar, in column order
pub type Row = Map<String, Value>;

/// Typed, nullable statement parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// 64-bit integer (ids, counts)
    Integer(Option<i64>),
    /// Double precision number (amounts, prices)
    Real(Option<f64>),
    /// Text
    Text(Option<String>),
    /// Boolean flag
    Boolean(Option<bool>),
    /// Calendar date
    Date(Option<NaiveDate>),
    /// Time of day (minute precision)
    Time(Option<NaiveTime>),
}

impl SqlValue {
    /// Whether the parameter binds SQL `NULL`
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(
            self,
            Self::Integer(None)
                | Self::Real(None)
                | Self::Text(None)
                | Self::Boolean(None)
                | Self::Date(None)
                | Self::Time(None)
        )
    }

    /// Integer payload, if this is a non-null integer
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => *value,
            _ => None,
        }
    }

    /// Text form of a date, as stored and returned
    #[must_use]
    pub fn format_date(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Text form of a time of day, as stored and returned
    #[must_use]
    pub fn format_time(time: NaiveTime) -> String {
        time.format("%H:%M").to_string()
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(Some(v)) => write!(f, "{v}"),
            Self::Real(Some(v)) => write!(f, "{v}"),
            Self::Text(Some(v)) => write!(f, "'{v}'"),
            Self::Boolean(Some(v)) => write!(f, "{v}"),
            Self::Date(Some(v)) => write!(f, "{}", Self::format_date(*v)),
            Self::Time(Some(v)) => write!(f, "{}", Self::format_time(*v)),
            _ => write!(f, "NULL"),
        }
    }
}

/// Parameterized query execution
///
/// Implementations must treat `sql` as trusted text built by this crate and
/// `params` as the only carrier of caller data.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run one statement and collect every returned row
    ///
    /// # Errors
    ///
    /// Returns a database error if the connection cannot be acquired or the
    /// statement fails
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> AppResult<Vec<Row>>;

    /// Short backend name for logs and health output
    fn backend_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_detection() {
        assert!(SqlValue::Integer(None).is_null());
        assert!(SqlValue::Text(None).is_null());
        assert!(!SqlValue::Real(Some(0.0)).is_null());
        assert!(!SqlValue::Boolean(Some(false)).is_null());
    }

    #[test]
    fn test_time_and_date_formatting() {
        let time = NaiveTime::from_hms_opt(7, 5, 0).unwrap();
        assert_eq!(SqlValue::format_time(time), "07:05");
        let date = NaiveDate::from_ymd_opt(1990, 2, 3).unwrap();
        assert_eq!(SqlValue::format_date(date), "1990-02-03");
    }
}
