use chrono::NaiveDateTime;
use serde_json::Value as JsonValue;

/// Values bound as statement arguments or read back from result rows.
///
/// Every storage slot converts to and from this enum, so backends only ever see one value
/// type:
/// ```rust
/// use sql_entity::prelude::*;
///
/// let args = vec![
///     RowValues::Int(1),
///     RowValues::Text("alice".into()),
///     RowValues::Bool(true),
/// ];
/// # let _ = args;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RowValues {
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Timestamp value
    Timestamp(NaiveDateTime),
    /// NULL value
    Null,
    /// JSON value
    JSON(JsonValue),
    /// Binary data
    Blob(Vec<u8>),
}

const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

impl RowValues {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        if let RowValues::Int(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let RowValues::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }

    /// Booleans, or the integers 0 and 1 as stored by `SQLite`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RowValues::Bool(value) => Some(*value),
            RowValues::Int(1) => Some(true),
            RowValues::Int(0) => Some(false),
            _ => None,
        }
    }

    /// Timestamps, or text in one of the formats timestamps are written with.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            RowValues::Timestamp(value) => Some(*value),
            RowValues::Text(s) => TIMESTAMP_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .or_else(|| {
                    chrono::DateTime::parse_from_rfc3339(s)
                        .ok()
                        .map(|dt| dt.naive_utc())
                }),
            _ => None,
        }
    }

    /// Floats, widening integers.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            RowValues::Float(value) => Some(*value),
            RowValues::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            RowValues::Blob(bytes) => Some(bytes),
            RowValues::Text(s) => Some(s.as_bytes()),
            _ => None,
        }
    }

    /// JSON values, or text that parses as JSON.
    ///
    /// Numbers are accepted too: `SQLite` stores numeric JSON text as INTEGER or REAL
    /// in columns with NUMERIC affinity (e.g. declared `JSON`).
    #[must_use]
    pub fn as_json(&self) -> Option<JsonValue> {
        match self {
            RowValues::JSON(value) => Some(value.clone()),
            RowValues::Text(s) => serde_json::from_str(s).ok(),
            RowValues::Int(i) => Some(JsonValue::from(*i)),
            RowValues::Float(f) => serde_json::Number::from_f64(*f).map(JsonValue::Number),
            _ => None,
        }
    }

    /// Short name of the variant, used in scan error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            RowValues::Int(_) => "integer",
            RowValues::Float(_) => "float",
            RowValues::Text(_) => "text",
            RowValues::Bool(_) => "boolean",
            RowValues::Timestamp(_) => "timestamp",
            RowValues::Null => "null",
            RowValues::JSON(_) => "json",
            RowValues::Blob(_) => "blob",
        }
    }
}

/// The kind of value a storage slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Int,
    Float,
    Text,
    Bool,
    Timestamp,
    Blob,
    Json,
}

impl ColumnKind {
    /// Whether a non-NULL value read from a row can populate a slot of this kind.
    #[must_use]
    pub fn accepts(self, value: &RowValues) -> bool {
        match self {
            ColumnKind::Int => value.as_int().is_some(),
            ColumnKind::Float => value.as_float().is_some(),
            ColumnKind::Text => value.as_text().is_some(),
            ColumnKind::Bool => value.as_bool().is_some(),
            ColumnKind::Timestamp => value.as_timestamp().is_some(),
            ColumnKind::Blob => value.as_blob().is_some(),
            ColumnKind::Json => value.as_json().is_some(),
        }
    }
}
