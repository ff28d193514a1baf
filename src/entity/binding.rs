use chrono::NaiveDateTime;
use serde_json::Value as JsonValue;

use crate::error::SqlEntityError;
use crate::types::{ColumnKind, RowValues};

/// Conversion interface for slot types that are not one of the built-in kinds.
///
/// Implement this for wrapper types (hashes, enums stored as text, ...) and bind them with
/// [`Binding::Custom`]. `Option<T>` implements it for every `T: ColumnValue + Default`,
/// mapping `None` to NULL.
pub trait ColumnValue {
    /// Kind used to decide which row values the slot accepts.
    fn kind(&self) -> ColumnKind;

    /// Current value, as bound into statements.
    fn to_value(&self) -> RowValues;

    /// Store a value read from a row.
    ///
    /// # Errors
    /// Returns `SqlEntityError::ScanError` if the value cannot be converted.
    fn set_value(&mut self, value: RowValues) -> Result<(), SqlEntityError>;

    /// Whether `set_value` would succeed, without mutating.
    fn accepts(&self, value: &RowValues) -> bool {
        self.kind().accepts(value)
    }
}

fn mismatch(kind: ColumnKind, value: &RowValues) -> SqlEntityError {
    SqlEntityError::ScanError(format!(
        "cannot store {} value in {kind:?} slot",
        value.type_name()
    ))
}

macro_rules! impl_column_value {
    ($ty:ty, $kind:expr, $to:expr, $from:expr) => {
        impl ColumnValue for $ty {
            fn kind(&self) -> ColumnKind {
                $kind
            }

            fn to_value(&self) -> RowValues {
                let to: fn(&$ty) -> RowValues = $to;
                to(self)
            }

            fn set_value(&mut self, value: RowValues) -> Result<(), SqlEntityError> {
                let from: fn(&RowValues) -> Option<$ty> = $from;
                *self = from(&value).ok_or_else(|| mismatch($kind, &value))?;
                Ok(())
            }
        }
    };
}

impl_column_value!(i64, ColumnKind::Int, |v| RowValues::Int(*v), RowValues::as_int);
impl_column_value!(f64, ColumnKind::Float, |v| RowValues::Float(*v), RowValues::as_float);
impl_column_value!(
    String,
    ColumnKind::Text,
    |v| RowValues::Text(v.clone()),
    |r| r.as_text().map(str::to_owned)
);
impl_column_value!(bool, ColumnKind::Bool, |v| RowValues::Bool(*v), RowValues::as_bool);
impl_column_value!(
    NaiveDateTime,
    ColumnKind::Timestamp,
    |v| RowValues::Timestamp(*v),
    RowValues::as_timestamp
);
impl_column_value!(
    Vec<u8>,
    ColumnKind::Blob,
    |v| RowValues::Blob(v.clone()),
    |r| r.as_blob().map(<[u8]>::to_vec)
);
impl_column_value!(
    JsonValue,
    ColumnKind::Json,
    |v| RowValues::JSON(v.clone()),
    RowValues::as_json
);

impl<T: ColumnValue + Default> ColumnValue for Option<T> {
    fn kind(&self) -> ColumnKind {
        match self {
            Some(inner) => inner.kind(),
            None => T::default().kind(),
        }
    }

    fn to_value(&self) -> RowValues {
        self.as_ref().map_or(RowValues::Null, ColumnValue::to_value)
    }

    fn set_value(&mut self, value: RowValues) -> Result<(), SqlEntityError> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }
        let mut inner = T::default();
        inner.set_value(value)?;
        *self = Some(inner);
        Ok(())
    }

    fn accepts(&self, value: &RowValues) -> bool {
        value.is_null() || self.kind().accepts(value)
    }
}

/// A non-owning reference from a descriptor slot into caller-owned storage.
///
/// Reads through the binding observe the caller's current value; a successful scan writes
/// through it and mutates the caller's value in place.
pub enum Binding<'a> {
    Int(&'a mut i64),
    Float(&'a mut f64),
    Text(&'a mut String),
    Bool(&'a mut bool),
    Timestamp(&'a mut NaiveDateTime),
    Blob(&'a mut Vec<u8>),
    Json(&'a mut JsonValue),
    Custom(&'a mut dyn ColumnValue),
}

impl Binding<'_> {
    #[must_use]
    pub fn kind(&self) -> ColumnKind {
        match self {
            Binding::Int(_) => ColumnKind::Int,
            Binding::Float(_) => ColumnKind::Float,
            Binding::Text(_) => ColumnKind::Text,
            Binding::Bool(_) => ColumnKind::Bool,
            Binding::Timestamp(_) => ColumnKind::Timestamp,
            Binding::Blob(_) => ColumnKind::Blob,
            Binding::Json(_) => ColumnKind::Json,
            Binding::Custom(slot) => slot.kind(),
        }
    }

    /// Read the caller's current value.
    #[must_use]
    pub fn value(&self) -> RowValues {
        match self {
            Binding::Int(slot) => slot.to_value(),
            Binding::Float(slot) => slot.to_value(),
            Binding::Text(slot) => slot.to_value(),
            Binding::Bool(slot) => slot.to_value(),
            Binding::Timestamp(slot) => slot.to_value(),
            Binding::Blob(slot) => slot.to_value(),
            Binding::Json(slot) => slot.to_value(),
            Binding::Custom(slot) => slot.to_value(),
        }
    }

    /// Whether [`Binding::set`] would accept `value`. Never mutates.
    #[must_use]
    pub fn accepts(&self, value: &RowValues) -> bool {
        match self {
            Binding::Custom(slot) => slot.accepts(value),
            _ => self.kind().accepts(value),
        }
    }

    /// Write a row value through to the caller's storage.
    ///
    /// # Errors
    /// Returns `SqlEntityError::ScanError` if the value does not convert to the slot's kind.
    pub fn set(&mut self, value: RowValues) -> Result<(), SqlEntityError> {
        match self {
            Binding::Int(slot) => slot.set_value(value),
            Binding::Float(slot) => slot.set_value(value),
            Binding::Text(slot) => slot.set_value(value),
            Binding::Bool(slot) => slot.set_value(value),
            Binding::Timestamp(slot) => slot.set_value(value),
            Binding::Blob(slot) => slot.set_value(value),
            Binding::Json(slot) => slot.set_value(value),
            Binding::Custom(slot) => slot.set_value(value),
        }
    }
}

impl std::fmt::Debug for Binding<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Binding")
            .field(&self.kind())
            .field(&self.value())
            .finish()
    }
}

macro_rules! impl_from_slot {
    ($ty:ty, $variant:ident) => {
        impl<'a> From<&'a mut $ty> for Binding<'a> {
            fn from(slot: &'a mut $ty) -> Self {
                Binding::$variant(slot)
            }
        }
    };
}

impl_from_slot!(i64, Int);
impl_from_slot!(f64, Float);
impl_from_slot!(String, Text);
impl_from_slot!(bool, Bool);
impl_from_slot!(NaiveDateTime, Timestamp);
impl_from_slot!(Vec<u8>, Blob);
impl_from_slot!(JsonValue, Json);

impl<'a, T: ColumnValue + Default + 'a> From<&'a mut Option<T>> for Binding<'a> {
    fn from(slot: &'a mut Option<T>) -> Self {
        Binding::Custom(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_through_to_caller_storage() {
        let mut name = String::from("before");
        {
            let mut binding = Binding::from(&mut name);
            binding.set(RowValues::Text("after".into())).unwrap();
        }
        assert_eq!(name, "after");
    }

    #[test]
    fn reads_current_caller_value() {
        let mut count = 7_i64;
        let binding = Binding::from(&mut count);
        assert_eq!(binding.value(), RowValues::Int(7));
    }

    #[test]
    fn mismatched_value_is_scan_error_and_leaves_slot() {
        let mut count = 7_i64;
        let mut binding = Binding::from(&mut count);
        assert!(!binding.accepts(&RowValues::Text("x".into())));
        let err = binding.set(RowValues::Text("x".into())).unwrap_err();
        assert!(matches!(err, SqlEntityError::ScanError(_)));
        assert_eq!(count, 7);
    }

    #[test]
    fn option_slots_map_null() {
        let mut nickname: Option<String> = Some("bob".into());
        {
            let mut binding = Binding::from(&mut nickname);
            assert_eq!(binding.kind(), ColumnKind::Text);
            assert!(binding.accepts(&RowValues::Null));
            binding.set(RowValues::Null).unwrap();
        }
        assert_eq!(nickname, None);

        let mut score: Option<f64> = None;
        {
            let mut binding = Binding::from(&mut score);
            assert_eq!(binding.value(), RowValues::Null);
            binding.set(RowValues::Int(3)).unwrap();
        }
        assert_eq!(score, Some(3.0));
    }

    #[test]
    fn null_rejected_by_plain_slots() {
        let mut active = true;
        let binding = Binding::from(&mut active);
        assert!(!binding.accepts(&RowValues::Null));
    }
}
