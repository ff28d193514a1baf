//! Value-transform column types.
//!
//! These wrap a `String` slot with a one-way transform applied by the caller before a
//! write. They are stored and scanned as text like any other string column.

mod md5;
mod password;
mod sha256;

pub use self::md5::Md5Hash;
pub use password::Password;
pub use sha256::Sha256Hash;

macro_rules! text_column {
    ($ty:ident) => {
        impl $crate::entity::ColumnValue for $ty {
            fn kind(&self) -> $crate::types::ColumnKind {
                $crate::types::ColumnKind::Text
            }

            fn to_value(&self) -> $crate::types::RowValues {
                $crate::types::RowValues::Text(self.0.clone())
            }

            fn set_value(
                &mut self,
                value: $crate::types::RowValues,
            ) -> Result<(), $crate::error::SqlEntityError> {
                match value {
                    $crate::types::RowValues::Text(text) => {
                        self.0 = text;
                        Ok(())
                    }
                    other => Err($crate::error::SqlEntityError::ScanError(format!(
                        "cannot convert {} to {}",
                        other.type_name(),
                        stringify!($ty)
                    ))),
                }
            }
        }

        impl<'a> From<&'a mut $ty> for $crate::entity::Binding<'a> {
            fn from(slot: &'a mut $ty) -> Self {
                $crate::entity::Binding::Custom(slot)
            }
        }
    };
}

pub(crate) use text_column;
