//! This module exposes the native column types supported by the schema extractor.
//!
//! Every supported type implements [`ColumnType`], which provides the SQL type used when a field
//! carries no explicit `sql_type`, the zero-value predicate and the value representation.

use crate::value::Value;

/// Fallback SQL type for text fields.
pub const TEXT_SQL_TYPE: &str = "varchar(32)";
/// Fallback SQL type for integer fields.
pub const INTEGER_SQL_TYPE: &str = "int(11)";
/// Fallback SQL type for every other field.
pub const FALLBACK_SQL_TYPE: &str = "varchar(64)";

/// A scalar type which can be stored in a column.
pub trait ColumnType {
    /// SQL type used when the field has no explicit `sql_type`.
    const SQL_TYPE: &'static str = FALLBACK_SQL_TYPE;

    /// Returns whether the value equals the default value of its type.
    fn is_default(&self) -> bool;

    /// Converts the value into one of the recognized [`Value`] representations.
    ///
    /// Returns `None` if the type has no representation; such fields are left out of
    /// the extracted column values.
    fn to_value(&self) -> Option<Value> {
        None
    }
}

macro_rules! impl_integer_column {
    ($ty:ty, $variant:ident, $conv:ty) => {
        impl ColumnType for $ty {
            const SQL_TYPE: &'static str = INTEGER_SQL_TYPE;

            fn is_default(&self) -> bool {
                *self == 0
            }

            fn to_value(&self) -> Option<Value> {
                <$conv>::try_from(*self).ok().map(Value::$variant)
            }
        }
    };
}

impl_integer_column!(i8, Int, i32);
impl_integer_column!(i16, Int, i32);
impl_integer_column!(i32, Int, i32);
impl_integer_column!(i64, Int64, i64);
impl_integer_column!(isize, Int64, i64);
impl_integer_column!(u8, Int, i32);
impl_integer_column!(u16, Int, i32);
impl_integer_column!(u32, Int64, i64);
impl_integer_column!(u64, Uint64, u64);
impl_integer_column!(usize, Uint64, u64);

impl ColumnType for String {
    const SQL_TYPE: &'static str = TEXT_SQL_TYPE;

    fn is_default(&self) -> bool {
        self.is_empty()
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Text(self.clone()))
    }
}

impl ColumnType for &str {
    const SQL_TYPE: &'static str = TEXT_SQL_TYPE;

    fn is_default(&self) -> bool {
        self.is_empty()
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Text(self.to_string()))
    }
}

impl ColumnType for char {
    const SQL_TYPE: &'static str = TEXT_SQL_TYPE;

    fn is_default(&self) -> bool {
        *self == '\0'
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Text(self.to_string()))
    }
}

impl ColumnType for bool {
    fn is_default(&self) -> bool {
        !*self
    }
}

impl ColumnType for f32 {
    fn is_default(&self) -> bool {
        *self == 0.0
    }
}

impl ColumnType for f64 {
    fn is_default(&self) -> bool {
        *self == 0.0
    }
}

impl ColumnType for uuid::Uuid {
    fn is_default(&self) -> bool {
        self.is_nil()
    }
}

impl ColumnType for rust_decimal::Decimal {
    fn is_default(&self) -> bool {
        self.is_zero()
    }
}

/// An optional column infers its SQL type from the inner type; `None` is its default value
/// and is represented as [`Value::Null`].
impl<T> ColumnType for Option<T>
where
    T: ColumnType,
{
    const SQL_TYPE: &'static str = T::SQL_TYPE;

    fn is_default(&self) -> bool {
        self.is_none()
    }

    fn to_value(&self) -> Option<Value> {
        match self {
            Some(value) => value.to_value(),
            None => Some(Value::Null),
        }
    }
}
