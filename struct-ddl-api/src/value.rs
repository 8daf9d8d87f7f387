use std::fmt;

use serde::{Deserialize, Serialize};

/// A dynamically-typed column value extracted from a record.
///
/// Only four native representations are recognized; [`Value::Null`] is used for unset nullable fields.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Value {
    Int(i32),
    Int64(i64),
    Null,
    Text(String),
    Uint64(u64),
}

// macro rules for implementing From trait for Value enum variants
macro_rules! impl_conv_for_value {
    ($variant:ident, $ty:ty, $name:ident) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value)
            }
        }

        impl Value {
            /// Attempts to extract a reference to the inner value if it matches the variant.
            pub fn $name(&self) -> Option<&$ty> {
                if let Value::$variant(v) = self {
                    Some(v)
                } else {
                    None
                }
            }
        }
    };
}

impl_conv_for_value!(Int, i32, as_int);
impl_conv_for_value!(Int64, i64, as_int64);
impl_conv_for_value!(Text, String, as_text);
impl_conv_for_value!(Uint64, u64, as_uint64);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

impl Value {
    /// Checks if the value is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Int64(_) => "Int64",
            Value::Null => "Null",
            Value::Text(_) => "Text",
            Value::Uint64(_) => "Uint64",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Null => write!(f, "NULL"),
            Value::Text(v) => write!(f, "{v}"),
            Value::Uint64(v) => write!(f, "{v}"),
        }
    }
}
