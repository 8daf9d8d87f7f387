//! Prelude exposes all the types for `struct-ddl-api` crate.

pub use crate::error::{TableError, TableResult};
pub use crate::schema::{
    ColumnDefault, ColumnDescriptor, ColumnOptions, ColumnValues, Field, TableFingerprint,
    TableInfo, TableSchema, check_unique_column_names, collect_record, describe_record,
    fingerprint_of,
};
pub use crate::types::{ColumnType, FALLBACK_SQL_TYPE, INTEGER_SQL_TYPE, TEXT_SQL_TYPE};
pub use crate::value::Value;
