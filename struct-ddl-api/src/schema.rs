//! This module contains the types describing a table schema.

mod column;
mod field;
mod table;

pub use self::column::{ColumnDefault, ColumnDescriptor, ColumnOptions};
pub use self::field::{Field, collect_record, describe_record};
pub use self::table::{
    ColumnValues, TableFingerprint, TableInfo, TableSchema, check_unique_column_names,
    fingerprint_of,
};
