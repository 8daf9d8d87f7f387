use std::any::TypeId;
use std::collections::HashSet;
use std::hash::{Hash as _, Hasher as _};

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};
use crate::schema::ColumnDescriptor;
use crate::value::Value;

/// A type representing a unique fingerprint for a table schema.
pub type TableFingerprint = u64;

/// Column names and values extracted from a record, in declaration order.
pub type ColumnValues = Vec<(String, Value)>;

/// Table schema representation.
///
/// It is used to define the structure of a database table. It is usually implemented
/// with `#[derive(Table)]`.
pub trait TableSchema: 'static {
    /// Returns the name of the table.
    fn table_name() -> &'static str;

    /// Appends the flattened column descriptors of the table to `columns`, in declaration order.
    fn describe_columns(columns: &mut Vec<ColumnDescriptor>);

    /// Appends the name and value of every set, non-excluded column to `columns`.
    fn collect_set_columns(&self, columns: &mut ColumnValues);

    /// Returns the value of the declared field named `name`.
    ///
    /// # Errors
    ///
    /// - [`TableError::KeyNotFound`] if no field is named `name`
    /// - [`TableError::UnsupportedValue`] if the field has no value representation
    fn field_value(&self, name: &str) -> TableResult<Value>;

    /// Returns the column descriptors of the table.
    fn columns() -> Vec<ColumnDescriptor> {
        let mut columns = Vec::new();
        Self::describe_columns(&mut columns);
        columns
    }

    /// Returns the fingerprint of the table schema.
    fn fingerprint() -> TableFingerprint {
        fingerprint_of(TypeId::of::<Self>())
    }
}

/// Returns the fingerprint of the type identified by `type_id`.
pub fn fingerprint_of(type_id: TypeId) -> TableFingerprint {
    let mut hasher = std::hash::DefaultHasher::new();
    type_id.hash(&mut hasher);
    hasher.finish()
}

/// Table descriptor: the table name and its flattened columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
}

impl TableInfo {
    /// Extracts the table descriptor of `T`.
    ///
    /// # Errors
    ///
    /// [`TableError::DuplicateColumnName`] if two emitted columns share a name.
    pub fn of<T>() -> TableResult<Self>
    where
        T: TableSchema,
    {
        let info = Self {
            name: T::table_name().to_string(),
            columns: T::columns(),
        };
        check_unique_column_names(&info.name, &info.columns)?;

        Ok(info)
    }

    /// Iterates over the columns which end up in the generated statement.
    pub fn emitted_columns(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter().filter(|column| !column.exclude)
    }
}

/// Checks that no two non-excluded columns share a name, ignoring case.
pub fn check_unique_column_names(table: &str, columns: &[ColumnDescriptor]) -> TableResult<()> {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns.iter().filter(|column| !column.exclude) {
        let name = column.name.to_lowercase();
        if seen.contains(&name) {
            return Err(TableError::DuplicateColumnName {
                table: table.to_string(),
                column: name,
            });
        }
        seen.insert(name);
    }

    Ok(())
}
