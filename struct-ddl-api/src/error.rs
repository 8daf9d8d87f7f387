use thiserror::Error;

/// Errors raised while extracting a table schema or generating its DDL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The same type was registered twice in a schema registry.
    #[error("Table `{table}` is already registered")]
    AlreadyRegistered { table: String },
    /// Two flattened fields resolve to the same column name.
    #[error("Duplicate column name `{column}` in table `{table}`")]
    DuplicateColumnName { table: String, column: String },
    /// A field lookup was performed without an instance, or with an empty or unknown key.
    #[error("Key not found: `{key}`")]
    KeyNotFound { key: String },
    /// A column has no resolvable SQL type.
    #[error("Column `{column}` doesn't have a type")]
    MissingType { column: String },
    /// The value is not a record with a known schema.
    #[error("Value is not a struct")]
    NotAStruct,
    /// Table name lookup on a value which is not a record.
    #[error("Value is not a table")]
    NotATable,
    /// The field exists but its value has no supported representation.
    #[error("Field `{field}` has no supported value representation")]
    UnsupportedValue { field: String },
}

/// Result type for schema operations.
pub type TableResult<T> = Result<T, TableError>;
