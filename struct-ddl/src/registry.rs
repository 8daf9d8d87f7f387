use std::any::Any;
use std::collections::HashMap;

use crate::ddl::{DdlGenerator, DdlOptions};
use crate::prelude::{
    ColumnValues, TableError, TableFingerprint, TableInfo, TableResult, TableSchema, Value,
    fingerprint_of,
};

type SetColumnsFn = fn(&dyn Any) -> Option<ColumnValues>;
type FieldValueFn = fn(&dyn Any, &str) -> Option<TableResult<Value>>;

/// A registered table: its descriptor, computed once, and type-erased accessors.
struct RegisteredTable {
    info: TableInfo,
    table_name: &'static str,
    set_columns: SetColumnsFn,
    field_value: FieldValueFn,
}

/// The schema registry takes care of resolving the schema of type-erased values.
///
/// Every record type must be registered with [`SchemaRegistry::register`] before being
/// looked up; a value of any other type is reported as not being a struct or a table.
#[derive(Default)]
pub struct SchemaRegistry {
    tables: Vec<RegisteredTable>,
    index: HashMap<TableFingerprint, usize>,
    generator: DdlGenerator,
}

impl SchemaRegistry {
    /// Creates an empty registry generating statements with the default [`DdlOptions`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry generating statements with `options`.
    pub fn with_options(options: DdlOptions) -> Self {
        Self {
            generator: DdlGenerator::new(options),
            ..Default::default()
        }
    }

    /// Registers the table `T`; its descriptor is extracted and checked here, once.
    ///
    /// # Errors
    ///
    /// - [`TableError::AlreadyRegistered`] if `T` is already registered
    /// - [`TableError::DuplicateColumnName`] if two flattened fields of `T` share a name
    pub fn register<T>(&mut self) -> TableResult<&mut Self>
    where
        T: TableSchema,
    {
        let fingerprint = T::fingerprint();
        if self.index.contains_key(&fingerprint) {
            return Err(TableError::AlreadyRegistered {
                table: T::table_name().to_string(),
            });
        }

        let info = TableInfo::of::<T>()?;
        log::debug!(
            "registered table `{}` with {} columns",
            info.name,
            info.columns.len()
        );

        self.index.insert(fingerprint, self.tables.len());
        self.tables.push(RegisteredTable {
            info,
            table_name: T::table_name(),
            set_columns: set_columns_of::<T>,
            field_value: field_value_of::<T>,
        });

        Ok(self)
    }

    /// Returns the number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns whether no table is registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Returns whether the type of `value` is a registered table.
    pub fn is_registered(&self, value: &dyn Any) -> bool {
        self.lookup(value).is_some()
    }

    /// Returns the table descriptor of `value`.
    ///
    /// # Errors
    ///
    /// [`TableError::NotAStruct`] if the type of `value` is not registered.
    pub fn info(&self, value: &dyn Any) -> TableResult<&TableInfo> {
        self.lookup(value)
            .map(|table| &table.info)
            .ok_or(TableError::NotAStruct)
    }

    /// Generates the `CREATE TABLE` statement of `value`.
    ///
    /// # Errors
    ///
    /// See [`SchemaRegistry::info`] and [`DdlGenerator::generate`].
    pub fn sql(&self, value: &dyn Any) -> TableResult<String> {
        let info = self.info(value)?;
        self.generator.generate_table(info)
    }

    /// Returns the table name of `value`.
    ///
    /// # Errors
    ///
    /// [`TableError::NotATable`] if the type of `value` is not registered.
    pub fn table_name(&self, value: &dyn Any) -> TableResult<&'static str> {
        self.lookup(value)
            .map(|table| table.table_name)
            .ok_or(TableError::NotATable)
    }

    /// Returns the names and values of the set columns of `value`.
    ///
    /// # Errors
    ///
    /// [`TableError::NotAStruct`] if the type of `value` is not registered.
    pub fn set_columns(&self, value: &dyn Any) -> TableResult<ColumnValues> {
        self.lookup(value)
            .and_then(|table| (table.set_columns)(value))
            .ok_or(TableError::NotAStruct)
    }

    /// Returns the names of the set columns of `value`.
    pub fn fields(&self, value: &dyn Any) -> TableResult<Vec<String>> {
        self.set_columns(value)
            .map(|columns| columns.into_iter().map(|(name, _)| name).collect())
    }

    /// Returns the values of the set columns of `value`.
    pub fn values(&self, value: &dyn Any) -> TableResult<Vec<Value>> {
        self.set_columns(value)
            .map(|columns| columns.into_iter().map(|(_, value)| value).collect())
    }

    /// Returns the value of the declared field `name` of `value`.
    ///
    /// # Errors
    ///
    /// - [`TableError::KeyNotFound`] if `value` is `None`, or `name` is empty or unknown
    /// - [`TableError::NotAStruct`] if the type of `value` is not registered
    /// - [`TableError::UnsupportedValue`] if the field has no value representation
    pub fn field_value(&self, value: Option<&dyn Any>, name: &str) -> TableResult<Value> {
        let Some(value) = value.filter(|_| !name.is_empty()) else {
            return Err(TableError::KeyNotFound {
                key: name.to_string(),
            });
        };

        self.lookup(value)
            .and_then(|table| (table.field_value)(value, name))
            .unwrap_or(Err(TableError::NotAStruct))
    }

    /// Generates the `CREATE TABLE` statements of all the registered tables, in registration order.
    pub fn create_table_statements(&self) -> TableResult<Vec<String>> {
        self.tables
            .iter()
            .map(|table| self.generator.generate_table(&table.info))
            .collect()
    }

    fn lookup(&self, value: &dyn Any) -> Option<&RegisteredTable> {
        let fingerprint = fingerprint_of(value.type_id());
        self.index
            .get(&fingerprint)
            .and_then(|index| self.tables.get(*index))
    }
}

fn set_columns_of<T>(value: &dyn Any) -> Option<ColumnValues>
where
    T: TableSchema,
{
    value.downcast_ref::<T>().map(|record| {
        let mut columns = ColumnValues::new();
        record.collect_set_columns(&mut columns);
        columns
    })
}

fn field_value_of<T>(value: &dyn Any, name: &str) -> Option<TableResult<Value>>
where
    T: TableSchema,
{
    value
        .downcast_ref::<T>()
        .map(|record| record.field_value(name))
}
