use crate::schema::{ColumnDescriptor, ColumnOptions, ColumnValues, TableSchema};
use crate::types::{ColumnType, FALLBACK_SQL_TYPE};
use crate::value::Value;

/// A field of a record: either a scalar column or a nested record which is flattened
/// into its parent.
///
/// Every [`ColumnType`] is a scalar field; `#[derive(Table)]` implements this trait for
/// records, so that they can be embedded into other records.
pub trait Field {
    /// Appends the descriptors of the field named `name` to `columns`.
    fn describe(name: &str, options: &ColumnOptions, columns: &mut Vec<ColumnDescriptor>);

    /// Appends the column name and value of the field to `columns`, if the field is set.
    fn collect(&self, name: &str, options: &ColumnOptions, columns: &mut ColumnValues);

    /// Returns the value of a scalar field, or `None` if it has no representation.
    fn value(&self) -> Option<Value>;
}

impl<T> Field for T
where
    T: ColumnType,
{
    fn describe(name: &str, options: &ColumnOptions, columns: &mut Vec<ColumnDescriptor>) {
        columns.push(ColumnDescriptor::from_options(name, T::SQL_TYPE, options));
    }

    fn collect(&self, name: &str, options: &ColumnOptions, columns: &mut ColumnValues) {
        if options.exclude || self.is_default() {
            return;
        }
        // names and values are pushed together, so both projections stay aligned
        if let Some(value) = self.to_value() {
            columns.push((name.to_lowercase(), value));
        }
    }

    fn value(&self) -> Option<Value> {
        self.to_value()
    }
}

/// [`Field::describe`] for a nested record.
///
/// An excluded record is not descended into: a single excluded descriptor stands for the
/// whole subtree.
pub fn describe_record<T>(name: &str, options: &ColumnOptions, columns: &mut Vec<ColumnDescriptor>)
where
    T: TableSchema,
{
    if options.exclude {
        columns.push(ColumnDescriptor::from_options(
            name,
            FALLBACK_SQL_TYPE,
            options,
        ));
    } else {
        T::describe_columns(columns);
    }
}

/// [`Field::collect`] for a nested record.
pub fn collect_record<T>(record: &T, options: &ColumnOptions, columns: &mut ColumnValues)
where
    T: TableSchema,
{
    if !options.exclude {
        record.collect_set_columns(columns);
    }
}
