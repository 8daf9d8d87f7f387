//! This module contains the `CREATE TABLE` generator.
//!
//! The generator emits a single statement for the fixed engine profile
//! (`engine=innodb charset=utf8`), keywords in lower case unless [`KeywordCase::Upper`] is set:
//!
//! ```text
//! create table if not exists <name>(<column>,<column>,...)engine=innodb charset=utf8;
//! ```

mod column;
mod options;

pub use self::column::column_clause;
pub use self::options::{DdlOptions, KeywordCase, MissingTypePolicy};
use crate::prelude::{ColumnDescriptor, TableInfo, TableResult, check_unique_column_names};

/// Generates a `CREATE TABLE` statement with the default [`DdlOptions`].
///
/// Returns an empty string if there are no columns to emit or `table_name` is empty.
/// Columns without a SQL type are logged and skipped.
///
/// # Errors
///
/// [`crate::prelude::TableError::DuplicateColumnName`] if two emitted columns share a name.
pub fn generate_sql(columns: &[ColumnDescriptor], table_name: &str) -> TableResult<String> {
    DdlGenerator::default().generate(columns, table_name)
}

/// The `CREATE TABLE` statement generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DdlGenerator {
    options: DdlOptions,
}

impl DdlGenerator {
    pub fn new(options: DdlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DdlOptions {
        &self.options
    }

    /// Generates the statement of table `table_name` with `columns`, in order.
    ///
    /// Excluded columns are left out. An empty string is returned when `columns` or
    /// `table_name` is empty, or when no column clause is left.
    ///
    /// # Errors
    ///
    /// - [`crate::prelude::TableError::DuplicateColumnName`] if two emitted columns share a name
    /// - [`crate::prelude::TableError::MissingType`] if a column has no SQL type and
    ///   the policy is [`MissingTypePolicy::Abort`]
    pub fn generate(&self, columns: &[ColumnDescriptor], table_name: &str) -> TableResult<String> {
        if columns.is_empty() || table_name.is_empty() {
            return Ok(String::new());
        }
        check_unique_column_names(table_name, columns)?;

        let case = self.options.keyword_case;
        let mut clauses = String::new();
        for column in columns.iter().filter(|column| !column.exclude) {
            match column_clause(column, case) {
                Ok(clause) => clauses.push_str(&clause),
                Err(err) if self.options.missing_type == MissingTypePolicy::Skip => {
                    log::warn!("skipping column of table `{table_name}`: {err}");
                }
                Err(err) => return Err(err),
            }
        }

        // strip the trailing comma
        if clauses.pop().is_none() {
            log::debug!("no column to generate for table `{table_name}`");
            return Ok(String::new());
        }

        let sql = format!(
            "{} {table_name}({clauses}){};",
            case.apply("CREATE TABLE IF NOT EXISTS"),
            case.apply("ENGINE=INNODB CHARSET=UTF8")
        );
        log::debug!("generated statement for table `{table_name}`: {sql}");

        Ok(sql)
    }

    /// Generates the statement of a [`TableInfo`].
    pub fn generate_table(&self, info: &TableInfo) -> TableResult<String> {
        self.generate(&info.columns, &info.name)
    }
}
