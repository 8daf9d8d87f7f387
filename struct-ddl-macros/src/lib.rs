#![crate_name = "struct_ddl_macros"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Macros and derive for struct-ddl
//!
//! This crate provides procedural macros to automatically implement traits
//! required by `struct-ddl`.
//!
//! ## Provided Derive Macros
//!
//! - `Table`: Automatically implements the `TableSchema` and `Field` traits for structs.
//!

#![doc(html_playground_url = "https://play.rust-lang.org")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod table;

/// Automatically implements the `TableSchema` and `Field` traits for a struct.
///
/// The column configuration is parsed once, at compile time, into one `ColumnOptions`
/// constant per field.
///
/// # Attributes
///
/// `#[table(...)]` on the struct:
///
/// - `name = "..."`: table name, lower-cased; defaults to the struct identifier.
///
/// `#[column(...)]` on a field:
///
/// | option | meaning |
/// |---|---|
/// | `pk` | primary key |
/// | `unique` | unique constraint |
/// | `index` | secondary index |
/// | `null` | the column accepts NULL |
/// | `exclude` | the field (and its subtree, for a nested record) is left out |
/// | `sql_type = "varchar(255)"` | explicit SQL type; inferred from the Rust type otherwise |
/// | `default = "..."` | default value; `"auto"` means auto-increment |
/// | `comment = "..."` | column comment |
///
/// Boolean options may be written as flags (`pk`) or explicitly (`pk = false`).
///
/// # What the macro generates
///
/// Given a struct like:
///
/// ```rust,ignore
/// #[derive(Table)]
/// struct Abcd {
///     #[column(pk, default = "auto", sql_type = "int(8)")]
///     id: i32,
///     #[column(unique)]
///     pass: String,
/// }
/// ```
///
/// The macro expands into:
///
/// ```rust,ignore
/// const _: () = {
///     const __COLUMN_OPTIONS_0: ColumnOptions = ColumnOptions { sql_type: Some("int(8)"), primary_key: true, default: Some("auto"), .. };
///     const __COLUMN_OPTIONS_1: ColumnOptions = ColumnOptions { unique: true, .. };
///
///     impl TableSchema for Abcd {
///         fn table_name() -> &'static str {
///             "abcd"
///         }
///
///         fn describe_columns(columns: &mut Vec<ColumnDescriptor>) {
///             <i32 as Field>::describe("id", &__COLUMN_OPTIONS_0, columns);
///             <String as Field>::describe("pass", &__COLUMN_OPTIONS_1, columns);
///         }
///
///         fn collect_set_columns(&self, columns: &mut ColumnValues) {
///             Field::collect(&self.id, "id", &__COLUMN_OPTIONS_0, columns);
///             Field::collect(&self.pass, "pass", &__COLUMN_OPTIONS_1, columns);
///         }
///
///         fn field_value(&self, name: &str) -> TableResult<Value> {
///             // match on "id" | "pass"
///         }
///     }
///
///     impl Field for Abcd {
///         // flattens `Abcd` into the record it is embedded in
///     }
/// };
/// ```
///
/// # Requirements
///
/// - Each field type must implement `Field`: any `ColumnType`, or another `#[derive(Table)]` struct.
/// - Only works on `struct`s with named fields; enums, unions and tuple structs are rejected.
///
/// # Errors
///
/// The macro will fail to expand if:
///
/// - it is applied to anything but a struct with named fields;
/// - an option is unknown, repeated, or has a value of the wrong kind;
/// - `sql_type` or the table `name` is an empty string.
#[proc_macro_derive(Table, attributes(column, table))]
pub fn derive_table(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    self::table::table(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
