//! Re-exports all the most commonly used items from this crate.

pub use struct_ddl_api::prelude::*;
pub use struct_ddl_macros::Table;

pub use crate::ddl::{DdlGenerator, DdlOptions, KeywordCase, MissingTypePolicy, generate_sql};
pub use crate::extract::{
    get_field_value, get_fields, get_info, get_sql, get_table_name, get_values, set_columns,
};
pub use crate::registry::SchemaRegistry;
