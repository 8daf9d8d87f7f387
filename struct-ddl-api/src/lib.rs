#![crate_name = "struct_ddl_api"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # struct-ddl API
//!
//! This crate exposes the types used to describe a table schema: column descriptors,
//! column values, the [`schema::TableSchema`] trait implemented by `#[derive(Table)]`
//! and the [`types::ColumnType`] trait implemented by every supported scalar type.
//!
//! It can be used on its own to hand-write schemas; the DDL generator lives in `struct-ddl`.

#![doc(html_playground_url = "https://play.rust-lang.org")]

mod error;
pub mod prelude;
pub mod schema;
pub mod types;
mod value;

pub use self::error::{TableError, TableResult};
pub use self::value::Value;
