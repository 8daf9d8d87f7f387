#![crate_name = "struct_ddl"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # struct-ddl
//!
//! Derives a `CREATE TABLE` statement from an annotated struct, and the columns which are set
//! on a populated instance, for partial insert and update statements.
//!
//! ```rust,ignore
//! use struct_ddl::prelude::*;
//!
//! #[derive(Table, Default)]
//! struct Abcd {
//!     #[column(pk, default = "auto", sql_type = "int(8)")]
//!     id: i32,
//!     #[column(sql_type = "varchar(255)", index)]
//!     name: String,
//!     #[column(unique)]
//!     pass: String,
//!     #[column(sql_type = "text")]
//!     desc: String,
//! }
//!
//! let sql = get_sql(&Abcd::default())?;
//! // create table if not exists abcd(`id` int(8) primary key auto_increment,`name` varchar(255) not null,
//! // index name(`name`),`pass` varchar(32) not null unique,`desc` text not null)engine=innodb charset=utf8;
//! ```
//!
//! Nested records deriving `Table` are flattened into their parent. No SQL is ever executed.

#![doc(html_playground_url = "https://play.rust-lang.org")]

// makes the crate accessible as `struct_ddl` in macros
extern crate self as struct_ddl;

pub mod ddl;
pub mod extract;
pub mod prelude;
pub mod registry;

pub use struct_ddl_api::{TableError, TableResult, Value};
pub use struct_ddl_macros::Table;
