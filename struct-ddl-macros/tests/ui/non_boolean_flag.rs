#![allow(dead_code)]

use struct_ddl_macros::Table;

#[derive(Table)]
struct User {
    #[column(pk = "yes")]
    id: u32,
}

fn main() {}
