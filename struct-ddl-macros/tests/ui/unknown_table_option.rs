#![allow(dead_code)]

use struct_ddl_macros::Table;

#[derive(Table)]
#[table(schema = "app")]
struct User {
    id: u32,
}

fn main() {}
