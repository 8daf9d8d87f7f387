#![allow(dead_code)]

use struct_ddl_macros::Table;

#[derive(Table)]
struct User {
    #[column(pk, pk)]
    id: u32,
}

fn main() {}
