#![allow(dead_code)]

use struct_ddl_macros::Table;

#[derive(Table)]
enum Kind {
    Online,
    Offline,
}

fn main() {}
