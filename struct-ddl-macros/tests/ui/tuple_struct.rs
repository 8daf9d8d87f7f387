#![allow(dead_code)]

use struct_ddl_macros::Table;

#[derive(Table)]
struct Pair(u32, String);

fn main() {}
