//! Conflict mock type; its nested record declares a column with the same name as the parent.

use crate::prelude::Table;

#[derive(Debug, Default, Clone, PartialEq, Eq, Table)]
pub struct Conflict {
    #[column(pk)]
    pub id: i32,
    pub inner: Inner,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Table)]
#[table(name = "conflict_inner")]
pub struct Inner {
    pub id: i64,
}
