//! Order mock types; [`Order`] overrides the table name and uses raw identifiers as column names,
//! [`Payment`] has columns without a value representation.

use crate::prelude::Table;

#[derive(Debug, Default, Clone, PartialEq, Eq, Table)]
#[table(name = "Orders")]
pub struct Order {
    #[column(pk, default = "auto")]
    pub id: u32,
    #[column(sql_type = "varchar(16)", comment = "order kind")]
    pub r#type: String,
    #[column(null, unique = false)]
    pub r#ref: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Table)]
pub struct Payment {
    #[column(pk, sql_type = "char(36)")]
    pub id: uuid::Uuid,
    #[column(sql_type = "decimal(10,2)")]
    pub amount: rust_decimal::Decimal,
    pub order_id: u32,
}
