//! Schema and value extraction from `TableSchema` records.
//!
//! These functions work on statically-typed records; see [`crate::registry::SchemaRegistry`]
//! for type-erased values.

use crate::ddl::generate_sql;
use crate::prelude::{ColumnValues, TableError, TableInfo, TableResult, TableSchema, Value};

/// Extracts the table descriptor of the record type.
///
/// The descriptor only depends on the type: the state of `record` is ignored.
///
/// # Errors
///
/// [`TableError::DuplicateColumnName`] if two flattened fields share a column name.
pub fn get_info<T>(_record: &T) -> TableResult<TableInfo>
where
    T: TableSchema,
{
    TableInfo::of::<T>()
}

/// Generates the `CREATE TABLE` statement of the record type.
pub fn get_sql<T>(record: &T) -> TableResult<String>
where
    T: TableSchema,
{
    let info = get_info(record)?;
    generate_sql(&info.columns, &info.name)
}

/// Returns the lower-cased names and the values of the set, non-excluded columns of `record`.
///
/// Nested records are flattened depth-first, in declaration order.
pub fn set_columns<T>(record: &T) -> ColumnValues
where
    T: TableSchema,
{
    let mut columns = ColumnValues::new();
    record.collect_set_columns(&mut columns);
    columns
}

/// Returns the names of the set columns of `record`.
///
/// The name at index `i` describes the value at index `i` of [`get_values`].
pub fn get_fields<T>(record: &T) -> Vec<String>
where
    T: TableSchema,
{
    set_columns(record)
        .into_iter()
        .map(|(name, _)| name)
        .collect()
}

/// Returns the values of the set columns of `record`.
pub fn get_values<T>(record: &T) -> Vec<Value>
where
    T: TableSchema,
{
    set_columns(record)
        .into_iter()
        .map(|(_, value)| value)
        .collect()
}

/// Returns the table name of the record type.
pub fn get_table_name<T>(_record: &T) -> &'static str
where
    T: TableSchema,
{
    T::table_name()
}

/// Returns the value of the declared field `name` of `record`, by exact identifier match.
///
/// # Errors
///
/// - [`TableError::KeyNotFound`] if `record` is `None`, or `name` is empty or unknown
/// - [`TableError::UnsupportedValue`] if the field has no value representation
pub fn get_field_value<T>(record: Option<&T>, name: &str) -> TableResult<Value>
where
    T: TableSchema,
{
    match record {
        Some(record) if !name.is_empty() => record.field_value(name),
        _ => Err(TableError::KeyNotFound {
            key: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::prelude::{ColumnDefault, ColumnDescriptor, Table};
    use crate::tests::{Abcd, Account, Audit, Order, Payment, Profile, Settings};

    #[test]
    fn test_should_get_sql() {
        crate::tests::init_logger();

        let sql = get_sql(&Abcd::default()).unwrap();
        assert_eq!(
            sql,
            "create table if not exists abcd(`id` int(8) primary key auto_increment comment \"primary key\",`name` varchar(255) not null default \"golang\",index name(`name`),`pass` varchar(32) not null unique,`desc` text not null)engine=innodb charset=utf8;"
        );
    }

    #[test]
    fn test_should_get_sql_deterministically() {
        assert_eq!(
            get_sql(&Account::default()).unwrap(),
            get_sql(&Account::default()).unwrap()
        );
    }

    #[test]
    fn test_should_get_info() {
        let (info, record) = (get_info(&Abcd::default()).unwrap(), Abcd::default());
        assert_eq!(info.name, "abcd");
        assert_eq!(info.name, get_table_name(&record));
        assert_eq!(
            info.columns,
            vec![
                ColumnDescriptor::new("id", "int(8)")
                    .primary_key()
                    .auto_increment()
                    .comment("primary key"),
                ColumnDescriptor::new("name", "varchar(255)")
                    .index()
                    .default_value(ColumnDefault::Literal("golang".to_string())),
                ColumnDescriptor::new("pass", "varchar(32)").unique(),
                ColumnDescriptor::new("desc", "text"),
            ]
        );
    }

    #[test]
    fn test_should_flatten_nested_records_in_declaration_order() {
        let info = get_info(&Account::default()).unwrap();
        let names = info
            .columns
            .iter()
            .map(|column| column.name.as_str())
            .collect::<Vec<_>>();

        assert_eq!(
            names,
            vec![
                "id",
                "email",
                "nickname",
                "bio",
                "age",
                "theme",
                "notifications",
                "audit",
                "token",
            ]
        );
    }

    #[test]
    fn test_should_keep_excluded_nested_record_as_one_descriptor() {
        let info = get_info(&Account::default()).unwrap();
        let audit = info
            .columns
            .iter()
            .find(|column| column.name == "audit")
            .expect("audit descriptor");
        assert!(audit.exclude);
        assert_eq!(audit.sql_type, "varchar(64)");
        // the subtree of the excluded record is never described
        assert!(!info.columns.iter().any(|column| column.name == "created_by"));
    }

    #[test]
    fn test_should_not_emit_excluded_columns() {
        let sql = get_sql(&Account::default()).unwrap();
        assert!(!sql.contains("`audit`"));
        assert!(!sql.contains("`created_by`"));
        assert!(!sql.contains("`token`"));
        assert!(sql.contains("`theme` varchar(16) not null default \"dark\""));
    }

    #[test]
    fn test_should_infer_fallback_types() {
        let info = get_info(&Account::default()).unwrap();
        let sql_type = |name: &str| {
            info.columns
                .iter()
                .find(|column| column.name == name)
                .map(|column| column.sql_type.clone())
                .expect("column")
        };
        assert_eq!(sql_type("email"), "varchar(32)");
        assert_eq!(sql_type("age"), "int(11)");
        assert_eq!(sql_type("notifications"), "varchar(64)");
        assert_eq!(sql_type("nickname"), "varchar(32)");
    }

    #[test]
    fn test_should_reject_duplicate_flattened_names() {
        crate::tests::init_logger();

        assert_eq!(
            get_info(&crate::tests::Conflict::default()),
            Err(TableError::DuplicateColumnName {
                table: "conflict".to_string(),
                column: "id".to_string(),
            })
        );
        assert!(get_sql(&crate::tests::Conflict::default()).is_err());
    }

    #[test]
    fn test_should_get_fields_and_values_of_set_columns() {
        let account = Account {
            id: 0,
            email: "alice@example.com".to_string(),
            profile: Profile {
                nickname: Some("alice".to_string()),
                bio: String::new(),
                age: 33,
            },
            settings: Settings {
                theme: String::new(),
                notifications: true,
            },
            audit: Audit {
                created_by: "root".to_string(),
            },
            token: "secret".to_string(),
        };

        assert_eq!(get_fields(&account), vec!["email", "nickname", "age"]);
        assert_eq!(
            get_values(&account),
            vec![
                Value::Text("alice@example.com".to_string()),
                Value::Text("alice".to_string()),
                Value::Int(33),
            ]
        );
    }

    #[test]
    fn test_should_align_fields_and_values() {
        let record = Abcd {
            id: 7,
            name: "golang".to_string(),
            pass: String::new(),
            desc: "a description".to_string(),
        };
        let fields = get_fields(&record);
        let values = get_values(&record);

        assert_eq!(fields.len(), values.len());
        assert_eq!(
            fields.into_iter().zip(values).collect::<Vec<_>>(),
            set_columns(&record)
        );
    }

    #[test]
    fn test_should_return_nothing_for_zero_valued_record() {
        assert!(get_fields(&Account::default()).is_empty());
        assert!(get_values(&Account::default()).is_empty());
        // the schema is still fully described
        assert_eq!(get_info(&Account::default()).unwrap().columns.len(), 9);
    }

    #[test]
    fn test_should_get_field_value() {
        let record = Abcd {
            id: 7,
            name: "golang".to_string(),
            ..Default::default()
        };

        assert_eq!(get_field_value(Some(&record), "id"), Ok(Value::Int(7)));
        assert_eq!(
            get_field_value(Some(&record), "name"),
            Ok(Value::Text("golang".to_string()))
        );
        assert_eq!(
            get_field_value(Some(&record), "pass"),
            Ok(Value::Text(String::new()))
        );
    }

    #[test]
    fn test_should_fail_field_lookup() {
        let record = Abcd::default();

        assert_eq!(
            get_field_value(None::<&Abcd>, "id"),
            Err(TableError::KeyNotFound {
                key: "id".to_string()
            })
        );
        assert_eq!(
            get_field_value(Some(&record), ""),
            Err(TableError::KeyNotFound { key: String::new() })
        );
        assert_eq!(
            get_field_value(Some(&record), "ID"),
            Err(TableError::KeyNotFound {
                key: "ID".to_string()
            })
        );
        assert_eq!(
            get_field_value(Some(&Account::default()), "profile"),
            Err(TableError::UnsupportedValue {
                field: "profile".to_string()
            })
        );
    }

    #[test]
    fn test_should_get_null_for_unset_optional_field() {
        assert_eq!(
            get_field_value(Some(&Profile::default()), "nickname"),
            Ok(Value::Null)
        );
        assert_eq!(
            get_field_value(Some(&Profile::default()), "bio"),
            Ok(Value::Text(String::new()))
        );
    }

    #[test]
    fn test_should_use_table_name_override_and_raw_identifiers() {
        let order = Order {
            id: 3,
            r#type: "online".to_string(),
            r#ref: None,
        };

        assert_eq!(get_table_name(&order), "orders");
        assert_eq!(
            get_sql(&order).unwrap(),
            "create table if not exists orders(`id` int(11) primary key auto_increment,`type` varchar(16) not null comment \"order kind\",`ref` int(11))engine=innodb charset=utf8;"
        );
        assert_eq!(get_fields(&order), vec!["id", "type"]);
        assert_eq!(
            get_values(&order),
            vec![Value::Int64(3), Value::Text("online".to_string())]
        );
        assert_eq!(
            get_field_value(Some(&order), "type"),
            Ok(Value::Text("online".to_string()))
        );
        assert_eq!(get_field_value(Some(&order), "ref"), Ok(Value::Null));
    }

    #[test]
    fn test_should_skip_values_without_representation() {
        let payment = Payment {
            id: uuid::Uuid::from_u128(1),
            amount: rust_decimal::Decimal::ONE,
            order_id: 3,
        };

        assert_eq!(
            get_sql(&payment).unwrap(),
            "create table if not exists payment(`id` char(36) primary key,`amount` decimal(10,2) not null,`order_id` int(11) not null)engine=innodb charset=utf8;"
        );
        assert_eq!(get_fields(&payment), vec!["order_id"]);
        assert_eq!(get_values(&payment), vec![Value::Int64(3)]);
        assert_eq!(
            get_field_value(Some(&payment), "amount"),
            Err(TableError::UnsupportedValue {
                field: "amount".to_string()
            })
        );
    }

    #[test]
    fn test_should_get_sql_with_lower_case_keywords_by_default() {
        #[derive(Default, Table)]
        #[table(name = "abcd")]
        struct Minimal {
            #[column(pk, default = "auto", sql_type = "int(8)")]
            id: i32,
            #[column(sql_type = "varchar(255)", index)]
            name: String,
            #[column(unique)]
            pass: String,
            #[column(sql_type = "text")]
            desc: String,
        }

        assert_eq!(
            get_sql(&Minimal::default()).unwrap(),
            "create table if not exists abcd(`id` int(8) primary key auto_increment,`name` varchar(255) not null,index name(`name`),`pass` varchar(32) not null unique,`desc` text not null)engine=innodb charset=utf8;"
        );
    }

    #[test]
    fn test_should_lower_case_table_name_override() {
        assert_eq!(get_table_name(&Order::default()), "orders");
        assert_eq!(get_info(&Order::default()).unwrap().name, "orders");
    }

    #[test]
    fn test_should_accept_explicit_false_flags() {
        let info = get_info(&Order::default()).unwrap();
        let reference = info
            .columns
            .iter()
            .find(|column| column.name == "ref")
            .expect("ref descriptor");
        assert!(!reference.unique);
        assert!(reference.nullable);
    }
}
