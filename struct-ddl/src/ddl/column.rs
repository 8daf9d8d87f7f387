use crate::ddl::KeywordCase;
use crate::prelude::{ColumnDefault, ColumnDescriptor, TableError, TableResult};

/// Builds the clause of a single column, comma-terminated.
///
/// An indexed column is followed by its own `INDEX` clause.
pub fn column_clause(column: &ColumnDescriptor, case: KeywordCase) -> TableResult<String> {
    if column.sql_type.is_empty() {
        return Err(TableError::MissingType {
            column: column.name.clone(),
        });
    }

    let name = column.name.to_lowercase();
    let mut clause = format!("`{name}` {}", column.sql_type);

    if column.primary_key {
        push_keyword(&mut clause, case, "PRIMARY KEY");
    } else if !column.nullable {
        push_keyword(&mut clause, case, "NOT NULL");
    }

    match &column.default {
        Some(ColumnDefault::AutoIncrement) => push_keyword(&mut clause, case, "AUTO_INCREMENT"),
        Some(ColumnDefault::Literal(value)) => {
            push_keyword(&mut clause, case, "DEFAULT");
            push_quoted(&mut clause, value);
        }
        None => {}
    }

    if column.unique {
        push_keyword(&mut clause, case, "UNIQUE");
    }

    if let Some(comment) = column.comment.as_deref().filter(|c| !c.is_empty()) {
        push_keyword(&mut clause, case, "COMMENT");
        push_quoted(&mut clause, comment);
    }

    clause.push(',');

    if column.index {
        clause.push_str(&case.apply("INDEX"));
        clause.push_str(&format!(" {name}(`{name}`),"));
    }

    Ok(clause)
}

fn push_keyword(clause: &mut String, case: KeywordCase, keyword: &'static str) {
    clause.push(' ');
    clause.push_str(&case.apply(keyword));
}

fn push_quoted(clause: &mut String, text: &str) {
    clause.push_str(" \"");
    clause.push_str(text);
    clause.push('"');
}
