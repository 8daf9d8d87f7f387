use serde::{Deserialize, Serialize};

/// Describes one column of the flattened table schema.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// The name of the column, lower-cased.
    pub name: String,
    /// The SQL type of the column, including its length (e.g. `int(11)`).
    pub sql_type: String,
    /// Indicates if this column is the primary key.
    pub primary_key: bool,
    /// Indicates if this column has a unique constraint.
    pub unique: bool,
    /// Indicates if a secondary index must be created for this column.
    pub index: bool,
    /// Indicates if this column can contain NULL values.
    pub nullable: bool,
    /// Default value of the column, if any.
    pub default: Option<ColumnDefault>,
    /// Column comment, if any.
    pub comment: Option<String>,
    /// Indicates if this column is left out of the generated statement.
    pub exclude: bool,
}

/// Default value of a column.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnDefault {
    /// The column value is generated by the database.
    AutoIncrement,
    /// A literal default value.
    Literal(String),
}

impl ColumnDefault {
    /// Tag value which selects [`ColumnDefault::AutoIncrement`].
    pub const AUTO: &'static str = "auto";

    /// Parses a default tag value.
    ///
    /// An empty string means no default.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => None,
            Self::AUTO => Some(Self::AutoIncrement),
            literal => Some(Self::Literal(literal.to_string())),
        }
    }
}

/// Per-field column configuration, as declared with `#[column(...)]`.
///
/// Options are checked by the derive macro at compile time; this is the typed form the
/// generated code hands over to [`crate::schema::Field::describe`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColumnOptions {
    /// Explicit SQL type; the fallback type of the field is used when `None`.
    pub sql_type: Option<&'static str>,
    pub primary_key: bool,
    pub unique: bool,
    pub index: bool,
    pub nullable: bool,
    /// Raw default tag; `"auto"` means auto-increment.
    pub default: Option<&'static str>,
    pub comment: Option<&'static str>,
    pub exclude: bool,
}

impl ColumnOptions {
    /// Options of a field without any attribute.
    pub const fn new() -> Self {
        Self {
            sql_type: None,
            primary_key: false,
            unique: false,
            index: false,
            nullable: false,
            default: None,
            comment: None,
            exclude: false,
        }
    }
}

impl ColumnDescriptor {
    /// Creates a non-nullable column without constraints.
    ///
    /// The name is lower-cased.
    pub fn new(name: impl AsRef<str>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.as_ref().to_lowercase(),
            sql_type: sql_type.into(),
            primary_key: false,
            unique: false,
            index: false,
            nullable: false,
            default: None,
            comment: None,
            exclude: false,
        }
    }

    /// Builds the descriptor of field `name` from its options.
    ///
    /// `fallback_sql_type` is used when the options carry no explicit (non-empty) type.
    pub fn from_options(name: &str, fallback_sql_type: &str, options: &ColumnOptions) -> Self {
        let sql_type = options
            .sql_type
            .filter(|ty| !ty.is_empty())
            .unwrap_or(fallback_sql_type);

        Self {
            name: name.to_lowercase(),
            sql_type: sql_type.to_string(),
            primary_key: options.primary_key,
            unique: options.unique,
            index: options.index,
            nullable: options.nullable,
            default: options.default.and_then(ColumnDefault::parse),
            comment: options
                .comment
                .filter(|comment| !comment.is_empty())
                .map(str::to_string),
            exclude: options.exclude,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn index(mut self) -> Self {
        self.index = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn default_value(mut self, default: ColumnDefault) -> Self {
        self.default = Some(default);
        self
    }

    pub fn auto_increment(self) -> Self {
        self.default_value(ColumnDefault::AutoIncrement)
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn exclude(mut self) -> Self {
        self.exclude = true;
        self
    }
}
