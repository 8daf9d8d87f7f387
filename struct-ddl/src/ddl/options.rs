use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// What the generator does with a column which has no SQL type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingTypePolicy {
    /// Log a warning and leave the column out of the statement.
    #[default]
    Skip,
    /// Fail the whole statement with [`crate::prelude::TableError::MissingType`].
    Abort,
}

/// Letter case of the SQL keywords in the generated statement.
///
/// Identifiers, types, default values and comments are written as they are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCase {
    Upper,
    #[default]
    Lower,
}

impl KeywordCase {
    /// Renders an upper-case keyword in this case.
    pub fn apply(self, keyword: &'static str) -> Cow<'static, str> {
        match self {
            KeywordCase::Upper => Cow::Borrowed(keyword),
            KeywordCase::Lower => Cow::Owned(keyword.to_lowercase()),
        }
    }
}

/// Options of the [`super::DdlGenerator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DdlOptions {
    pub missing_type: MissingTypePolicy,
    pub keyword_case: KeywordCase,
}

impl DdlOptions {
    pub fn with_missing_type(mut self, policy: MissingTypePolicy) -> Self {
        self.missing_type = policy;
        self
    }

    pub fn with_keyword_case(mut self, case: KeywordCase) -> Self {
        self.keyword_case = case;
        self
    }
}
