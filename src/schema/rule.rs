use rustc_hash::FxHashMap;

/// A validation rule attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Base-10 integer, with optional inclusive bounds.
    Integer { min: Option<i64>, max: Option<i64> },
    /// A single non-empty word with no whitespace.
    Word,
    /// A rule kind this version does not know. Validated like a field with
    /// no rule at all.
    Unrecognized(String),
}

impl Rule {
    pub fn integer(min: Option<i64>, max: Option<i64>) -> Self {
        Self::Integer { min, max }
    }

    /// Build a rule from the kind name used in story files.
    pub fn from_kind(kind: &str, min: Option<i64>, max: Option<i64>) -> Self {
        match kind {
            "int" | "integer" => Self::Integer { min, max },
            "word" => Self::Word,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Self::Integer { .. } => "int",
            Self::Word => "word",
            Self::Unrecognized(kind) => kind,
        }
    }
}

/// Field name to rule. Fields without an entry accept any non-empty text.
pub type RuleTable = FxHashMap<String, Rule>;
