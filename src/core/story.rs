//! Story definitions (the template, the ordered field prompts and the rule
//! table) and loading them from RON.

use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::core::template::{Template, TemplateError};
use crate::schema::field::FieldSpec;
use crate::schema::rule::{Rule, RuleTable};

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("template placeholder '{0}' has no field prompt")]
    UnknownPlaceholder(String),
    #[error("rule for '{0}' does not match any field")]
    RuleWithoutField(String),
    #[error("field '{0}' is defined more than once")]
    DuplicateField(String),
    #[error("integer rule for '{field}' has min {min} greater than max {max}")]
    InvertedBounds { field: String, min: i64, max: i64 },
}

const TRAIN_STATION_TEMPLATE: &str = "I was waiting for the {adj1} train at {num1} o’clock when a {noun1} \
     {verb_past1} past me and shouted, “{exclaim1}!” \
     I grabbed my {noun2} and ran {num2} steps to the {noun3}.";

const TRAIN_STATION_FIELDS: [(&str, &str); 8] = [
    ("adj1", "Enter an adjective:"),
    ("num1", "Enter a number (0-23):"),
    ("noun1", "Enter a noun:"),
    ("verb_past1", "Enter a past-tense verb:"),
    ("exclaim1", "Enter an exclamation (one word):"),
    ("noun2", "Enter a noun:"),
    ("num2", "Enter a number (1-500):"),
    ("noun3", "Enter a noun:"),
];

/// Everything one round needs: what to ask, how to check it, and the text
/// the answers are poured into. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Story {
    pub template: Template,
    pub fields: Vec<FieldSpec>,
    pub rules: RuleTable,
}

// RON deserialization helpers. Rule kinds are plain strings on disk so an
// unknown kind survives loading.

#[derive(Debug, Deserialize)]
struct RonField {
    name: String,
    prompt: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename = "Rule")]
struct RonRule {
    kind: String,
    #[serde(default)]
    min: Option<i64>,
    #[serde(default)]
    max: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename = "Story")]
struct RonStory {
    template: String,
    fields: Vec<RonField>,
    #[serde(default)]
    rules: BTreeMap<String, RonRule>,
}

impl Story {
    /// The train station story the game ships with.
    pub fn train_station() -> Result<Story, StoryError> {
        let fields = TRAIN_STATION_FIELDS
            .iter()
            .map(|(name, prompt)| FieldSpec::new(*name, *prompt))
            .collect();

        let mut rules = RuleTable::default();
        rules.insert("num1".to_string(), Rule::integer(Some(0), Some(23)));
        rules.insert("num2".to_string(), Rule::integer(Some(1), Some(500)));
        rules.insert("exclaim1".to_string(), Rule::Word);

        Ok(Story {
            template: Template::parse(TRAIN_STATION_TEMPLATE)?,
            fields,
            rules,
        })
    }

    /// Load a story from a RON file. The loaded story is checked.
    pub fn load_from_ron(path: &Path) -> Result<Story, StoryError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a story from a RON string. The parsed story is checked.
    pub fn parse_ron(input: &str) -> Result<Story, StoryError> {
        let raw: RonStory = ron::from_str(input)?;
        let template = Template::parse(&raw.template)?;

        let fields = raw
            .fields
            .into_iter()
            .map(|f| FieldSpec::new(f.name, f.prompt))
            .collect();

        let rules = raw
            .rules
            .into_iter()
            .map(|(name, r)| (name, Rule::from_kind(&r.kind, r.min, r.max)))
            .collect();

        let story = Story {
            template,
            fields,
            rules,
        };
        story.check()?;
        Ok(story)
    }

    /// Verify that every placeholder and every rule names a field, that
    /// field names are unique, and that integer bounds are ordered.
    pub fn check(&self) -> Result<(), StoryError> {
        let mut names = FxHashSet::default();
        for field in &self.fields {
            if !names.insert(field.name.as_str()) {
                return Err(StoryError::DuplicateField(field.name.clone()));
            }
        }

        for placeholder in self.template.placeholders() {
            if !names.contains(placeholder) {
                return Err(StoryError::UnknownPlaceholder(placeholder.to_string()));
            }
        }

        let mut rule_names: Vec<&String> = self.rules.keys().collect();
        rule_names.sort();
        for name in rule_names {
            if !names.contains(name.as_str()) {
                return Err(StoryError::RuleWithoutField(name.clone()));
            }
            if let Some(Rule::Integer {
                min: Some(min),
                max: Some(max),
            }) = self.rules.get(name)
            {
                if min > max {
                    return Err(StoryError::InvertedBounds {
                        field: name.clone(),
                        min: *min,
                        max: *max,
                    });
                }
            }
        }

        Ok(())
    }

    /// Fields that have a prompt but never appear in the template.
    pub fn unused_fields(&self) -> Vec<&str> {
        let used: FxHashSet<&str> = self.template.placeholders().collect();
        self.fields
            .iter()
            .map(|f| f.name.as_str())
            .filter(|name| !used.contains(name))
            .collect()
    }
}
