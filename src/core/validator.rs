//! Field validation: checks one raw entry against the field's rule.

use std::num::{IntErrorKind, ParseIntError};
use thiserror::Error;

use crate::schema::answer::AnswerValue;
use crate::schema::rule::{Rule, RuleTable};

/// Why an entry was rejected. The display text is what the player sees.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please enter a value")]
    EmptyInput,
    #[error("please enter a valid integer")]
    NotAnInteger(String),
    #[error("value must be at least {min}")]
    BelowMinimum { min: i64 },
    #[error("value must be at most {max}")]
    AboveMaximum { max: i64 },
    #[error("please enter a single word with no spaces")]
    ContainsWhitespace,
}

/// Validate one entry for `field`.
///
/// The entry is trimmed first. Fields without a rule, and fields whose
/// rule kind is unrecognized, accept any non-empty text.
pub fn validate(
    field: &str,
    raw: &str,
    rules: &RuleTable,
) -> Result<AnswerValue, ValidationError> {
    let trimmed = raw.trim();

    match rules.get(field) {
        Some(Rule::Integer { min, max }) => validate_integer(trimmed, *min, *max),
        Some(Rule::Word) => validate_word(trimmed),
        Some(Rule::Unrecognized(_)) | None => validate_text(trimmed),
    }
}

fn validate_text(trimmed: &str) -> Result<AnswerValue, ValidationError> {
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(AnswerValue::Text(trimmed.to_string()))
}

fn validate_integer(
    trimmed: &str,
    min: Option<i64>,
    max: Option<i64>,
) -> Result<AnswerValue, ValidationError> {
    // A well-formed number too large for i64 is still past the bound it
    // overflows toward.
    let value: i64 = trimmed
        .parse()
        .map_err(|e: ParseIntError| match (e.kind(), min, max) {
            (IntErrorKind::PosOverflow, _, Some(max)) => ValidationError::AboveMaximum { max },
            (IntErrorKind::NegOverflow, Some(min), _) => ValidationError::BelowMinimum { min },
            _ => ValidationError::NotAnInteger(trimmed.to_string()),
        })?;

    if let Some(min) = min {
        if value < min {
            return Err(ValidationError::BelowMinimum { min });
        }
    }
    if let Some(max) = max {
        if value > max {
            return Err(ValidationError::AboveMaximum { max });
        }
    }

    Ok(AnswerValue::Integer(value))
}

fn validate_word(trimmed: &str) -> Result<AnswerValue, ValidationError> {
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    if trimmed.contains(char::is_whitespace) {
        return Err(ValidationError::ContainsWhitespace);
    }
    Ok(AnswerValue::Text(trimmed.to_string()))
}
