//! Answer collection: asks for each field in order until it validates.

use std::io::{BufRead, Write};
use tracing::debug;

use crate::core::console::Console;
use crate::core::round::RoundError;
use crate::core::validator::validate;
use crate::schema::answer::AnswerSet;
use crate::schema::field::FieldSpec;
use crate::schema::rule::RuleTable;

/// Ask for every field in `fields` order. A rejected entry prints its
/// reason and asks for the same field again, with no retry limit, so the
/// returned set always holds exactly one valid value per field.
pub fn collect<R: BufRead, W: Write>(
    fields: &[FieldSpec],
    rules: &RuleTable,
    console: &mut Console<R, W>,
) -> Result<AnswerSet, RoundError> {
    let mut answers = AnswerSet::new();

    for field in fields {
        loop {
            let raw = console
                .ask(&field.prompt)?
                .ok_or_else(|| RoundError::InputClosed(field.name.clone()))?;

            match validate(&field.name, &raw, rules) {
                Ok(value) => {
                    answers.insert(field.name.clone(), value);
                    break;
                }
                Err(e) => {
                    debug!(field = %field.name, reason = ?e, "entry rejected");
                    console.say(&e)?;
                }
            }
        }
    }

    Ok(answers)
}
