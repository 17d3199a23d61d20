//! Round scoring.

use crate::schema::answer::AnswerSet;
use crate::schema::rule::RuleTable;

/// Points for any answered field.
pub const ANSWER_POINTS: u32 = 1;
/// Extra points for an answered field that had to pass a rule.
pub const RULE_BONUS: u32 = 2;

/// Score a completed answer set: one point per answer, plus a bonus for
/// each answer whose field carries a rule.
pub fn score(answers: &AnswerSet, rules: &RuleTable) -> u32 {
    answers
        .field_names()
        .map(|name| {
            if rules.contains_key(name) {
                ANSWER_POINTS + RULE_BONUS
            } else {
                ANSWER_POINTS
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::answer::AnswerValue;
    use crate::schema::rule::Rule;
    use proptest::prelude::*;

    #[test]
    fn eight_answers_three_rules_scores_fourteen() {
        let mut answers = AnswerSet::new();
        for name in ["a", "b", "c", "d", "e", "f", "g", "h"] {
            answers.insert(name, AnswerValue::Text(name.to_string()));
        }
        let mut rules = RuleTable::default();
        rules.insert("b".to_string(), Rule::integer(None, None));
        rules.insert("e".to_string(), Rule::Word);
        rules.insert("g".to_string(), Rule::integer(Some(1), None));
        assert_eq!(score(&answers, &rules), 14);
    }

    #[test]
    fn rules_for_unanswered_fields_do_not_count() {
        let mut answers = AnswerSet::new();
        answers.insert("a", AnswerValue::Integer(1));
        let mut rules = RuleTable::default();
        rules.insert("z".to_string(), Rule::Word);
        assert_eq!(score(&answers, &rules), 1);
        assert_eq!(score(&AnswerSet::new(), &rules), 0);
    }

    proptest! {
        #[test]
        fn score_matches_closed_form(flags in proptest::collection::vec(any::<bool>(), 0..30)) {
            let mut answers = AnswerSet::new();
            let mut rules = RuleTable::default();
            for (i, has_rule) in flags.iter().enumerate() {
                let name = format!("f{}", i);
                answers.insert(name.clone(), AnswerValue::Integer(i as i64));
                if *has_rule {
                    rules.insert(name, Rule::Word);
                }
            }
            let covered = flags.iter().filter(|f| **f).count() as u32;
            prop_assert_eq!(score(&answers, &rules), flags.len() as u32 + 2 * covered);
        }
    }
}
