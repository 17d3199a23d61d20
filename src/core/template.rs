//! Story templates: parsing `{name}` placeholders and rendering answers into them.

use thiserror::Error;

use crate::schema::answer::AnswerSet;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template parse error: {0}")]
    Parse(String),
    #[error("template references '{{{0}}}' but no answer was collected for it")]
    MissingPlaceholder(String),
}

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSegment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// A blank to fill: `{field_name}`.
    Placeholder(String),
}

/// A parsed template: a sequence of segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<TemplateSegment>,
}

impl Template {
    /// Parse a template string into a sequence of segments.
    ///
    /// Syntax:
    /// - `{field_name}` → `Placeholder`; surrounding spaces inside the
    ///   braces are trimmed, so `{ adj1 }` names `adj1`
    /// - `{{` / `}}` → literal `{` / `}`
    /// - Everything else → `Literal`
    pub fn parse(input: &str) -> Result<Template, TemplateError> {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        let mut i = 0;

        while i < len {
            match chars[i] {
                '{' => {
                    if i + 1 < len && chars[i + 1] == '{' {
                        literal_buf.push('{');
                        i += 2;
                        continue;
                    }

                    if !literal_buf.is_empty() {
                        segments.push(TemplateSegment::Literal(std::mem::take(
                            &mut literal_buf,
                        )));
                    }

                    let start = i + 1;
                    let mut end = start;
                    while end < len && chars[end] != '}' {
                        if chars[end] == '{' {
                            return Err(TemplateError::Parse(
                                "nested braces are not allowed".to_string(),
                            ));
                        }
                        end += 1;
                    }
                    if end == len {
                        return Err(TemplateError::Parse("unclosed brace".to_string()));
                    }

                    let name: String = chars[start..end].iter().collect();
                    let name = name.trim();
                    if name.is_empty() {
                        return Err(TemplateError::Parse("empty braces".to_string()));
                    }

                    segments.push(TemplateSegment::Placeholder(name.to_string()));
                    i = end + 1;
                }
                '}' => {
                    if i + 1 < len && chars[i + 1] == '}' {
                        literal_buf.push('}');
                        i += 2;
                        continue;
                    }
                    return Err(TemplateError::Parse(
                        "unmatched closing brace".to_string(),
                    ));
                }
                c => {
                    literal_buf.push(c);
                    i += 1;
                }
            }
        }

        if !literal_buf.is_empty() {
            segments.push(TemplateSegment::Literal(literal_buf));
        }

        Ok(Template { segments })
    }

    /// Placeholder names in the order they appear. A name used twice is
    /// listed twice.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            TemplateSegment::Placeholder(name) => Some(name.as_str()),
            TemplateSegment::Literal(_) => None,
        })
    }

    /// Fill every placeholder from `answers`.
    pub fn render(&self, answers: &AnswerSet) -> Result<String, TemplateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                TemplateSegment::Literal(text) => out.push_str(text),
                TemplateSegment::Placeholder(name) => {
                    let value = answers
                        .get(name)
                        .ok_or_else(|| TemplateError::MissingPlaceholder(name.clone()))?;
                    out.push_str(&value.to_string());
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::answer::AnswerValue;

    #[test]
    fn parse_literal_only() {
        let t = Template::parse("Hello, world.").unwrap();
        assert_eq!(
            t.segments,
            vec![TemplateSegment::Literal("Hello, world.".to_string())]
        );
    }

    #[test]
    fn parse_placeholders() {
        let t = Template::parse("A {adj1} {noun1}.").unwrap();
        assert_eq!(
            t.segments,
            vec![
                TemplateSegment::Literal("A ".to_string()),
                TemplateSegment::Placeholder("adj1".to_string()),
                TemplateSegment::Literal(" ".to_string()),
                TemplateSegment::Placeholder("noun1".to_string()),
                TemplateSegment::Literal(".".to_string()),
            ]
        );
        let names: Vec<&str> = t.placeholders().collect();
        assert_eq!(names, vec!["adj1", "noun1"]);
    }

    #[test]
    fn parse_trims_placeholder_names() {
        let t = Template::parse("A { adj1 } day.").unwrap();
        assert_eq!(
            t.segments[1],
            TemplateSegment::Placeholder("adj1".to_string())
        );
        assert!(Template::parse("Bad {   } here").is_err());
    }

    #[test]
    fn parse_escaped_braces() {
        let t = Template::parse("Use {{braces}} here.").unwrap();
        assert_eq!(
            t.segments,
            vec![TemplateSegment::Literal("Use {braces} here.".to_string())]
        );
    }

    #[test]
    fn parse_keeps_multibyte_literals() {
        let t = Template::parse("“{exclaim1}!”").unwrap();
        assert_eq!(t.segments.len(), 3);
        assert_eq!(t.segments[0], TemplateSegment::Literal("“".to_string()));
        assert_eq!(t.segments[2], TemplateSegment::Literal("!”".to_string()));
    }

    #[test]
    fn parse_errors() {
        assert!(Template::parse("Bad {} here").is_err());
        assert!(Template::parse("Bad {outer{inner}} here").is_err());
        assert!(Template::parse("Bad {unclosed here").is_err());
        assert!(Template::parse("Bad } here").is_err());
    }

    #[test]
    fn render_substitutes_text_and_integers() {
        let t = Template::parse("{n} {noun}s, {n} times").unwrap();
        let mut answers = AnswerSet::new();
        answers.insert("noun", AnswerValue::Text("hat".to_string()));
        answers.insert("n", AnswerValue::Integer(-3));
        assert_eq!(t.render(&answers).unwrap(), "-3 hats, -3 times");
    }

    #[test]
    fn render_missing_placeholder_is_error() {
        let t = Template::parse("A {adj1} {noun1}.").unwrap();
        let mut answers = AnswerSet::new();
        answers.insert("adj1", AnswerValue::Text("red".to_string()));
        assert_eq!(
            t.render(&answers),
            Err(TemplateError::MissingPlaceholder("noun1".to_string()))
        );
    }
}
