//! Story Linter: checks RON story files before they are played.
//!
//! Usage: story_linter <story.ron>...

use clap::Parser;
use madlibs::core::story::Story;
use madlibs::schema::rule::Rule;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "story_linter")]
#[command(about = "Check story files for broken placeholders, rules and fields", long_about = None)]
#[command(version)]
struct Cli {
    /// RON story files to check
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let mut error_count = 0;
    let mut warning_count = 0;

    for path in &cli.paths {
        let (errors, warnings) = lint_story(path);
        for e in &errors {
            println!("ERROR {}: {}", path.display(), e);
        }
        for w in &warnings {
            println!("WARN  {}: {}", path.display(), w);
        }
        if errors.is_empty() && warnings.is_empty() {
            println!("OK    {}", path.display());
        }
        error_count += errors.len();
        warning_count += warnings.len();
    }

    println!(
        "\n{} file(s), {} error(s), {} warning(s)",
        cli.paths.len(),
        error_count,
        warning_count
    );

    if error_count > 0 {
        process::exit(1);
    }
}

fn lint_story(path: &Path) -> (Vec<String>, Vec<String>) {
    let story = match Story::load_from_ron(path) {
        Ok(story) => story,
        Err(e) => return (vec![e.to_string()], Vec::new()),
    };

    let mut warnings = Vec::new();

    for name in story.unused_fields() {
        warnings.push(format!("field '{}' is never used by the template", name));
    }

    let mut rule_names: Vec<&String> = story.rules.keys().collect();
    rule_names.sort();
    for name in rule_names {
        let rule = &story.rules[name];
        if matches!(rule, Rule::Unrecognized(_)) {
            warnings.push(format!(
                "rule for '{}' has unknown kind '{}' and only checks for a non-empty answer",
                name,
                rule.kind()
            ));
        }
    }

    (Vec::new(), warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_takes_many_paths_and_requires_one() {
        let cli = Cli::try_parse_from(["story_linter", "a.ron", "b.ron"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from("a.ron"), PathBuf::from("b.ron")]);
        assert!(Cli::try_parse_from(["story_linter"]).is_err());
    }

    #[test]
    fn lint_reports_unknown_kind_and_fixture_errors() {
        let (errors, warnings) = lint_story(Path::new("tests/fixtures/test_story.ron"));
        assert!(errors.is_empty());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("field 'mood' is never used"));
        assert!(warnings[1].contains("unknown kind 'sparkly'"));

        let (errors, _) = lint_story(Path::new("tests/fixtures/broken_story.ron"));
        assert_eq!(errors.len(), 1);
    }
}
