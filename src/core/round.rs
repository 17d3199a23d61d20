//! One round of play: collect, render, score, record, report.

use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::info;

use crate::core::collector::collect;
use crate::core::console::Console;
use crate::core::scorer::score;
use crate::core::story::Story;
use crate::core::template::TemplateError;
use crate::schema::answer::AnswerSet;
use crate::schema::stats::SessionStats;

#[derive(Debug, Error)]
pub enum RoundError {
    /// The story asks for a placeholder that was never collected. This is
    /// a broken story, not bad input, so the round is abandoned.
    #[error("template substitution failed: {0}")]
    TemplateSubstitution(#[from] TemplateError),
    #[error("input closed while waiting for '{0}'")]
    InputClosed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What a completed round produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub story: String,
    pub answers: AnswerSet,
    pub score: u32,
}

/// Play one round of `story` and fold its score into `stats`.
///
/// `stats` is only touched once the story has rendered, so a failed round
/// leaves it exactly as it was.
pub fn play_round<R: BufRead, W: Write>(
    story: &Story,
    stats: &mut SessionStats,
    console: &mut Console<R, W>,
) -> Result<RoundReport, RoundError> {
    let answers = collect(&story.fields, &story.rules, console)?;
    let rendered = story.template.render(&answers)?;
    let points = score(&answers, &story.rules);

    stats.record_round(points);
    info!(
        round = stats.rounds_played,
        score = points,
        best = ?stats.best_score,
        "round complete"
    );

    console.say(&rendered)?;
    console.say(format_args!("Answers: {}", answers))?;
    console.say(format_args!("Score: {}", points))?;

    Ok(RoundReport {
        story: rendered,
        answers,
        score: points,
    })
}
