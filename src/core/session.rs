//! The play-again loop around rounds.

use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{error, warn};

use crate::core::console::Console;
use crate::core::round::{play_round, RoundError};
use crate::core::story::Story;
use crate::schema::stats::SessionStats;

pub const BANNER: &str = "Mad Libs";
pub const PLAY_PROMPT: &str = "Would you like to play? (y/n)";
pub const ROUND_INTRO: &str = "Fill in the blanks (you won't see the full story until the end!)";
pub const INVALID_CHOICE: &str = "Invalid choice";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Answer to the play-again question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Play,
    Quit,
}

impl Choice {
    /// `y` or `n` in either case, ignoring surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Choice> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "y" => Some(Choice::Play),
            "n" => Some(Choice::Quit),
            _ => None,
        }
    }
}

/// Keep offering rounds until the player answers `n` (or input runs out),
/// then print the summary. Returns the final statistics.
///
/// A round whose story cannot be rendered is reported and dropped; the
/// player is asked again as if the round had not started.
pub fn run_session<R: BufRead, W: Write>(
    story: &Story,
    console: &mut Console<R, W>,
) -> Result<SessionStats, SessionError> {
    let mut stats = SessionStats::new();
    console.say(BANNER)?;

    loop {
        let Some(raw) = console.ask(PLAY_PROMPT)? else {
            warn!("input closed at the play prompt");
            break;
        };

        match Choice::parse(&raw) {
            Some(Choice::Quit) => break,
            Some(Choice::Play) => {
                console.say("")?;
                console.say(ROUND_INTRO)?;
                console.say("")?;
                match play_round(story, &mut stats, console) {
                    Ok(_) => {}
                    Err(err @ RoundError::TemplateSubstitution(_)) => {
                        error!(error = %err, "round abandoned");
                        console.say(format_args!("error: {}", err))?;
                    }
                    Err(RoundError::InputClosed(field)) => {
                        warn!(field = %field, "input closed mid-round, round abandoned");
                        console.say("")?;
                        break;
                    }
                    Err(RoundError::Io(e)) => return Err(e.into()),
                }
            }
            None => console.say(INVALID_CHOICE)?,
        }
    }

    console.say(stats)?;
    Ok(stats)
}
