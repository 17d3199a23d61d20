//! Mad Libs: an interactive fill-in-the-blanks story game.
//!
//! The player is asked for a fixed set of words and numbers, each checked
//! against an optional rule. The answers are poured into a story template,
//! the round is scored, and the session keeps a running tally of rounds
//! played and the best score.

pub mod core;
pub mod logging;
pub mod schema;
