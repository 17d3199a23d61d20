use std::fmt;

/// Statistics for the whole process run. Only a completed round changes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_played: u32,
    pub best_score: Option<u32>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished round and keep the higher of the old best and `score`.
    pub fn record_round(&mut self, score: u32) {
        self.rounds_played += 1;
        self.best_score = Some(self.best_score.map_or(score, |best| best.max(score)));
    }
}

/// Two summary lines: rounds played, then best score (`none` before any
/// round has finished).
impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rounds played: {}", self.rounds_played)?;
        match self.best_score {
            Some(best) => write!(f, "Best score: {}", best),
            None => write!(f, "Best score: none"),
        }
    }
}
