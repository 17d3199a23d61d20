//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Log events go to stderr so they never interleave with the game's own
//! prompts on stdout. `RUST_LOG` overrides the level chosen on the command
//! line.
//!
//! - `error`: a story that cannot be rendered
//! - `warn`: input closed before the player quit
//! - `info`: round results
//! - `debug`: every rejected entry

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub with_target: bool,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_target: false,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Map a `-v` count to a level: 0 warn, 1 info, 2 debug, 3+ trace.
    pub fn from_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            with_target: verbose >= 2,
            ..Self::default()
        }
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config.level))
        .with_target(config.with_target)
        .with_ansi(config.with_ansi)
        .with_writer(std::io::stderr)
        .without_time()
        .finish()
        .try_init()
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,madlibs={level}",
            level = level.as_str().to_lowercase()
        ))
    })
}
