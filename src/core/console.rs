//! Line-oriented console over any reader/writer pair.

use std::io::{self, BufRead, Write};

/// Prompts go to `output`, answers come from `input`. Tests drive this with
/// a `Cursor` and a `Vec<u8>`; the game binary uses locked stdin/stdout.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `prompt`, then block until one line is read. Returns `None` once
    /// input is exhausted. The line terminator is stripped; other
    /// whitespace is left for the caller.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    pub fn say(&mut self, line: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
