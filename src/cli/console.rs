//! Line-oriented terminal I/O
//!
//! Wraps an input reader and an output writer so the menu and its handlers
//! can be driven from stdin/stdout or, in tests, from in-memory buffers.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::ExpenseResult;

/// Prompt/response console over any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a prompt and read one line of input
    ///
    /// Returns `None` once input is exhausted.
    pub fn prompt(&mut self, prompt: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep whatever comes next off the prompt line
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Print a line of output
    pub fn say(&mut self, line: impl Display) -> ExpenseResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Give back the underlying reader and writer
    #[cfg(test)]
    pub(crate) fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print pre-formatted text as-is
    pub fn write_text(&mut self, text: &str) -> ExpenseResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
