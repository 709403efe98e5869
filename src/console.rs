//! Line-oriented operator I/O
//!
//! [`Console`] wraps any reader/writer pair so the interactive operations
//! can be driven from stdin in the binary and from scripted input in tests.

use crate::validate::ValidationError;
use anyhow::bail;
use std::io::{self, BufRead, Write};

/// Operator console over a buffered input and an output sink
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's standard input and output
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line
    pub fn say(&mut self, message: impl AsRef<str>) -> crate::Result<()> {
        writeln!(self.output, "{}", message.as_ref())?;
        Ok(())
    }

    /// Show `prompt` and read one line, without its line terminator.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> crate::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Like [`Console::read_line`] but treats end of input as an error
    pub fn ask(&mut self, prompt: &str) -> crate::Result<String> {
        match self.read_line(prompt)? {
            Some(line) => Ok(line),
            None => bail!("Input closed while waiting for: {}", prompt.trim_end()),
        }
    }

    /// Validate `initial`; on rejection print the reason and ask again with
    /// `retry_prompt` until `validate` accepts.
    pub fn ask_until_valid<T, F>(
        &mut self,
        initial: String,
        retry_prompt: &str,
        mut validate: F,
    ) -> crate::Result<T>
    where
        F: FnMut(&str) -> Result<T, ValidationError>,
    {
        let mut candidate = initial;
        loop {
            match validate(&candidate) {
                Ok(value) => return Ok(value),
                Err(reason) => {
                    log::debug!("Rejected input {:?}: {:?}", candidate, reason);
                    self.say(reason.to_string())?;
                    candidate = self.ask(retry_prompt)?;
                }
            }
        }
    }

    /// Consume the console, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}
