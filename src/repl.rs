use crate::commands::{self, Command, Outcome};
use crate::config::Config;
use crate::core::traits::Tracker;
use crate::storage::Database;
use crate::utils::error::AppResult;
use crate::utils::output::OutputStyle;
use std::io::{BufRead, Write};

/// Whether the loop keeps reading after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Interactive command loop over any reader/writer pair
pub struct Session {
    prompt: String,
    color: bool,
}

impl Session {
    pub fn new(prompt: &str, color: bool) -> Self {
        Self {
            prompt: prompt.to_string(),
            color,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.general.prompt, config.general.color)
    }

    /// Prompt, read and dispatch until `quit` or end of input.
    ///
    /// Malformed commands are reported and the loop continues; any other
    /// error ends the session and is returned to the caller.
    pub fn run<T, R, W>(&self, store: &T, mut input: R, mut output: W) -> AppResult<()>
    where
        T: Tracker + ?Sized,
        R: BufRead,
        W: Write,
    {
        let mut line = String::new();
        loop {
            if self.color {
                write!(output, "{}", OutputStyle::prompt(&self.prompt))?;
            } else {
                write!(output, "{}", self.prompt)?;
            }
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                log::debug!("SESSION_EOF");
                writeln!(output)?;
                break;
            }

            if self.handle_line(store, &line, &mut output)? == Flow::Stop {
                break;
            }
        }
        Ok(())
    }

    /// Parse and execute a single line, writing its result.
    pub fn handle_line<T, W>(&self, store: &T, line: &str, output: &mut W) -> AppResult<Flow>
    where
        T: Tracker + ?Sized,
        W: Write,
    {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) if e.is_recoverable() => {
                log::debug!("COMMAND_REJECTED reason={:?}", e.to_string());
                self.write_error(output, &e.to_string())?;
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(e),
        };

        log::debug!("COMMAND_DISPATCH command={}", command.name());
        match commands::execute(store, &command)? {
            Outcome::Quit => Ok(Flow::Stop),
            outcome => {
                self.write_outcome(output, &outcome)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Run one command given as separate tokens, then close the connection.
    ///
    /// Unlike the interactive loop, a malformed command is an error here so
    /// the caller can fail the process. The connection is closed whether or
    /// not the command succeeded.
    pub fn exec<W: Write>(
        &self,
        db: Database,
        tokens: &[String],
        output: &mut W,
    ) -> AppResult<()> {
        let result = self.exec_line(&db, &tokens.join(" "), output);
        let closed = db.close();
        result?;
        closed
    }

    fn exec_line<T, W>(&self, store: &T, line: &str, output: &mut W) -> AppResult<()>
    where
        T: Tracker + ?Sized,
        W: Write,
    {
        let Some(command) = Command::parse(line)? else {
            return Ok(());
        };

        log::debug!("COMMAND_EXEC command={}", command.name());
        let outcome = commands::execute(store, &command)?;
        self.write_outcome(output, &outcome)
    }

    fn write_outcome<W: Write>(&self, output: &mut W, outcome: &Outcome) -> AppResult<()> {
        let rendered = OutputStyle::outcome(outcome, self.color);
        if !rendered.is_empty() {
            writeln!(output, "{}", rendered)?;
        }
        Ok(())
    }

    fn write_error<W: Write>(&self, output: &mut W, message: &str) -> AppResult<()> {
        if self.color {
            writeln!(output, "{}", OutputStyle::warning(message))?;
        } else {
            writeln!(output, "{}", message)?;
        }
        Ok(())
    }
}
