//! Line-oriented prompting: ask until the answer parses.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use log::debug;

use streak_core::{DropRarity, OddsResult, ParameterSource, TierPolicy};

const INVALID_INPUT: &str = "Invalid input, try again.";

/// Asks questions on a writer and reads answers from a reader.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::new(),
        }
    }

    /// Print a line of output.
    pub fn say(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    /// Show `prompt` and read lines until `parse` accepts one.
    ///
    /// Fails only when reading fails or input ends.
    pub fn ask<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Option<T>) -> io::Result<T> {
        loop {
            write!(self.writer, "{prompt}")?;
            self.writer.flush()?;

            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
            }

            if let Some(value) = parse(self.line.trim()) {
                return Ok(value);
            }
            debug!("rejected input {:?} for prompt {prompt:?}", self.line.trim());
            writeln!(self.writer, "{}", INVALID_INPUT.yellow())?;
        }
    }

    /// Ask for anything that implements `FromStr`.
    pub fn ask_parsed<T: std::str::FromStr>(&mut self, prompt: &str) -> io::Result<T> {
        self.ask(prompt, |s| s.parse().ok())
    }
}

impl<R: BufRead, W: Write> ParameterSource for Prompter<R, W> {
    fn luck(&mut self) -> OddsResult<f64> {
        Ok(self.ask_parsed("Luck value (-1 to 1, 0 for none): ")?)
    }

    fn looting_tier(&mut self, policy: TierPolicy) -> OddsResult<i64> {
        Ok(self.ask("Looting tier (0-3): ", |s| {
            s.parse().ok().filter(|tier| policy.check(*tier).is_ok())
        })?)
    }

    fn drop_rarity(&mut self) -> OddsResult<DropRarity> {
        Ok(self.ask("Item type, Common or Rare [C/R]: ", DropRarity::parse)?)
    }

    fn average_drops(&mut self) -> OddsResult<i64> {
        Ok(self.ask_parsed("Average number of items dropped (0-3): ")?)
    }
}
