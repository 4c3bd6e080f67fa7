//! Command parsing and input plumbing for the interactive prompt.

use std::io::{self, BufRead};
use std::thread;

use tokio::sync::mpsc;

use crate::error::{CacheError, Result};

/// Lines buffered between the reader thread and the prompt.
const LINE_BUFFER: usize = 16;

/// A single line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch a URL through the cache
    Fetch(String),
    /// Print cache statistics
    Stats,
    Help,
    Exit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    ///
    /// The command word is case-insensitive; arguments are kept verbatim.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let words = clean_input(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match name.to_lowercase().as_str() {
            "fetch" | "get" => match args {
                [url] => Command::Fetch(url.to_string()),
                _ => {
                    return Err(CacheError::InvalidCommand(
                        "usage: fetch <url>".to_string(),
                    ))
                }
            },
            "stats" => Command::Stats,
            "help" => Command::Help,
            "exit" | "quit" => Command::Exit,
            other => {
                return Err(CacheError::InvalidCommand(format!(
                    "unknown command '{}', type 'help' to see available commands",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

/// Usage text printed by `help`.
pub const HELP: &str = "\
Usage:
  fetch <url>  Fetch a URL, serving it from the cache when possible
  stats        Show cache statistics
  help         Display this message
  exit         Quit";

/// Splits a line into whitespace-separated words.
pub fn clean_input(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Reads lines from `reader` on a dedicated OS thread and forwards them.
///
/// The channel closes at end of input. A read error is forwarded and then
/// closes the channel. Blocking reads stay off the tokio runtime, so
/// dropping the receiver never leaves the runtime waiting for input.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<mpsc::Receiver<io::Result<String>>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);

    thread::Builder::new()
        .name("line-reader".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.blocking_send(line).is_err() || failed {
                    break;
                }
            }
        })?;

    Ok(rx)
}
