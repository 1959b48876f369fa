//! Line parsing for the interactive chat loop.

#[cfg(test)]
#[path = "repl_test.rs"]
mod repl_test;

use std::path::PathBuf;

pub const HELP: &str = "\
Type a message and press Enter to send it.
  /attach <path>  stage a file for the next message (Enter on an empty line sends it alone)
  /toggle         open or close the panel
  /help           show this help
  /quit           exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Submit(String),
    Attach(PathBuf),
    Toggle,
    Help,
    Quit,
    Unknown(String),
}

/// Classify one line of terminal input.
///
/// Anything not starting with `/` is a message, including blank lines.
pub fn parse_line(line: &str) -> ReplInput {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix('/') else {
        return ReplInput::Submit(line.to_owned());
    };

    let (name, rest) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(name, rest)| (name, rest.trim()));

    match (name, rest) {
        ("attach", path) if !path.is_empty() => ReplInput::Attach(PathBuf::from(path)),
        ("toggle", "") => ReplInput::Toggle,
        ("help", "") => ReplInput::Help,
        ("quit" | "exit", "") => ReplInput::Quit,
        _ => ReplInput::Unknown(trimmed.to_owned()),
    }
}
