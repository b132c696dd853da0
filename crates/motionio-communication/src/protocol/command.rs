//! Command formatter
//!
//! Builds the single-line ASCII commands the board accepts: a command
//! letter followed by space-separated arguments and a newline.

use motionio_core::constants::COMMAND_TERMINATOR;
use std::fmt;

/// A single command argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Numeric argument, printed in base 10.
    Int(i64),
    /// Literal text argument. Must not contain whitespace; that is a
    /// caller programming error, checked in debug builds.
    Text(String),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Arg {
    fn from(v: i64) -> Self {
        Arg::Int(v)
    }
}

impl From<u32> for Arg {
    fn from(v: u32) -> Self {
        Arg::Int(v as i64)
    }
}

impl From<i32> for Arg {
    fn from(v: i32) -> Self {
        Arg::Int(v as i64)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        debug_assert!(
            !s.chars().any(|c| c.is_ascii_whitespace()),
            "command argument must not contain whitespace: {:?}",
            s
        );
        Arg::Text(s.to_string())
    }
}

/// One board command: a letter plus ordered arguments.
///
/// Immutable once built; `encode` produces the exact wire line,
/// terminator included.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    letter: char,
    args: Vec<Arg>,
}

impl Command {
    /// Start a command with the given command letter.
    pub fn new(letter: char) -> Self {
        debug_assert!(
            letter.is_ascii_graphic(),
            "command letter must be a printable ASCII character"
        );
        Self {
            letter,
            args: Vec::new(),
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// General register command: `<letter> <port> <register> <data>`.
    pub fn register(letter: char, port: u32, register: u32, data: i64) -> Self {
        Self::new(letter).arg(port).arg(register).arg(data)
    }

    /// The command letter.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// The ordered arguments.
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Format the wire line: letter, space-separated arguments, and
    /// the line terminator.
    pub fn encode(&self) -> String {
        let mut line = String::new();
        line.push(self.letter);
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string());
        }
        line.push_str(COMMAND_TERMINATOR);
        line
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode().trim_end())
    }
}
