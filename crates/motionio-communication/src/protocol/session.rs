//! Command session
//!
//! One session call is one complete cycle: format the command, write
//! it, read a reply through the debug filter, and parse the reply
//! into typed tokens. Each step can fail independently and
//! short-circuits the rest; a failed write never reads, a failed read
//! never parses.

use crate::protocol::command::Command;
use crate::protocol::params::{parse_reply, Token};
use crate::protocol::reply::ReplyReader;
use crate::transport::Transport;
use motionio_core::constants::{DEFAULT_READ_TIMEOUT_MS, MAX_DEBUG_LINES, RESULT_TOKEN_INDEX};
use motionio_core::Result;
use parking_lot::Mutex;
use std::time::Duration;

/// Per-session protocol limits.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Timeout applied to each individual read.
    pub read_timeout: Duration,
    /// Consecutive debug lines tolerated per reply.
    pub max_debug_lines: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
            max_debug_lines: MAX_DEBUG_LINES,
        }
    }
}

/// Parsed reply to one command.
///
/// Built fresh per call; carries the raw line alongside the typed
/// token sequence, plus the designated scalar result for call sites
/// that expect one.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// The reply line as received, terminator stripped.
    pub line: String,
    /// Typed tokens in wire order.
    pub tokens: Vec<Token>,
}

impl Reply {
    /// The designated integer result of a register-command reply.
    ///
    /// Register commands answer with a fixed-layout line whose token
    /// at [`RESULT_TOKEN_INDEX`] carries the value read or written.
    /// Returns `None` when the reply has no integral token there.
    pub fn result_int(&self) -> Option<i64> {
        self.tokens.get(RESULT_TOKEN_INDEX).and_then(|t| t.int_value)
    }
}

/// Serialized command/reply session over one transport handle.
///
/// The transport lock is held for the whole of `execute`, so two
/// callers can never interleave their writes and reads and corrupt
/// the command/reply pairing. The session itself keeps no state
/// between calls.
pub struct Session {
    transport: Mutex<Box<dyn Transport>>,
    config: SessionConfig,
}

impl Session {
    /// Create a session owning the given transport.
    pub fn new(transport: Box<dyn Transport>, config: SessionConfig) -> Self {
        Self {
            transport: Mutex::new(transport),
            config,
        }
    }

    /// The session's protocol limits.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Execute one command: write, read through the debug filter,
    /// parse. Returns the full typed reply.
    pub fn execute(&self, command: &Command) -> Result<Reply> {
        let mut transport = self.transport.lock();

        tracing::debug!("send: {}", command);
        transport.write_line(&command.encode())?;

        let reader = ReplyReader::new(self.config.max_debug_lines);
        let line = reader.read_reply(transport.as_mut(), self.config.read_timeout)?;

        let tokens = parse_reply(&line)?;
        tracing::trace!("reply: {} ({} tokens)", line, tokens.len());

        Ok(Reply { line, tokens })
    }

    /// Close the underlying transport, consuming the session.
    pub fn close(self) -> Result<()> {
        self.transport.into_inner().close()
    }
}
