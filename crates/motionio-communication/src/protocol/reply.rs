//! Reply reader
//!
//! Reads lines from the transport until a genuine reply arrives,
//! discarding the board's unsolicited `D:` debug lines. The discard
//! loop is bounded: each read is limited by the per-read timeout, and
//! the number of consecutive debug lines is capped so a flooding
//! device fails fast instead of stalling the call forever.

use crate::transport::Transport;
use motionio_core::constants::{DEBUG_LINE_PREFIX, MAX_DEBUG_LINES};
use motionio_core::{ProtocolError, Result};
use std::time::Duration;

/// Debug-filtering line reader.
#[derive(Debug, Clone, Copy)]
pub struct ReplyReader {
    max_debug_lines: usize,
}

impl ReplyReader {
    /// Create a reader discarding at most `max_debug_lines`
    /// consecutive debug lines per reply.
    pub fn new(max_debug_lines: usize) -> Self {
        Self { max_debug_lines }
    }

    /// Read one genuine reply line.
    ///
    /// Each underlying read blocks up to `timeout`; the worst case
    /// for the whole call is `(max_debug_lines + 1) * timeout`.
    pub fn read_reply(&self, transport: &mut dyn Transport, timeout: Duration) -> Result<String> {
        let mut discarded = 0usize;

        loop {
            let line = transport.read_line(timeout)?;

            if let Some(chatter) = line.strip_prefix(DEBUG_LINE_PREFIX) {
                tracing::debug!("board: {}", chatter.trim_start());
                discarded += 1;
                if discarded >= self.max_debug_lines {
                    return Err(ProtocolError::TooManyDebugLines {
                        max: self.max_debug_lines,
                    }
                    .into());
                }
                continue;
            }

            return Ok(line);
        }
    }
}

impl Default for ReplyReader {
    fn default() -> Self {
        Self::new(MAX_DEBUG_LINES)
    }
}
