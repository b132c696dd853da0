//! Transport abstraction for the board link
//!
//! The protocol engine talks to the board through the [`Transport`]
//! trait only: blocking line writes and line reads bounded by a
//! per-read timeout. The serial implementation lives in
//! [`serial`]; tests substitute scripted implementations.

pub mod serial;

use motionio_core::Result;
use std::time::Duration;

/// Duplex line channel to the board.
///
/// One handle maps to one physical link. Callers must serialize
/// access themselves; the [`Session`](crate::protocol::session::Session)
/// does so by holding its transport behind a lock for the whole of
/// each command/reply cycle.
pub trait Transport: Send {
    /// Write one already-terminated command line, verbatim.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Read one line, blocking up to `timeout`.
    ///
    /// The returned line has its terminator (and any trailing CR)
    /// stripped. Times out with `LinkError::ReadTimedOut`.
    fn read_line(&mut self, timeout: Duration) -> Result<String>;

    /// Close the link. Best effort; errors are reported, not retried.
    fn close(&mut self) -> Result<()>;
}
