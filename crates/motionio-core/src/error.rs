//! Error handling for MotionIO
//!
//! Provides the error types for both layers of the driver:
//! - Link errors (serial transport: open, read, write, close)
//! - Protocol errors (reply framing, token limits, capability state)
//!
//! All error types use `thiserror`. Errors are surfaced to callers as
//! typed results; nothing in the driver retries internally and nothing
//! panics across a component boundary.

use thiserror::Error;

/// Transport-level error type
///
/// Represents faults on the serial link itself, from open through
/// close. None of these are retried by the driver; retry policy
/// belongs to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinkError {
    /// Failed to open the serial port
    #[error("Failed to open port {port}: {reason}")]
    OpenFailed {
        /// The name of the port that failed to open.
        port: String,
        /// The reason the port failed to open.
        reason: String,
    },

    /// Port name was empty or missing
    #[error("Port name is empty or invalid")]
    PortNameInvalid,

    /// Read from the link failed
    #[error("Read failed: {reason}")]
    ReadFailed {
        /// The reason the read failed.
        reason: String,
    },

    /// Read timed out waiting for a reply line
    #[error("Read timed out after {timeout_ms}ms")]
    ReadTimedOut {
        /// The timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// Write to the link failed
    #[error("Write failed: {reason}")]
    WriteFailed {
        /// The reason the write failed.
        reason: String,
    },

    /// Closing the port failed (best effort; caller logs and proceeds)
    #[error("Close failed: {reason}")]
    CloseFailed {
        /// The reason the close failed.
        reason: String,
    },
}

/// Protocol-level error type
///
/// Represents violations of the command/reply protocol after the link
/// itself worked. A `MalformedReply` or `TooManyTokens` usually means
/// the command/reply pairing has desynchronized and the caller should
/// consider draining the link and reissuing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProtocolError {
    /// Reply line was empty or otherwise unparseable
    #[error("Malformed reply: {reason}")]
    MalformedReply {
        /// The reason the reply could not be parsed.
        reason: String,
    },

    /// Reply carried more tokens than the fixed maximum
    #[error("Reply has {count} tokens, maximum is {max}")]
    TooManyTokens {
        /// The number of tokens in the reply.
        count: usize,
        /// The configured maximum token count.
        max: usize,
    },

    /// The device flooded consecutive debug lines past the bound
    #[error("Discarded {max} consecutive debug lines without a reply")]
    TooManyDebugLines {
        /// The configured maximum debug-line count.
        max: usize,
    },

    /// Register addressing attempted before a successful capability query
    #[error("Device capabilities unknown: run discovery first")]
    CapabilitiesUnknown,

    /// Register address out of range for the discovered device
    #[error("No such register: {reason}")]
    NoSuchRegister {
        /// Which unit/register bound was violated.
        reason: String,
    },
}

/// Main error type for MotionIO
///
/// A unified error type covering both layers. This is the error type
/// used in public APIs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Transport-level fault
    #[error(transparent)]
    Link(#[from] LinkError),

    /// Protocol-level fault
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl Error {
    /// Check if this is a read-timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Link(LinkError::ReadTimedOut { .. }))
    }

    /// Check if this is a transport-level error
    pub fn is_link_error(&self) -> bool {
        matches!(self, Error::Link(_))
    }

    /// Check if this is a protocol-level error
    pub fn is_protocol_error(&self) -> bool {
        matches!(self, Error::Protocol(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
