//! Diagnostic command catalogue
//!
//! The board's fixed diagnostic vocabulary: bus checks, ping,
//! restart, and the capability query. Each is a pre-encoded command
//! run through the session with no reply decoding beyond the
//! session's own; callers get a status only. If board firmware ever
//! changes a literal, this is the one place to touch.

use crate::protocol::command::Command;
use crate::protocol::session::Session;
use motionio_core::Result;
use std::fmt;

/// Fixed diagnostic commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCommand {
    /// Soft bus check: exercises the µC↔FPGA bus without touching state.
    SoftCheck,
    /// Hard bus check: device-side bus reset plus check.
    HardCheck,
    /// Ping the microcontroller only; no FPGA round trip.
    Ping,
    /// Restart the board firmware.
    Restart,
    /// Read the capability word register.
    QueryCapabilities,
}

impl DiagnosticCommand {
    /// The wire command for this diagnostic.
    pub fn command(&self) -> Command {
        match self {
            Self::SoftCheck => Command::new('c').arg(0),
            Self::HardCheck => Command::new('c').arg(1),
            Self::Ping => Command::new('p'),
            Self::Restart => Command::new('r'),
            Self::QueryCapabilities => Command::new('y'),
        }
    }

    /// Run the diagnostic, discarding the reply payload.
    pub fn run(&self, session: &Session) -> Result<()> {
        session.execute(&self.command()).map(|_| ())
    }
}

impl fmt::Display for DiagnosticCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SoftCheck => write!(f, "soft bus check"),
            Self::HardCheck => write!(f, "hard bus check"),
            Self::Ping => write!(f, "ping"),
            Self::Restart => write!(f, "restart"),
            Self::QueryCapabilities => write!(f, "capability query"),
        }
    }
}
