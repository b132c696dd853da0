//! Board facade
//!
//! [`MotionBoard`] is the caller-facing handle: it owns the session
//! (and through it the one transport handle) plus the capability
//! state. Lifecycle is `open → execute* → close`; there is no
//! process-wide state, and mutual exclusion on the link is the
//! session lock held across each call.

use crate::protocol::capabilities::{AddressMap, CapabilityManager};
use crate::protocol::command::Command;
use crate::protocol::diagnostics::DiagnosticCommand;
use crate::protocol::session::{Reply, Session, SessionConfig};
use crate::transport::serial::SerialTransport;
use crate::transport::Transport;
use motionio_core::Result;

/// Handle to one attached motion-IO board.
pub struct MotionBoard {
    session: Session,
    capabilities: CapabilityManager,
}

impl MotionBoard {
    /// Open the board on the named serial port.
    pub fn open(port_name: &str, baud_rate: u32) -> Result<Self> {
        let transport = SerialTransport::open(port_name, baud_rate)?;
        tracing::info!("opened motion board on {}", port_name);
        Ok(Self::with_transport(
            Box::new(transport),
            SessionConfig::default(),
        ))
    }

    /// Build a board over an arbitrary transport. Used by tests and
    /// by callers that manage the link themselves.
    pub fn with_transport(transport: Box<dyn Transport>, config: SessionConfig) -> Self {
        Self {
            session: Session::new(transport, config),
            capabilities: CapabilityManager::new(),
        }
    }

    /// Execute a general register command:
    /// `<letter> <port> <register> <data>`.
    ///
    /// The scalar answer, when the command family has one, is
    /// [`Reply::result_int`].
    pub fn execute(&self, letter: char, port: u32, register: u32, data: i64) -> Result<Reply> {
        self.session
            .execute(&Command::register(letter, port, register, data))
    }

    /// Execute an arbitrary pre-built command.
    pub fn execute_command(&self, command: &Command) -> Result<Reply> {
        self.session.execute(command)
    }

    /// Query the capability word and rebuild the register address map.
    pub fn discover_capabilities(&mut self) -> Result<AddressMap> {
        self.capabilities.discover(&self.session)
    }

    /// The discovered address map. Fails with `CapabilitiesUnknown`
    /// until [`discover_capabilities`](Self::discover_capabilities)
    /// has succeeded once.
    pub fn address_map(&self) -> Result<&AddressMap> {
        self.capabilities.address_map()
    }

    /// Soft bus check.
    pub fn soft_check(&self) -> Result<()> {
        DiagnosticCommand::SoftCheck.run(&self.session)
    }

    /// Hard bus check (device-side bus reset).
    pub fn hard_check(&self) -> Result<()> {
        DiagnosticCommand::HardCheck.run(&self.session)
    }

    /// Ping the microcontroller; no FPGA round trip.
    pub fn ping(&self) -> Result<()> {
        DiagnosticCommand::Ping.run(&self.session)
    }

    /// Restart the board firmware.
    pub fn restart(&self) -> Result<()> {
        DiagnosticCommand::Restart.run(&self.session)
    }

    /// Close the link, consuming the handle.
    pub fn close(self) -> Result<()> {
        self.session.close()
    }
}
