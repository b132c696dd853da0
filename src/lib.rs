//! # MotionIO
//!
//! Host-side driver for FPGA/microcontroller motion-IO boards
//! attached over a serial link. The board speaks a single-line ASCII
//! command/reply protocol; this crate frames commands, filters the
//! board's asynchronous `D:` debug output out of the reply stream,
//! parses replies into typed tokens, and derives the register address
//! map from the board's capability word.
//!
//! ## Architecture
//!
//! MotionIO is organized as a workspace:
//!
//! 1. **motionio-core** - Error taxonomy and protocol constants
//! 2. **motionio-communication** - Serial transport and the protocol
//!    engine (formatter, reply reader, parser, session, capability
//!    discovery, diagnostics)
//! 3. **motionio** - Umbrella crate re-exporting the public surface
//!
//! ## Quick start
//!
//! ```no_run
//! use motionio::{MotionBoard, DEFAULT_BAUD_RATE};
//!
//! # fn main() -> motionio::Result<()> {
//! let mut board = MotionBoard::open("/dev/ttyUSB0", DEFAULT_BAUD_RATE)?;
//! board.ping()?;
//! let map = board.discover_capabilities()?;
//! let reply = board.execute('w', 0, map.pwm_register(0, 1)?, 128)?;
//! println!("result = {:?}", reply.result_int());
//! board.close()?;
//! # Ok(())
//! # }
//! ```

pub use motionio_core::constants::{DEFAULT_BAUD_RATE, DEFAULT_READ_TIMEOUT_MS};
pub use motionio_core::{Error, LinkError, ProtocolError, Result};

pub use motionio_communication::{
    list_ports, AddressMap, Arg, CapabilityManager, Command, DiagnosticCommand, MotionBoard,
    Reply, ReplyReader, SerialPortInfo, SerialTransport, Session, SessionConfig, Token, TokenKind,
    Transport,
};
