//! # MotionIO Communication
//!
//! Serial transport and the command/reply protocol engine for
//! MotionIO boards. The board speaks a single-line ASCII protocol:
//! the host writes `<letter> <arg> ...` commands, the board answers
//! with whitespace-delimited token lines, and interleaves unsolicited
//! `D:` debug lines that must never reach the parser.

pub mod protocol;
pub mod transport;

pub use transport::{
    serial::{list_ports, SerialPortInfo, SerialTransport},
    Transport,
};

pub use protocol::{
    capabilities::{AddressMap, CapabilityManager},
    command::{Arg, Command},
    device::MotionBoard,
    diagnostics::DiagnosticCommand,
    params::{parse_reply, Token, TokenKind},
    reply::ReplyReader,
    session::{Reply, Session, SessionConfig},
};
