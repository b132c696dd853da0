//! # MotionIO Core
//!
//! Core types shared across the MotionIO driver stack: the error
//! taxonomy and the wire/register-geometry constants of the board
//! protocol.

pub mod constants;
pub mod error;

pub use error::{Error, LinkError, ProtocolError, Result};
