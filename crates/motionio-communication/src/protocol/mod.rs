//! Command/reply protocol engine
//!
//! One command/reply cycle runs Formatter → write → Reader → Parser:
//! [`command`] frames the outgoing line, [`reply`] reads lines while
//! discarding `D:` debug chatter, [`params`] tokenizes and types the
//! reply, and [`session`] ties the cycle together over one locked
//! transport. [`capabilities`] derives the register address map from
//! the board's capability word, and [`diagnostics`] catalogues the
//! fixed bus-check/ping/restart commands. [`device`] is the caller
//! facing facade.

pub mod capabilities;
pub mod command;
pub mod device;
pub mod diagnostics;
pub mod params;
pub mod reply;
pub mod session;
