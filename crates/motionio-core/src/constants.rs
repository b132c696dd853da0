//! Protocol and register-geometry constants
//!
//! Wire-level defaults for the board's command/reply protocol and the
//! fixed register layout used to derive per-peripheral base addresses
//! from the capability word.

/// Default baud rate for the board's serial link.
pub const DEFAULT_BAUD_RATE: u32 = 256_000;

/// Default per-read timeout for a reply line, in milliseconds.
///
/// Timeouts bound each individual read, not a whole command: a call
/// that filters N debug lines can take up to (N + 1) timeouts.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 10_000;

/// Prefix marking an unsolicited debug line from the device.
///
/// Debug lines are not replies and are discarded by the reply reader.
pub const DEBUG_LINE_PREFIX: &str = "D:";

/// Maximum number of tokens accepted in a single reply line.
///
/// Replies with more tokens are rejected, not truncated.
pub const MAX_REPLY_TOKENS: usize = 10;

/// Maximum consecutive debug lines discarded while waiting for a reply.
///
/// Bounds the filter loop so a debug-flooding device cannot stall a
/// command indefinitely.
pub const MAX_DEBUG_LINES: usize = 50;

/// Token index holding the scalar result of a register command reply.
///
/// The board answers general register commands with a fixed-layout
/// line whose third field carries the value read or written. Kept as
/// a single documented constant for the whole register-command family.
pub const RESULT_TOKEN_INDEX: usize = 2;

/// Line terminator appended to every outgoing command.
pub const COMMAND_TERMINATOR: &str = "\n";

// Register geometry. The register space is flat: a system block,
// then one block per PWM unit, then per quadrature-encoder unit,
// then per RC-servo unit.

/// Registers in the system block at the bottom of the register space.
pub const SYS_REGISTERS: u32 = 1;

/// Registers per PWM unit.
pub const REGISTERS_PER_PWM: u32 = 4;

/// Registers per quadrature-encoder unit.
pub const REGISTERS_PER_QE: u32 = 7;

/// Registers per RC-servo unit.
pub const REGISTERS_PER_RC: u32 = 2;

// Capability word layout: 4-bit unit-count fields.

/// Bit offset of the PWM unit-count field in the capability word.
pub const CAP_PWM_SHIFT: u32 = 0;

/// Bit offset of the quadrature-encoder unit-count field.
pub const CAP_QE_SHIFT: u32 = 4;

/// Bit offset of the RC-servo unit-count field.
pub const CAP_RC_SHIFT: u32 = 8;

/// Width mask for each unit-count field.
pub const CAP_FIELD_MASK: u32 = 0xF;
