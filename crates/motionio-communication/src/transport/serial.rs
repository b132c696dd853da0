//! Serial port transport implementation
//!
//! Provides the real serial link to the board via USB or RS-232:
//! port enumeration, opening with the board's fixed 8N1 framing, and
//! blocking line-oriented reads and writes on top of the raw byte
//! stream.

use crate::transport::Transport;
use motionio_core::{Error, LinkError, Result};
use std::io::{self, Read, Write};
use std::time::{Duration, Instant};

/// How long each raw read polls before the line deadline is rechecked.
const POLL_INTERVAL_MS: u64 = 50;

/// Information about an available serial port
#[derive(Debug, Clone)]
pub struct SerialPortInfo {
    /// Port name (e.g., "/dev/ttyUSB0", "COM3")
    pub port_name: String,

    /// Port description (e.g., "USB Serial Port")
    pub description: String,

    /// Manufacturer name if available
    pub manufacturer: Option<String>,

    /// Serial number if available
    pub serial_number: Option<String>,

    /// USB vendor ID if applicable
    pub vid: Option<u16>,

    /// USB product ID if applicable
    pub pid: Option<u16>,
}

/// List serial ports a motion board could be attached to
///
/// Filters the system's ports to the patterns USB-attached boards
/// show up under:
/// - Windows: COM* (e.g., COM1, COM3)
/// - Linux: /dev/ttyUSB*, /dev/ttyACM*
/// - macOS: /dev/cu.usbserial-*, /dev/cu.usbmodem*
pub fn list_ports() -> Result<Vec<SerialPortInfo>> {
    let ports = serialport::available_ports().map_err(|e| {
        tracing::error!("Failed to enumerate serial ports: {}", e);
        LinkError::OpenFailed {
            port: "<enumeration>".to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(ports
        .iter()
        .filter(|port| is_candidate_port(&port.port_name))
        .map(|port| {
            let mut info = SerialPortInfo {
                port_name: port.port_name.clone(),
                description: port_description(port),
                manufacturer: None,
                serial_number: None,
                vid: None,
                pid: None,
            };

            if let serialport::SerialPortType::UsbPort(usb) = &port.port_type {
                info.vid = Some(usb.vid);
                info.pid = Some(usb.pid);
                info.manufacturer = usb.manufacturer.clone();
                info.serial_number = usb.serial_number.clone();
            }

            info
        })
        .collect())
}

/// Check if a port name matches the patterns boards enumerate under
fn is_candidate_port(port_name: &str) -> bool {
    if let Some(suffix) = port_name.strip_prefix("COM") {
        if !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit()) {
            return true;
        }
    }

    if port_name.starts_with("/dev/ttyUSB") || port_name.starts_with("/dev/ttyACM") {
        return true;
    }

    if port_name.starts_with("/dev/cu.usbserial-") || port_name.starts_with("/dev/cu.usbmodem") {
        return true;
    }

    false
}

/// Get a user-friendly description for a port
fn port_description(port: &serialport::SerialPortInfo) -> String {
    match &port.port_type {
        serialport::SerialPortType::UsbPort(usb) => {
            format!(
                "USB {} {}",
                usb.manufacturer.as_deref().unwrap_or("Device"),
                usb.product.as_deref().unwrap_or("Serial Port")
            )
        }
        serialport::SerialPortType::BluetoothPort => "Bluetooth Serial".to_string(),
        serialport::SerialPortType::PciPort => "PCI Serial".to_string(),
        _ => "Serial Port".to_string(),
    }
}

/// Byte-stream object the transport reads and writes through
pub trait ReadWrite: Read + Write + Send {}
impl<T: Read + Write + Send> ReadWrite for T {}

/// Real serial transport using the serialport crate
///
/// The board link is always 8 data bits, no parity, one stop bit, no
/// flow control. Incoming bytes are accumulated in a line buffer and
/// handed out one terminator-stripped line at a time.
pub struct SerialTransport {
    port: Box<dyn ReadWrite>,
    port_name: String,
    buffer: String,
}

impl std::fmt::Debug for SerialTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialTransport")
            .field("port_name", &self.port_name)
            .field("buffered", &self.buffer.len())
            .finish_non_exhaustive()
    }
}

impl SerialTransport {
    /// Open the named port at the given baud rate.
    ///
    /// An empty port name is rejected before touching the OS.
    pub fn open(port_name: &str, baud_rate: u32) -> Result<Self> {
        if port_name.is_empty() {
            return Err(LinkError::PortNameInvalid.into());
        }

        let builder = serialport::new(port_name, baud_rate)
            // Short timeout so each raw read returns quickly and the
            // line deadline stays responsive.
            .timeout(Duration::from_millis(POLL_INTERVAL_MS))
            .data_bits(serialport::DataBits::Eight)
            .stop_bits(serialport::StopBits::One)
            .parity(serialport::Parity::None)
            .flow_control(serialport::FlowControl::None);

        match builder.open_native() {
            Ok(port) => Ok(SerialTransport {
                port: Box::new(port),
                port_name: port_name.to_string(),
                buffer: String::new(),
            }),
            Err(e) => {
                tracing::warn!("Failed to open serial port {}: {}", port_name, e);
                Err(LinkError::OpenFailed {
                    port: port_name.to_string(),
                    reason: e.to_string(),
                }
                .into())
            }
        }
    }

    /// Wrap an already-open byte stream. Test seam.
    pub fn from_stream(stream: Box<dyn ReadWrite>, name: impl Into<String>) -> Self {
        SerialTransport {
            port: stream,
            port_name: name.into(),
            buffer: String::new(),
        }
    }

    /// The port name this transport was opened on.
    pub fn port_name(&self) -> &str {
        &self.port_name
    }

    /// Pop a complete line off the buffer, if one is present.
    fn take_buffered_line(&mut self) -> Option<String> {
        let pos = self.buffer.find('\n')?;
        let mut line: String = self.buffer.drain(..=pos).collect();
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Some(line)
    }
}

impl Transport for SerialTransport {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.port
            .write_all(line.as_bytes())
            .and_then(|_| self.port.flush())
            .map_err(|e| {
                tracing::error!("Write to {} failed: {}", self.port_name, e);
                Error::from(LinkError::WriteFailed {
                    reason: e.to_string(),
                })
            })
    }

    fn read_line(&mut self, timeout: Duration) -> Result<String> {
        let deadline = Instant::now() + timeout;
        let mut chunk = [0u8; 256];

        loop {
            if let Some(line) = self.take_buffered_line() {
                return Ok(line);
            }

            if Instant::now() >= deadline {
                return Err(LinkError::ReadTimedOut {
                    timeout_ms: timeout.as_millis() as u64,
                }
                .into());
            }

            match self.port.read(&mut chunk) {
                Ok(0) => {}
                Ok(n) => self.buffer.push_str(&String::from_utf8_lossy(&chunk[..n])),
                Err(e)
                    if matches!(
                        e.kind(),
                        io::ErrorKind::TimedOut
                            | io::ErrorKind::WouldBlock
                            | io::ErrorKind::Interrupted
                    ) => {}
                Err(e) => {
                    tracing::error!("Read from {} failed: {}", self.port_name, e);
                    return Err(LinkError::ReadFailed {
                        reason: e.to_string(),
                    }
                    .into());
                }
            }
        }
    }

    fn close(&mut self) -> Result<()> {
        self.port.flush().map_err(|e| {
            Error::from(LinkError::CloseFailed {
                reason: e.to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_port_name() {
        let err = SerialTransport::open("", 256_000).unwrap_err();
        assert_eq!(err, Error::Link(LinkError::PortNameInvalid));
    }

    #[test]
    fn test_candidate_port_patterns() {
        assert!(is_candidate_port("COM3"));
        assert!(is_candidate_port("/dev/ttyUSB0"));
        assert!(is_candidate_port("/dev/ttyACM1"));
        assert!(is_candidate_port("/dev/cu.usbmodem14101"));
        assert!(!is_candidate_port("/dev/ttyS0"));
        assert!(!is_candidate_port("COMPORT"));
        // Bare prefix without a port number is not a port.
        assert!(!is_candidate_port("COM"));
    }

    #[test]
    fn test_open_error_is_debuggable() {
        let result = SerialTransport::open("", 256_000);
        assert!(format!("{:?}", result).contains("PortNameInvalid"));
    }
}
