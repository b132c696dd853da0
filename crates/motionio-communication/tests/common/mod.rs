#![allow(dead_code)]
//! Scripted transport for protocol tests
//!
//! Plays back a fixed sequence of reply lines and records everything
//! the driver writes, so tests can assert on the exact wire traffic
//! without hardware.

use motionio_communication::Transport;
use motionio_core::{LinkError, Result};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Counters and captures shared with the test after the transport
/// has been moved into a session.
#[derive(Clone, Default)]
pub struct Probe {
    reads: Arc<AtomicUsize>,
    written: Arc<Mutex<Vec<String>>>,
}

impl Probe {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn written(&self) -> Vec<String> {
        self.written.lock().unwrap().clone()
    }
}

pub struct ScriptedTransport {
    script: VecDeque<String>,
    fail_writes: bool,
    flood_debug: bool,
    probe: Probe,
}

impl ScriptedTransport {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            script: lines.iter().map(|l| l.to_string()).collect(),
            fail_writes: false,
            flood_debug: false,
            probe: Probe::default(),
        }
    }

    /// Every write fails; reads must never be reached.
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Ignore the script and answer every read with a debug line.
    pub fn debug_flood() -> Self {
        let mut t = Self::new(&[]);
        t.flood_debug = true;
        t
    }

    pub fn probe(&self) -> Probe {
        self.probe.clone()
    }
}

impl Transport for ScriptedTransport {
    fn write_line(&mut self, line: &str) -> Result<()> {
        if self.fail_writes {
            return Err(LinkError::WriteFailed {
                reason: "scripted write failure".to_string(),
            }
            .into());
        }
        self.probe.written.lock().unwrap().push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, timeout: Duration) -> Result<String> {
        self.probe.reads.fetch_add(1, Ordering::SeqCst);

        if self.flood_debug {
            return Ok("D: scripted noise".to_string());
        }

        self.script.pop_front().ok_or_else(|| {
            LinkError::ReadTimedOut {
                timeout_ms: timeout.as_millis() as u64,
            }
            .into()
        })
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
