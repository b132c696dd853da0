//! Capability discovery and the register address map
//!
//! The board reports one capability word whose 4-bit fields give the
//! unit counts of each peripheral family. The register space is flat:
//! a system block, then the PWM blocks, then the quadrature-encoder
//! blocks, then the RC-servo blocks, so the base offsets follow
//! directly from the unit counts. Nothing may do register-address
//! arithmetic before a capability query has succeeded once.

use crate::protocol::diagnostics::DiagnosticCommand;
use crate::protocol::session::Session;
use motionio_core::constants::{
    CAP_FIELD_MASK, CAP_PWM_SHIFT, CAP_QE_SHIFT, CAP_RC_SHIFT, REGISTERS_PER_PWM,
    REGISTERS_PER_QE, REGISTERS_PER_RC, SYS_REGISTERS,
};
use motionio_core::{ProtocolError, Result};
use serde::{Deserialize, Serialize};

/// Register base offsets and unit counts for one discovered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressMap {
    /// Number of PWM units.
    pub pwm_units: u32,
    /// Number of quadrature-encoder units.
    pub qe_units: u32,
    /// Number of RC-servo units.
    pub rc_units: u32,
    /// Base offset of the system register block.
    pub sys_base: u32,
    /// Base offset of the first PWM register block.
    pub pwm_base: u32,
    /// Base offset of the first quadrature-encoder register block.
    pub qe_base: u32,
    /// Base offset of the first RC-servo register block.
    pub rc_base: u32,
}

impl AddressMap {
    /// Decode a capability word into unit counts and base offsets.
    pub fn from_capability_word(word: u32) -> Self {
        let pwm_units = (word >> CAP_PWM_SHIFT) & CAP_FIELD_MASK;
        let qe_units = (word >> CAP_QE_SHIFT) & CAP_FIELD_MASK;
        let rc_units = (word >> CAP_RC_SHIFT) & CAP_FIELD_MASK;

        let sys_base = 0;
        let pwm_base = sys_base + SYS_REGISTERS;
        let qe_base = pwm_base + pwm_units * REGISTERS_PER_PWM;
        let rc_base = qe_base + qe_units * REGISTERS_PER_QE;

        Self {
            pwm_units,
            qe_units,
            rc_units,
            sys_base,
            pwm_base,
            qe_base,
            rc_base,
        }
    }

    /// Address of register `reg` of PWM unit `unit`.
    pub fn pwm_register(&self, unit: u32, reg: u32) -> Result<u32> {
        Self::block_register(
            "PWM",
            self.pwm_base,
            self.pwm_units,
            REGISTERS_PER_PWM,
            unit,
            reg,
        )
    }

    /// Address of register `reg` of quadrature-encoder unit `unit`.
    pub fn qe_register(&self, unit: u32, reg: u32) -> Result<u32> {
        Self::block_register(
            "QE",
            self.qe_base,
            self.qe_units,
            REGISTERS_PER_QE,
            unit,
            reg,
        )
    }

    /// Address of register `reg` of RC-servo unit `unit`.
    pub fn rc_register(&self, unit: u32, reg: u32) -> Result<u32> {
        Self::block_register(
            "RC",
            self.rc_base,
            self.rc_units,
            REGISTERS_PER_RC,
            unit,
            reg,
        )
    }

    fn block_register(
        family: &str,
        base: u32,
        units: u32,
        regs_per_unit: u32,
        unit: u32,
        reg: u32,
    ) -> Result<u32> {
        if unit >= units {
            return Err(ProtocolError::NoSuchRegister {
                reason: format!("{} unit {} out of range (device has {})", family, unit, units),
            }
            .into());
        }
        if reg >= regs_per_unit {
            return Err(ProtocolError::NoSuchRegister {
                reason: format!(
                    "{} register {} out of range (each unit has {})",
                    family, reg, regs_per_unit
                ),
            }
            .into());
        }
        Ok(base + unit * regs_per_unit + reg)
    }
}

/// Gatekeeper for the address map.
///
/// Holds no map until a capability query has succeeded; all accessors
/// fail with `CapabilitiesUnknown` before that, never a stale or
/// zeroed map. A repeat discovery replaces the map in one assignment,
/// so readers never observe a partial update.
#[derive(Debug, Default)]
pub struct CapabilityManager {
    map: Option<AddressMap>,
}

impl CapabilityManager {
    /// Create a manager with no discovered map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Query the board's capability word and rebuild the address map.
    pub fn discover(&mut self, session: &Session) -> Result<AddressMap> {
        let reply = session.execute(&DiagnosticCommand::QueryCapabilities.command())?;

        let word = reply
            .result_int()
            .filter(|v| (0..=i64::from(u32::MAX)).contains(v))
            .ok_or_else(|| ProtocolError::MalformedReply {
                reason: "capability reply carries no integer capability word".to_string(),
            })?;

        let map = AddressMap::from_capability_word(word as u32);
        tracing::debug!(
            "discovered {} PWM, {} QE, {} RC units",
            map.pwm_units,
            map.qe_units,
            map.rc_units
        );

        self.map = Some(map);
        Ok(map)
    }

    /// The discovered address map.
    pub fn address_map(&self) -> Result<&AddressMap> {
        self.map
            .as_ref()
            .ok_or_else(|| ProtocolError::CapabilitiesUnknown.into())
    }

    /// Whether a capability query has succeeded at least once.
    pub fn is_discovered(&self) -> bool {
        self.map.is_some()
    }
}
