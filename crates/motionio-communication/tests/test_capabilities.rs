mod common;

use common::ScriptedTransport;
use motionio_communication::{AddressMap, CapabilityManager, MotionBoard, Session, SessionConfig};
use motionio_core::{Error, ProtocolError};
use std::time::Duration;

fn test_config() -> SessionConfig {
    SessionConfig {
        read_timeout: Duration::from_millis(100),
        max_debug_lines: 10,
    }
}

#[test]
fn test_base_offsets_from_capability_word() {
    // 2 PWM units, 1 QE unit, 0 RC units.
    let word = 2 | (1 << 4);
    let map = AddressMap::from_capability_word(word);

    assert_eq!(map.pwm_units, 2);
    assert_eq!(map.qe_units, 1);
    assert_eq!(map.rc_units, 0);
    assert_eq!(map.sys_base, 0);
    assert_eq!(map.pwm_base, 1);
    assert_eq!(map.qe_base, 9);
    assert_eq!(map.rc_base, 16);
}

#[test]
fn test_zero_capability_word() {
    let map = AddressMap::from_capability_word(0);
    assert_eq!(map.pwm_base, 1);
    assert_eq!(map.qe_base, 1);
    assert_eq!(map.rc_base, 1);
}

#[test]
fn test_register_addressing() {
    let map = AddressMap::from_capability_word(2 | (1 << 4));

    assert_eq!(map.pwm_register(0, 0).unwrap(), 1);
    assert_eq!(map.pwm_register(1, 3).unwrap(), 8);
    assert_eq!(map.qe_register(0, 6).unwrap(), 15);
}

#[test]
fn test_register_addressing_bounds() {
    let map = AddressMap::from_capability_word(2 | (1 << 4));

    // Unit out of range.
    assert!(matches!(
        map.pwm_register(2, 0).unwrap_err(),
        Error::Protocol(ProtocolError::NoSuchRegister { .. })
    ));
    // Register out of range within a unit.
    assert!(matches!(
        map.pwm_register(0, 4).unwrap_err(),
        Error::Protocol(ProtocolError::NoSuchRegister { .. })
    ));
    // No RC units discovered at all.
    assert!(map.rc_register(0, 0).is_err());
}

#[test]
fn test_address_map_gated_until_discovery() {
    let manager = CapabilityManager::new();
    assert!(!manager.is_discovered());
    assert_eq!(
        manager.address_map().unwrap_err(),
        Error::Protocol(ProtocolError::CapabilitiesUnknown)
    );
}

#[test]
fn test_discover_builds_map() {
    // Capability word 18 = 2 PWM | 1 QE << 4; reply carries it as the
    // designated third token.
    let transport = ScriptedTransport::new(&["y 0 18"]);
    let probe = transport.probe();
    let session = Session::new(Box::new(transport), test_config());
    let mut manager = CapabilityManager::new();

    let map = manager.discover(&session).unwrap();

    assert_eq!(probe.written(), vec!["y\n"]);
    assert_eq!(map.pwm_units, 2);
    assert_eq!(map.qe_units, 1);
    assert!(manager.is_discovered());
    assert_eq!(manager.address_map().unwrap(), &map);
}

#[test]
fn test_discover_rejects_non_integer_word() {
    let transport = ScriptedTransport::new(&["y 0 oops"]);
    let session = Session::new(Box::new(transport), test_config());
    let mut manager = CapabilityManager::new();

    let err = manager.discover(&session).unwrap_err();
    assert!(matches!(
        err,
        Error::Protocol(ProtocolError::MalformedReply { .. })
    ));
    // A failed discovery must not leave a partial map behind.
    assert!(!manager.is_discovered());
}

#[test]
fn test_rediscovery_replaces_map() {
    let transport = ScriptedTransport::new(&["y 0 18", "y 0 3"]);
    let session = Session::new(Box::new(transport), test_config());
    let mut manager = CapabilityManager::new();

    manager.discover(&session).unwrap();
    let second = manager.discover(&session).unwrap();

    assert_eq!(second.pwm_units, 3);
    assert_eq!(second.qe_units, 0);
    assert_eq!(manager.address_map().unwrap().pwm_units, 3);
}

#[test]
fn test_board_facade_discovery() {
    let transport = ScriptedTransport::new(&["p ok", "y 0 18", "w 0 5 1"]);
    let mut board = MotionBoard::with_transport(Box::new(transport), test_config());

    assert!(board.address_map().is_err());

    board.ping().unwrap();
    let map = board.discover_capabilities().unwrap();
    assert_eq!(map.pwm_base, 1);

    let reg = board.address_map().unwrap().pwm_register(1, 0).unwrap();
    let reply = board.execute('w', 0, reg, 1).unwrap();
    assert_eq!(reply.result_int(), Some(5));

    board.close().unwrap();
}
