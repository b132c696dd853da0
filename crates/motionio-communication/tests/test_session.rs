mod common;

use common::ScriptedTransport;
use motionio_communication::{Command, Session, SessionConfig};
use motionio_core::{Error, LinkError, ProtocolError};
use std::time::Duration;

fn test_config() -> SessionConfig {
    SessionConfig {
        read_timeout: Duration::from_millis(100),
        max_debug_lines: 10,
    }
}

#[test]
fn test_execute_happy_path() {
    let transport = ScriptedTransport::new(&["w 0 128 ok"]);
    let probe = transport.probe();
    let session = Session::new(Box::new(transport), test_config());

    let reply = session
        .execute(&Command::register('w', 0, 3, 128))
        .unwrap();

    assert_eq!(probe.written(), vec!["w 0 3 128\n"]);
    assert_eq!(reply.line, "w 0 128 ok");
    assert_eq!(reply.tokens.len(), 4);
    assert_eq!(reply.result_int(), Some(128));
}

#[test]
fn test_execute_filters_debug_lines() {
    let transport = ScriptedTransport::new(&["D: bus idle", "r 0 77"]);
    let session = Session::new(Box::new(transport), test_config());

    let reply = session.execute(&Command::register('r', 0, 9, 0)).unwrap();
    assert_eq!(reply.result_int(), Some(77));
}

#[test]
fn test_write_failure_never_reads() {
    let transport = ScriptedTransport::new(&["never delivered"]).with_failing_writes();
    let probe = transport.probe();
    let session = Session::new(Box::new(transport), test_config());

    let err = session
        .execute(&Command::register('w', 0, 0, 0))
        .unwrap_err();

    assert!(matches!(err, Error::Link(LinkError::WriteFailed { .. })));
    assert_eq!(probe.reads(), 0);
    assert!(probe.written().is_empty());
}

#[test]
fn test_read_timeout_surfaces() {
    let transport = ScriptedTransport::new(&[]);
    let session = Session::new(Box::new(transport), test_config());

    let err = session.execute(&Command::new('p')).unwrap_err();
    assert!(err.is_timeout());
}

#[test]
fn test_oversized_reply_is_malformed() {
    let transport = ScriptedTransport::new(&["0 1 2 3 4 5 6 7 8 9 10"]);
    let session = Session::new(Box::new(transport), test_config());

    let err = session.execute(&Command::new('p')).unwrap_err();
    assert!(matches!(
        err,
        Error::Protocol(ProtocolError::TooManyTokens { .. })
    ));
}

#[test]
fn test_result_int_absent_for_short_reply() {
    let transport = ScriptedTransport::new(&["ok 1"]);
    let session = Session::new(Box::new(transport), test_config());

    let reply = session.execute(&Command::new('p')).unwrap();
    assert_eq!(reply.result_int(), None);
}

#[test]
fn test_result_int_requires_integer_token() {
    let transport = ScriptedTransport::new(&["ok 1 half"]);
    let session = Session::new(Box::new(transport), test_config());

    let reply = session.execute(&Command::new('p')).unwrap();
    assert_eq!(reply.result_int(), None);
}
