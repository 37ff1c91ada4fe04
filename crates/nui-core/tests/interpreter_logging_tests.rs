#![allow(clippy::unwrap_used, clippy::expect_used)]

use nui_core::logging_facility::test_capture::init_test_capture;
use nui_core::schema::{EVENT_DISPATCH, EVENT_IGNORED, EVENT_UNRECOGNIZED, OP_PROCESS_INPUT};
use nui_core::{CommandInterpreter, Outcome};
use tracing::Level;

#[test]
fn test_unrecognized_input_emits_warning() {
    let capture = init_test_capture();
    let mut interpreter = CommandInterpreter::new();

    let outcome = interpreter
        .process_input("  Reproducir Musica unique_1 ")
        .unwrap();
    assert_eq!(outcome, Outcome::Unrecognized);

    let events: Vec<_> = capture
        .find(OP_PROCESS_INPUT, EVENT_UNRECOGNIZED)
        .into_iter()
        .filter(|e| e.fields.get("input").map(String::as_str) == Some("reproducir musica unique_1"))
        .collect();

    assert_eq!(events.len(), 1, "Should have exactly one diagnostic");
    assert_eq!(events[0].level, Level::WARN);
}

#[test]
fn test_whitespace_input_is_ignored_not_unrecognized() {
    let capture = init_test_capture();
    let mut interpreter = CommandInterpreter::new();

    assert_eq!(interpreter.process_input(" \t ").unwrap(), Outcome::Ignored);

    assert!(!capture.find(OP_PROCESS_INPUT, EVENT_IGNORED).is_empty());
    let blank_warnings = capture.count_events(|e| {
        e.event.as_deref() == Some(EVENT_UNRECOGNIZED)
            && e.fields.get("input").map(String::as_str) == Some("")
    });
    assert_eq!(blank_warnings, 0);
}

#[test]
fn test_dispatch_event_names_command_and_listener_count() {
    let capture = init_test_capture();
    let mut interpreter = CommandInterpreter::new();
    interpreter.add_listener(nui_core::listener_fn(|_: &nui_core::DispatchEvent| Ok(())));
    interpreter.add_listener(nui_core::listener_fn(|_: &nui_core::DispatchEvent| Ok(())));

    interpreter.process_input("cargar unique_3").unwrap();

    let found = capture.find(OP_PROCESS_INPUT, EVENT_DISPATCH).into_iter().any(|e| {
        e.fields.get("command").map(String::as_str) == Some("open_document")
            && e.fields.get("listeners").map(String::as_str) == Some("2")
    });
    assert!(found, "Should log the dispatched command");
}

#[test]
fn test_each_input_gets_its_own_request_id() {
    let capture = init_test_capture();
    let mut interpreter = CommandInterpreter::new();

    interpreter.process_input("silbar unique_4").unwrap();
    interpreter.process_input("silbar unique_4").unwrap();

    let ids: Vec<String> = capture
        .with_field("input", "silbar unique_4")
        .into_iter()
        .map(|e| e.request_id.expect("event should carry the request id"))
        .collect();

    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}
