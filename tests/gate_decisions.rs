//! Gate decision tests
//!
//! End-to-end decision behavior over scripted reloaders and a recording
//! request sink.

use reload_gate::mock::{MockReloader, RecordingSink};
use reload_gate::{apply, Action, FnReloader, Gate, GateConfig, ReloadError, ReloadReport};

fn configured(target: &str) -> GateConfig {
    GateConfig {
        target: Some(target.to_string()),
        command: vec!["cargo".to_string(), "build".to_string()],
    }
}

#[test]
fn test_missing_target_passes_through_without_reload() {
    let reloader = MockReloader::new();
    let gate = Gate::new(GateConfig::default(), reloader.clone());

    assert_eq!(gate.check(), Action::PassThrough);
    assert_eq!(reloader.call_count(), 0, "reloader must not be called");
}

#[test]
fn test_successful_reload_passes_through() {
    let reloader = MockReloader::new();
    let gate = Gate::new(configured("my_app"), reloader.clone());

    assert_eq!(gate.check(), Action::PassThrough);
    assert_eq!(reloader.calls(), vec!["my_app"]);
}

#[test]
fn test_successful_reload_leaves_sink_untouched() {
    let gate = Gate::new(configured("my_app"), MockReloader::new());
    let mut sink = RecordingSink::new();

    let action = gate.handle(&mut sink);
    assert_eq!(action, Action::PassThrough);
    assert!(sink.is_untouched());
}

#[test]
fn test_failed_reload_terminates_with_diagnostic() {
    let reloader = MockReloader::new();
    reloader.push_failure("** (RuntimeError) boom\nstack line 1\nstack line 2");

    let gate = Gate::new(configured("my_app"), reloader);
    let action = gate.check();

    let response = match action {
        Action::Terminate(response) => response,
        Action::PassThrough => panic!("expected Terminate"),
    };

    assert_eq!(response.status, 500);
    assert_eq!(response.content_type, "text/html");

    // Summary and full output, with stack lines in order.
    let body = &response.body;
    assert!(body.contains("RuntimeError"));
    assert!(body.contains("boom"));
    let first = body.find("stack line 1").expect("first stack line");
    let second = body.find("stack line 2").expect("second stack line");
    assert!(first < second, "stack lines must stay in order");
}

#[test]
fn test_failed_reload_writes_and_halts_sink() {
    let reloader = MockReloader::new();
    reloader.push_failure("** (CompileFault) bad input");

    let gate = Gate::new(configured("my_app"), reloader);
    let mut sink = RecordingSink::new();
    gate.handle(&mut sink);

    assert_eq!(sink.content_type.as_deref(), Some("text/html"));
    assert_eq!(sink.status, Some(500));
    assert!(sink.body.as_deref().unwrap_or("").contains("CompileFault"));
    assert!(sink.halted, "request must be marked handled");
}

#[test]
fn test_gate_recovers_on_next_request() {
    let reloader = MockReloader::new();
    reloader.push_failure("** (SyntaxError) bad token");

    let gate = Gate::new(configured("my_app"), reloader.clone());

    // First request sees the failure, second sees the fix.
    assert!(matches!(gate.check(), Action::Terminate(_)));
    assert_eq!(gate.check(), Action::PassThrough);
    assert_eq!(reloader.call_count(), 2);
}

#[test]
fn test_apply_returns_whether_halted() {
    let failing = MockReloader::new();
    failing.push_failure("** (RuntimeError) boom");

    let gate = Gate::new(configured("my_app"), failing);
    let mut sink = RecordingSink::new();
    assert!(apply(&gate.check(), &mut sink));

    let gate = Gate::new(configured("my_app"), MockReloader::new());
    let mut sink = RecordingSink::new();
    assert!(!apply(&gate.check(), &mut sink));
}

#[test]
fn test_closure_reloader() {
    let reloader = FnReloader(|target: &str| {
        if target == "broken_app" {
            Err(ReloadError::new("** (RuntimeError) broken"))
        } else {
            Ok(ReloadReport::new(""))
        }
    });

    let gate = Gate::new(configured("broken_app"), reloader);
    assert!(matches!(gate.check(), Action::Terminate(_)));
}
