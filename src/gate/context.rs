//! Applying gate decisions to a request context.

use super::Action;

/// Capability set the hosting framework exposes for one request.
///
/// The gate never holds a sink itself; decisions are pure values and this
/// trait is only touched by [`apply`] in the hosting adapter.
pub trait RequestSink {
    /// Set the response content type.
    fn set_content_type(&mut self, value: &str);

    /// Write the response status and body.
    fn write_response(&mut self, status: u16, body: &str);

    /// Mark the request as fully handled; no further handlers run.
    fn halt(&mut self);
}

/// Apply a gate decision to a request context.
///
/// Pass-through leaves the context untouched so downstream handling can
/// proceed. Terminate sets the content type, writes the diagnostic response
/// and halts the request. Returns true when the request was halted.
pub fn apply<S: RequestSink>(action: &Action, sink: &mut S) -> bool {
    match action {
        Action::PassThrough => false,
        Action::Terminate(response) => {
            sink.set_content_type(response.content_type);
            sink.write_response(response.status, &response.body);
            sink.halt();
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::DiagnosticResponse;
    use crate::mock::RecordingSink;

    #[test]
    fn test_pass_through_leaves_sink_untouched() {
        let mut sink = RecordingSink::new();
        assert!(!apply(&Action::PassThrough, &mut sink));
        assert!(sink.is_untouched());
    }

    #[test]
    fn test_terminate_writes_and_halts() {
        let mut sink = RecordingSink::new();
        let action = Action::Terminate(DiagnosticResponse {
            status: 500,
            content_type: "text/html",
            body: "<html></html>".to_string(),
        });

        assert!(apply(&action, &mut sink));
        assert_eq!(sink.content_type.as_deref(), Some("text/html"));
        assert_eq!(sink.status, Some(500));
        assert_eq!(sink.body.as_deref(), Some("<html></html>"));
        assert!(sink.halted);
    }
}
