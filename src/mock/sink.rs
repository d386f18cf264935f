//! Recording request sink.

use crate::gate::RequestSink;

/// [`RequestSink`] implementation that records what the adapter did to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    /// Content type set on the response, if any.
    pub content_type: Option<String>,

    /// Status written to the response, if any.
    pub status: Option<u16>,

    /// Body written to the response, if any.
    pub body: Option<String>,

    /// Whether the request was marked handled.
    pub halted: bool,
}

impl RecordingSink {
    /// Create an untouched sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing was written and the request was not halted.
    pub fn is_untouched(&self) -> bool {
        *self == Self::default()
    }
}

impl RequestSink for RecordingSink {
    fn set_content_type(&mut self, value: &str) {
        self.content_type = Some(value.to_string());
    }

    fn write_response(&mut self, status: u16, body: &str) {
        self.status = Some(status);
        self.body = Some(body.to_string());
    }

    fn halt(&mut self) {
        self.halted = true;
    }
}
