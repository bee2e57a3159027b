//! Failure sink test utilities

use uv_version_check::action::sink::FailureSink;

/// Sink keeping every reported message
#[derive(Default)]
pub struct RecordingSink {
    pub messages: Vec<String>,
}

impl FailureSink for RecordingSink {
    fn report(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
